use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tekvec::{convert_file, init_logging, load_config};
use tracing::info;

#[derive(Parser)]
#[command(
    version,
    about = "Convert line and cubic Bezier curves into a Tektronix 4010 vector-mode stream"
)]
struct Args {
    /// JSON curve document to convert
    input: PathBuf,

    /// Output file; the stream goes to stdout when omitted
    output: Option<PathBuf>,

    /// JSON or TOML settings file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging()?;

    let config = load_config(args.config.as_deref())?;
    let conversion = convert_file(&args.input, &config)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &conversion.bytes)?;
            info!(path = %path.display(), bytes = conversion.bytes.len(), "wrote vector-mode stream");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&conversion.bytes)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
