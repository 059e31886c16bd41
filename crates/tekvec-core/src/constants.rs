//! Tektronix 4010 vector-mode constants.
//!
//! The device addresses a 1024 x 780 grid. Every value here is part of the
//! byte-exact output contract.

/// Largest addressable X coordinate.
pub const MAX_X_COORDINATE: f64 = 1023.0;

/// Largest addressable Y coordinate.
pub const MAX_Y_COORDINATE: f64 = 779.0;

/// Largest X coordinate as an integer device unit.
pub const MAX_X_UNITS: i64 = 1023;

/// Largest Y coordinate as an integer device unit.
pub const MAX_Y_UNITS: i64 = 779;

/// Inward margin kept free on every side when fitting a shape.
pub const MARGIN: f64 = 10.0;

/// Group Separator. Switches the terminal into vector mode with the beam off,
/// so the next coordinate is a move rather than a draw.
pub const GROUP_SEPARATOR: u8 = 0x1D;

/// Bytes written per encoded coordinate pair.
pub const BYTES_PER_POINT: usize = 4;

/// Default number of samples taken along each cubic Bezier segment.
pub const DEFAULT_BEZIER_SAMPLES: usize = 6;

/// Fewest Bezier samples that still keep both endpoints.
pub const MIN_BEZIER_SAMPLES: usize = 2;

/// Tag bits of the high-order byte of either axis.
pub const HIGH_BYTE_TAG: u8 = 0b0010_0000;

/// Tag bits of the low-order Y byte.
pub const LOW_Y_TAG: u8 = 0b0110_0000;

/// Tag bits of the low-order X byte.
pub const LOW_X_TAG: u8 = 0b0100_0000;

/// Five payload bits carried by every coordinate byte.
pub const PAYLOAD_MASK: i64 = 0b0001_1111;
