pub const LATITUDE_RANGE: std::ops::Range<usize> = 0..4;
pub const LONGITUDE_RANGE: std::ops::Range<usize> = 4..8;
pub const PDOP_HDOP_OFFSET: usize = 8;
pub const VDOP_SATS_OFFSET: usize = 9;

/// Micro-degrees per degree.
pub const DEGREES_SCALE: f64 = 1_000_000.0;

pub const MIN_LEN: usize = VDOP_SATS_OFFSET + 1;
