pub const MAC_RANGE: std::ops::Range<usize> = 0..6;
pub const RSSI_OFFSET: usize = 6;
pub const INDEX_TOTAL_OFFSET: usize = 7;

pub const MIN_LEN: usize = INDEX_TOTAL_OFFSET + 1;
