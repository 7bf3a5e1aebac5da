pub const HW_VERSION_OFFSET: usize = 0;
pub const SW_VERSION_OFFSET: usize = 1;
pub const BATTERY_OFFSET: usize = 2;

pub const BATTERY_SCALE: f64 = 10.0;
pub const BATTERY_BIAS_VOLTS: f64 = 2.9;

pub const MIN_LEN: usize = BATTERY_OFFSET + 1;
