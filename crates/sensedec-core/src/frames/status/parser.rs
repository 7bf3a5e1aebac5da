use serde::{Deserialize, Serialize};

use super::layout;
use crate::frames::error::DecodeError;
use crate::frames::reader::FrameReader;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceStatus {
    pub hw_version: u8,
    pub sw_version: u8,
    /// Battery voltage in volts.
    pub battery: f64,
}

pub fn parse_status(payload: &[u8]) -> Result<DeviceStatus, DecodeError> {
    let reader = FrameReader::new(payload);
    reader.require_len(layout::MIN_LEN)?;

    let hw_version = reader.read_u8(layout::HW_VERSION_OFFSET)?;
    let sw_version = reader.read_u8(layout::SW_VERSION_OFFSET)?;
    let battery_raw = reader.read_u8(layout::BATTERY_OFFSET)?;
    let battery = f64::from(battery_raw) / layout::BATTERY_SCALE + layout::BATTERY_BIAS_VOLTS;

    Ok(DeviceStatus {
        hw_version,
        sw_version,
        battery,
    })
}
