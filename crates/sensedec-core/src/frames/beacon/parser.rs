use serde::{Deserialize, Serialize};

use super::layout;
use crate::frames::error::DecodeError;
use crate::frames::reader::FrameReader;
use crate::frames::{high_nibble, low_nibble};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconScan {
    /// Tag hardware address, 12 lowercase hex characters, no separators.
    pub ble_mac: String,
    /// Observed signal strength in dBm.
    pub ble_rssi: i8,
    /// Position of this tag within the scan.
    pub index: u8,
    /// Total tags discovered by the scan.
    pub total: u8,
}

pub fn parse_beacon(payload: &[u8]) -> Result<BeaconScan, DecodeError> {
    let reader = FrameReader::new(payload);
    reader.require_len(layout::MIN_LEN)?;

    let ble_mac = reader.read_hex(layout::MAC_RANGE.clone())?;
    let ble_rssi = reader.read_i8(layout::RSSI_OFFSET)?;
    let index_total = reader.read_u8(layout::INDEX_TOTAL_OFFSET)?;

    Ok(BeaconScan {
        ble_mac,
        ble_rssi,
        index: low_nibble(index_total),
        total: high_nibble(index_total),
    })
}
