use serde::{Deserialize, Serialize};

use super::layout;
use crate::frames::error::DecodeError;
use crate::frames::reader::FrameReader;
use crate::frames::{high_nibble, low_nibble};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    /// Degrees, positive north.
    pub latitude: f64,
    /// Degrees, positive east.
    pub longitude: f64,
    pub pdop: u8,
    pub hdop: u8,
    pub vdop: u8,
    pub sats: u8,
}

pub fn parse_location(payload: &[u8]) -> Result<LocationFix, DecodeError> {
    let reader = FrameReader::new(payload);
    reader.require_len(layout::MIN_LEN)?;

    let latitude =
        f64::from(reader.read_i32_be(layout::LATITUDE_RANGE.clone())?) / layout::DEGREES_SCALE;
    let longitude =
        f64::from(reader.read_i32_be(layout::LONGITUDE_RANGE.clone())?) / layout::DEGREES_SCALE;

    let pdop_hdop = reader.read_u8(layout::PDOP_HDOP_OFFSET)?;
    let vdop_sats = reader.read_u8(layout::VDOP_SATS_OFFSET)?;

    Ok(LocationFix {
        latitude,
        longitude,
        pdop: low_nibble(pdop_hdop),
        hdop: high_nibble(pdop_hdop),
        vdop: low_nibble(vdop_sats),
        sats: high_nibble(vdop_sats),
    })
}
