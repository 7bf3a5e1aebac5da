//! Port dispatch: resolve the FPort to a frame layout and decode it.
//!
//! The dispatch is resolved exactly once per call. A missing FPort is the
//! only condition under which no record can be produced; unrecognized ports
//! fall through to a raw hex passthrough so future firmware ports keep
//! flowing through ingestion untouched.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::frames::beacon::{BeaconScan, parse_beacon};
use crate::frames::error::DecodeError;
use crate::frames::location::{LocationFix, parse_location};
use crate::frames::reader::hex_string;
use crate::frames::status::{DeviceStatus, parse_status};

/// FPort carrying a device status frame.
pub const STATUS_PORT: u8 = 2;
/// FPort carrying a location fix frame.
pub const LOCATION_PORT: u8 = 3;
/// FPort carrying a beacon scan frame.
pub const BEACON_PORT: u8 = 4;

/// One decoded uplink record.
///
/// Serializes to the flat mapping consumed by ingestion, with the frame
/// fields alongside `port`:
///
/// ```
/// use sensedec_core::decode_base64;
///
/// let record = decode_base64("AgMP", Some(2))?;
/// let json = serde_json::to_value(&record).expect("record json");
/// assert_eq!(json["port"], 2);
/// assert_eq!(json["hw_version"], 2);
/// # Ok::<(), sensedec_core::DecodeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedUplink {
    /// FPort the uplink arrived on.
    pub port: u8,
    /// Decoded frame fields, flattened into the record.
    #[serde(flatten)]
    pub frame: Frame,
}

/// Frame fields for each known layout, plus the raw passthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Frame {
    Status(DeviceStatus),
    Location(LocationFix),
    Beacon(BeaconScan),
    Raw(RawData),
}

/// Passthrough for ports with no defined layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawData {
    /// Entire payload as lowercase hex.
    pub data: String,
}

/// Decode a base64-encoded uplink payload.
///
/// Standard padded base64; transport decoding failures surface as
/// [`DecodeError::Base64`] before any layout is consulted.
pub fn decode_base64(input: &str, fport: Option<u8>) -> Result<DecodedUplink, DecodeError> {
    let payload = STANDARD.decode(input)?;
    decode_payload(&payload, fport)
}

/// Decode a raw uplink payload.
///
/// Pure and allocation-local: bytes in, record out, no effect on any other
/// call. Trailing bytes beyond the selected layout's fixed offsets are
/// ignored.
pub fn decode_payload(payload: &[u8], fport: Option<u8>) -> Result<DecodedUplink, DecodeError> {
    let port = fport.ok_or(DecodeError::MissingPort)?;

    let frame = match port {
        STATUS_PORT => Frame::Status(parse_status(payload)?),
        LOCATION_PORT => Frame::Location(parse_location(payload)?),
        BEACON_PORT => Frame::Beacon(parse_beacon(payload)?),
        // Unknown ports are a designed passthrough, not an error.
        _ => Frame::Raw(RawData {
            data: hex_string(payload),
        }),
    };

    Ok(DecodedUplink { port, frame })
}
