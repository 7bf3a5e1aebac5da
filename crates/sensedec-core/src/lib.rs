//! Sensedec core library for decoding binary sensor uplinks.
//!
//! This crate implements the payload decoding pipeline used by the CLI and
//! by ingestion hooks: a base64 transport layer feeds the frame decoder,
//! which dispatches on the uplink FPort and decodes the matching byte layout
//! (layout/reader/parser) into a flat key/value record. Decoding is
//! byte-oriented and side-effect free; there is no I/O anywhere in the
//! crate. Frame conventions are captured in readers so parsers stay minimal
//! and consistent with the device frame documentation.
//!
//! Invariants:
//! - Decoding is a pure function; one call has no effect on the next.
//! - A missing FPort is a hard error, never an empty record.
//! - Unknown ports degrade to a raw hex passthrough record, never an error.
//!
//! Version française (résumé):
//! Cette crate décode les trames binaires d'un capteur IoT : base64 ->
//! répartition par FPort -> décodeur d'octets (layout/reader/parser) ->
//! enregistrement clé/valeur. Les conventions de trame vivent dans les
//! `reader`. Garanties : fonction pure, FPort absent fatal, ports inconnus
//! restitués en hexadécimal brut.
//!
//! # Examples
//! ```
//! use sensedec_core::{Frame, decode_base64};
//!
//! let record = decode_base64("AgMP", Some(2))?;
//! assert_eq!(record.port, 2);
//! match record.frame {
//!     Frame::Status(status) => assert_eq!(status.battery, 4.4),
//!     _ => unreachable!(),
//! }
//! # Ok::<(), sensedec_core::DecodeError>(())
//! ```

mod decode;
mod frames;

pub use decode::{
    BEACON_PORT, DecodedUplink, Frame, LOCATION_PORT, RawData, STATUS_PORT, decode_base64,
    decode_payload,
};
pub use frames::beacon::BeaconScan;
pub use frames::error::DecodeError;
pub use frames::location::LocationFix;
pub use frames::status::DeviceStatus;
