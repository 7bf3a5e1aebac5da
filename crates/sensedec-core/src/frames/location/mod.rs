//! Location fix frame (FPort 3).
//!
//! Latitude and longitude arrive as signed 32-bit big-endian integers in
//! micro-degrees; the two trailing bytes carry the fix quality metrics
//! (PDOP/HDOP/VDOP) and the satellite count as packed 4-bit fields. Byte
//! positions and the coordinate scale live in `layout`.

pub mod layout;
pub mod parser;

pub use parser::{LocationFix, parse_location};
