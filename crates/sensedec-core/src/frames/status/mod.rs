//! Device status frame (FPort 2).
//!
//! Three single-byte fields: hardware version, firmware version, and a raw
//! battery code. The battery code maps to volts as `raw / 10 + 2.9`, the
//! device's documented offset encoding. Byte positions live in `layout`.

pub mod layout;
pub mod parser;

pub use parser::{DeviceStatus, parse_status};
