//! Beacon scan frame (FPort 4).
//!
//! One scanned BLE tag per uplink: the tag's six-byte hardware address,
//! the observed RSSI as a signed byte, and a packed index/total pair
//! locating this tag within the scan. Byte positions live in `layout`.

pub mod layout;
pub mod parser;

pub use parser::{BeaconScan, parse_beacon};
