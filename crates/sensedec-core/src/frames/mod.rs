//! Frame decoding modules, one per uplink FPort.
//!
//! Each frame follows a layered structure:
//! - `layout`: byte offsets, ranges, and scale factors (source of truth)
//! - `parser`: domain-level decoding (no direct byte indexing)
//!
//! Byte access and frame conventions are shared across layouts in `reader`,
//! and all frames report through the single `error` taxonomy. Parsers are
//! pure and contain no I/O; port dispatch lives in `decode`.

pub mod beacon;
pub(crate) mod error;
pub mod location;
pub(crate) mod reader;
pub mod status;

pub(crate) fn low_nibble(value: u8) -> u8 {
    value & 0x0F
}

pub(crate) fn high_nibble(value: u8) -> u8 {
    (value & 0xF0) >> 4
}
