use thiserror::Error;

/// Errors returned by uplink decoding.
///
/// Every variant is terminal for the call: decoding is deterministic, so a
/// retry without new input cannot succeed and none is attempted.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("missing fport: a frame layout cannot be selected without it")]
    MissingPort,
    #[error("payload too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}
