use std::path::PathBuf;

use irblast_encode::EncodeError;

/// Errors that can occur during a transmission attempt.
#[derive(Debug, thiserror::Error)]
pub enum TransmitError {
    /// Failed to open the IR device.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The driver rejected a control call.
    #[error("device control call {operation:?} rejected: {source}")]
    Control {
        operation: &'static str,
        source: std::io::Error,
    },

    /// The driver rejected or truncated the buffer write.
    #[error("device write failed: {source}")]
    Write { source: std::io::Error },

    /// The hex payload could not be encoded.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
}

pub type Result<T> = std::result::Result<T, TransmitError>;
