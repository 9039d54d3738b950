use std::fmt;
use std::io;

use irblast_device::TransmitError;
use irblast_encode::EncodeError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn encode_error(context: &str, err: EncodeError) -> CliError {
    match err {
        EncodeError::OddLength { .. } | EncodeError::InvalidDigit { .. } => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
        EncodeError::UnpairedSequence { .. } => {
            CliError::new(INTERNAL, format!("{context}: {err}"))
        }
    }
}

pub fn transmit_error(context: &str, err: TransmitError) -> CliError {
    match err {
        TransmitError::Open { ref source, .. } => {
            let code = match source.kind() {
                io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
                _ => FAILURE,
            };
            CliError::new(code, format!("{context}: {err}"))
        }
        TransmitError::Control { .. } | TransmitError::Write { .. } => {
            CliError::new(FAILURE, format!("{context}: {err}"))
        }
        TransmitError::Encode(err) => encode_error(context, err),
    }
}
