/// Errors that can occur while encoding a hex command into a driver buffer.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The hex payload has an odd number of characters.
    #[error("hex payload has odd length ({len} characters): {payload:?}")]
    OddLength { payload: String, len: usize },

    /// A two-character group is not a valid base-16 byte.
    #[error("invalid hex digit in {group:?} at offset {offset}")]
    InvalidDigit { group: String, offset: usize },

    /// A pulse sequence with an odd number of entries reached the
    /// serializer. Unreachable after a correct encoder; indicates an
    /// encoder defect, not bad user input.
    #[error("unpaired pulse sequence ({len} entries)")]
    UnpairedSequence { len: usize },
}

pub type Result<T> = std::result::Result<T, EncodeError>;
