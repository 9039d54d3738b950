use crate::error::{EncodeError, Result};

/// Decode a hex command string into raw bytes.
///
/// Two characters per byte, base 16, case-insensitive. The payload must
/// have even length and contain only hex digits.
pub fn decode_hex(payload: &str) -> Result<Vec<u8>> {
    if payload.len() % 2 != 0 {
        return Err(EncodeError::OddLength {
            payload: payload.to_string(),
            len: payload.len(),
        });
    }

    let mut bytes = Vec::with_capacity(payload.len() / 2);
    for (offset, group) in payload.as_bytes().chunks_exact(2).enumerate() {
        // from_str_radix tolerates a leading '+', so validate digits first.
        if !group.iter().all(u8::is_ascii_hexdigit) {
            return Err(EncodeError::InvalidDigit {
                group: String::from_utf8_lossy(group).into_owned(),
                offset: offset * 2,
            });
        }
        // All-hexdigit groups are ASCII, so this str conversion cannot fail.
        let group = std::str::from_utf8(group).expect("hex digits are ASCII");
        let value = u8::from_str_radix(group, 16).map_err(|_| EncodeError::InvalidDigit {
            group: group.to_string(),
            offset: offset * 2,
        })?;
        bytes.push(value);
    }

    Ok(bytes)
}
