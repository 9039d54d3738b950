use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{EncodeError, Result};

/// Fixed end-of-burst trailer appended after the last record.
pub const TRAILER: [u8; 4] = [0xCA, 0x01, 0x00, 0x00];

/// Size of one pulse/space record on the wire.
pub const RECORD_SIZE: usize = 8;

/// Pack a pulse/space sequence into the buffer format the LIRC driver
/// consumes on write.
///
/// Wire format:
/// ```text
/// ┌──────────────┬──────────────┬─────┬──────────────┐
/// │ pulse (4B LE)│ space (4B LE)│ ... │ 0xCA 01 00 00│
/// └──────────────┴──────────────┴─────┴──────────────┘
/// ```
/// One 8-byte record per pulse/space pair, in sequence order, then the
/// fixed 4-byte trailer. The sequence must have even length; an odd-length
/// sequence is an encoder defect and fails with
/// [`EncodeError::UnpairedSequence`].
pub fn serialize_buffer(sequence: &[u32]) -> Result<Bytes> {
    if sequence.len() % 2 != 0 {
        return Err(EncodeError::UnpairedSequence {
            len: sequence.len(),
        });
    }

    let mut buf = BytesMut::with_capacity(RECORD_SIZE * (sequence.len() / 2) + TRAILER.len());
    for pair in sequence.chunks_exact(2) {
        buf.put_u32_le(pair[0]);
        buf.put_u32_le(pair[1]);
    }
    buf.put_slice(&TRAILER);

    Ok(buf.freeze())
}
