//! Pure encode pipeline for infrared commands.
//!
//! Turns a hex command string into the raw buffer a LIRC character device
//! accepts on write:
//! - A 2-character-per-byte hex decode
//! - Pulse-distance encoding with a fixed leader (AGC) burst
//! - Little-endian `{pulse, space}` record packing plus end-of-burst trailer
//!
//! Everything here is deterministic and side-effect free; independent
//! payloads may be encoded concurrently. Device access lives in
//! `irblast-device`.

pub mod error;
pub mod hex;
pub mod pulse;
pub mod wire;

pub use error::{EncodeError, Result};
pub use hex::decode_hex;
pub use pulse::{
    encode_pulses, BIT_PULSE_US, ENTRIES_PER_BYTE, LEADER_PULSE_US, LEADER_SPACE_US, ONE_SPACE_US,
    ZERO_SPACE_US,
};
pub use wire::{serialize_buffer, RECORD_SIZE, TRAILER};

use bytes::Bytes;
use tracing::trace;

/// Run the full pipeline: hex string → pulse sequence → driver buffer.
pub fn encode_command(payload: &str) -> Result<Bytes> {
    let bytes = decode_hex(payload)?;
    let sequence = encode_pulses(&bytes);
    let buffer = serialize_buffer(&sequence)?;
    trace!(
        payload_bytes = bytes.len(),
        entries = sequence.len(),
        buffer_bytes = buffer.len(),
        "encoded command"
    );
    Ok(buffer)
}
