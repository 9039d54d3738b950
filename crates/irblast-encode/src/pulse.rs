/// Leader (AGC burst) pulse/space pair, microseconds. Transmitted before
/// the data bits to prime the receiver's automatic gain control.
pub const LEADER_PULSE_US: u32 = 4350;
pub const LEADER_SPACE_US: u32 = 4350;

/// Fixed mark duration for every data bit, microseconds.
pub const BIT_PULSE_US: u32 = 460;

/// Space duration for a 1 bit, microseconds.
pub const ONE_SPACE_US: u32 = 1600;

/// Space duration for a 0 bit, microseconds.
pub const ZERO_SPACE_US: u32 = 600;

/// Number of pulse/space entries produced per input byte (8 bits × 2).
pub const ENTRIES_PER_BYTE: usize = 16;

/// Encode raw command bytes into a pulse/space timing sequence.
///
/// Pulse-distance encoding: every bit is a fixed-length mark followed by a
/// space whose duration carries the bit value. Bits are taken most
/// significant first. The sequence always starts with the leader pair, so
/// the output has exactly `2 + 16 * bytes.len()` entries and even length.
pub fn encode_pulses(bytes: &[u8]) -> Vec<u32> {
    let mut sequence = Vec::with_capacity(2 + ENTRIES_PER_BYTE * bytes.len());
    sequence.push(LEADER_PULSE_US);
    sequence.push(LEADER_SPACE_US);

    for &byte in bytes {
        for bit in (0..8).rev() {
            sequence.push(BIT_PULSE_US);
            if byte & (1 << bit) != 0 {
                sequence.push(ONE_SPACE_US);
            } else {
                sequence.push(ZERO_SPACE_US);
            }
        }
    }

    sequence
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_leader_only() {
        assert_eq!(encode_pulses(&[]), vec![LEADER_PULSE_US, LEADER_SPACE_US]);
    }

    #[test]
    fn test_length_invariant() {
        for len in 0..8 {
            let bytes = vec![0xA5u8; len];
            let seq = encode_pulses(&bytes);
            assert_eq!(seq.len(), 2 + ENTRIES_PER_BYTE * len);
            assert_eq!(seq.len() % 2, 0);
        }
    }

    #[test]
    fn test_all_zero_byte() {
        let seq = encode_pulses(&[0x00]);
        assert_eq!(seq.len(), 18);
        assert_eq!(&seq[..2], &[4350, 4350]);
        for pair in seq[2..].chunks_exact(2) {
            assert_eq!(pair, &[460, 600]);
        }
    }

    #[test]
    fn test_msb_first() {
        // 0x80 = 10000000: the first data space carries the 1.
        let seq = encode_pulses(&[0x80]);
        assert_eq!(seq[2], 460);
        assert_eq!(seq[3], 1600);
        for pair in seq[4..].chunks_exact(2) {
            assert_eq!(pair, &[460, 600]);
        }
    }

    #[test]
    fn test_pulse_always_fixed() {
        let seq = encode_pulses(&[0x5A, 0xFF, 0x00]);
        for pair in seq[2..].chunks_exact(2) {
            assert_eq!(pair[0], BIT_PULSE_US);
            assert!(pair[1] == ONE_SPACE_US || pair[1] == ZERO_SPACE_US);
        }
    }

    #[test]
    fn test_spaces_follow_bits() {
        // 0xA5 = 10100101
        let seq = encode_pulses(&[0xA5]);
        let spaces: Vec<u32> = seq[2..].iter().skip(1).step_by(2).copied().collect();
        assert_eq!(
            spaces,
            vec![1600, 600, 1600, 600, 600, 1600, 600, 1600]
        );
    }
}
