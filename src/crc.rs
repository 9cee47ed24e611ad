use crate::types::ResponseFrame;

/// Sensirion CRC-8 (polynomial 0x31, init 0xFF) over one 16-bit word.
pub(crate) fn crc(word: [u8; 2]) -> u8 {
    let mut crc: u8 = 0xFF;
    for byte in word {
        crc ^= byte;
        for _ in 0..8 {
            if crc & 0x80 == 0 {
                crc <<= 1;
            } else {
                crc = (crc << 1) ^ 0x31u8;
            }
        }
    }
    crc
}

/// Checks both word/CRC triplets of a response frame.
pub(crate) fn frame_is_valid(frame: &ResponseFrame) -> bool {
    frame
        .chunks_exact(3)
        .all(|chunk| crc([chunk[0], chunk[1]]) == chunk[2])
}

#[cfg(test)]
mod tests {
    use super::{crc, frame_is_valid};

    #[test]
    fn example() {
        assert_eq!(crc([0xbe, 0xef]), 0x92);
    }

    #[test]
    fn frame() {
        assert!(frame_is_valid(&[0xbe, 0xef, 0x92, 0xbe, 0xef, 0x92]));
        assert!(!frame_is_valid(&[0xbe, 0xef, 0x92, 0xbe, 0xef, 0x93]));
        assert!(!frame_is_valid(&[0x01, 0x94, 0x00, 0x00, 0x64, 0x00]));
    }
}
