const POLY: u16 = 0x8408;

/// CRC-16 over `data`, reflected polynomial 0x8408, initial value 0xFFFF.
///
/// The complemented register is returned byte-swapped so it compares equal to
/// the big-endian trailer the sensor appends to its replies.
pub(crate) fn crc16(data: &[u8]) -> u16 {
    let mut crc: u16 = 0xFFFF;
    for byte in data.iter().copied() {
        let mut bits = byte;
        for _ in 0..8 {
            if (crc ^ bits as u16) & 0x0001 != 0 {
                crc = (crc >> 1) ^ POLY;
            } else {
                crc >>= 1;
            }
            bits >>= 1;
        }
    }
    (!crc).swap_bytes()
}

/// Outcome of checking a reply against its trailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Mismatch {
    pub expected: u16,
    pub received: u16,
}

/// Checks the last two bytes of `reply` against the CRC of everything before them.
pub(crate) fn validate(reply: &[u8]) -> Result<(), Mismatch> {
    debug_assert!(reply.len() >= 2);
    let split = reply.len() - 2;
    let expected = crc16(&reply[..split]);
    let received = u16::from_be_bytes([reply[split], reply[split + 1]]);
    if expected == received {
        Ok(())
    } else {
        Err(Mismatch { expected, received })
    }
}

#[cfg(test)]
mod tests {
    use super::{crc16, validate, Mismatch};

    #[test]
    fn empty() {
        assert_eq!(crc16(&[]), 0x0000);
    }

    #[test]
    fn zeroes() {
        assert_eq!(crc16(&[0x00]), 0x78f0);
        assert_eq!(crc16(&[0x00, 0x00]), 0x470f);
        assert_eq!(crc16(&[0x00; 28]), 0xca06);
        assert_eq!(crc16(&[0x00; 30]), 0xab5d);
    }

    #[test]
    fn check_string() {
        // X-25 check value 0x906e, byte-swapped
        assert_eq!(crc16(b"123456789"), 0x6e90);
    }

    #[test]
    fn validate_trailer() {
        assert_eq!(validate(&[0x01, 0x2c, 0xf1, 0xfd]), Ok(()));
        assert_eq!(
            validate(&[0x01, 0x2c, 0xfd, 0xf1]),
            Err(Mismatch {
                expected: 0xf1fd,
                received: 0xfdf1
            })
        );
    }
}
