use eyre::{bail, eyre, Result};
use std::fmt::Write;

/// Decodes a hex string into a vector of bytes
///
/// A leading `0x` and any whitespace (including newlines) are ignored.
///
/// ```
/// use wordvm_common::utils::strings::decode_hex;
///
/// let hex = "48656c6c6f20576f726c64"; // "Hello World" in hex
/// let result = decode_hex(hex).expect("should decode hex");
/// assert_eq!(result, vec![72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100]);
///
/// assert_eq!(decode_hex("0x60 2a\n60 00").unwrap(), vec![0x60, 0x2a, 0x60, 0x00]);
/// assert!(decode_hex("6").is_err());
/// ```
pub fn decode_hex(s: &str) -> Result<Vec<u8>> {
    // normalize
    let s: String = s.trim().trim_start_matches("0x").split_whitespace().collect();

    if s.is_empty() {
        return Ok(vec![]);
    }
    if s.len() % 2 != 0 {
        bail!("invalid hex string: odd number of digits ({})", s.len());
    }

    s.as_bytes()
        .chunks(2)
        .map(|pair| {
            std::str::from_utf8(pair)
                .ok()
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(|| eyre!("invalid hex digits: {}", String::from_utf8_lossy(pair)))
        })
        .collect::<Result<Vec<u8>>>()
}

/// Encodes a vector of bytes into a hex string
///
/// ```
/// use wordvm_common::utils::strings::encode_hex;
///
/// let bytes = vec![72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100];
/// let result = encode_hex(&bytes);
/// assert_eq!(result, "48656c6c6f20576f726c64");
/// ```
pub fn encode_hex(s: &[u8]) -> String {
    s.iter().fold(String::new(), |mut acc, b| {
        write!(acc, "{b:02x}").expect("unable to write");
        acc
    })
}

#[cfg(test)]
mod tests {
    use crate::utils::strings::*;

    #[test]
    fn test_decode_hex() {
        assert_eq!(decode_hex("").unwrap(), Vec::<u8>::new());
        assert_eq!(decode_hex("0x").unwrap(), Vec::<u8>::new());
        assert_eq!(decode_hex("ff00").unwrap(), vec![0xff, 0x00]);
        assert_eq!(decode_hex("0xFFaB").unwrap(), vec![0xff, 0xab]);
    }

    #[test]
    fn test_decode_hex_ignores_whitespace() {
        assert_eq!(decode_hex("  60 2a\r\n60\t00 52\n").unwrap(), vec![0x60, 0x2a, 0x60, 0x00, 0x52]);
    }

    #[test]
    fn test_decode_hex_rejects_invalid_input() {
        assert!(decode_hex("abc").is_err());
        assert!(decode_hex("zz").is_err());
        assert!(decode_hex("0x6g").is_err());
        assert!(decode_hex("é1").is_err());
    }

    #[test]
    fn test_encode_hex() {
        assert_eq!(encode_hex(&[]), "");
        assert_eq!(encode_hex(&[0x00, 0x0f, 0xff]), "000fff");
    }
}
