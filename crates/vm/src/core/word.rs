use alloy::primitives::U256;

use super::{constants::WORD_SIZE, error::RevertError};

/// Builds a word from up to 32 big-endian bytes.
///
/// Shorter inputs are treated as left-padded with zeros, and an empty input yields the zero word.
///
/// ```
/// use wordvm_vm::core::word::bytes_to_word;
/// use alloy::primitives::U256;
///
/// assert_eq!(bytes_to_word(&[0x01, 0x00]).unwrap(), U256::from(256));
/// assert_eq!(bytes_to_word(&[]).unwrap(), U256::ZERO);
/// assert!(bytes_to_word(&[0u8; 33]).is_err());
/// ```
pub fn bytes_to_word(bytes: &[u8]) -> Result<U256, RevertError> {
    if bytes.len() > WORD_SIZE {
        return Err(RevertError::InvalidWordLength(bytes.len()));
    }

    Ok(bytes.iter().fold(U256::ZERO, |word, byte| (word << 8usize) | U256::from(*byte)))
}

/// Returns the 32-byte big-endian representation of a word.
///
/// ```
/// use wordvm_vm::core::word::word_to_bytes;
/// use alloy::primitives::U256;
///
/// let bytes = word_to_bytes(U256::from(0x2a));
/// assert_eq!(bytes[31], 0x2a);
/// assert!(bytes[..31].iter().all(|b| *b == 0));
/// ```
pub fn word_to_bytes(word: U256) -> [u8; WORD_SIZE] {
    word.to_be_bytes::<WORD_SIZE>()
}
