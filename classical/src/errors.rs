use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ClassicalError {
    /// The key is empty, not square, or contains characters the cipher cannot use.
    #[error("invalid key")]
    InvalidKey,

    /// The Hill key matrix has no inverse modulo the alphabet size.
    #[error("key matrix is not invertible")]
    NonInvertibleKey,

    #[error("character {0:?} is outside the cipher alphabet")]
    InvalidCharacter(char),

    /// The ciphertext does not split into whole blocks.
    #[error("length {len} is not a multiple of the block size {block}")]
    InvalidLength { len: usize, block: usize },

    #[error("key of {key} bytes is shorter than the {message}-byte message")]
    KeyTooShort { key: usize, message: usize },
}
