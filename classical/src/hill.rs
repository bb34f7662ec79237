//! Hill cipher over a 31-symbol alphabet.
//!
//! Symbols are the ASCII range `'A'..='_'` (the 26 capital letters followed by
//! `[ \ ] ^ _`), numbered `0..31`. The symbol count is prime so every key with a
//! non-zero determinant is invertible.

use serde::{Deserialize, Serialize};

use crate::errors::ClassicalError;

/// Number of symbols, and the modulus for all matrix arithmetic.
pub const MODULUS: u32 = 31;

const FIRST_SYMBOL: u8 = b'A';
const PADDING: char = 'X';

/// An invertible `n x n` key matrix together with its inverse.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")]
pub struct HillKey {
    size: usize,
    matrix: Vec<u32>,
    inverse: Vec<u32>,
}

impl HillKey {
    /// Builds a key from its rows. Entries are reduced modulo [`MODULUS`].
    ///
    /// # Errors
    ///
    /// - [`ClassicalError::InvalidKey`] if the matrix is empty or not square
    /// - [`ClassicalError::NonInvertibleKey`] if its determinant is `0 mod 31`
    pub fn new(rows: Vec<Vec<u32>>) -> Result<Self, ClassicalError> {
        let size = rows.len();
        if size == 0 || rows.iter().any(|row| row.len() != size) {
            return Err(ClassicalError::InvalidKey);
        }
        let matrix: Vec<u32> = rows.into_iter().flatten().map(|v| v % MODULUS).collect();
        let inverse = invert(&matrix, size).ok_or(ClassicalError::NonInvertibleKey)?;
        Ok(Self {
            size,
            matrix,
            inverse,
        })
    }

    /// Block length `n`.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The inverse key, for decrypting.
    pub fn inverse(&self) -> HillKey {
        HillKey {
            size: self.size,
            matrix: self.inverse.clone(),
            inverse: self.matrix.clone(),
        }
    }

    /// Upper-cases `text`, pads it with `'X'` to a whole number of blocks and
    /// multiplies each block by the key.
    pub fn encrypt(&self, text: &str) -> Result<String, ClassicalError> {
        let mut symbols = to_symbols(&text.to_ascii_uppercase())?;
        while symbols.len() % self.size != 0 {
            symbols.push(PADDING as u32 - FIRST_SYMBOL as u32);
        }
        Ok(transform(&self.matrix, self.size, &symbols))
    }

    /// Multiplies each block by the inverse key. Padding is left in place.
    ///
    /// Fails with [`ClassicalError::InvalidLength`] unless the ciphertext length
    /// is a multiple of the block size.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, ClassicalError> {
        let symbols = to_symbols(ciphertext)?;
        if symbols.len() % self.size != 0 {
            return Err(ClassicalError::InvalidLength {
                len: symbols.len(),
                block: self.size,
            });
        }
        Ok(transform(&self.inverse, self.size, &symbols))
    }

    fn rows(&self) -> Vec<Vec<u32>> {
        self.matrix.chunks(self.size).map(<[u32]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<u32>>> for HillKey {
    type Error = ClassicalError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<HillKey> for Vec<Vec<u32>> {
    fn from(key: HillKey) -> Self {
        key.rows()
    }
}

fn to_symbols(text: &str) -> Result<Vec<u32>, ClassicalError> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            let first = FIRST_SYMBOL as u32;
            if (first..first + MODULUS).contains(&code) {
                Ok(code - first)
            } else {
                Err(ClassicalError::InvalidCharacter(c))
            }
        })
        .collect()
}

fn transform(matrix: &[u32], size: usize, symbols: &[u32]) -> String {
    let mut out = String::with_capacity(symbols.len());
    for block in symbols.chunks(size) {
        for row in matrix.chunks(size) {
            let v = row
                .iter()
                .zip(block)
                .map(|(k, p)| k * p)
                .sum::<u32>()
                % MODULUS;
            out.push((FIRST_SYMBOL + v as u8) as char);
        }
    }
    out
}

fn inv_mod(a: u32) -> u32 {
    // Fermat: a^(p - 2) for prime p
    let mut result = 1u32;
    let mut base = a % MODULUS;
    let mut exp = MODULUS - 2;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % MODULUS;
        }
        base = base * base % MODULUS;
        exp >>= 1;
    }
    result
}

/// Gauss-Jordan elimination on `[M | I]` modulo [`MODULUS`].
///
/// Returns `None` if `M` is singular.
fn invert(matrix: &[u32], size: usize) -> Option<Vec<u32>> {
    let width = 2 * size;
    let mut aug = vec![0u32; size * width];
    for r in 0..size {
        aug[r * width..r * width + size].copy_from_slice(&matrix[r * size..(r + 1) * size]);
        aug[r * width + size + r] = 1;
    }

    for col in 0..size {
        let pivot = (col..size).find(|&r| aug[r * width + col] != 0)?;
        if pivot != col {
            for c in 0..width {
                aug.swap(pivot * width + c, col * width + c);
            }
        }

        let scale = inv_mod(aug[col * width + col]);
        for c in 0..width {
            aug[col * width + c] = aug[col * width + c] * scale % MODULUS;
        }

        for r in 0..size {
            let factor = aug[r * width + col];
            if r == col || factor == 0 {
                continue;
            }
            for c in 0..width {
                let sub = factor * aug[col * width + c] % MODULUS;
                aug[r * width + c] = (aug[r * width + c] + MODULUS - sub) % MODULUS;
            }
        }
    }

    Some(
        aug.chunks(width)
            .flat_map(|row| row[size..].iter().copied())
            .collect(),
    )
}
