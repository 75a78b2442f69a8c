//! Hill cipher implementation.
//!
//! Each block of `n` letters is treated as a column vector of alphabet
//! indices and multiplied by the `n × n` key matrix modulo 26. Only orders 2
//! and 3 are supported. Encryption accepts any square key reduced mod 26;
//! decryption additionally needs the key to be invertible modulo 26, which
//! holds exactly when its determinant is coprime to 26.
//!
//! # Examples
//!
//! ```
//! use classic_crypto_rs::{Cipher, HillCipher};
//!
//! let cipher = HillCipher::new(&[vec![3, 3], vec![2, 5]]).unwrap();
//! assert_eq!(cipher.encrypt("HELP").unwrap(), "HIAT");
//! assert_eq!(cipher.decrypt("HIAT").unwrap(), "HELP");
//! ```
use crate::Cipher;
use crate::error::{Error, Result};
use crate::helpers;
use crate::matrix;

/// A Hill cipher keyed by a 2×2 or 3×3 integer matrix.
pub struct HillCipher {
    key: Vec<Vec<i64>>,
}

impl HillCipher {
    /// Validates the key matrix and reduces every entry modulo 26.
    pub fn new(key: &[Vec<i64>]) -> Result<Self> {
        let n = key.len();
        if n != 2 && n != 3 {
            return Err(Error::invalid(format!(
                "key matrix must be 2x2 or 3x3, got order {n}"
            )));
        }
        for (i, row) in key.iter().enumerate() {
            if row.len() != n {
                return Err(Error::invalid(format!(
                    "key matrix is not square: row {i} has length {}, expected {n}",
                    row.len()
                )));
            }
        }

        Ok(HillCipher {
            key: key
                .iter()
                .map(|row| row.iter().map(|&v| v.rem_euclid(matrix::MODULUS)).collect())
                .collect(),
        })
    }

    fn order(&self) -> usize {
        self.key.len()
    }

    fn apply(key: &[Vec<i64>], text: &str) -> Result<String> {
        let n = key.len();
        let mut out = String::with_capacity(text.len());
        for block in helpers::split_into_blocks(text, n) {
            let vector: Vec<i64> = block.bytes().map(|b| (b - b'A') as i64).collect();
            for index in matrix::mul_vec(key, &vector) {
                out.push(helpers::index_to_char(index as usize)?);
            }
        }
        Ok(out)
    }
}

impl Cipher for HillCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        let text = helpers::prepare(plaintext, true);
        Self::apply(&self.key, &text)
    }

    /// Decrypts with the key's inverse modulo 26 and strips trailing padding.
    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let inverse = matrix::inverse_mod26(&self.key)?;
        let text = helpers::prepare(ciphertext, true);
        if text.len() % self.order() != 0 {
            return Err(Error::invalid(format!(
                "ciphertext length must be a multiple of {}",
                self.order()
            )));
        }
        let out = Self::apply(&inverse, &text)?;
        Ok(out.trim_end_matches(helpers::PAD_CHAR).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn test_rejects_bad_orders() {
        assert!(HillCipher::new(&[vec![1]]).is_err());
        assert!(HillCipher::new(&vec![vec![1, 0, 0, 0]; 4]).is_err());
        assert!(HillCipher::new(&[vec![1, 2], vec![3]]).is_err());
    }

    #[test]
    fn test_entries_reduced_mod_26() {
        let a = HillCipher::new(&[vec![29, 3], vec![-24, 5]]).unwrap();
        let b = HillCipher::new(&[vec![3, 3], vec![2, 5]]).unwrap();
        assert_eq!(a.encrypt("HELP").unwrap(), b.encrypt("HELP").unwrap());
    }

    #[rstest]
    #[case("HELP", "HIAT")]
    #[case("help!", "HIAT")]
    #[case("", "")]
    fn test_hill_2x2_encrypt(#[case] pt: &str, #[case] ct: &str) {
        let c = HillCipher::new(&[vec![3, 3], vec![2, 5]]).unwrap();
        assert_eq!(c.encrypt(pt).unwrap(), ct);
    }

    #[test]
    fn test_hill_2x2_decrypt() {
        let c = HillCipher::new(&[vec![3, 3], vec![2, 5]]).unwrap();
        assert_eq!(c.decrypt("HIAT").unwrap(), "HELP");
    }

    #[test]
    fn test_hill_3x3() {
        let key = [vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]];
        let c = HillCipher::new(&key).unwrap();
        assert_eq!(c.encrypt("ACT").unwrap(), "POH");
        assert_eq!(c.decrypt("POH").unwrap(), "ACT");
    }

    #[test]
    fn test_odd_length_pads() {
        let c = HillCipher::new(&[vec![3, 3], vec![2, 5]]).unwrap();
        let ct = c.encrypt("HELLO").unwrap();
        assert_eq!(ct.len(), 6);
        // Padding X is stripped on the way back.
        assert_eq!(c.decrypt(&ct).unwrap(), "HELLO");
    }

    #[test]
    fn test_decrypt_requires_invertible_key() {
        // det = 13, shares a factor with 26: encrypt works, decrypt fails.
        let key = [vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 13]];
        let c = HillCipher::new(&key).unwrap();
        assert!(c.encrypt("SECRET").is_ok());
        assert!(c.decrypt("SECRET").is_err());
    }

    #[test]
    fn test_decrypt_length_mismatch() {
        let c = HillCipher::new(&[vec![3, 3], vec![2, 5]]).unwrap();
        assert!(c.decrypt("HIA").is_err());
    }
}
