//! Shift cipher implementation.
//!
//! Each letter of the prepared plaintext is moved a fixed number of positions
//! down the alphabet, wrapping around. The key is any signed integer and is
//! reduced modulo 26, so shifting by `k` and by `k + 26` are the same cipher.
//!
//! # Examples
//!
//! ```
//! use classic_crypto_rs::{Cipher, ShiftCipher};
//!
//! let cipher = ShiftCipher::new(5);
//! assert_eq!(cipher.encrypt("Attack at dawn!").unwrap(), "FYYFHPFYIFBS");
//! assert_eq!(cipher.decrypt("FYYFHPFYIFBS").unwrap(), "ATTACKATDAWN");
//! ```
use crate::Cipher;
use crate::error::Result;
use crate::helpers;

/// A shift cipher over the uppercase English alphabet.
///
/// Both directions are precomputed as lookup tables when the cipher is built,
/// so `encrypt` and `decrypt` are single table walks.
pub struct ShiftCipher {
    enc: [u8; 26],
    dec: [u8; 26],
}

impl ShiftCipher {
    /// Creates a shift cipher with the given key, reduced modulo 26.
    pub fn new(key: i64) -> Self {
        let mut enc = [0u8; 26];
        let mut dec = [0u8; 26];
        let shift = key.rem_euclid(26) as usize;
        for i in 0..26 {
            let e = (i + shift) % 26;
            enc[i] = e as u8 + b'A';
            dec[e] = i as u8 + b'A';
        }
        ShiftCipher { enc, dec }
    }

    fn apply(&self, text: &str, table: &[u8; 26]) -> String {
        helpers::prepare(text, true)
            .bytes()
            .map(|b| table[(b - b'A') as usize] as char)
            .collect()
    }
}

impl Cipher for ShiftCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        Ok(self.apply(plaintext, &self.enc))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        Ok(self.apply(ciphertext, &self.dec))
    }
}
