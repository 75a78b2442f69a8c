//! Vigenère cipher implementation.
//!
//! A polyalphabetic shift: the key word is tiled over the prepared plaintext
//! and each letter is shifted by its key letter, `c_i = (p_i + k_i) mod 26`.
//!
//! # Examples
//!
//! ```
//! use classic_crypto_rs::{Cipher, VigenereCipher};
//!
//! let cipher = VigenereCipher::new("LEMON").unwrap();
//! assert_eq!(cipher.encrypt("ATTACKATDAWN").unwrap(), "LXFOPVEFRNHR");
//! ```
use crate::Cipher;
use crate::error::{Error, Result};
use crate::helpers;

/// A Vigenère cipher keyed by a non-empty letter string.
pub struct VigenereCipher {
    key: Vec<u8>,
}

impl VigenereCipher {
    /// Creates a Vigenère cipher. The key is prepared like plaintext and must
    /// contain at least one letter.
    pub fn new(key: &str) -> Result<Self> {
        let key = helpers::prepare(key, true);
        if key.is_empty() {
            return Err(Error::invalid("key must contain at least one letter"));
        }
        Ok(VigenereCipher {
            key: key.bytes().map(|b| b - b'A').collect(),
        })
    }

    fn apply(&self, text: &str, decrypt: bool) -> String {
        helpers::prepare(text, true)
            .bytes()
            .enumerate()
            .map(|(i, b)| {
                let k = self.key[i % self.key.len()] as i64;
                let p = (b - b'A') as i64;
                let c = if decrypt { p - k } else { p + k }.rem_euclid(26);
                (b'A' + c as u8) as char
            })
            .collect()
    }
}

impl Cipher for VigenereCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        Ok(self.apply(plaintext, false))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        Ok(self.apply(ciphertext, true))
    }
}
