//! Simple substitution cipher implementation.
//!
//! The key is a permutation of the 26 uppercase letters; plaintext letter `i`
//! of the alphabet becomes `key[i]`. Decryption applies the inverse
//! permutation.
use crate::Cipher;
use crate::error::{Error, Result};
use crate::helpers;

/// A monoalphabetic substitution cipher keyed by a 26-letter permutation.
///
/// Validation extracts the letters of the key (upper-cased), requires at
/// least 26, takes the first 26, and rejects any repeat among them. Both the
/// forward and the inverse permutation are stored as tables.
pub struct SubstitutionCipher {
    enc: [u8; 26],
    dec: [u8; 26],
}

impl SubstitutionCipher {
    pub fn new(key: &str) -> Result<Self> {
        let letters: Vec<u8> = key
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase() as u8)
            .collect();
        if letters.len() < 26 {
            return Err(Error::invalid("key must contain at least 26 letters"));
        }

        let mut enc = [0u8; 26];
        let mut dec = [0u8; 26];
        let mut seen = [false; 26];
        for (i, &b) in letters[..26].iter().enumerate() {
            let idx = (b - b'A') as usize;
            if seen[idx] {
                return Err(Error::invalid(format!(
                    "repeated character in key: {}",
                    b as char
                )));
            }
            seen[idx] = true;
            enc[i] = b;
            dec[idx] = b'A' + i as u8;
        }

        Ok(SubstitutionCipher { enc, dec })
    }

    fn apply(&self, text: &str, table: &[u8; 26]) -> String {
        helpers::prepare(text, true)
            .bytes()
            .map(|b| table[(b - b'A') as usize] as char)
            .collect()
    }
}

impl Cipher for SubstitutionCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        Ok(self.apply(plaintext, &self.enc))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        Ok(self.apply(ciphertext, &self.dec))
    }
}
