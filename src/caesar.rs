//! Caesar cipher implementation.
//!
//! The Caesar cipher is the shift cipher with the historical key of 3. The
//! key may still be overridden; passing `None` selects the classic shift.
//!
//! # Examples
//!
//! ```
//! use classic_crypto_rs::{CaesarCipher, Cipher};
//!
//! let cipher = CaesarCipher::new(None);
//! assert_eq!(cipher.encrypt("HELLO").unwrap(), "KHOOR");
//! assert_eq!(cipher.decrypt("KHOOR").unwrap(), "HELLO");
//! ```
use crate::Cipher;
use crate::error::Result;
use crate::shift::ShiftCipher;

/// Classic Caesar shift used when no key is supplied.
pub const DEFAULT_KEY: i64 = 3;

/// A Caesar cipher: a [`ShiftCipher`] defaulting to a shift of 3.
pub struct CaesarCipher {
    inner: ShiftCipher,
}

impl CaesarCipher {
    /// Creates a Caesar cipher; `None` uses the classic shift of 3.
    pub fn new(key: Option<i64>) -> Self {
        CaesarCipher {
            inner: ShiftCipher::new(key.unwrap_or(DEFAULT_KEY)),
        }
    }
}

impl Cipher for CaesarCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        self.inner.encrypt(plaintext)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        self.inner.decrypt(ciphertext)
    }
}
