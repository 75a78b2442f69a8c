//! Pigpen cipher implementation.
//!
//! The pigpen (masonic) cipher replaces each letter with a geometric glyph.
//! Here every glyph is encoded as a short token naming its shape: `S`/`X` for
//! the square or cross family, a corner digit, and a trailing `D`/`L` for the
//! dotted and lined variants (`Y` and `Z` get the two special tokens `SP` and
//! `XP`). Tokens are joined with `'|'`. The cipher takes no key.
use crate::Cipher;
use crate::error::Result;
use crate::helpers;

/// Glyph token for each letter, indexed `A=0 … Z=25`.
const TOKENS: [&str; 26] = [
    "S1D", "S2D", "S3D", "S4D", // A-D: dotted square corners
    "X1D", "X2D", "X3D", "X4D", // E-H: dotted cross corners
    "S1", "S2", "S3", "S4", // I-L: empty square corners
    "X1", "X2", "X3", "X4", // M-P: empty cross corners
    "S1L", "S2L", "S3L", "S4L", // Q-T: lined square corners
    "X1L", "X2L", "X3L", "X4L", // U-X: lined cross corners
    "SP", "XP", // Y, Z
];

/// Token emitted for a glyph that maps to no letter.
const UNKNOWN_LETTER: char = '?';

/// The fixed-alphabet pigpen cipher.
#[derive(Debug, Default)]
pub struct PigpenCipher;

impl PigpenCipher {
    pub fn new() -> Self {
        PigpenCipher
    }
}

impl Cipher for PigpenCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        let tokens: Vec<&str> = helpers::prepare(plaintext, true)
            .bytes()
            .map(|b| TOKENS[(b - b'A') as usize])
            .collect();
        Ok(tokens.join("|"))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        if ciphertext.is_empty() {
            return Ok(String::new());
        }
        Ok(ciphertext
            .split('|')
            .map(|code| {
                match TOKENS.iter().position(|&token| token == code.trim()) {
                    Some(i) => (b'A' + i as u8) as char,
                    None => UNKNOWN_LETTER,
                }
            })
            .collect())
    }
}
