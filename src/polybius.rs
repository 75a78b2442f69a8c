//! Polybius square cipher implementation.
//!
//! Each letter is replaced by its 1-indexed `(row)(col)` coordinates in a 5×5
//! grid, producing two decimal digits per letter. Without a key the grid is
//! the standard 25-letter alphabet row-major; with a key the grid is primed
//! with the key's letters (duplicates removed) before the remaining alphabet.
//! `J` is folded to `I` everywhere.
//!
//! # Examples
//!
//! ```
//! use classic_crypto_rs::{Cipher, PolybiusCipher};
//!
//! let cipher = PolybiusCipher::new(None);
//! assert_eq!(cipher.encrypt("HELLO").unwrap(), "2315313134");
//! assert_eq!(cipher.decrypt("2315313134").unwrap(), "HELLO");
//! ```
use crate::Cipher;
use crate::error::{Error, Result};
use crate::helpers;

/// The standard 25-letter grid alphabet (`J` omitted).
const STANDARD_ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// A Polybius square, standard or key-primed.
pub struct PolybiusCipher {
    grid: [u8; 25],
    pos: [(u8, u8); 26],
}

impl PolybiusCipher {
    pub fn new(key: Option<&str>) -> Self {
        let alphabet = match key {
            None => STANDARD_ALPHABET.to_string(),
            Some(key) => {
                let key = helpers::prepare(key, true).replace('J', "I");
                helpers::condense(&format!("{key}{STANDARD_ALPHABET}"))
            }
        };

        let mut grid = [0u8; 25];
        let mut pos = [(0u8, 0u8); 26];
        for (i, b) in alphabet.bytes().take(25).enumerate() {
            grid[i] = b;
            pos[(b - b'A') as usize] = ((i / 5) as u8, (i % 5) as u8);
        }
        pos[(b'J' - b'A') as usize] = pos[(b'I' - b'A') as usize];

        PolybiusCipher { grid, pos }
    }
}

impl Cipher for PolybiusCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        let text = helpers::prepare(plaintext, true).replace('J', "I");
        let mut out = String::with_capacity(text.len() * 2);
        for b in text.bytes() {
            let (row, col) = self.pos[(b - b'A') as usize];
            out.push((b'1' + row) as char);
            out.push((b'1' + col) as char);
        }
        Ok(out)
    }

    /// Decodes digit pairs back to letters, ignoring non-digit characters.
    /// Fails on an odd digit count or on coordinates outside the grid.
    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let digits: Vec<u8> = ciphertext
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();
        if digits.len() % 2 != 0 {
            return Err(Error::invalid(
                "ciphertext must contain an even number of digits",
            ));
        }

        let mut out = String::with_capacity(digits.len() / 2);
        for pair in digits.chunks(2) {
            let (row, col) = (pair[0], pair[1]);
            if !(1..=5).contains(&row) || !(1..=5).contains(&col) {
                return Err(Error::invalid(format!("invalid coordinate: ({row}, {col})")));
            }
            out.push(self.grid[(row - 1) as usize * 5 + (col - 1) as usize] as char);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn test_standard_grid() {
        let c = PolybiusCipher::new(None);
        let grid: String = c.grid.iter().map(|&b| b as char).collect();
        assert_eq!(grid, STANDARD_ALPHABET);
    }

    #[test]
    fn test_keyed_grid() {
        let c = PolybiusCipher::new(Some("POLYBIUS"));
        let grid: String = c.grid.iter().map(|&b| b as char).collect();
        assert_eq!(grid, "POLYBIUSACDEFGHKMNQRTVWXZ");
    }

    #[rstest]
    #[case(None, "HELLO", "2315313134")]
    #[case(None, "hello, world!", "23153131345234423214")]
    #[case(Some("POLYBIUS"), "HELLO", "3532131312")]
    #[case(None, "", "")]
    fn test_polybius_encrypt(#[case] key: Option<&str>, #[case] pt: &str, #[case] ct: &str) {
        let c = PolybiusCipher::new(key);
        assert_eq!(c.encrypt(pt).unwrap(), ct);
    }

    #[rstest]
    #[case(None, "2315313134", "HELLO")]
    #[case(None, "23 15 31 31 34", "HELLO")]
    #[case(Some("POLYBIUS"), "3532131312", "HELLO")]
    fn test_polybius_decrypt(#[case] key: Option<&str>, #[case] ct: &str, #[case] pt: &str) {
        let c = PolybiusCipher::new(key);
        assert_eq!(c.decrypt(ct).unwrap(), pt);
    }

    #[test]
    fn test_j_folds_to_i() {
        let c = PolybiusCipher::new(None);
        assert_eq!(c.encrypt("JIG").unwrap(), c.encrypt("IIG").unwrap());
    }

    #[test]
    fn test_decrypt_odd_digit_count() {
        let c = PolybiusCipher::new(None);
        assert!(c.decrypt("231").is_err());
    }

    #[rstest]
    #[case("60")]
    #[case("06")]
    #[case("19")]
    fn test_decrypt_out_of_range(#[case] ct: &str) {
        let c = PolybiusCipher::new(None);
        assert!(c.decrypt(ct).is_err());
    }

    #[test]
    fn test_round_trip() {
        let c = PolybiusCipher::new(Some("SECRET"));
        let ct = c.encrypt("THEQUICKBROWNFOX").unwrap();
        assert_eq!(c.decrypt(&ct).unwrap(), "THEQUICKBROWNFOX");
    }
}
