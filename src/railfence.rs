//! Rail Fence cipher implementation.
//!
//! The prepared plaintext is written in a zigzag over `rails` bands
//! (`0 → rails−1 → 0 → …`) and read off band by band. Decryption recomputes
//! the zigzag row assignment, splits the ciphertext into band segments by the
//! per-band counts, and walks the zigzag again consuming one letter from the
//! assigned band at each position.
use crate::Cipher;
use crate::error::{Error, Result};
use crate::helpers;

/// A rail fence cipher with a fixed number of rails (at least 2).
pub struct RailFenceCipher {
    rails: usize,
}

impl RailFenceCipher {
    pub fn new(rails: i64) -> Result<Self> {
        if rails < 2 {
            return Err(Error::invalid("rails must be at least 2"));
        }
        Ok(RailFenceCipher {
            rails: rails as usize,
        })
    }

    /// Zigzag row assignment for each of `len` positions.
    fn pattern(&self, len: usize) -> Vec<usize> {
        let top = 0i64;
        let bottom = self.rails as i64 - 1;
        let mut pattern = Vec::with_capacity(len);
        let mut row = 0i64;
        let mut dir = 1i64;
        for _ in 0..len {
            pattern.push(row as usize);
            row += dir;
            if row == top {
                dir = 1;
            } else if row == bottom {
                dir = -1;
            }
        }
        pattern
    }
}

impl Cipher for RailFenceCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        let text = helpers::prepare(plaintext, true);
        let mut bands = vec![String::new(); self.rails];
        for (ch, row) in text.chars().zip(self.pattern(text.len())) {
            bands[row].push(ch);
        }
        Ok(bands.concat())
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let text = helpers::prepare(ciphertext, true);
        let chars: Vec<char> = text.chars().collect();
        let pattern = self.pattern(chars.len());

        let mut counts = vec![0usize; self.rails];
        for &row in &pattern {
            counts[row] += 1;
        }

        // Split the ciphertext into one segment per band, then replay the
        // zigzag consuming from each band in turn.
        let mut bands: Vec<std::vec::IntoIter<char>> = Vec::with_capacity(self.rails);
        let mut offset = 0;
        for &count in &counts {
            bands.push(chars[offset..offset + count].to_vec().into_iter());
            offset += count;
        }

        let mut out = String::with_capacity(chars.len());
        for row in pattern {
            match bands[row].next() {
                Some(ch) => out.push(ch),
                None => return Err(Error::Internal("rail band exhausted".to_string())),
            }
        }
        Ok(out)
    }
}
