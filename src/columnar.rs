//! Columnar transposition cipher implementation.
//!
//! The prepared plaintext is padded with `'X'` to a multiple of the key
//! length, written into rows of that width, and the full columns are emitted
//! in the order given by the key letters. Ties between repeated key letters
//! are broken by their original position.
//!
//! Decryption redistributes the ciphertext into columns, giving any extra
//! letters to the earliest-read columns and filling missing cells with `'X'`,
//! then reads row-major and strips the trailing padding. This inverse is
//! exact for any ciphertext this cipher produced (always a key-length
//! multiple); a foreign ciphertext whose length is not a multiple of the key
//! length is redistributed on that same assumption and may not survive.
use crate::Cipher;
use crate::error::{Error, Result};
use crate::helpers;

/// A columnar transposition cipher keyed by a non-empty word.
pub struct ColumnarTransposition {
    ranks: Vec<usize>,
}

impl ColumnarTransposition {
    pub fn new(key: &str) -> Result<Self> {
        let key: Vec<char> = key.to_uppercase().chars().collect();
        if key.is_empty() {
            return Err(Error::invalid("key must not be empty"));
        }

        // Sort (letter, original position) pairs; the sort rank of position i
        // is column i's read order.
        let mut indexed: Vec<(char, usize)> = key.into_iter().zip(0..).collect();
        indexed.sort_unstable();

        let mut ranks = vec![0; indexed.len()];
        for (rank, &(_, idx)) in indexed.iter().enumerate() {
            ranks[idx] = rank;
        }
        Ok(ColumnarTransposition { ranks })
    }

    /// Column indices in the order they are read out.
    fn read_order(&self) -> Vec<usize> {
        let mut order = vec![0; self.ranks.len()];
        for (idx, &rank) in self.ranks.iter().enumerate() {
            order[rank] = idx;
        }
        order
    }
}

impl Cipher for ColumnarTransposition {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        let text = helpers::prepare(plaintext, true);
        if text.is_empty() {
            return Ok(String::new());
        }

        let klen = self.ranks.len();
        let padded: Vec<char> = helpers::pad(
            &text,
            text.chars().count().div_ceil(klen) * klen,
            helpers::PAD_CHAR,
        )
        .chars()
        .collect();

        let mut out = String::with_capacity(padded.len());
        for col in self.read_order() {
            let mut i = col;
            while i < padded.len() {
                out.push(padded[i]);
                i += klen;
            }
        }
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let text = helpers::prepare(ciphertext, true);
        let klen = self.ranks.len();
        let total = text.chars().count();
        if total == 0 {
            return Ok(String::new());
        }

        let num_rows = total.div_ceil(klen);
        let chars_per_col = total / klen;
        let extra = total % klen;

        let mut columns: Vec<Vec<char>> = vec![Vec::with_capacity(num_rows); klen];
        let mut letters = text.chars();
        for (order_idx, col) in self.read_order().into_iter().enumerate() {
            let size = if order_idx < extra {
                chars_per_col + 1
            } else {
                chars_per_col
            };
            for _ in 0..size {
                if let Some(ch) = letters.next() {
                    columns[col].push(ch);
                }
            }
        }

        let mut out = String::with_capacity(num_rows * klen);
        for row in 0..num_rows {
            for column in &columns {
                out.push(*column.get(row).unwrap_or(&helpers::PAD_CHAR));
            }
        }
        Ok(out.trim_end_matches(helpers::PAD_CHAR).to_string())
    }
}
