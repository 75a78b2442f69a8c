//! Modular matrix arithmetic for the Hill cipher.
//!
//! Everything here works on plain `i64` entries and reduces modulo 26 at the
//! end. Only 2×2 and 3×3 matrices are supported; the determinant uses the
//! direct formula for 2×2 and the Sarrus expansion for 3×3, and the inverse
//! goes through the adjugate so intermediate values never leave the integers.

use crate::error::{Error, Result};

/// Modulus shared by all matrix operations: the alphabet size.
pub const MODULUS: i64 = 26;

/// Determinant of a 2×2 or 3×3 matrix.
pub fn det(matrix: &[Vec<i64>]) -> Result<i64> {
    let n = matrix.len();
    if matrix.iter().any(|row| row.len() != n) {
        return Err(Error::invalid("matrix must be square"));
    }

    match n {
        2 => Ok(matrix[0][0] * matrix[1][1] - matrix[0][1] * matrix[1][0]),
        3 => {
            let (a, b, c) = (matrix[0][0], matrix[0][1], matrix[0][2]);
            let (d, e, f) = (matrix[1][0], matrix[1][1], matrix[1][2]);
            let (g, h, i) = (matrix[2][0], matrix[2][1], matrix[2][2]);
            Ok(a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g))
        }
        _ => Err(Error::invalid(format!(
            "only 2x2 and 3x3 matrices are supported, got {n}x{n}"
        ))),
    }
}

/// Modular inverse of `a` modulo `m` via the extended Euclidean algorithm.
///
/// Returns the unique `x` in `[0, m)` with `a·x ≡ 1 (mod m)`, or `None` when
/// `gcd(a, m) != 1`.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let (mut r0, mut r1) = (a.rem_euclid(m), m);
    let (mut x0, mut x1) = (1i64, 0i64);

    while r0 != 0 {
        let q = r1 / r0;
        (r0, r1) = (r1 - q * r0, r0);
        (x0, x1) = (x1 - q * x0, x0);
    }

    if r1 != 1 {
        return None;
    }
    Some(x1.rem_euclid(m))
}

/// Inverse of a 2×2 or 3×3 matrix modulo 26.
///
/// Fails with `InvalidInput` when the determinant shares a factor with 26.
/// Every entry of the result lies in `[0, 26)`.
pub fn inverse_mod26(matrix: &[Vec<i64>]) -> Result<Vec<Vec<i64>>> {
    let n = matrix.len();
    let d = det(matrix)?;
    let det_inv = mod_inverse(d, MODULUS)
        .ok_or_else(|| Error::invalid("matrix is not invertible modulo 26"))?;

    let adjugate = match n {
        2 => vec![
            vec![matrix[1][1], -matrix[0][1]],
            vec![-matrix[1][0], matrix[0][0]],
        ],
        3 => {
            // Cofactor matrix, then transpose.
            let mut cofactor = vec![vec![0i64; 3]; 3];
            for (i, cof_row) in cofactor.iter_mut().enumerate() {
                for (j, cof) in cof_row.iter_mut().enumerate() {
                    let mut minor = Vec::with_capacity(2);
                    for (r, row) in matrix.iter().enumerate() {
                        if r == i {
                            continue;
                        }
                        let minor_row: Vec<i64> = row
                            .iter()
                            .enumerate()
                            .filter(|(c, _)| *c != j)
                            .map(|(_, &v)| v)
                            .collect();
                        minor.push(minor_row);
                    }
                    let sign = if (i + j) % 2 == 0 { 1 } else { -1 };
                    *cof = sign * det(&minor)?;
                }
            }
            (0..3)
                .map(|i| (0..3).map(|j| cofactor[j][i]).collect())
                .collect()
        }
        _ => unreachable!("det already rejected this order"),
    };

    Ok(adjugate
        .iter()
        .map(|row| {
            row.iter()
                .map(|&v| (v * det_inv).rem_euclid(MODULUS))
                .collect()
        })
        .collect())
}

/// Matrix-times-column-vector product, reduced modulo 26.
pub fn mul_vec(matrix: &[Vec<i64>], vector: &[i64]) -> Vec<i64> {
    matrix
        .iter()
        .map(|row| {
            row.iter()
                .zip(vector)
                .map(|(&m, &v)| m * v)
                .sum::<i64>()
                .rem_euclid(MODULUS)
        })
        .collect()
}
