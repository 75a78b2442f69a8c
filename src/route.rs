//! Route cipher implementation.
//!
//! The prepared plaintext is padded with `'X'` to fill a `rows × cols` grid
//! row-major, then read out along one of six traversal routes. Decryption
//! inverts any route the same way: compute the route's position sequence,
//! write the ciphertext into the grid in that order, read the grid row-major,
//! and strip the trailing padding.
use std::str::FromStr;

use crate::Cipher;
use crate::error::{Error, Result};
use crate::helpers;

/// Grid traversal order used by [`RouteCipher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SpiralCw,
    SpiralCcw,
    ColumnDown,
    ColumnUp,
    RowRight,
    RowLeft,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::SpiralCw,
        Route::SpiralCcw,
        Route::ColumnDown,
        Route::ColumnUp,
        Route::RowRight,
        Route::RowLeft,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Route::SpiralCw => "spiral_cw",
            Route::SpiralCcw => "spiral_ccw",
            Route::ColumnDown => "column_down",
            Route::ColumnUp => "column_up",
            Route::RowRight => "row_right",
            Route::RowLeft => "row_left",
        }
    }

    /// The order in which this route visits the cells of a `rows × cols`
    /// grid. Both spirals collapse to a single sweep on one-row or one-column
    /// grids.
    fn positions(self, rows: usize, cols: usize) -> Vec<(usize, usize)> {
        let mut pos = Vec::with_capacity(rows * cols);
        match self {
            Route::SpiralCw => {
                let (mut top, mut bottom) = (0i64, rows as i64 - 1);
                let (mut left, mut right) = (0i64, cols as i64 - 1);
                while top <= bottom && left <= right {
                    for j in left..=right {
                        pos.push((top as usize, j as usize));
                    }
                    top += 1;
                    for i in top..=bottom {
                        pos.push((i as usize, right as usize));
                    }
                    right -= 1;
                    if top <= bottom {
                        for j in (left..=right).rev() {
                            pos.push((bottom as usize, j as usize));
                        }
                        bottom -= 1;
                    }
                    if left <= right {
                        for i in (top..=bottom).rev() {
                            pos.push((i as usize, left as usize));
                        }
                        left += 1;
                    }
                }
            }
            Route::SpiralCcw => {
                let (mut top, mut bottom) = (0i64, rows as i64 - 1);
                let (mut left, mut right) = (0i64, cols as i64 - 1);
                while top <= bottom && left <= right {
                    for i in top..=bottom {
                        pos.push((i as usize, left as usize));
                    }
                    left += 1;
                    for j in left..=right {
                        pos.push((bottom as usize, j as usize));
                    }
                    bottom -= 1;
                    if left <= right {
                        for i in (top..=bottom).rev() {
                            pos.push((i as usize, right as usize));
                        }
                        right -= 1;
                    }
                    if top <= bottom {
                        for j in (left..=right).rev() {
                            pos.push((top as usize, j as usize));
                        }
                        top += 1;
                    }
                }
            }
            Route::ColumnDown => {
                for j in 0..cols {
                    for i in 0..rows {
                        pos.push((i, j));
                    }
                }
            }
            Route::ColumnUp => {
                for j in 0..cols {
                    for i in (0..rows).rev() {
                        pos.push((i, j));
                    }
                }
            }
            Route::RowRight => {
                for i in 0..rows {
                    for j in 0..cols {
                        pos.push((i, j));
                    }
                }
            }
            Route::RowLeft => {
                for i in 0..rows {
                    for j in (0..cols).rev() {
                        pos.push((i, j));
                    }
                }
            }
        }
        pos
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Route::ALL
            .into_iter()
            .find(|route| route.as_str() == s.trim())
            .ok_or_else(|| {
                let valid: Vec<&str> = Route::ALL.iter().map(|r| r.as_str()).collect();
                Error::invalid(format!(
                    "invalid route: {s}. valid routes: {}",
                    valid.join(", ")
                ))
            })
    }
}

/// A route cipher over a fixed `rows × cols` grid.
pub struct RouteCipher {
    rows: usize,
    cols: usize,
    route: Route,
}

impl RouteCipher {
    pub fn new(rows: usize, cols: usize, route: Route) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::invalid(
                "grid must have at least one row and one column",
            ));
        }
        Ok(RouteCipher { rows, cols, route })
    }
}

impl Cipher for RouteCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        let text = helpers::prepare(plaintext, true);
        if text.is_empty() {
            return Ok(String::new());
        }
        let padded: Vec<char> = helpers::pad(&text, self.rows * self.cols, helpers::PAD_CHAR)
            .chars()
            .collect();
        Ok(self
            .route
            .positions(self.rows, self.cols)
            .into_iter()
            .map(|(r, c)| padded[r * self.cols + c])
            .collect())
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let text = helpers::prepare(ciphertext, true);
        if text.is_empty() {
            return Ok(String::new());
        }

        let mut grid = vec![None; self.rows * self.cols];
        for ((r, c), ch) in self
            .route
            .positions(self.rows, self.cols)
            .into_iter()
            .zip(text.chars())
        {
            grid[r * self.cols + c] = Some(ch);
        }

        let out: String = grid.into_iter().flatten().collect();
        Ok(out.trim_end_matches(helpers::PAD_CHAR).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn test_route_from_str() {
        assert_eq!("spiral_cw".parse::<Route>().unwrap(), Route::SpiralCw);
        assert_eq!(" column_up ".parse::<Route>().unwrap(), Route::ColumnUp);
        assert!("diagonal".parse::<Route>().is_err());
    }

    #[test]
    fn test_rejects_empty_grid() {
        assert!(RouteCipher::new(0, 4, Route::SpiralCw).is_err());
        assert!(RouteCipher::new(3, 0, Route::SpiralCw).is_err());
    }

    // 3x4 grid filled with HELLOWORLDXX:
    //   H E L L
    //   O W O R
    //   L D X X
    #[rstest]
    #[case(Route::SpiralCw, "HELLRXXDLOWO")]
    #[case(Route::SpiralCcw, "HOLDXXRLLEWO")]
    #[case(Route::ColumnDown, "HOLEWDLOXLRX")]
    #[case(Route::ColumnUp, "LOHDWEXOLXRL")]
    #[case(Route::RowRight, "HELLOWORLDXX")]
    #[case(Route::RowLeft, "LLEHROWOXXDL")]
    fn test_route_encrypt(#[case] route: Route, #[case] ct: &str) {
        let c = RouteCipher::new(3, 4, route).unwrap();
        assert_eq!(c.encrypt("Hello, World!").unwrap(), ct);
    }

    #[rstest]
    #[case(Route::SpiralCw)]
    #[case(Route::SpiralCcw)]
    #[case(Route::ColumnDown)]
    #[case(Route::ColumnUp)]
    #[case(Route::RowRight)]
    #[case(Route::RowLeft)]
    fn test_route_round_trip(#[case] route: Route) {
        let c = RouteCipher::new(3, 4, route).unwrap();
        let ct = c.encrypt("HELLOWORLD").unwrap();
        assert_eq!(c.decrypt(&ct).unwrap(), "HELLOWORLD");
    }

    #[rstest]
    #[case(1, 8, Route::SpiralCw)]
    #[case(1, 8, Route::SpiralCcw)]
    #[case(8, 1, Route::SpiralCw)]
    #[case(8, 1, Route::SpiralCcw)]
    fn test_degenerate_grids_collapse_to_one_sweep(
        #[case] rows: usize,
        #[case] cols: usize,
        #[case] route: Route,
    ) {
        let c = RouteCipher::new(rows, cols, route).unwrap();
        let positions = route.positions(rows, cols);
        assert_eq!(positions.len(), rows * cols);
        // A 1xN or Nx1 spiral is a plain sweep.
        let ct = c.encrypt("ATTACKAT").unwrap();
        if rows == 1 {
            assert_eq!(ct, "ATTACKAT");
        }
        assert_eq!(c.decrypt(&ct).unwrap(), "ATTACKAT");
    }

    #[test]
    fn test_positions_cover_grid_exactly_once() {
        for route in Route::ALL {
            let mut positions = route.positions(4, 5);
            assert_eq!(positions.len(), 20, "{}", route.as_str());
            positions.sort_unstable();
            positions.dedup();
            assert_eq!(positions.len(), 20, "{}", route.as_str());
        }
    }

    #[test]
    fn test_empty() {
        let c = RouteCipher::new(3, 4, Route::SpiralCw).unwrap();
        assert_eq!(c.encrypt("").unwrap(), "");
        assert_eq!(c.decrypt("").unwrap(), "");
    }
}
