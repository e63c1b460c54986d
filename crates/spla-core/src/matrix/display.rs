//! Text I/O for [`Matrix`].
//!
//! Output is a size header followed by one line per row, every element
//! followed by a single space:
//!
//! ```text
//! size: 2 by 3
//! 1 2 3
//! 4 5 6
//! ```
//!
//! Input is whitespace-delimited: two leading integers `rows cols`, then
//! `rows * cols` elements in row-major order. Tokens after the last element
//! are ignored.

use core::fmt;
use core::str::FromStr;
use std::io::Read;

use crate::Scalar;
use crate::error::{CoreError, Result};

use super::Matrix;

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "size: {} by {}", self.rows, self.cols)?;
        for row in self.row_slices() {
            for v in row {
                write!(f, "{v} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Scalar> FromStr for Matrix<T> {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let mut m = Matrix::new();
        m.read_into(s)?;
        Ok(m)
    }
}

impl<T: Scalar> Matrix<T> {
    /// Parse `text` into `self`.
    ///
    /// All elements are parsed before `self` is touched, so on error the
    /// matrix keeps its previous shape and contents. When the header shape
    /// equals the current one the existing storage is reused.
    ///
    /// ```
    /// # use spla_core::Matrix;
    /// let mut m = Matrix::<f64>::zeros(2, 2);
    /// m.read_into("2 2\n1 2\n3 4").unwrap();
    /// assert_eq!(m.at(2, 1), 3.0);
    /// ```
    pub fn read_into(&mut self, text: &str) -> Result<()> {
        let mut tokens = text.split_whitespace().enumerate();
        let rows: usize = parse_next(&mut tokens, 2, 0)?;
        let cols: usize = parse_next(&mut tokens, 2, 1)?;
        let total = rows.checked_mul(cols).ok_or(CoreError::InvalidShape {
            rows,
            cols,
            len: 0,
            reason: "rows * cols overflows usize",
        })?;

        // Grow with the input rather than the header, which may overstate it.
        let mut data = Vec::new();
        for k in 0..total {
            data.push(parse_next(&mut tokens, total, k)?);
        }

        if (rows, cols) == self.shape() {
            self.data.copy_from_slice(&data);
        } else {
            *self = Matrix::from_vec(rows, cols, data)?;
        }
        log::trace!("read {rows}x{cols} matrix from text");
        Ok(())
    }

    /// Read one matrix from `reader` (consumes the reader to the end).
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        text.parse()
    }
}

fn parse_next<'a, V, I>(tokens: &mut I, expected: usize, found: usize) -> Result<V>
where
    V: FromStr,
    I: Iterator<Item = (usize, &'a str)>,
{
    let (position, token) = tokens
        .next()
        .ok_or(CoreError::UnexpectedEof { expected, found })?;
    token.parse().map_err(|_| CoreError::Parse {
        position,
        token: token.to_string(),
    })
}
