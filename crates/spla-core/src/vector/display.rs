//! `Display` formatting for [`Vector`]: a size header, then one element per
//! line.

use core::fmt;

use crate::Scalar;

use super::Vector;

impl<T: Scalar> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "size: {} by 1", self.len())?;
        for v in &self.data {
            writeln!(f, "{v}")?;
        }
        Ok(())
    }
}
