//! The `WxH` notation shared by mark sizes and paste locations, e.g. `200x200` or `100x-20`.

use std::ffi::OsStr;
use std::fmt::Display;
use std::str::FromStr;

use crate::arg_parse_err::ArgParseErr;

#[cfg(test)]
use crate::utils::arbitrary;
#[cfg(test)]
use quickcheck::Arbitrary;

pub const DIMENSION_DELIMITER: &str = "x";

/// A pair of integers. Used for both sizes (width, height) and pixel offsets (x, y).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Splits `input` on `delimiter` and reads the first two pieces as integers.
    /// Anything after the second piece is ignored.
    pub fn parse(input: &str, delimiter: &str) -> Result<Self, ArgParseErr> {
        if delimiter.is_empty() {
            return Err(ArgParseErr::with_msg("empty coordinate delimiter"));
        }
        let mut pieces = input.split(delimiter);
        // `split` always yields at least one piece, possibly empty, which fails to parse below
        let x = pieces.next().unwrap_or_default().parse::<i64>()?;
        let y = pieces.next().ok_or_else(ArgParseErr::new)?.parse::<i64>()?;
        Ok(Self { x, y })
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Self::new(i64::from(x), i64::from(y))
    }
}

#[cfg(test)]
impl Arbitrary for Point {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self {
            x: arbitrary::coordinate(g),
            y: arbitrary::coordinate(g),
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{DIMENSION_DELIMITER}{}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = ArgParseErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, DIMENSION_DELIMITER)
    }
}

impl TryFrom<&OsStr> for Point {
    type Error = ArgParseErr;

    fn try_from(s: &OsStr) -> Result<Self, Self::Error> {
        let s = s.to_str().ok_or_else(ArgParseErr::new)?;
        Self::from_str(s)
    }
}
