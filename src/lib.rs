#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use thiserror::Error;

pub mod compass;
pub mod locator;
pub mod point;
pub mod utility;

pub use compass::CompassPoint;
pub use locator::{
    encode, grid_square, parse, parse_centered, parse_strict, parse_strict_centered, parse_with,
    ParseOptions, Precision,
};
pub use point::Point;

pub(crate) mod constants;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("Coordinate is not valid: {0}")]
    InvalidCoord(#[from] CoordError),
    #[error("Locator is invalid: {0}")]
    InvalidLocator(#[from] LocatorError),
    #[error("Precision {0} not in range [1, 5]")]
    InvalidPrecision(i32),
}

/// Reasons a [`Point`] cannot be encoded. Checked in declaration order, the
/// first matching condition is reported.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CoordError {
    #[error("latitude is not a digit")]
    LatitudeNan,
    #[error("latitude is infinite")]
    LatitudeInfinite,
    #[error("longitude is not a digit")]
    LongitudeNan,
    #[error("longitude is infinite")]
    LongitudeInfinite,
    #[error("grid square invalid at poles")]
    Pole,
    #[error("invalid latitude {0:.4}")]
    Latitude(f64),
    #[error("invalid longitude {0:.5}")]
    Longitude(f64),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LocatorError {
    #[error("locator is too long ({len} characters, maximum {max} characters allowed)", max = constants::MAX_LOCATOR_LEN)]
    TooLong { len: usize },
    #[error("locator has odd number of characters")]
    OddLength,
    #[error("invalid character at offset {offset}")]
    InvalidChar { offset: usize },
}

pub trait ParseCoord {
    /// Parses `value` into a coordinate type.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] describing why `value` could not be parsed.
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses any [`ParseCoord`] type from a string-like value.
///
/// ```
/// use maidenhead::Point;
///
/// let point: Point = maidenhead::from_str("JN58td").unwrap();
/// assert!((point.latitude() - 48.125).abs() < 1e-9);
/// assert!((point.longitude() - 11.583_333_333).abs() < 1e-9);
/// ```
///
/// # Errors
///
/// Forwards the error of [`ParseCoord::parse_coord`].
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
