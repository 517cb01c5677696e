use std::fmt::Display;

use log::{debug, trace};
use num::Integer;

use crate::{
    constants::{EDGE_NUDGE, MAX_LOCATOR_LEN, TIERS},
    point::Point,
    utility::dms,
    CoordError, Error, LocatorError, ThisOrThat,
};

/// Number of character pairs in an encoded locator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Precision {
    /// `JN`: 20° x 10°
    Field = 1,
    /// `JN58`: 2° x 1°
    Square = 2,
    /// `JN58TD`: 5' x 2.5'
    SubSquare = 3,
    /// `JN58TD25`: 30" x 15"
    ExtendedSquare = 4,
    /// `JN58TD25ad`: 1.25" x 0.625"
    ExtendedSubSquare = 5,
}

impl Precision {
    /// Number of two-character groups emitted at this precision.
    pub fn groups(self) -> usize {
        self as usize
    }

    /// Number of characters emitted at this precision.
    ///
    /// ```
    /// use maidenhead::Precision;
    ///
    /// assert_eq!(Precision::SubSquare.chars(), 6);
    /// ```
    pub fn chars(self) -> usize {
        2 * self.groups()
    }

    /// Precision matching a locator of `len` characters, if there is one.
    ///
    /// ```
    /// use maidenhead::Precision;
    ///
    /// assert_eq!(Precision::from_len(8), Some(Precision::ExtendedSquare));
    /// assert_eq!(Precision::from_len(7), None);
    /// assert_eq!(Precision::from_len(0), None);
    /// ```
    pub fn from_len(len: usize) -> Option<Precision> {
        if len.is_odd() {
            return None;
        }

        i32::try_from(len / 2)
            .ok()
            .and_then(|groups| Precision::try_from(groups).ok())
    }
}

impl TryFrom<i32> for Precision {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Precision::Field),
            2 => Ok(Precision::Square),
            3 => Ok(Precision::SubSquare),
            4 => Ok(Precision::ExtendedSquare),
            5 => Ok(Precision::ExtendedSubSquare),
            _ => Err(Error::InvalidPrecision(value)),
        }
    }
}

impl From<Precision> for i32 {
    fn from(value: Precision) -> Self {
        value as i32
    }
}

impl Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Precision::Field => "field",
            Precision::Square => "square",
            Precision::SubSquare => "subsquare",
            Precision::ExtendedSquare => "extended square",
            Precision::ExtendedSubSquare => "extended subsquare",
        };
        write!(f, "{name}")
    }
}

/// Computes the Maidenhead locator of `point` at the given precision.
///
/// # Errors
///
/// Returns [`Error::InvalidCoord`] if the latitude or longitude is NaN,
/// infinite, or out of range, or if the point lies on a pole.
///
/// # Usage
///
/// ```
/// use maidenhead::{Point, Precision};
///
/// let point = Point::new(48.14666, 11.60833);
///
/// assert_eq!(maidenhead::encode(&point, Precision::Square).unwrap(), "JN58");
/// assert_eq!(maidenhead::encode(&point, Precision::ExtendedSquare).unwrap(), "JN58TD25");
///
/// assert!(maidenhead::encode(&Point::new(90.0, 0.0), Precision::Field).is_err());
/// ```
pub fn encode(point: &Point, precision: Precision) -> Result<String, Error> {
    point.check_finite()?;
    if point.latitude.abs() == dms::QD {
        debug!("Rejecting polar point {point}");
        return Err(CoordError::Pole.into());
    }
    point.check_range()?;

    let mut lon = (point.longitude + dms::HD) / TIERS[0].lon_unit + EDGE_NUDGE;
    let mut lat = (point.latitude + dms::QD) / TIERS[0].lat_unit + EDGE_NUDGE;
    // Set once an axis overflows its tier, every finer digit is then the last cell
    let mut lon_edge = false;
    let mut lat_edge = false;
    let mut locator = String::with_capacity(precision.chars());

    for tier in &TIERS[..precision.groups()] {
        if tier.index > 0 {
            let radix = f64::from(tier.radix);
            lon = radix * lon.fract();
            lat = radix * lat.fract();
        }

        locator.push(tier.symbol.encode(cell(lon, tier.radix, &mut lon_edge)));
        locator.push(tier.symbol.encode(cell(lat, tier.radix, &mut lat_edge)));
    }

    trace!("Encoded {point} at {precision} precision as {locator}");

    Ok(locator)
}

/// Integer cell of a scaled coordinate. A value at or past `radix` (the
/// eastern or northern edge of the grid, or a carry lost to rounding) keeps
/// this and all finer cells at the last index.
fn cell(value: f64, radix: u32, edge: &mut bool) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cell = value.floor() as u32;
    if cell >= radix {
        *edge = true;
    }

    if *edge { radix - 1 } else { cell }
}

/// Computes the Maidenhead locator of `point` at [`Precision::SubSquare`],
/// the usual six character grid square.
///
/// # Errors
///
/// See [`encode`].
///
/// ```
/// use maidenhead::Point;
///
/// let point = Point::new(-34.91, -56.21166);
/// assert_eq!(maidenhead::grid_square(&point).unwrap(), "GF15VC");
/// ```
pub fn grid_square(point: &Point) -> Result<String, Error> {
    encode(point, Precision::SubSquare)
}

/// How a locator string is matched and which point of the cell is returned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    /// Require upper-case letters for the field and subsquare pairs and
    /// lower-case letters for the extended subsquare pair. Otherwise letters
    /// match in either case.
    pub strict: bool,
    /// Return the center of the cell rather than its southwest corner.
    pub centered: bool,
}

/// Parses a Maidenhead locator into a point.
///
/// # Errors
///
/// Returns [`Error::InvalidLocator`] if the locator is longer than ten
/// characters, has an odd length, or holds a character that does not belong
/// at its position. No point is produced on error.
///
/// # Usage
///
/// ```
/// use maidenhead::ParseOptions;
///
/// let corner = maidenhead::parse_with("JN58", ParseOptions::default()).unwrap();
/// assert_eq!(corner.latitude(), 48.0);
/// assert_eq!(corner.longitude(), 10.0);
///
/// let options = ParseOptions { strict: true, centered: true };
/// let center = maidenhead::parse_with("JN58", options).unwrap();
/// assert_eq!(center.latitude(), 48.5);
/// assert_eq!(center.longitude(), 11.0);
///
/// assert!(maidenhead::parse_with("jn58", options).is_err());
/// ```
pub fn parse_with(locator: &str, options: ParseOptions) -> Result<Point, Error> {
    let len = locator.len();

    if len > MAX_LOCATOR_LEN {
        debug!("Locator {locator:?} is {len} characters long");
        return Err(LocatorError::TooLong { len }.into());
    }

    if len.is_odd() {
        debug!("Locator {locator:?} has an odd length");
        return Err(LocatorError::OddLength.into());
    }

    // Longitude first, then latitude
    let mut lonlat = [-dms::HD, -dms::QD];

    for (offset, byte) in locator.bytes().enumerate() {
        let (group, slot) = offset.div_rem(&2);
        let tier = &TIERS[group];
        let index = tier
            .symbol
            .decode(byte, tier.radix, options.strict)
            .ok_or_else(|| {
                debug!(
                    "Character {:?} at offset {offset} of {locator:?} not valid in {} mode",
                    char::from(byte),
                    options.strict.ternary("strict", "permissive"),
                );
                LocatorError::InvalidChar { offset }
            })?;

        lonlat[slot] += f64::from(index) * tier.unit(slot);
    }

    if options.centered {
        // An empty locator names the whole grid
        let (lon_unit, lat_unit) = (len / 2)
            .checked_sub(1)
            .map_or((dms::TD, dms::HD), |last| (TIERS[last].lon_unit, TIERS[last].lat_unit));

        lonlat[0] += lon_unit / 2.0;
        lonlat[1] += lat_unit / 2.0;
    }

    let point = Point::new(lonlat[1], lonlat[0]);
    trace!("Parsed {locator:?} with {options:?} as {point}");

    Ok(point)
}

/// Parses a locator with permissive matching, returning the southwest corner
/// of its cell.
///
/// # Errors
///
/// See [`parse_with`].
///
/// ```
/// let point = maidenhead::parse("jn58td").unwrap();
/// assert_eq!(maidenhead::grid_square(&point).unwrap(), "JN58TD");
/// ```
pub fn parse(locator: &str) -> Result<Point, Error> {
    parse_with(locator, ParseOptions { strict: false, centered: false })
}

/// Parses a locator with strict matching, returning the southwest corner of
/// its cell.
///
/// # Errors
///
/// See [`parse_with`].
///
/// ```
/// assert!(maidenhead::parse_strict("JN58TD25ad").is_ok());
/// assert!(maidenhead::parse_strict("JN58td").is_err());
/// ```
pub fn parse_strict(locator: &str) -> Result<Point, Error> {
    parse_with(locator, ParseOptions { strict: true, centered: false })
}

/// Parses a locator with permissive matching, returning the center of its
/// cell.
///
/// # Errors
///
/// See [`parse_with`].
pub fn parse_centered(locator: &str) -> Result<Point, Error> {
    parse_with(locator, ParseOptions { strict: false, centered: true })
}

/// Parses a locator with strict matching, returning the center of its cell.
///
/// # Errors
///
/// See [`parse_with`].
pub fn parse_strict_centered(locator: &str) -> Result<Point, Error> {
    parse_with(locator, ParseOptions { strict: true, centered: true })
}
