use std::{f64::consts::TAU, fmt::Display};

use crate::{
    compass::CompassPoint,
    constants::EARTH_RADIUS_KM,
    locator::{self, Precision},
    utility::{central_angle, dms, GeoMath},
    CoordError, Error, ParseCoord,
};

/// A latitude/longitude position in degrees. Can be encoded to and parsed
/// from a Maidenhead locator.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl Point {
    /// Creates a point without checking its bounds. Out of range values are
    /// reported when the point is encoded.
    pub fn new(lat: f64, lon: f64) -> Point {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a point from a lat/lon pair. First checks if the
    /// values are valid:
    /// * Neither value may be NaN or infinite
    /// * Latitude must be in range [-90,90]
    /// * Longitude must be in range [-180,180]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use maidenhead::Point;
    ///
    /// let coord = Point::create(48.14666, 11.60833).unwrap();
    ///
    /// assert_eq!(coord.latitude(), 48.14666);
    /// assert_eq!(coord.longitude(), 11.60833);
    ///
    /// assert!(Point::create(100.0, 0.0).is_err());
    /// assert!(Point::create(0.0, -200.0).is_err());
    /// assert!(Point::create(f64::NAN, 0.0).is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<Point, Error> {
        let point = Point::new(lat, lon);
        point.check_finite()?;
        point.check_range()?;

        Ok(point)
    }

    pub(crate) fn check_finite(&self) -> Result<(), CoordError> {
        if self.latitude.is_nan() {
            Err(CoordError::LatitudeNan)
        } else if self.latitude.is_infinite() {
            Err(CoordError::LatitudeInfinite)
        } else if self.longitude.is_nan() {
            Err(CoordError::LongitudeNan)
        } else if self.longitude.is_infinite() {
            Err(CoordError::LongitudeInfinite)
        } else {
            Ok(())
        }
    }

    pub(crate) fn check_range(&self) -> Result<(), CoordError> {
        if self.latitude.abs() > dms::QD {
            Err(CoordError::Latitude(self.latitude))
        } else if self.longitude.abs() > dms::HD {
            Err(CoordError::Longitude(self.longitude))
        } else {
            Ok(())
        }
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether the current point is in the northern hemisphere.
    pub fn is_north(&self) -> bool {
        self.latitude.is_sign_positive()
    }

    /// Returns whether both points name the same location.
    ///
    /// The latitude difference is folded into [-180, 180] by whole turns and
    /// the longitude difference into [-90, 90] by quarter turns before both
    /// are compared against exactly zero. The ranges are swapped relative to
    /// the coordinate ranges, so latitudes a full turn apart compare equal
    /// while longitudes a full turn apart do not.
    ///
    /// ```
    /// use maidenhead::Point;
    ///
    /// let a = Point::new(10.0, 20.0);
    ///
    /// assert!(a.equal_to(&Point::new(10.0, 20.0)));
    /// assert!(a.equal_to(&Point::new(370.0, 20.0)));
    /// assert!(!a.equal_to(&Point::new(10.0, 380.0)));
    /// assert!(!a.equal_to(&Point::new(10.0, 20.5)));
    /// ```
    pub fn equal_to(&self, other: &Point) -> bool {
        let dlat = (self.latitude - other.latitude).fold(dms::HD, dms::TD);
        let dlon = (self.longitude - other.longitude).fold(dms::QD, dms::QD);

        dlat == 0.0 && dlon == 0.0
    }

    /// Returns the approximate great-circle distance in kilometers to
    /// `other`, on a sphere of radius 6371 km.
    ///
    /// ```
    /// use maidenhead::Point;
    ///
    /// let equator = Point::new(0.0, 0.0);
    /// let quarter = Point::new(0.0, 90.0);
    ///
    /// assert!((equator.distance(&quarter) - 6371.0 * std::f64::consts::FRAC_PI_2).abs() < 1e-6);
    /// assert_eq!(equator.distance(&equator), 0.0);
    /// ```
    pub fn distance(&self, other: &Point) -> f64 {
        EARTH_RADIUS_KM * central_angle(
            self.latitude.to_radians(),
            self.longitude.to_radians(),
            other.latitude.to_radians(),
            other.longitude.to_radians(),
        )
    }

    /// Returns the approximate initial bearing in degrees, within [0, 360),
    /// from this point towards `heading`.
    ///
    /// The bearing is NaN when no direction can be derived, such as from a
    /// point on the equator to itself.
    ///
    /// ```
    /// use maidenhead::Point;
    ///
    /// let munich = Point::new(48.14666, 11.60833);
    /// let bearing = munich.bearing(&Point::new(0.0, 0.0));
    ///
    /// assert_eq!(bearing.floor(), 195.0);
    /// ```
    pub fn bearing(&self, heading: &Point) -> f64 {
        let hn = self.latitude.to_radians();
        let he = self.longitude.to_radians();
        let n = heading.latitude.to_radians();
        let e = heading.longitude.to_radians();

        let ca = central_angle(hn, he, n, e);

        let si = (e - he).sin() * n.cos() * hn.cos();
        let co = n.sin() - hn.sin() * ca.cos();

        let mut az = si.atan_ratio(co);
        if si < 0.0 {
            az = -az;
        }
        if az < 0.0 {
            az += TAU;
        }

        az.to_degrees()
    }

    /// Returns the compass point nearest to the bearing towards `heading`,
    /// or `None` when the bearing is undefined.
    ///
    /// ```
    /// use maidenhead::{CompassPoint, Point};
    ///
    /// let washington = Point::new(38.92, -77.065);
    ///
    /// assert_eq!(washington.compass_bearing(&Point::new(0.0, 0.0)), Some(CompassPoint::E));
    ///
    /// let origin = Point::new(0.0, 0.0);
    /// assert_eq!(origin.compass_bearing(&origin), None);
    /// ```
    pub fn compass_bearing(&self, heading: &Point) -> Option<CompassPoint> {
        CompassPoint::from_bearing(self.bearing(heading))
    }

    /// Computes the Maidenhead locator for this point.
    ///
    /// # Errors
    ///
    /// See [`locator::encode`].
    pub fn locator(&self, precision: Precision) -> Result<String, Error> {
        locator::encode(self, precision)
    }

    /// Computes the six character Maidenhead grid square for this point.
    ///
    /// # Errors
    ///
    /// See [`locator::encode`].
    ///
    /// ```
    /// use maidenhead::Point;
    ///
    /// assert_eq!(Point::new(38.92, -77.065).grid_square().unwrap(), "FM18LW");
    /// ```
    pub fn grid_square(&self) -> Result<String, Error> {
        locator::grid_square(self)
    }
}

impl ParseCoord for Point {
    fn parse_coord(value: &str) -> Result<Self, Error> {
        locator::parse(value)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}
