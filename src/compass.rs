use std::fmt::Display;

use crate::utility::dms;

/// Width in degrees of one compass sector
const SECTOR: f64 = dms::TD / 16.0;

/// The sixteen points of the compass rose, clockwise from north.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompassPoint {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

/// Half the width of a sector
const HALF: f64 = SECTOR / 2.0;

// Inclusive [start, end] bins, searched in order. North is split across
// both ends of the circle.
const BINS: [(CompassPoint, f64, f64); 17] = [
    (CompassPoint::N, 0.0, HALF),
    (CompassPoint::NNE, 1.0 * SECTOR - HALF, 1.0 * SECTOR + HALF),
    (CompassPoint::NE, 2.0 * SECTOR - HALF, 2.0 * SECTOR + HALF),
    (CompassPoint::ENE, 3.0 * SECTOR - HALF, 3.0 * SECTOR + HALF),
    (CompassPoint::E, 4.0 * SECTOR - HALF, 4.0 * SECTOR + HALF),
    (CompassPoint::ESE, 5.0 * SECTOR - HALF, 5.0 * SECTOR + HALF),
    (CompassPoint::SE, 6.0 * SECTOR - HALF, 6.0 * SECTOR + HALF),
    (CompassPoint::SSE, 7.0 * SECTOR - HALF, 7.0 * SECTOR + HALF),
    (CompassPoint::S, 8.0 * SECTOR - HALF, 8.0 * SECTOR + HALF),
    (CompassPoint::SSW, 9.0 * SECTOR - HALF, 9.0 * SECTOR + HALF),
    (CompassPoint::SW, 10.0 * SECTOR - HALF, 10.0 * SECTOR + HALF),
    (CompassPoint::WSW, 11.0 * SECTOR - HALF, 11.0 * SECTOR + HALF),
    (CompassPoint::W, 12.0 * SECTOR - HALF, 12.0 * SECTOR + HALF),
    (CompassPoint::WNW, 13.0 * SECTOR - HALF, 13.0 * SECTOR + HALF),
    (CompassPoint::NW, 14.0 * SECTOR - HALF, 14.0 * SECTOR + HALF),
    (CompassPoint::NNW, 15.0 * SECTOR - HALF, 15.0 * SECTOR + HALF),
    (CompassPoint::N, dms::TD - HALF, dms::TD),
];

impl CompassPoint {
    /// Maps a bearing in degrees to its compass point. Bearings outside
    /// `[0, 360]` are first brought into range by whole turns. A bearing
    /// sitting exactly on a sector edge belongs to the sector before it.
    ///
    /// Returns `None` for a NaN bearing.
    ///
    /// # Example
    ///
    /// ```
    /// use maidenhead::CompassPoint;
    ///
    /// assert_eq!(CompassPoint::from_bearing(0.0), Some(CompassPoint::N));
    /// assert_eq!(CompassPoint::from_bearing(11.25), Some(CompassPoint::N));
    /// assert_eq!(CompassPoint::from_bearing(200.0), Some(CompassPoint::SSW));
    /// assert_eq!(CompassPoint::from_bearing(-90.0), Some(CompassPoint::W));
    /// assert_eq!(CompassPoint::from_bearing(f64::NAN), None);
    /// ```
    pub fn from_bearing(bearing: f64) -> Option<CompassPoint> {
        let bearing = if bearing < 0.0 {
            bearing + dms::TD * (-bearing / dms::TD).ceil()
        } else if bearing > dms::TD {
            bearing - dms::TD * ((bearing - dms::TD) / dms::TD).ceil()
        } else {
            bearing
        };

        BINS
            .iter()
            .find(|(_, start, end)| (*start..=*end).contains(&bearing))
            .map(|(point, _, _)| *point)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::NNE => "NNE",
            CompassPoint::NE => "NE",
            CompassPoint::ENE => "ENE",
            CompassPoint::E => "E",
            CompassPoint::ESE => "ESE",
            CompassPoint::SE => "SE",
            CompassPoint::SSE => "SSE",
            CompassPoint::S => "S",
            CompassPoint::SSW => "SSW",
            CompassPoint::SW => "SW",
            CompassPoint::WSW => "WSW",
            CompassPoint::W => "W",
            CompassPoint::WNW => "WNW",
            CompassPoint::NW => "NW",
            CompassPoint::NNW => "NNW",
        }
    }
}

impl Display for CompassPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
