use std::f64::consts::PI;

use crate::ThisOrThat;

pub mod dms {
    /// Degrees per quarter turn
    pub const QD: f64 = 90.0;
    /// Degrees per half turn
    pub const HD: f64 = 2.0 * QD;
    /// Degrees per turn
    pub const TD: f64 = 2.0 * HD;
}

pub(crate) trait GeoMath {
    fn fold(&self, bound: Self, step: Self) -> Self;
    fn atan_ratio(&self, denom: Self) -> Self;
}

impl GeoMath for f64 {
    /// Shifts the value by whole multiples of `step` until it lies within
    /// `[-bound, bound]`, approaching from the side it started on.
    fn fold(&self, bound: f64, step: f64) -> f64 {
        if *self > bound {
            *self - step * ((*self - bound) / step).ceil()
        } else if *self < -bound {
            *self + step * ((-bound - *self) / step).ceil()
        } else {
            *self
        }
    }

    /// Angle in `[0, PI]` whose tangent is `self / denom`, taking the
    /// quadrant from the sign of `denom`.
    fn atan_ratio(&self, denom: f64) -> f64 {
        let angle = (*self / denom).abs().atan();
        (denom < 0.0).ternary(PI - angle, angle)
    }
}

/// Central angle in radians between two points given in radians, via the
/// spherical law of cosines.
pub(crate) fn central_angle(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let co = (lon1 - lon2).cos() * lat1.cos() * lat2.cos() + lat1.sin() * lat2.sin();
    // Rounding can push |co| past 1
    let si = (1.0 - co * co).max(0.0).sqrt();

    si.atan_ratio(co)
}
