//! Planar polar coordinates

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::angle::Angle;
use super::cartesian::Cartesian2;

/// A point in the plane given by radius and azimuth
///
/// A negative `r` is accepted and mirrors the point through the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    /// Distance from the origin
    pub r: f64,
    /// Azimuth in degrees, measured from +x toward +y
    pub theta: f64,
}

impl Polar {
    pub fn new(r: f64, theta: f64) -> Self {
        Polar { r, theta }
    }

    /// Converts to Cartesian coordinates, `x = r·cos θ`, `y = r·sin θ`
    pub fn to_cartesian(&self) -> Cartesian2 {
        let (sin_t, cos_t) = Angle::from_degrees(self.theta).sin_cos();
        Cartesian2::from_vector(&(Vector2::new(cos_t, sin_t) * self.r))
    }
}

impl From<(f64, f64)> for Polar {
    fn from((r, theta): (f64, f64)) -> Self {
        Polar::new(r, theta)
    }
}

impl From<Polar> for (f64, f64) {
    fn from(p: Polar) -> Self {
        (p.r, p.theta)
    }
}
