//! Spherical coordinates (physics convention)
//!
//! `θ` is the azimuth in the xy-plane and `φ` the inclination measured from
//! the +z axis, both in degrees.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::angle::Angle;
use super::cartesian::Cartesian3;

/// A point given by radius, azimuth and inclination
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spherical {
    /// Distance from the origin
    pub r: f64,
    /// Azimuth in degrees
    pub theta: f64,
    /// Inclination from +z in degrees
    pub phi: f64,
}

impl Spherical {
    pub fn new(r: f64, theta: f64, phi: f64) -> Self {
        Spherical { r, theta, phi }
    }

    /// Converts to Cartesian coordinates
    ///
    /// # Mathematical Conversion
    ///
    /// - `x = r · sin φ · cos θ`
    /// - `y = r · sin φ · sin θ`
    /// - `z = r · cos φ`
    pub fn to_cartesian(&self) -> Cartesian3 {
        let (sin_t, cos_t) = Angle::from_degrees(self.theta).sin_cos();
        let (sin_p, cos_p) = Angle::from_degrees(self.phi).sin_cos();
        let direction = Vector3::new(sin_p * cos_t, sin_p * sin_t, cos_p);
        Cartesian3::from_vector(&(direction * self.r))
    }
}

impl From<(f64, f64, f64)> for Spherical {
    fn from((r, theta, phi): (f64, f64, f64)) -> Self {
        Spherical::new(r, theta, phi)
    }
}

impl From<Spherical> for (f64, f64, f64) {
    fn from(s: Spherical) -> Self {
        (s.r, s.theta, s.phi)
    }
}
