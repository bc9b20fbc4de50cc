//! Cylindrical coordinates

use serde::{Deserialize, Serialize};

use super::cartesian::Cartesian3;
use super::polar::Polar;

/// A point given by axial distance, azimuth and height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cylindrical {
    /// Distance from the z-axis
    pub r: f64,
    /// Azimuth in degrees
    pub theta: f64,
    /// Height along the z-axis
    pub z: f64,
}

impl Cylindrical {
    pub fn new(r: f64, theta: f64, z: f64) -> Self {
        Cylindrical { r, theta, z }
    }

    /// Converts to Cartesian coordinates; `(r, θ)` is treated as a planar
    /// polar point and `z` is copied unchanged
    pub fn to_cartesian(&self) -> Cartesian3 {
        let planar = Polar::new(self.r, self.theta).to_cartesian();
        Cartesian3 {
            x: planar.x,
            y: planar.y,
            z: self.z,
        }
    }
}

impl From<(f64, f64, f64)> for Cylindrical {
    fn from((r, theta, z): (f64, f64, f64)) -> Self {
        Cylindrical::new(r, theta, z)
    }
}

impl From<Cylindrical> for (f64, f64, f64) {
    fn from(c: Cylindrical) -> Self {
        (c.r, c.theta, c.z)
    }
}
