//! The six coordinate transforms as plain tuple functions
//!
//! These mirror the typed methods in [`crate::coordinates`] for callers that
//! work with bare `f64` tuples. Angles are in degrees throughout.
//!
//! | Function | Input | Output |
//! |---|---|---|
//! | [`cartesian_to_polar`] | (x, y) | (r, θ) |
//! | [`polar_to_cartesian`] | (r, θ) | (x, y) |
//! | [`cartesian_to_spherical`] | (x, y, z) | (r, θ, φ) |
//! | [`spherical_to_cartesian`] | (r, θ, φ) | (x, y, z) |
//! | [`cartesian_to_cylindrical`] | (x, y, z) | (r, θ, z) |
//! | [`cylindrical_to_cartesian`] | (r, θ, z) | (x, y, z) |

use crate::coordinates::{Cartesian2, Cartesian3, Cylindrical, Polar, Spherical};
use crate::error::Result;

/// `(x, y)` to `(r, θ)` with θ in (−180, 180]
#[inline]
pub fn cartesian_to_polar(x: f64, y: f64) -> (f64, f64) {
    Cartesian2::new(x, y).to_polar().into()
}

/// `(r, θ)` to `(x, y)`
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> (f64, f64) {
    Polar::new(r, theta).to_cartesian().into()
}

/// `(x, y, z)` to `(r, θ, φ)`
///
/// # Errors
///
/// [`crate::ConvertError::DivisionByZero`] when `x = y = z = 0`.
#[inline]
pub fn cartesian_to_spherical(x: f64, y: f64, z: f64) -> Result<(f64, f64, f64)> {
    Ok(Cartesian3::new(x, y, z).to_spherical()?.into())
}

/// `(r, θ, φ)` to `(x, y, z)`
#[inline]
pub fn spherical_to_cartesian(r: f64, theta: f64, phi: f64) -> (f64, f64, f64) {
    Spherical::new(r, theta, phi).to_cartesian().into()
}

/// `(x, y, z)` to `(r, θ, z)`
#[inline]
pub fn cartesian_to_cylindrical(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    Cartesian3::new(x, y, z).to_cylindrical().into()
}

/// `(r, θ, z)` to `(x, y, z)`
#[inline]
pub fn cylindrical_to_cartesian(r: f64, theta: f64, z: f64) -> (f64, f64, f64) {
    Cylindrical::new(r, theta, z).to_cartesian().into()
}
