//! # Cartesian Coordinate System Module
//!
//! Cartesian points are the hub of every conversion: each of the curvilinear
//! systems converts to and from Cartesian form, never directly to another
//! curvilinear system.
//!
//! ## Coordinate System Convention
//!
//! - **X-axis**: azimuth θ = 0°
//! - **Y-axis**: azimuth θ = 90°
//! - **Z-axis**: inclination φ = 0° (spherical) and the cylinder axis
//!
//! ## Examples
//!
//! ```rust
//! use coordconv::coordinates::cartesian::{Cartesian2, Cartesian3};
//!
//! let polar = Cartesian2::new(3.0, 4.0).to_polar();
//! assert_eq!(polar.r, 5.0);
//!
//! let spherical = Cartesian3::new(0.0, 0.0, 5.0).to_spherical().unwrap();
//! assert_eq!((spherical.r, spherical.theta, spherical.phi), (5.0, 0.0, 0.0));
//! ```

use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

use super::angle::Angle;
use super::cylindrical::Cylindrical;
use super::polar::Polar;
use super::spherical::Spherical;
use crate::error::{ConvertError, Result};

/// Two-dimensional Cartesian point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cartesian2 {
    /// X-component
    pub x: f64,
    /// Y-component
    pub y: f64,
}

impl Cartesian2 {
    /// Creates a new 2D Cartesian point
    pub fn new(x: f64, y: f64) -> Self {
        Cartesian2 { x, y }
    }

    /// Euclidean distance from the origin, `sqrt(x² + y²)`
    ///
    /// Computed with `hypot`, so it neither overflows nor underflows for
    /// finite components.
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Converts to polar coordinates
    ///
    /// # Mathematical Conversion
    ///
    /// - `r = sqrt(x² + y²)`
    /// - `θ = atan2(y, x)` in degrees, within (−180, 180]
    ///
    /// The origin maps to `r = 0, θ = 0`.
    pub fn to_polar(&self) -> Polar {
        Polar {
            r: self.magnitude(),
            theta: Angle::from_xy(self.x, self.y).azimuth_degrees(),
        }
    }

    /// Converts to an nalgebra vector
    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Creates a point from an nalgebra vector
    pub fn from_vector(v: &Vector2<f64>) -> Self {
        Cartesian2 { x: v[0], y: v[1] }
    }
}

impl From<(f64, f64)> for Cartesian2 {
    fn from((x, y): (f64, f64)) -> Self {
        Cartesian2::new(x, y)
    }
}

impl From<Cartesian2> for (f64, f64) {
    fn from(p: Cartesian2) -> Self {
        (p.x, p.y)
    }
}

/// Three-dimensional Cartesian point
///
/// # Storage Strategy
///
/// - Each component stored as `f64`
/// - No normalization; the exact input values are kept
/// - Compatible with nalgebra `Vector3` for linear algebra operations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cartesian3 {
    /// X-component
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component (cylinder axis)
    pub z: f64,
}

impl Cartesian3 {
    /// Creates a new 3D Cartesian point
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coordconv::coordinates::cartesian::Cartesian3;
    ///
    /// let coord = Cartesian3::new(1.0, 2.0, 3.0);
    /// assert_eq!(coord.z, 3.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// Euclidean distance from the origin, `sqrt(x² + y² + z²)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coordconv::coordinates::cartesian::Cartesian3;
    ///
    /// assert_eq!(Cartesian3::new(0.0, 3.0, 4.0).magnitude(), 5.0);
    /// assert_eq!(Cartesian3::new(1e200, 0.0, 0.0).magnitude(), 1e200);
    /// ```
    pub fn magnitude(&self) -> f64 {
        self.axial_distance().hypot(self.z)
    }

    /// Distance from the z-axis, `sqrt(x² + y²)`
    pub fn axial_distance(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Converts to spherical coordinates
    ///
    /// # Mathematical Conversion
    ///
    /// - `r = sqrt(x² + y² + z²)`
    /// - `θ = atan2(y, x)` in degrees, within (−180, 180]
    /// - `φ = acos(z / r)` in degrees, within [0, 180]
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::DivisionByZero`] for the origin, where `z / r`
    /// is undefined.
    pub fn to_spherical(&self) -> Result<Spherical> {
        let r = self.magnitude();
        if r == 0.0 {
            return Err(ConvertError::DivisionByZero);
        }

        // hypot rounding can leave |z / r| a hair above 1
        let cos_phi = (self.z / r).clamp(-1.0, 1.0);

        Ok(Spherical {
            r,
            theta: Angle::from_xy(self.x, self.y).azimuth_degrees(),
            phi: Angle::from_radians(cos_phi.acos()).to_degrees(),
        })
    }

    /// Converts to cylindrical coordinates
    ///
    /// `r` and `θ` follow the 2D polar conversion of `(x, y)`; `z` is copied.
    pub fn to_cylindrical(&self) -> Cylindrical {
        Cylindrical {
            r: self.axial_distance(),
            theta: Angle::from_xy(self.x, self.y).azimuth_degrees(),
            z: self.z,
        }
    }

    /// Converts to an nalgebra vector
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates a point from an nalgebra vector
    pub fn from_vector(v: &Vector3<f64>) -> Self {
        Cartesian3 {
            x: v[0],
            y: v[1],
            z: v[2],
        }
    }
}

impl From<(f64, f64, f64)> for Cartesian3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Cartesian3::new(x, y, z)
    }
}

impl From<Cartesian3> for (f64, f64, f64) {
    fn from(p: Cartesian3) -> Self {
        (p.x, p.y, p.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_of_unit_diagonal() {
        let polar = Cartesian2::new(1.0, 1.0).to_polar();
        assert!((polar.r - 2f64.sqrt()).abs() < 1e-15);
        assert!((polar.theta - 45.0).abs() < 1e-12);
    }

    #[test]
    fn test_polar_of_origin() {
        let polar = Cartesian2::new(0.0, 0.0).to_polar();
        assert_eq!(polar.r, 0.0);
        assert_eq!(polar.theta, 0.0);
    }

    #[test]
    fn test_polar_negative_x_axis_is_180() {
        assert_eq!(Cartesian2::new(-1.0, 0.0).to_polar().theta, 180.0);
        assert_eq!(Cartesian2::new(-1.0, -0.0).to_polar().theta, 180.0);
    }

    #[test]
    fn test_spherical_of_origin_is_error() {
        let result = Cartesian3::new(0.0, 0.0, 0.0).to_spherical();
        assert_eq!(result, Err(ConvertError::DivisionByZero));
    }

    #[test]
    fn test_spherical_on_negative_z_axis() {
        let s = Cartesian3::new(0.0, 0.0, -2.0).to_spherical().unwrap();
        assert_eq!(s.r, 2.0);
        assert_eq!(s.theta, 0.0);
        assert!((s.phi - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_spherical_in_xy_plane() {
        let s = Cartesian3::new(0.0, 3.0, 0.0).to_spherical().unwrap();
        assert_eq!(s.r, 3.0);
        assert!((s.theta - 90.0).abs() < 1e-12);
        assert!((s.phi - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_spherical_nan_flows_through() {
        let s = Cartesian3::new(f64::NAN, 1.0, 1.0).to_spherical().unwrap();
        assert!(s.r.is_nan());
        assert!(s.phi.is_nan());
    }

    #[test]
    fn test_cylindrical_keeps_z() {
        let c = Cartesian3::new(3.0, 4.0, 7.0).to_cylindrical();
        assert_eq!(c.r, 5.0);
        assert!((c.theta - 53.130_102_354_155_98).abs() < 1e-10);
        assert_eq!(c.z, 7.0);
    }

    #[test]
    fn test_cylindrical_on_axis() {
        let c = Cartesian3::new(0.0, 0.0, -4.0).to_cylindrical();
        assert_eq!((c.r, c.theta, c.z), (0.0, 0.0, -4.0));
    }

    #[test]
    fn test_vector_conversions() {
        let p = Cartesian3::new(1.0, -2.0, 3.5);
        let v = p.to_vector();
        assert!((v.norm() - p.magnitude()).abs() < 1e-12);
        assert_eq!(Cartesian3::from_vector(&v), p);

        let q = Cartesian2::new(-6.0, 8.0);
        assert_eq!(q.to_vector().norm(), 10.0);
        assert_eq!(Cartesian2::from_vector(&q.to_vector()), q);
    }

    #[test]
    fn test_large_components_do_not_overflow() {
        let polar = Cartesian2::new(1e200, 1e200).to_polar();
        assert!((polar.r / (2f64.sqrt() * 1e200) - 1.0).abs() < 1e-15);
        assert!((polar.theta - 45.0).abs() < 1e-12);

        let s = Cartesian3::new(1e200, 0.0, 1e200).to_spherical().unwrap();
        assert!(s.r.is_finite());
        assert!((s.theta - 0.0).abs() < 1e-12);
        assert!((s.phi - 45.0).abs() < 1e-12);
    }

    #[test]
    fn test_tiny_components_do_not_underflow() {
        let polar = Cartesian2::new(3e-200, 4e-200).to_polar();
        assert!((polar.r / 5e-200 - 1.0).abs() < 1e-15);

        let s = Cartesian3::new(0.0, 3e-200, 4e-200).to_spherical().unwrap();
        assert!((s.r / 5e-200 - 1.0).abs() < 1e-15);
        assert!((s.theta - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_axial_distance_is_cylindrical_radius() {
        let p = Cartesian3::new(-6.0, 8.0, 1e300);
        assert_eq!(p.axial_distance(), 10.0);
        assert_eq!(p.to_cylindrical().r, p.axial_distance());
        assert_eq!(p.magnitude(), 1e300);
    }

    #[test]
    fn test_tuple_conversions() {
        let p: Cartesian3 = (1.0, 2.0, 3.0).into();
        let t: (f64, f64, f64) = p.into();
        assert_eq!(t, (1.0, 2.0, 3.0));
    }
}
