//! # Angle Representation Module
//!
//! Angles enter and leave the converter in degrees, while the trigonometry
//! runs in radians. `Angle` keeps whichever unit a value was created in and
//! converts only when the other one is requested, so a degree value typed by
//! the user is echoed back unchanged.
//!
//! ## Azimuth Range
//!
//! Azimuths produced by `atan2` are reported in the half-open range
//! (−180°, 180°]. [`Angle::azimuth_degrees`] folds any angle into that range;
//! values already inside it are returned untouched.
//!
//! ## Examples
//!
//! ```rust
//! use coordconv::coordinates::angle::Angle;
//!
//! let angle = Angle::from_degrees(45.0);
//! assert_eq!(angle.to_degrees(), 45.0);
//!
//! // atan2(-0.0, -1.0) is -π; as an azimuth it is reported as +180°
//! let west = Angle::from_radians((-0.0f64).atan2(-1.0));
//! assert_eq!(west.azimuth_degrees(), 180.0);
//! ```

use crate::constants::{DEG2RAD, FULL_TURN_DEG, HALF_TURN_DEG, RAD2DEG};

/// Internal representation format for angle values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleFormat {
    /// Angle stored in degrees
    Degrees(f64),
    /// Angle stored in radians
    Radians(f64),
}

/// An angular measurement stored in the unit it was created with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    angle: AngleFormat,
}

impl Angle {
    /// Creates an angle from a value in degrees
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            angle: AngleFormat::Degrees(degrees),
        }
    }

    /// Creates an angle from a value in radians
    pub fn from_radians(radians: f64) -> Self {
        Angle {
            angle: AngleFormat::Radians(radians),
        }
    }

    /// Direction of the vector `(x, y)` measured from +x toward +y
    ///
    /// The origin yields 0, matching `atan2(0, 0)`.
    pub fn from_xy(x: f64, y: f64) -> Self {
        Angle::from_radians(y.atan2(x))
    }

    /// Returns the angle value in degrees
    ///
    /// Degree-backed angles return their stored value exactly.
    pub fn to_degrees(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg,
            AngleFormat::Radians(rad) => rad * RAD2DEG,
        }
    }

    /// Returns the angle value in radians
    pub fn to_radians(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg * DEG2RAD,
            AngleFormat::Radians(rad) => rad,
        }
    }

    /// Sine and cosine of the angle, in that order
    pub fn sin_cos(&self) -> (f64, f64) {
        self.to_radians().sin_cos()
    }

    /// The angle in degrees, folded into (−180, 180]
    ///
    /// Non-finite angles are passed through as NaN.
    pub fn azimuth_degrees(&self) -> f64 {
        let deg = self.to_degrees();
        if deg > -HALF_TURN_DEG && deg <= HALF_TURN_DEG {
            return deg;
        }
        let wrapped = deg.rem_euclid(FULL_TURN_DEG);
        if wrapped > HALF_TURN_DEG {
            wrapped - FULL_TURN_DEG
        } else {
            wrapped
        }
    }

    /// Returns the internal format of this angle
    pub fn format(&self) -> AngleFormat {
        self.angle
    }
}
