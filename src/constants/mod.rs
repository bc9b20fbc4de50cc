//! Constants shared by the converter and its front ends

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Degrees in a full turn
pub const FULL_TURN_DEG: f64 = 360.0;
/// Upper bound of the azimuth range (−180, 180]
pub const HALF_TURN_DEG: f64 = 180.0;

// Output precision
/// Fewest decimals the converter renders
pub const PRECISION_MIN: u8 = 1;
/// Most decimals the converter renders
pub const PRECISION_MAX: u8 = 10;
/// Decimals used when none are chosen
pub const PRECISION_DEFAULT: u8 = 2;

// Inputs
/// Value of the third component when it is omitted or unused
pub const OPTIONAL_COMPONENT_DEFAULT: f64 = 0.0;
