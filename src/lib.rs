//! Coordconv: conversions between Cartesian, polar, spherical and cylindrical
//! coordinate systems
//!
//! The crate is split into a pure computational core and a thin presentation
//! layer:
//!
//! - [`coordinates`] holds the typed points and the closed-form transforms
//! - [`transform`] exposes the six transforms as tuple functions
//! - [`conversion`] selects a transform for a [`ConversionMode`] and renders it
//! - [`format`] renders numbers at a fixed [`Precision`]
//! - [`shell`] models the input form a front end drives
//!
//! ```rust
//! use coordconv::{convert, ConversionMode, Precision};
//!
//! let text = convert(ConversionMode::CartesianToPolar, 1.0, 1.0, None, Precision::default()).unwrap();
//! assert_eq!(text, "r = 1.41, θ = 45.00");
//! ```

pub mod constants;
pub mod conversion;
pub mod coordinates;
pub mod error;
pub mod format;
pub mod shell;
pub mod transform;

// Re-export commonly used types
pub use conversion::{convert, ConversionMode, ConversionResult};
pub use coordinates::{Cartesian2, Cartesian3, Cylindrical, Polar, Spherical};
pub use error::{ConvertError, Result};
pub use format::{format_number, Precision};
