//! Typed coordinate points and the transforms between them
//!
//! Every curvilinear system converts through Cartesian form. Angles are
//! always expressed in degrees at this level.

pub mod angle;
pub mod cartesian;
pub mod cylindrical;
pub mod polar;
pub mod spherical;

pub use angle::Angle;
pub use cartesian::{Cartesian2, Cartesian3};
pub use cylindrical::Cylindrical;
pub use polar::Polar;
pub use spherical::Spherical;
