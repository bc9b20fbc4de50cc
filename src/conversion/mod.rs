//! Conversion modes and the dispatch from a mode to its transform
//!
//! A [`ConversionMode`] names one of the six directions. [`ConversionMode::apply`]
//! runs the matching transform and returns a labelled [`ConversionResult`];
//! [`convert`] additionally renders it as
//! `"<label1> = <v1>, <label2> = <v2>[, <label3> = <v3>]"`.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::OPTIONAL_COMPONENT_DEFAULT;
use crate::coordinates::{Cartesian2, Cartesian3, Cylindrical, Polar, Spherical};
use crate::error::{ConvertError, Result};
use crate::format::{format_number, Precision};

/// Direction of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionMode {
    CartesianToPolar,
    PolarToCartesian,
    CartesianToSpherical,
    SphericalToCartesian,
    CartesianToCylindrical,
    CylindricalToCartesian,
}

impl ConversionMode {
    /// All modes in selector order
    pub const ALL: [ConversionMode; 6] = [
        ConversionMode::CartesianToPolar,
        ConversionMode::PolarToCartesian,
        ConversionMode::CartesianToSpherical,
        ConversionMode::SphericalToCartesian,
        ConversionMode::CartesianToCylindrical,
        ConversionMode::CylindricalToCartesian,
    ];

    /// Looks a mode up by its position in [`ConversionMode::ALL`]
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| ConvertError::UnknownMode(index.to_string()))
    }

    /// Position of this mode in [`ConversionMode::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kebab-case identifier, e.g. `cartesian-to-polar`
    pub fn slug(self) -> &'static str {
        match self {
            ConversionMode::CartesianToPolar => "cartesian-to-polar",
            ConversionMode::PolarToCartesian => "polar-to-cartesian",
            ConversionMode::CartesianToSpherical => "cartesian-to-spherical",
            ConversionMode::SphericalToCartesian => "spherical-to-cartesian",
            ConversionMode::CartesianToCylindrical => "cartesian-to-cylindrical",
            ConversionMode::CylindricalToCartesian => "cylindrical-to-cartesian",
        }
    }

    /// Selector entry shown to the user
    pub fn title(self) -> &'static str {
        match self {
            ConversionMode::CartesianToPolar => "Cartesian -> Polar (2D)",
            ConversionMode::PolarToCartesian => "Polar -> Cartesian (2D)",
            ConversionMode::CartesianToSpherical => "Cartesian -> Spherical (3D)",
            ConversionMode::SphericalToCartesian => "Spherical -> Cartesian (3D)",
            ConversionMode::CartesianToCylindrical => "Cartesian -> Cylindrical (3D)",
            ConversionMode::CylindricalToCartesian => "Cylindrical -> Cartesian (3D)",
        }
    }

    /// Number of components on each side of the conversion
    pub fn dimension(self) -> usize {
        match self {
            ConversionMode::CartesianToPolar | ConversionMode::PolarToCartesian => 2,
            _ => 3,
        }
    }

    /// Component names of the input system
    pub fn source_labels(self) -> &'static [&'static str] {
        match self {
            ConversionMode::CartesianToPolar => &["x", "y"],
            ConversionMode::PolarToCartesian => &["r", "θ"],
            ConversionMode::CartesianToSpherical | ConversionMode::CartesianToCylindrical => {
                &["x", "y", "z"]
            }
            ConversionMode::SphericalToCartesian => &["r", "θ", "φ"],
            ConversionMode::CylindricalToCartesian => &["r", "θ", "z"],
        }
    }

    /// Component names of the output system
    pub fn target_labels(self) -> &'static [&'static str] {
        match self {
            ConversionMode::CartesianToPolar => &["r", "θ"],
            ConversionMode::PolarToCartesian => &["x", "y"],
            ConversionMode::CartesianToSpherical => &["r", "θ", "φ"],
            ConversionMode::CartesianToCylindrical => &["r", "θ", "z"],
            ConversionMode::SphericalToCartesian | ConversionMode::CylindricalToCartesian => {
                &["x", "y", "z"]
            }
        }
    }

    /// Runs the transform for this mode
    ///
    /// `c` is ignored by the 2D modes and defaults to 0.0 for the 3D modes.
    pub fn apply(self, a: f64, b: f64, c: Option<f64>) -> Result<ConversionResult> {
        let c = c.unwrap_or(OPTIONAL_COMPONENT_DEFAULT);
        debug!("{}: input ({}, {}, {})", self.slug(), a, b, c);

        let values = match self {
            ConversionMode::CartesianToPolar => {
                let p = Cartesian2::new(a, b).to_polar();
                vec![p.r, p.theta]
            }
            ConversionMode::PolarToCartesian => {
                let p = Polar::new(a, b).to_cartesian();
                vec![p.x, p.y]
            }
            ConversionMode::CartesianToSpherical => {
                let s = Cartesian3::new(a, b, c).to_spherical()?;
                vec![s.r, s.theta, s.phi]
            }
            ConversionMode::SphericalToCartesian => {
                let p = Spherical::new(a, b, c).to_cartesian();
                vec![p.x, p.y, p.z]
            }
            ConversionMode::CartesianToCylindrical => {
                let cyl = Cartesian3::new(a, b, c).to_cylindrical();
                vec![cyl.r, cyl.theta, cyl.z]
            }
            ConversionMode::CylindricalToCartesian => {
                let p = Cylindrical::new(a, b, c).to_cartesian();
                vec![p.x, p.y, p.z]
            }
        };

        debug!("{}: output {:?}", self.slug(), values);

        Ok(ConversionResult {
            mode: self,
            components: self
                .target_labels()
                .iter()
                .zip(values)
                .map(|(&label, value)| Component { label, value })
                .collect(),
        })
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for ConversionMode {
    type Err = ConvertError;

    /// Accepts a slug, a selector title (case-insensitive) or a selector index
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();

        if let Ok(index) = trimmed.parse::<usize>() {
            return Self::from_index(index);
        }

        Self::ALL
            .iter()
            .copied()
            .find(|mode| {
                mode.slug().eq_ignore_ascii_case(trimmed)
                    || mode.title().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ConvertError::UnknownMode(trimmed.to_string()))
    }
}

/// One labelled output value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Component {
    pub label: &'static str,
    pub value: f64,
}

/// Output of a conversion, before rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub mode: ConversionMode,
    pub components: Vec<Component>,
}

impl ConversionResult {
    /// Raw output values in label order
    pub fn values(&self) -> Vec<f64> {
        self.components.iter().map(|c| c.value).collect()
    }

    /// Renders `"<label> = <value>, ..."` at the given precision
    pub fn render(&self, precision: Precision) -> String {
        self.render_digits(precision.digits())
    }

    fn render_digits(&self, digits: usize) -> String {
        self.components
            .iter()
            .map(|c| format!("{} = {}", c.label, format_number(c.value, digits)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ConversionResult {
    /// Uses the formatter's precision if given (`{:.4}`), else the default
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f
            .precision()
            .unwrap_or_else(|| Precision::default().digits());
        f.write_str(&self.render_digits(digits))
    }
}

/// Converts one point and renders the result
///
/// ```rust
/// use coordconv::{convert, ConversionMode, Precision};
///
/// let text = convert(
///     ConversionMode::CartesianToCylindrical,
///     3.0,
///     4.0,
///     Some(7.0),
///     Precision::new(3).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(text, "r = 5.000, θ = 53.130, z = 7.000");
/// ```
pub fn convert(
    mode: ConversionMode,
    a: f64,
    b: f64,
    c: Option<f64>,
    precision: Precision,
) -> Result<String> {
    Ok(mode.apply(a, b, c)?.render(precision))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(digits: i64) -> Precision {
        Precision::new(digits).unwrap()
    }

    #[test]
    fn test_convert_2d_modes() {
        assert_eq!(
            convert(ConversionMode::CartesianToPolar, 1.0, 1.0, None, p(2)).unwrap(),
            "r = 1.41, θ = 45.00"
        );
        assert_eq!(
            convert(ConversionMode::PolarToCartesian, 1.0, 90.0, None, p(3)).unwrap(),
            "x = 0.000, y = 1.000"
        );
    }

    #[test]
    fn test_2d_modes_ignore_third_component() {
        let with = convert(ConversionMode::CartesianToPolar, 3.0, 4.0, Some(9.0), p(2));
        let without = convert(ConversionMode::CartesianToPolar, 3.0, 4.0, None, p(2));
        assert_eq!(with, without);
    }

    #[test]
    fn test_convert_3d_modes() {
        assert_eq!(
            convert(ConversionMode::CartesianToSpherical, 0.0, 0.0, Some(5.0), p(1)).unwrap(),
            "r = 5.0, θ = 0.0, φ = 0.0"
        );
        assert_eq!(
            convert(ConversionMode::SphericalToCartesian, 5.0, 0.0, Some(0.0), p(1)).unwrap(),
            "x = 0.0, y = 0.0, z = 5.0"
        );
        assert_eq!(
            convert(ConversionMode::CartesianToCylindrical, 3.0, 4.0, Some(7.0), p(5)).unwrap(),
            "r = 5.00000, θ = 53.13010, z = 7.00000"
        );
        assert_eq!(
            convert(ConversionMode::CylindricalToCartesian, 2.0, 0.0, Some(-1.0), p(2)).unwrap(),
            "x = 2.00, y = 0.00, z = -1.00"
        );
    }

    #[test]
    fn test_missing_third_component_defaults_to_zero() {
        let result = ConversionMode::CartesianToCylindrical
            .apply(3.0, 4.0, None)
            .unwrap();
        assert_eq!(result.values()[2], 0.0);
    }

    #[test]
    fn test_spherical_of_origin_via_dispatch() {
        let result = convert(ConversionMode::CartesianToSpherical, 0.0, 0.0, None, p(2));
        assert_eq!(result, Err(ConvertError::DivisionByZero));
    }

    #[test]
    fn test_nan_renders_instead_of_failing() {
        let text = convert(ConversionMode::PolarToCartesian, f64::NAN, 0.0, None, p(2)).unwrap();
        assert_eq!(text, "x = NaN, y = NaN");
    }

    #[test]
    fn test_labels_match_dimension() {
        for mode in ConversionMode::ALL {
            assert_eq!(mode.source_labels().len(), mode.dimension());
            assert_eq!(mode.target_labels().len(), mode.dimension());
            let result = mode.apply(1.0, 2.0, Some(3.0)).unwrap();
            assert_eq!(result.components.len(), mode.dimension());
        }
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(
            "cartesian-to-polar".parse::<ConversionMode>(),
            Ok(ConversionMode::CartesianToPolar)
        );
        assert_eq!(
            " Spherical -> Cartesian (3D) ".parse::<ConversionMode>(),
            Ok(ConversionMode::SphericalToCartesian)
        );
        assert_eq!(
            "5".parse::<ConversionMode>(),
            Ok(ConversionMode::CylindricalToCartesian)
        );
        assert_eq!(
            "6".parse::<ConversionMode>(),
            Err(ConvertError::UnknownMode("6".to_string()))
        );
        assert_eq!(
            "polar-to-spherical".parse::<ConversionMode>(),
            Err(ConvertError::UnknownMode("polar-to-spherical".to_string()))
        );
    }

    #[test]
    fn test_index_round_trips() {
        for (i, mode) in ConversionMode::ALL.iter().enumerate() {
            assert_eq!(mode.index(), i);
            assert_eq!(ConversionMode::from_index(i), Ok(*mode));
            assert_eq!(mode.slug().parse::<ConversionMode>(), Ok(*mode));
        }
    }

    #[test]
    fn test_result_display_uses_formatter_precision() {
        let result = ConversionMode::CartesianToPolar.apply(3.0, 4.0, None).unwrap();
        assert_eq!(format!("{}", result), "r = 5.00, θ = 53.13");
        assert_eq!(format!("{:.1}", result), "r = 5.0, θ = 53.1");
    }

    #[test]
    fn test_result_serializes_to_json() {
        let result = ConversionMode::CartesianToCylindrical
            .apply(0.0, 0.0, Some(2.0))
            .unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["mode"], "cartesian-to-cylindrical");
        assert_eq!(json["components"][2]["label"], "z");
        assert_eq!(json["components"][2]["value"], 2.0);
    }
}
