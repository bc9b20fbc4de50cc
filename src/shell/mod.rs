//! Toolkit-independent model of the converter form
//!
//! A front end owns the widgets; this module owns everything they display.
//! It decides which input fields are visible and how they are labelled. It
//! parses the field text and runs the conversion. Failures become
//! notifications, so the front end never has to inspect a [`ConvertError`].
//!
//! ```rust
//! use coordconv::shell::{ConverterSession, FormInput, ShellOutcome};
//! use coordconv::ConversionMode;
//!
//! let mut session = ConverterSession::new(ConversionMode::CartesianToPolar);
//! let outcome = session.submit(&FormInput::new("1", "1", ""));
//! assert_eq!(outcome, ShellOutcome::Result("r = 1.41, θ = 45.00".to_string()));
//! assert_eq!(session.clipboard_text(), "r = 1.41, θ = 45.00");
//! ```

use log::{info, warn};
use serde::Serialize;

use crate::conversion::ConversionMode;
use crate::error::{ConvertError, Result};
use crate::format::Precision;

/// Result text shown when the selector matches no conversion
pub const INVALID_SELECTION: &str = "Invalid conversion selection";

/// Title of every error notification
pub const ERROR_TITLE: &str = "Error";

/// Labels and visibility of the input fields for one mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputLayout {
    /// Label of each visible field, in order
    pub labels: Vec<&'static str>,
    /// Hint text of each visible field, in order
    pub placeholders: Vec<String>,
    /// Number of fields shown (2 or 3)
    pub visible_fields: usize,
}

impl InputLayout {
    pub fn for_mode(mode: ConversionMode) -> Self {
        let labels = mode.source_labels().to_vec();
        let placeholders = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                if i == 2 {
                    format!("Enter {} (optional)", label)
                } else {
                    format!("Enter {}", label)
                }
            })
            .collect();

        InputLayout {
            visible_fields: labels.len(),
            labels,
            placeholders,
        }
    }

    /// Whether the optional third field is shown
    pub fn shows_third(&self) -> bool {
        self.visible_fields > 2
    }
}

/// Raw text of the three input fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub first: String,
    pub second: String,
    pub third: String,
}

impl FormInput {
    pub fn new(first: impl Into<String>, second: impl Into<String>, third: impl Into<String>) -> Self {
        FormInput {
            first: first.into(),
            second: second.into(),
            third: third.into(),
        }
    }
}

/// What the front end should display after an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ShellOutcome {
    /// Replace the output area with this text
    Result(String),
    /// Show a modal message and leave the output area alone
    Notification { title: String, message: String },
}

/// Parses one text field as a real number
///
/// Surrounding whitespace is ignored. `inf` and `NaN` are accepted and flow
/// through the transforms unchanged.
pub fn parse_component(field: &str, text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|source| ConvertError::InvalidNumericInput {
            field: field.to_string(),
            input: text.to_string(),
            source,
        })
}

/// Maps an error to what the user should see
pub fn outcome_for_error(err: &ConvertError) -> ShellOutcome {
    let message = match err {
        ConvertError::UnknownMode(_) => return ShellOutcome::Result(INVALID_SELECTION.to_string()),
        ConvertError::InvalidNumericInput { .. } => err.to_string(),
        ConvertError::DivisionByZero => format!(
            "A calculation error occurred, possibly a division by zero. {}",
            err
        ),
        other => format!("An unexpected error occurred: {}", other),
    };

    ShellOutcome::Notification {
        title: ERROR_TITLE.to_string(),
        message,
    }
}

/// State behind one converter form
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterSession {
    selection: Option<ConversionMode>,
    precision: Precision,
    last_result: String,
}

impl ConverterSession {
    pub fn new(mode: ConversionMode) -> Self {
        ConverterSession {
            selection: Some(mode),
            precision: Precision::default(),
            last_result: String::new(),
        }
    }

    /// Selected mode, if the selector named a valid one
    pub fn mode(&self) -> Option<ConversionMode> {
        self.selection
    }

    pub fn set_mode(&mut self, mode: ConversionMode) -> InputLayout {
        self.selection = Some(mode);
        InputLayout::for_mode(mode)
    }

    /// Selects a mode by slug, title or index
    ///
    /// An unrecognised selector clears the selection; the next submit then
    /// renders [`INVALID_SELECTION`].
    pub fn select(&mut self, selector: &str) -> Result<InputLayout> {
        match selector.parse::<ConversionMode>() {
            Ok(mode) => Ok(self.set_mode(mode)),
            Err(err) => {
                warn!("{}", err);
                self.selection = None;
                Err(err)
            }
        }
    }

    /// Field layout for the current selection
    pub fn layout(&self) -> Option<InputLayout> {
        self.selection.map(InputLayout::for_mode)
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn set_precision(&mut self, precision: Precision) {
        self.precision = precision;
    }

    pub fn increment_precision(&mut self) -> Precision {
        self.precision = self.precision.increment();
        self.precision
    }

    pub fn decrement_precision(&mut self) -> Precision {
        self.precision = self.precision.decrement();
        self.precision
    }

    /// Runs the conversion for the current form contents
    ///
    /// A `Result` outcome replaces the stored result. A notification leaves
    /// the previous result in place.
    pub fn submit(&mut self, input: &FormInput) -> ShellOutcome {
        let outcome = match self.evaluate(input) {
            Ok(text) => ShellOutcome::Result(text),
            Err(err) => {
                warn!("conversion failed: {}", err);
                outcome_for_error(&err)
            }
        };

        if let ShellOutcome::Result(text) = &outcome {
            self.last_result = text.clone();
        }
        outcome
    }

    fn evaluate(&self, input: &FormInput) -> Result<String> {
        let mode = self
            .selection
            .ok_or_else(|| ConvertError::UnknownMode(String::new()))?;
        let labels = mode.source_labels();

        let a = parse_component(labels[0], &input.first)?;
        let b = parse_component(labels[1], &input.second)?;
        let c = if mode.dimension() == 3 && !input.third.trim().is_empty() {
            Some(parse_component(labels[2], &input.third)?)
        } else {
            None
        };

        Ok(mode.apply(a, b, c)?.render(self.precision))
    }

    /// Text to place on the clipboard: the last result, verbatim
    pub fn clipboard_text(&self) -> &str {
        &self.last_result
    }

    /// Confirmation shown after the result was copied
    pub fn copy_confirmation(&self) -> ShellOutcome {
        info!("copied {} bytes to clipboard", self.last_result.len());
        ShellOutcome::Notification {
            title: "Copied".to_string(),
            message: "Result copied to the clipboard!".to_string(),
        }
    }
}

impl Default for ConverterSession {
    fn default() -> Self {
        Self::new(ConversionMode::CartesianToPolar)
    }
}
