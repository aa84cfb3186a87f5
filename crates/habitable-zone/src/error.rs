//! Error type shared by every calculation in this crate
//!
//! Both variants are invalid-argument errors: the formulas themselves cannot
//! fail, only their inputs can be out of domain.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HabitableZoneError {
    /// A numeric input outside the domain of the formula it feeds
    #[error("invalid {parameter}: {value} ({reason})")]
    InvalidArgument {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("unknown habitable zone boundary '{0}'")]
    UnknownBoundary(String),
}

impl HabitableZoneError {
    pub(crate) fn invalid(parameter: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidArgument {
            parameter,
            value,
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, HabitableZoneError>;

/// Rejects NaN and ±∞ before they reach a formula.
pub(crate) fn ensure_finite(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(HabitableZoneError::invalid(
            parameter,
            value,
            "must be a finite number",
        ))
    }
}
