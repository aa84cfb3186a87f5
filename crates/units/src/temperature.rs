use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// Effective temperature of the Sun in Kelvin.
///
/// Stellar flux fits are usually expanded around this value.
pub const SOLAR_EFFECTIVE_TEMPERATURE_K: f64 = 5780.0;

/// A stellar effective temperature, stored in Kelvin.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let k_dwarf = Temperature::from_kelvin(4500.0);
/// assert_eq!(k_dwarf.offset_from(Temperature::solar_effective()), -1280.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Creates a new `Temperature` from a value in Kelvin.
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Temperature` from a value in Celsius (K = °C + 273.15).
    pub fn from_celsius(value: f64) -> Self {
        Self(value + 273.15)
    }

    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    pub fn to_celsius(&self) -> f64 {
        self.0 - 273.15
    }

    /// The Sun's effective temperature (5780 K).
    pub fn solar_effective() -> Self {
        Self(SOLAR_EFFECTIVE_TEMPERATURE_K)
    }

    /// Signed difference `self - reference` in Kelvin
    pub fn offset_from(&self, reference: Temperature) -> f64 {
        self.0 - reference.0
    }
}

/// Difference of two temperatures in Kelvin
impl Sub for Temperature {
    type Output = f64;

    fn sub(self, rhs: Temperature) -> f64 {
        self.offset_from(rhs)
    }
}
