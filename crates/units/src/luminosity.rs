use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul};

use crate::length::Length;

/// Nominal solar luminosity (IAU 2015 Resolution B3) in watts
pub const SOLAR_LUMINOSITY_W: f64 = 3.828e26;

/// A stellar luminosity, stored in solar luminosities (L☉).
///
/// # Examples
///
/// ```rust
/// use units::{Length, Luminosity};
///
/// let sun = Luminosity::solar();
/// // Flux relative to Earth's insolation at 2 AU
/// assert_eq!(sun / Length::from_au(2.0), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Luminosity(f64); // Base unit: L☉

impl Luminosity {
    /// Creates a new `Luminosity` from a value in solar luminosities.
    pub fn from_solar(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Luminosity` from a value in watts.
    pub fn from_watts(value: f64) -> Self {
        Self(value / SOLAR_LUMINOSITY_W)
    }

    pub fn to_solar(&self) -> f64 {
        self.0
    }

    pub fn to_watts(&self) -> f64 {
        self.0 * SOLAR_LUMINOSITY_W
    }

    /// One solar luminosity
    pub fn solar() -> Self {
        Self(1.0)
    }
}

impl Add for Luminosity {
    type Output = Luminosity;

    fn add(self, rhs: Luminosity) -> Luminosity {
        Luminosity(self.0 + rhs.0)
    }
}

impl Mul<f64> for Luminosity {
    type Output = Luminosity;

    fn mul(self, rhs: f64) -> Luminosity {
        Luminosity(self.0 * rhs)
    }
}

/// Inverse-square dilution: L / d² in units of the solar constant at 1 AU
impl Div<Length> for Luminosity {
    type Output = f64;

    fn div(self, rhs: Length) -> f64 {
        self.0 / rhs.squared()
    }
}
