use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

pub const AU_TO_KM: f64 = 1.495_978_707e8;

/// Solar radius in AU: 1 R☉ = 695 700 km
pub const SOLAR_RADIUS_AU: f64 = 695_700.0 / AU_TO_KM;

/// An orbital distance, stored in astronomical units.
///
/// Habitable zone edges and semi-major axes are both expressed in AU, so the
/// conversions here are only for presenting results in other units.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let earth_orbit = Length::from_au(1.0);
/// assert!((earth_orbit.to_km() - 1.496e8).abs() < 1.0e5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value / AU_TO_KM)
    }

    /// Creates a new `Length` from a value in solar radii.
    pub fn from_solar_radii(value: f64) -> Self {
        Self(value * SOLAR_RADIUS_AU)
    }

    /// Returns the length in astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0
    }

    pub fn to_km(&self) -> f64 {
        self.0 * AU_TO_KM
    }

    pub fn to_solar_radii(&self) -> f64 {
        self.0 / SOLAR_RADIUS_AU
    }

    /// Square of the distance in AU², the denominator of the inverse-square law
    pub fn squared(&self) -> f64 {
        self.0 * self.0
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

/// Ratio of two distances
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}
