//! Habitable zone boundary fluxes
//!
//! Each boundary is a fourth-order polynomial fit to 1-D climate model runs,
//! expanded around the solar effective temperature:
//!
//! S_eff = S_eff☉ + a·T* + b·T*² + c·T*³ + d·T*⁴,  T* = T_eff − 5780 K
//!
//! The fits are calibrated for 2600 K ≤ T_eff ≤ 7200 K and an Earth-mass
//! planet. They can still be evaluated outside that range, but the result
//! quickly stops being physical and may even turn negative.
//!
//! # References
//! - Kopparapu et al. (2014) ApJL 787, L29, Eq. 4 and Table 1

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use units::Temperature;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::error::{HabitableZoneError, Result, ensure_finite};

/// Coefficients of one boundary polynomial
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct BoundaryCoefficients {
    /// Boundary flux for a solar-temperature star
    pub seff_sun: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl BoundaryCoefficients {
    /// Evaluate the polynomial at a temperature offset `t_star = T_eff − 5780 K`
    pub fn evaluate(&self, t_star: f64) -> f64 {
        self.seff_sun
            + self.a * t_star
            + self.b * t_star.powi(2)
            + self.c * t_star.powi(3)
            + self.d * t_star.powi(4)
    }
}

// Kopparapu et al. (2014) Table 1, 1 M⊕ columns
const RECENT_VENUS: BoundaryCoefficients = BoundaryCoefficients {
    seff_sun: 1.766,
    a: 2.136e-4,
    b: 2.533e-8,
    c: -1.332e-11,
    d: -3.097e-15,
};

const RUNAWAY_GREENHOUSE: BoundaryCoefficients = BoundaryCoefficients {
    seff_sun: 1.107,
    a: 1.332e-4,
    b: 1.580e-8,
    c: -8.308e-12,
    d: -1.931e-15,
};

const MAXIMUM_GREENHOUSE: BoundaryCoefficients = BoundaryCoefficients {
    seff_sun: 0.356,
    a: 6.171e-5,
    b: 1.689e-9,
    c: -3.198e-12,
    d: -5.575e-16,
};

const EARLY_MARS: BoundaryCoefficients = BoundaryCoefficients {
    seff_sun: 0.320,
    a: 5.547e-5,
    b: 1.526e-9,
    c: -2.874e-12,
    d: -5.011e-16,
};

/// The four habitable zone limits, ordered from the star outward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum BoundaryZone {
    /// Optimistic inner edge: Venus has had no surface water for at least 1 Gyr
    RecentVenus,
    /// Conservative inner edge: oceans evaporate entirely
    RunawayGreenhouse,
    /// Conservative outer edge: CO₂ greenhouse warming peaks
    MaximumGreenhouse,
    /// Optimistic outer edge: early Mars may have had surface water
    EarlyMars,
}

impl BoundaryZone {
    pub const ALL: [BoundaryZone; 4] = [
        BoundaryZone::RecentVenus,
        BoundaryZone::RunawayGreenhouse,
        BoundaryZone::MaximumGreenhouse,
        BoundaryZone::EarlyMars,
    ];

    /// Effective temperatures (K) the polynomial fits were calibrated over
    pub const CALIBRATED_TEMPERATURE_RANGE: RangeInclusive<f64> = 2600.0..=7200.0;

    pub fn coefficients(&self) -> &'static BoundaryCoefficients {
        match self {
            BoundaryZone::RecentVenus => &RECENT_VENUS,
            BoundaryZone::RunawayGreenhouse => &RUNAWAY_GREENHOUSE,
            BoundaryZone::MaximumGreenhouse => &MAXIMUM_GREENHOUSE,
            BoundaryZone::EarlyMars => &EARLY_MARS,
        }
    }

    /// Canonical lookup key, as accepted by [`FromStr`]
    pub fn key(&self) -> &'static str {
        match self {
            BoundaryZone::RecentVenus => "recentVenus",
            BoundaryZone::RunawayGreenhouse => "runawayGreenhouse",
            BoundaryZone::MaximumGreenhouse => "maximumGreenhouse",
            BoundaryZone::EarlyMars => "earlyMars",
        }
    }

    /// Human-readable label including the planet mass the fit applies to
    pub fn label(&self) -> &'static str {
        match self {
            BoundaryZone::RecentVenus => "Recent Venus (1 Me)",
            BoundaryZone::RunawayGreenhouse => "Runaway Greenhouse (1 Me)",
            BoundaryZone::MaximumGreenhouse => "Maximum Greenhouse (1 Me)",
            BoundaryZone::EarlyMars => "Early Mars (1 Me)",
        }
    }

    /// Boundary flux for a star of the given effective temperature
    ///
    /// # Examples
    /// ```
    /// use habitable_zone::BoundaryZone;
    /// use units::Temperature;
    ///
    /// let flux = BoundaryZone::EarlyMars.flux_at(Temperature::solar_effective());
    /// assert_eq!(flux, 0.320);
    /// ```
    pub fn flux_at(&self, temperature: Temperature) -> f64 {
        let t_star = temperature.offset_from(Temperature::solar_effective());
        self.coefficients().evaluate(t_star)
    }

    pub fn is_calibrated_for(temperature_k: f64) -> bool {
        Self::CALIBRATED_TEMPERATURE_RANGE.contains(&temperature_k)
    }
}

impl fmt::Display for BoundaryZone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            BoundaryZone::RecentVenus => "Recent Venus",
            BoundaryZone::RunawayGreenhouse => "Runaway Greenhouse",
            BoundaryZone::MaximumGreenhouse => "Maximum Greenhouse",
            BoundaryZone::EarlyMars => "Early Mars",
        };
        write!(f, "{}", str)
    }
}

impl FromStr for BoundaryZone {
    type Err = HabitableZoneError;

    /// Accepts camelCase keys, their two-letter abbreviations, and the
    /// snake_case / kebab-case spellings.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "recentVenus" | "rv" | "recent_venus" | "recent-venus" => Ok(BoundaryZone::RecentVenus),
            "runawayGreenhouse" | "rg" | "runaway_greenhouse" | "runaway-greenhouse" => {
                Ok(BoundaryZone::RunawayGreenhouse)
            }
            "maximumGreenhouse" | "mg" | "maximum_greenhouse" | "maximum-greenhouse" => {
                Ok(BoundaryZone::MaximumGreenhouse)
            }
            "earlyMars" | "em" | "early_mars" | "early-mars" => Ok(BoundaryZone::EarlyMars),
            other => Err(HabitableZoneError::UnknownBoundary(other.to_string())),
        }
    }
}

/// Boundary flux for `zone` around a star of `temperature_k` Kelvin.
///
/// # Errors
/// [`HabitableZoneError::InvalidArgument`] if the temperature is not finite.
pub fn boundary_flux(temperature_k: f64, zone: BoundaryZone) -> Result<f64> {
    let temperature_k = ensure_finite("stellar temperature", temperature_k)?;
    Ok(zone.flux_at(Temperature::from_kelvin(temperature_k)))
}

/// Like [`boundary_flux`], selecting the zone by its string key.
///
/// # Errors
/// [`HabitableZoneError::UnknownBoundary`] for a key that names none of the
/// four boundaries.
pub fn boundary_flux_for_key(temperature_k: f64, zone_key: &str) -> Result<f64> {
    let zone: BoundaryZone = zone_key.parse()?;
    boundary_flux(temperature_k, zone)
}

/// All four boundary fluxes around a star of `temperature_k` Kelvin.
///
/// # Errors
/// [`HabitableZoneError::InvalidArgument`] if the temperature is not finite.
pub fn boundary_fluxes(temperature_k: f64) -> Result<BoundaryFluxes> {
    let temperature_k = ensure_finite("stellar temperature", temperature_k)?;
    Ok(BoundaryFluxes::at_temperature(Temperature::from_kelvin(
        temperature_k,
    )))
}

/// All four boundary fluxes for one stellar temperature
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct BoundaryFluxes {
    pub recent_venus: f64,
    pub runaway_greenhouse: f64,
    pub maximum_greenhouse: f64,
    pub early_mars: f64,
}

impl BoundaryFluxes {
    pub fn at_temperature(temperature: Temperature) -> Self {
        Self {
            recent_venus: BoundaryZone::RecentVenus.flux_at(temperature),
            runaway_greenhouse: BoundaryZone::RunawayGreenhouse.flux_at(temperature),
            maximum_greenhouse: BoundaryZone::MaximumGreenhouse.flux_at(temperature),
            early_mars: BoundaryZone::EarlyMars.flux_at(temperature),
        }
    }

    pub fn get(&self, zone: BoundaryZone) -> f64 {
        match zone {
            BoundaryZone::RecentVenus => self.recent_venus,
            BoundaryZone::RunawayGreenhouse => self.runaway_greenhouse,
            BoundaryZone::MaximumGreenhouse => self.maximum_greenhouse,
            BoundaryZone::EarlyMars => self.early_mars,
        }
    }
}
