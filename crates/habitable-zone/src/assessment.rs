//! Full habitable zone assessment for one star and one orbit

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};
use tracing::{debug, warn};
use units::{Length, Luminosity, Temperature};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::boundary::{BoundaryFluxes, BoundaryZone, boundary_flux};
use crate::classification::{ZoneClassification, classify};
use crate::error::Result;
use crate::flux::{distance_from_flux, stellar_flux};

/// One boundary evaluated for a particular star
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct BoundaryEstimate {
    pub zone: BoundaryZone,
    /// Effective flux at the boundary (S_eff)
    pub flux: f64,
    /// Orbital distance of the boundary in AU
    pub distance: Length,
}

/// Everything derived from a star's luminosity and temperature plus an orbit
///
/// # Examples
///
/// ```
/// use habitable_zone::{ZoneClassification, assess};
///
/// let earth = assess(1.0, 1.0, 5780.0).unwrap();
/// assert_eq!(earth.object_flux, 1.0);
/// assert_eq!(earth.classification, ZoneClassification::Conservative);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct HabitableZoneAssessment {
    pub luminosity: Luminosity,
    pub semi_major_axis: Length,
    pub temperature: Temperature,

    /// Effective flux received by the orbiting body
    pub object_flux: f64,

    /// Boundaries from the star outward: Recent Venus, Runaway Greenhouse,
    /// Maximum Greenhouse, Early Mars
    #[serde(deserialize_with = "deserialize_boundaries")]
    pub boundaries: [BoundaryEstimate; 4],

    pub classification: ZoneClassification,
}

impl HabitableZoneAssessment {
    /// Evaluate the object's flux, every boundary, and the classification
    ///
    /// # Errors
    /// Propagates the first invalid-argument error from the underlying
    /// formulas: negative luminosity, non-positive semi-major axis,
    /// non-finite temperature, or a boundary flux that is not positive.
    pub fn evaluate(
        luminosity: Luminosity,
        semi_major_axis: Length,
        temperature: Temperature,
    ) -> Result<Self> {
        let l = luminosity.to_solar();
        let object_flux = stellar_flux(l, semi_major_axis.to_au())?;

        let temperature_k = temperature.to_kelvin();
        if temperature_k.is_finite() && !BoundaryZone::is_calibrated_for(temperature_k) {
            warn!(
                temperature_k,
                "stellar temperature outside the calibrated 2600-7200 K range"
            );
        }

        let mut boundaries = [BoundaryEstimate {
            zone: BoundaryZone::RecentVenus,
            flux: 0.0,
            distance: Length::from_au(0.0),
        }; 4];

        for (slot, zone) in boundaries.iter_mut().zip(BoundaryZone::ALL) {
            let flux = boundary_flux(temperature_k, zone)?;
            let distance = Length::from_au(distance_from_flux(l, flux)?);
            *slot = BoundaryEstimate {
                zone,
                flux,
                distance,
            };
        }

        let classification = classify(object_flux, &fluxes_of(&boundaries));

        debug!(
            luminosity = l,
            semi_major_axis_au = semi_major_axis.to_au(),
            temperature_k,
            object_flux,
            ?classification,
            "assessed habitable zone"
        );

        Ok(Self {
            luminosity,
            semi_major_axis,
            temperature,
            object_flux,
            boundaries,
            classification,
        })
    }

    pub fn boundary(&self, zone: BoundaryZone) -> &BoundaryEstimate {
        self.boundaries
            .iter()
            .find(|boundary| boundary.zone == zone)
            .unwrap_or(&self.boundaries[zone as usize])
    }

    pub fn boundary_fluxes(&self) -> BoundaryFluxes {
        fluxes_of(&self.boundaries)
    }

    /// Conservative zone edges (Runaway Greenhouse, Maximum Greenhouse)
    pub fn conservative_zone(&self) -> (Length, Length) {
        (
            self.boundary(BoundaryZone::RunawayGreenhouse).distance,
            self.boundary(BoundaryZone::MaximumGreenhouse).distance,
        )
    }

    /// Optimistic zone edges (Recent Venus, Early Mars)
    pub fn optimistic_zone(&self) -> (Length, Length) {
        (
            self.boundary(BoundaryZone::RecentVenus).distance,
            self.boundary(BoundaryZone::EarlyMars).distance,
        )
    }

    pub fn is_habitable(&self) -> bool {
        self.classification.is_habitable()
    }
}

fn fluxes_of(boundaries: &[BoundaryEstimate; 4]) -> BoundaryFluxes {
    let flux = |zone: BoundaryZone| {
        boundaries
            .iter()
            .find(|boundary| boundary.zone == zone)
            .map_or(f64::NAN, |boundary| boundary.flux)
    };
    BoundaryFluxes {
        recent_venus: flux(BoundaryZone::RecentVenus),
        runaway_greenhouse: flux(BoundaryZone::RunawayGreenhouse),
        maximum_greenhouse: flux(BoundaryZone::MaximumGreenhouse),
        early_mars: flux(BoundaryZone::EarlyMars),
    }
}

/// Accepts the boundaries in any order, stores them star-outward, and
/// rejects records that repeat or omit a zone.
fn deserialize_boundaries<'de, D>(
    deserializer: D,
) -> std::result::Result<[BoundaryEstimate; 4], D::Error>
where
    D: Deserializer<'de>,
{
    let mut boundaries = <[BoundaryEstimate; 4]>::deserialize(deserializer)?;
    boundaries.sort_by_key(|boundary| boundary.zone as usize);
    if !boundaries
        .iter()
        .map(|boundary| boundary.zone)
        .eq(BoundaryZone::ALL)
    {
        return Err(de::Error::custom(
            "boundaries must list each zone exactly once",
        ));
    }
    Ok(boundaries)
}

/// Python-style `repr` of a float: `1.0`, `0.25`, `1e-06`, `1e+16`
pub(crate) fn format_float(value: f64) -> String {
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

/// Labeled plain-text report, one value per line
impl fmt::Display for HabitableZoneAssessment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "This object's Seff: {}", format_float(self.object_flux))?;
        writeln!(f)?;
        writeln!(f, "This system's HZ stats:")?;
        writeln!(f, "Distances in AU")?;
        for boundary in &self.boundaries {
            writeln!(
                f,
                "{}: {}",
                boundary.zone.label(),
                format_float(boundary.distance.to_au())
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Stellar Flux (Effective)")?;
        for boundary in &self.boundaries {
            writeln!(f, "{}: {}", boundary.zone.label(), format_float(boundary.flux))?;
        }
        writeln!(f)?;
        write!(f, "{}", self.classification)
    }
}

/// Assess an orbit of `semi_major_axis_au` around a star of `luminosity` L☉
/// and effective temperature `temperature_k`.
///
/// Shorthand for [`HabitableZoneAssessment::evaluate`] with plain numbers.
pub fn assess(
    luminosity: f64,
    semi_major_axis_au: f64,
    temperature_k: f64,
) -> Result<HabitableZoneAssessment> {
    HabitableZoneAssessment::evaluate(
        Luminosity::from_solar(luminosity),
        Length::from_au(semi_major_axis_au),
        Temperature::from_kelvin(temperature_k),
    )
}
