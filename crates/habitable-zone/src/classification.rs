//! Placing an orbit relative to the four boundary fluxes

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::boundary::BoundaryFluxes;

/// Where an orbit's effective flux falls relative to the habitable zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum ZoneClassification {
    /// Less flux than the Early Mars limit: too cold
    NotHabitable,
    /// Between Early Mars and Maximum Greenhouse
    OptimisticOuter,
    /// Between Maximum Greenhouse and Runaway Greenhouse
    Conservative,
    /// Between Runaway Greenhouse and Recent Venus
    OptimisticInner,
    /// More flux than the Recent Venus limit, or a flux that cannot be compared
    Unclassified,
}

impl ZoneClassification {
    /// True inside either the optimistic or the conservative zone
    pub fn is_habitable(&self) -> bool {
        matches!(
            self,
            ZoneClassification::OptimisticOuter
                | ZoneClassification::Conservative
                | ZoneClassification::OptimisticInner
        )
    }

    pub fn description(&self) -> &'static str {
        match self {
            ZoneClassification::NotHabitable => {
                "This object is NOT in the Habitable Zone (Beyond Early Mars)"
            }
            ZoneClassification::OptimisticOuter => {
                "This object is in the Optimistic Habitable Zone (Between Maximum Greenhouse and Early Mars)"
            }
            ZoneClassification::Conservative => {
                "This object is in the Conservative Habitable Zone (Between Runaway Greenhouse and Maximum Greenhouse)"
            }
            ZoneClassification::OptimisticInner => {
                "This object is in the Optimistic Habitable Zone (Between Recent Venus and Runaway Greenhouse)"
            }
            ZoneClassification::Unclassified => {
                "This object is inside the Recent Venus limit and could not be classified"
            }
        }
    }
}

impl fmt::Display for ZoneClassification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Classify an orbit by its effective flux.
///
/// Ranges share their end points and are tested from the outer edge inward,
/// so a flux exactly on a boundary lands in the zone further from the star.
/// The boundaries are used as given; they are not checked for ordering.
///
/// # Examples
/// ```
/// use habitable_zone::{BoundaryFluxes, ZoneClassification, classify};
/// use units::Temperature;
///
/// let sun = BoundaryFluxes::at_temperature(Temperature::solar_effective());
/// assert_eq!(classify(1.0, &sun), ZoneClassification::Conservative);
/// assert_eq!(classify(0.1, &sun), ZoneClassification::NotHabitable);
/// ```
pub fn classify(flux: f64, boundaries: &BoundaryFluxes) -> ZoneClassification {
    let in_range = |low: f64, high: f64| low <= flux && flux <= high;

    if flux < boundaries.early_mars {
        ZoneClassification::NotHabitable
    } else if in_range(boundaries.early_mars, boundaries.maximum_greenhouse) {
        ZoneClassification::OptimisticOuter
    } else if in_range(boundaries.maximum_greenhouse, boundaries.runaway_greenhouse) {
        ZoneClassification::Conservative
    } else if in_range(boundaries.runaway_greenhouse, boundaries.recent_venus) {
        ZoneClassification::OptimisticInner
    } else {
        ZoneClassification::Unclassified
    }
}
