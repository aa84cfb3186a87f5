//! Habitable zone boundaries and orbit classification
//!
//! Computes the effective stellar flux an orbit receives, the four
//! Kopparapu et al. (2014) boundary fluxes for a star's effective
//! temperature, the orbital distances of those boundaries, and where the
//! orbit falls relative to them.
//!
//! Every function is a pure calculation on its arguments and returns a
//! [`HabitableZoneError`] for out-of-domain input instead of producing NaN or
//! infinity.
//!
//! ```
//! use habitable_zone::{BoundaryZone, boundary_flux, distance_from_flux, stellar_flux};
//!
//! let seff = stellar_flux(0.5, 0.8).unwrap();
//! let inner_edge = boundary_flux(5000.0, BoundaryZone::RunawayGreenhouse).unwrap();
//! let inner_edge_au = distance_from_flux(0.5, inner_edge).unwrap();
//! assert!(seff < inner_edge && inner_edge_au < 0.8);
//! ```

pub mod assessment;
pub mod boundary;
pub mod classification;
pub mod error;
pub mod flux;

#[cfg(test)]
mod classification_test;
#[cfg(test)]
mod flux_test;

pub use assessment::{BoundaryEstimate, HabitableZoneAssessment, assess};
pub use boundary::{
    BoundaryCoefficients, BoundaryFluxes, BoundaryZone, boundary_flux, boundary_flux_for_key,
    boundary_fluxes,
};
pub use classification::{ZoneClassification, classify};
pub use error::{HabitableZoneError, Result};
pub use flux::{distance_from_flux, stellar_flux};
