//! Effective stellar flux and its inversion to orbital distance
//!
//! Flux is measured in units of the solar constant at 1 AU (S_eff = 1 for
//! Earth), so both directions reduce to the inverse-square law:
//!
//! - S_eff = L / a²
//! - a = √(L / S_eff)
//!
//! # References
//! - Kopparapu et al. (2014) ApJL 787, L29, Eq. 5

use crate::error::{HabitableZoneError, Result, ensure_finite};

/// Effective flux received at `semi_major_axis_au` from a star of `luminosity` L☉.
///
/// # Errors
/// [`HabitableZoneError::InvalidArgument`] when the luminosity is negative or
/// the semi-major axis is zero or negative (the division would not be finite).
///
/// # Examples
/// ```
/// use habitable_zone::stellar_flux;
///
/// assert_eq!(stellar_flux(1.0, 1.0).unwrap(), 1.0);
/// assert_eq!(stellar_flux(1.0, 2.0).unwrap(), 0.25);
/// assert!(stellar_flux(1.0, 0.0).is_err());
/// ```
pub fn stellar_flux(luminosity: f64, semi_major_axis_au: f64) -> Result<f64> {
    let luminosity = ensure_luminosity(luminosity)?;
    let semi_major_axis_au = ensure_finite("semi-major axis", semi_major_axis_au)?;

    if semi_major_axis_au <= 0.0 {
        return Err(HabitableZoneError::invalid(
            "semi-major axis",
            semi_major_axis_au,
            "must be greater than zero",
        ));
    }

    Ok(luminosity / semi_major_axis_au.powi(2))
}

/// Orbital distance in AU at which a star of `luminosity` L☉ delivers `flux`.
///
/// # Errors
/// [`HabitableZoneError::InvalidArgument`] when the luminosity is negative or
/// the flux is zero or negative. A non-positive flux only comes out of the
/// boundary polynomials far outside their calibrated temperature range.
pub fn distance_from_flux(luminosity: f64, flux: f64) -> Result<f64> {
    let luminosity = ensure_luminosity(luminosity)?;
    let flux = ensure_finite("effective flux", flux)?;

    if flux <= 0.0 {
        return Err(HabitableZoneError::invalid(
            "effective flux",
            flux,
            "must be greater than zero",
        ));
    }

    Ok((luminosity / flux).sqrt())
}

fn ensure_luminosity(luminosity: f64) -> Result<f64> {
    let luminosity = ensure_finite("luminosity", luminosity)?;
    if luminosity < 0.0 {
        return Err(HabitableZoneError::invalid(
            "luminosity",
            luminosity,
            "must not be negative",
        ));
    }
    Ok(luminosity)
}
