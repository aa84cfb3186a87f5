use approx::assert_relative_eq;

use crate::error::HabitableZoneError;
use crate::flux::{distance_from_flux, stellar_flux};

// ============================================================================
// stellar_flux
// ============================================================================

#[test]
fn test_earth_receives_unit_flux() {
    assert_eq!(stellar_flux(1.0, 1.0).unwrap(), 1.0);
}

#[test]
fn test_flux_follows_inverse_square_law() {
    assert_relative_eq!(stellar_flux(1.0, 2.0).unwrap(), 0.25);
    assert_relative_eq!(stellar_flux(1.0, 0.5).unwrap(), 4.0);
    assert_relative_eq!(stellar_flux(4.0, 2.0).unwrap(), 1.0);

    // Mars
    assert_relative_eq!(stellar_flux(1.0, 1.524).unwrap(), 0.4306, epsilon = 1e-4);
}

#[test]
fn test_zero_luminosity_gives_zero_flux() {
    assert_eq!(stellar_flux(0.0, 1.0).unwrap(), 0.0);
}

#[test]
fn test_flux_rejects_zero_semi_major_axis() {
    let err = stellar_flux(1.0, 0.0).unwrap_err();
    assert!(matches!(
        err,
        HabitableZoneError::InvalidArgument {
            parameter: "semi-major axis",
            ..
        }
    ));
}

#[test]
fn test_flux_rejects_negative_inputs() {
    assert!(stellar_flux(-1.0, 1.0).is_err());
    assert!(stellar_flux(1.0, -1.0).is_err());
}

#[test]
fn test_flux_rejects_non_finite_inputs() {
    assert!(stellar_flux(f64::NAN, 1.0).is_err());
    assert!(stellar_flux(1.0, f64::INFINITY).is_err());
    assert!(stellar_flux(f64::INFINITY, 1.0).is_err());
}

// ============================================================================
// distance_from_flux
// ============================================================================

#[test]
fn test_unit_flux_around_sun_is_one_au() {
    assert_eq!(distance_from_flux(1.0, 1.0).unwrap(), 1.0);
}

#[test]
fn test_distance_scales_with_root_luminosity() {
    assert_relative_eq!(distance_from_flux(4.0, 1.0).unwrap(), 2.0);
    assert_relative_eq!(distance_from_flux(0.01, 1.0).unwrap(), 0.1);
    assert_relative_eq!(distance_from_flux(1.0, 0.25).unwrap(), 2.0);
}

#[test]
fn test_zero_luminosity_gives_zero_distance() {
    assert_eq!(distance_from_flux(0.0, 1.0), Ok(0.0));
    assert_eq!(distance_from_flux(0.0, 0.32), Ok(0.0));
}

#[test]
fn test_distance_rejects_zero_flux() {
    let err = distance_from_flux(1.0, 0.0).unwrap_err();
    assert_eq!(
        err,
        HabitableZoneError::InvalidArgument {
            parameter: "effective flux",
            value: 0.0,
            reason: "must be greater than zero",
        }
    );
}

#[test]
fn test_distance_rejects_negative_flux_and_luminosity() {
    assert!(distance_from_flux(1.0, -0.3).is_err());
    assert!(distance_from_flux(-1.0, 1.0).is_err());
    assert!(distance_from_flux(1.0, f64::NAN).is_err());
}

#[test]
fn test_flux_distance_round_trip() {
    for &luminosity in &[0.0017, 0.04, 0.5, 1.0, 3.2, 25.0] {
        for &a in &[0.02, 0.3, 1.0, 1.7, 9.5] {
            let flux = stellar_flux(luminosity, a).unwrap();
            let distance = distance_from_flux(luminosity, flux).unwrap();
            assert_relative_eq!(distance, a, max_relative = 1e-12);
            assert_relative_eq!(
                stellar_flux(luminosity, distance).unwrap(),
                flux,
                max_relative = 1e-12
            );
        }
    }
}

#[test]
fn test_higher_flux_threshold_means_closer_orbit() {
    let thresholds = [0.2, 0.356, 1.0, 1.107, 1.766, 3.0];
    let distances: Vec<f64> = thresholds
        .iter()
        .map(|&s| distance_from_flux(0.8, s).unwrap())
        .collect();

    for pair in distances.windows(2) {
        assert!(pair[1] <= pair[0], "{:?} should not increase", distances);
    }
}
