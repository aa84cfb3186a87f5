//! Integration tests against hand-checked reference values.
//!
//! Runs the public API the way a front end does: three inputs in, flux,
//! boundary fluxes, boundary distances and a classification out.

use approx::assert_relative_eq;

use habitable_zone::{
    BoundaryZone, HabitableZoneError, ZoneClassification, assess, boundary_flux,
    boundary_flux_for_key, distance_from_flux, stellar_flux,
};

#[test]
fn test_default_form_inputs() {
    let hz = assess(1.0, 1.0, 5780.0).unwrap();

    println!("\n{hz}");

    assert_eq!(stellar_flux(1.0, 1.0).unwrap(), 1.0);
    assert_eq!(distance_from_flux(1.0, 1.0).unwrap(), 1.0);
    assert_eq!(hz.object_flux, 1.0);

    let expected = [
        (BoundaryZone::RecentVenus, 1.766),
        (BoundaryZone::RunawayGreenhouse, 1.107),
        (BoundaryZone::MaximumGreenhouse, 0.356),
        (BoundaryZone::EarlyMars, 0.320),
    ];
    for (zone, flux) in expected {
        assert_eq!(boundary_flux(5780.0, zone).unwrap(), flux);
        assert_eq!(hz.boundary(zone).flux, flux);
        assert_relative_eq!(
            hz.boundary(zone).distance.to_au(),
            (1.0 / flux).sqrt(),
            max_relative = 1e-15
        );
    }

    assert_eq!(hz.classification, ZoneClassification::Conservative);
}

#[test]
fn test_round_trip_flux_through_distance() {
    for &(luminosity, a) in &[(0.0017, 0.0485), (0.5, 0.8), (1.0, 1.0), (12.0, 3.3)] {
        let flux = stellar_flux(luminosity, a).unwrap();
        let back = stellar_flux(luminosity, distance_from_flux(luminosity, flux).unwrap()).unwrap();
        assert_relative_eq!(back, flux, max_relative = 1e-12);
    }
}

#[test]
fn test_boundary_distance_is_monotonic_in_threshold() {
    let luminosity = 2.5;
    for t in [3000.0, 4200.0, 5780.0, 6800.0] {
        let mut pairs: Vec<(f64, f64)> = BoundaryZone::ALL
            .iter()
            .map(|&zone| {
                let flux = boundary_flux(t, zone).unwrap();
                (flux, distance_from_flux(luminosity, flux).unwrap())
            })
            .collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

        for window in pairs.windows(2) {
            assert!(window[1].1 <= window[0].1, "T = {t}: {pairs:?}");
        }
    }
}

#[test]
fn test_a_sweep_outward_crosses_every_zone_in_order() {
    let classes: Vec<ZoneClassification> = [0.5, 0.85, 1.2, 1.72, 2.5]
        .iter()
        .map(|&a| assess(1.0, a, 5780.0).unwrap().classification)
        .collect();

    assert_eq!(
        classes,
        vec![
            ZoneClassification::Unclassified,
            ZoneClassification::OptimisticInner,
            ZoneClassification::Conservative,
            ZoneClassification::OptimisticOuter,
            ZoneClassification::NotHabitable,
        ]
    );
}

#[test]
fn test_rejected_inputs() {
    assert!(matches!(
        boundary_flux_for_key(5780.0, "snowball"),
        Err(HabitableZoneError::UnknownBoundary(_))
    ));
    assert!(matches!(
        distance_from_flux(1.0, 0.0),
        Err(HabitableZoneError::InvalidArgument { .. })
    ));
    assert!(stellar_flux(1.0, 0.0).is_err());

    let message = stellar_flux(1.0, -2.0).unwrap_err().to_string();
    assert_eq!(message, "invalid semi-major axis: -2 (must be greater than zero)");
}
