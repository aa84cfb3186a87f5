use units::Temperature;

use crate::boundary::BoundaryFluxes;
use crate::classification::{ZoneClassification, classify};

fn solar_boundaries() -> BoundaryFluxes {
    BoundaryFluxes::at_temperature(Temperature::solar_effective())
}

#[test]
fn test_earth_is_in_conservative_zone() {
    assert_eq!(classify(1.0, &solar_boundaries()), ZoneClassification::Conservative);
}

#[test]
fn test_each_band_classifies() {
    let sun = solar_boundaries();
    assert_eq!(classify(0.1, &sun), ZoneClassification::NotHabitable);
    assert_eq!(classify(0.34, &sun), ZoneClassification::OptimisticOuter);
    assert_eq!(classify(0.7, &sun), ZoneClassification::Conservative);
    assert_eq!(classify(1.5, &sun), ZoneClassification::OptimisticInner);
    assert_eq!(classify(1.91, &sun), ZoneClassification::Unclassified);
}

#[test]
fn test_shared_edges_resolve_outward() {
    let sun = solar_boundaries();
    assert_eq!(classify(sun.early_mars, &sun), ZoneClassification::OptimisticOuter);
    assert_eq!(
        classify(sun.maximum_greenhouse, &sun),
        ZoneClassification::OptimisticOuter
    );
    assert_eq!(
        classify(sun.runaway_greenhouse, &sun),
        ZoneClassification::Conservative
    );
    assert_eq!(
        classify(sun.recent_venus, &sun),
        ZoneClassification::OptimisticInner
    );
}

#[test]
fn test_just_past_edges() {
    let sun = solar_boundaries();
    let below = |x: f64| x - 1e-9;
    let above = |x: f64| x + 1e-9;

    assert_eq!(classify(below(sun.early_mars), &sun), ZoneClassification::NotHabitable);
    assert_eq!(
        classify(above(sun.maximum_greenhouse), &sun),
        ZoneClassification::Conservative
    );
    assert_eq!(
        classify(above(sun.runaway_greenhouse), &sun),
        ZoneClassification::OptimisticInner
    );
    assert_eq!(classify(above(sun.recent_venus), &sun), ZoneClassification::Unclassified);
}

#[test]
fn test_zero_flux_is_not_habitable() {
    assert_eq!(classify(0.0, &solar_boundaries()), ZoneClassification::NotHabitable);
}

#[test]
fn test_nan_flux_is_unclassified() {
    assert_eq!(classify(f64::NAN, &solar_boundaries()), ZoneClassification::Unclassified);
}

#[test]
fn test_unordered_boundaries_are_used_as_given() {
    // Early Mars above Maximum Greenhouse: the outer optimistic band is empty
    let odd = BoundaryFluxes {
        recent_venus: 2.0,
        runaway_greenhouse: 1.0,
        maximum_greenhouse: 0.3,
        early_mars: 0.5,
    };
    assert_eq!(classify(0.4, &odd), ZoneClassification::NotHabitable);
    assert_eq!(classify(0.6, &odd), ZoneClassification::Conservative);
}

#[test]
fn test_habitable_flags() {
    assert!(!ZoneClassification::NotHabitable.is_habitable());
    assert!(ZoneClassification::OptimisticOuter.is_habitable());
    assert!(ZoneClassification::Conservative.is_habitable());
    assert!(ZoneClassification::OptimisticInner.is_habitable());
    assert!(!ZoneClassification::Unclassified.is_habitable());
}

#[test]
fn test_descriptions() {
    assert_eq!(
        ZoneClassification::Conservative.to_string(),
        "This object is in the Conservative Habitable Zone (Between Runaway Greenhouse and Maximum Greenhouse)"
    );
    assert_eq!(
        ZoneClassification::NotHabitable.to_string(),
        "This object is NOT in the Habitable Zone (Beyond Early Mars)"
    );
}
