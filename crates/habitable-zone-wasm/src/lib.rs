//! WASM bindings for the habitable zone calculator.
//!
//! Exposes the flux, boundary, and assessment calculations to
//! JavaScript/TypeScript. Records are converted with `serde-wasm-bindgen`,
//! and every validation failure becomes a thrown `Error` carrying the message.
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, { assess_habitable_zone, boundary_flux } from 'habitable-zone-wasm';
//!
//! await init();
//!
//! const hz = assess_habitable_zone(1.0, 1.0, 5780);
//! console.log(hz.classification); // "conservative"
//! console.log(hz.boundaries.map((b) => `${b.zone}: ${b.distance} AU`));
//!
//! const earlyMars = boundary_flux(3800, "em");
//! ```

use habitable_zone::HabitableZoneError;
use wasm_bindgen::prelude::*;

// Unit types serialize as plain numbers via serde(transparent)
#[wasm_bindgen(typescript_custom_section)]
const TS_UNIT_TYPES: &'static str = r#"
/** Length in AU (astronomical units) */
export type Length = number;
/** Luminosity in solar luminosities (L☉) */
export type Luminosity = number;
/** Temperature in Kelvin */
export type Temperature = number;
"#;

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn js_error(err: HabitableZoneError) -> JsError {
    JsError::new(&err.to_string())
}

/// Assess an orbit around a star.
///
/// # Arguments
/// * `luminosity` - Stellar luminosity in L☉
/// * `semi_major_axis_au` - Orbital semi-major axis in AU
/// * `temperature_k` - Stellar effective temperature in Kelvin
///
/// # Returns
/// A HabitableZoneAssessment with the object's flux, the four boundaries
/// (flux and distance), and the zone classification.
#[wasm_bindgen]
pub fn assess_habitable_zone(
    luminosity: f64,
    semi_major_axis_au: f64,
    temperature_k: f64,
) -> Result<JsValue, JsError> {
    let hz = habitable_zone::assess(luminosity, semi_major_axis_au, temperature_k)
        .map_err(js_error)?;
    to_js(&hz)
}

/// Effective flux (Earth = 1) at a given orbit.
#[wasm_bindgen]
pub fn stellar_flux(luminosity: f64, semi_major_axis_au: f64) -> Result<f64, JsError> {
    habitable_zone::stellar_flux(luminosity, semi_major_axis_au).map_err(js_error)
}

/// Orbital distance in AU that receives the given effective flux.
#[wasm_bindgen]
pub fn distance_from_flux(luminosity: f64, flux: f64) -> Result<f64, JsError> {
    habitable_zone::distance_from_flux(luminosity, flux).map_err(js_error)
}

/// Flux at one boundary.
///
/// # Arguments
/// * `temperature_k` - Stellar effective temperature in Kelvin
/// * `zone` - Boundary key: "recentVenus" ("rv"), "runawayGreenhouse" ("rg"),
///   "maximumGreenhouse" ("mg"), or "earlyMars" ("em")
#[wasm_bindgen]
pub fn boundary_flux(temperature_k: f64, zone: &str) -> Result<f64, JsError> {
    habitable_zone::boundary_flux_for_key(temperature_k, zone).map_err(js_error)
}

/// All four boundary fluxes for a stellar temperature.
///
/// # Returns
/// Object with recentVenus, runawayGreenhouse, maximumGreenhouse, earlyMars
#[wasm_bindgen]
pub fn boundary_fluxes(temperature_k: f64) -> Result<JsValue, JsError> {
    let fluxes = habitable_zone::boundary_fluxes(temperature_k).map_err(js_error)?;
    to_js(&fluxes)
}
