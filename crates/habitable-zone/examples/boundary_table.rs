//! Print habitable zone boundaries across the calibrated temperature range
//!
//! Usage: cargo run -p habitable-zone --example boundary_table [luminosity]
//!
//! Output: CSV with one row per 100 K step, fluxes and distances (AU) for
//! each of the four boundaries

use habitable_zone::{BoundaryZone, boundary_flux, distance_from_flux};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let luminosity: f64 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 1.0,
    };

    let header: Vec<String> = BoundaryZone::ALL
        .iter()
        .flat_map(|zone| [format!("{}_seff", zone.key()), format!("{}_au", zone.key())])
        .collect();
    println!("temperature_k,{}", header.join(","));

    let (start, end) = BoundaryZone::CALIBRATED_TEMPERATURE_RANGE.into_inner();
    let mut rows = 0;
    let mut temperature = start;
    while temperature <= end {
        let mut columns = Vec::with_capacity(8);
        for zone in BoundaryZone::ALL {
            let flux = boundary_flux(temperature, zone)?;
            let distance = distance_from_flux(luminosity, flux)?;
            columns.push(format!("{:.4}", flux));
            columns.push(format!("{:.4}", distance));
        }
        println!("{:.0},{}", temperature, columns.join(","));

        temperature += 100.0;
        rows += 1;
    }

    eprintln!("Generated {} rows for L = {} L☉", rows, luminosity);
    Ok(())
}
