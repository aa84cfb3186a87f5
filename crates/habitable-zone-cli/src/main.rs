//! `hzcalc`: habitable zone calculator
//!
//! Usage: hzcalc --luminosity 0.5 --semi-major-axis 0.8 --temperature 4800

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use habitable_zone::assess;

mod cli;
mod logger;


use cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);
    debug!(?cli, "parsed arguments");

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let inputs = cli.inputs()?;
    info!(
        luminosity = inputs.luminosity,
        semi_major_axis_au = inputs.semi_major_axis,
        temperature_k = inputs.temperature,
        "calculating habitable zone"
    );

    let hz = assess(
        inputs.luminosity,
        inputs.semi_major_axis,
        f64::from(inputs.temperature),
    )
    .context("cannot assess habitable zone")?;

    let output = match cli.format {
        OutputFormat::Text => hz.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(&hz)?,
    };
    Ok(output)
}
