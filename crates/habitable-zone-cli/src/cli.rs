//! Command-line arguments and the optional TOML input file

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "hzcalc", version)]
#[command(about = "Habitable zone boundaries and orbit classification (Kopparapu et al. 2014)")]
pub struct Cli {
    /// Star's luminosity in solar luminosities [default: 1.0]
    #[arg(short, long, value_parser = non_negative)]
    pub luminosity: Option<f64>,

    /// Object's semi-major axis in AU [default: 1.0]
    #[arg(short = 'a', long, value_parser = non_negative)]
    pub semi_major_axis: Option<f64>,

    /// Star's effective temperature in Kelvin [default: 5780]
    #[arg(short, long)]
    pub temperature: Option<u32>,

    /// TOML file providing any of `luminosity`, `semi_major_axis`, `temperature`;
    /// flags given on the command line take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labeled report
    Text,
    /// Pretty-printed JSON record
    Json,
}

/// The three numbers a calculation needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs {
    pub luminosity: f64,
    pub semi_major_axis: f64,
    pub temperature: u32,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            luminosity: 1.0,
            semi_major_axis: 1.0,
            temperature: 5780,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputFile {
    pub luminosity: Option<f64>,
    pub semi_major_axis: Option<f64>,
    pub temperature: Option<u32>,
}

impl InputFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse input file {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl Cli {
    /// Resolve inputs: defaults, then the TOML file, then explicit flags
    pub fn inputs(&self) -> Result<Inputs> {
        let file = match &self.config {
            Some(path) => InputFile::from_file(path)?,
            None => InputFile::default(),
        };
        let defaults = Inputs::default();

        Ok(Inputs {
            luminosity: self
                .luminosity
                .or(file.luminosity)
                .unwrap_or(defaults.luminosity),
            semi_major_axis: self
                .semi_major_axis
                .or(file.semi_major_axis)
                .unwrap_or(defaults.semi_major_axis),
            temperature: self
                .temperature
                .or(file.temperature)
                .unwrap_or(defaults.temperature),
        })
    }
}

fn non_negative(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(format!("{value} must be a finite number >= 0"))
    }
}
