pub mod length;
pub mod luminosity;
pub mod temperature;

#[cfg(test)]
mod temperature_test;

pub use length::Length;
pub use luminosity::Luminosity;
pub use temperature::Temperature;
