//! Temperature scale conversions.
//!
//! Celsius is the source-of-truth scale; Fahrenheit and Kelvin are always
//! derived from it.

/// Convert Celsius to Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

/// Convert Celsius to Kelvin.
///
/// Uses the 273 offset (not 273.15) for compatibility with the values this
/// service has always reported.
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + 273.0
}
