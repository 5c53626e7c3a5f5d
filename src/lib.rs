//! CEP Weather API Library
//!
//! Resolves a Brazilian postal code (CEP) to a city by racing two redundant
//! geocoding providers, then looks up the city's current temperature and
//! reports it in Celsius, Fahrenheit and Kelvin.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers and router.
//! - `models`: Core data models.
//! - `resolver`: Race-based CEP resolution (first usable provider wins).
//! - `services`: External service clients (BrasilAPI, ViaCEP, WeatherAPI).
//! - `temperature`: Temperature scale conversions.
//! - `validation`: CEP validation.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod resolver;
pub mod services;
pub mod temperature;
pub mod validation;
