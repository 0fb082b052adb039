//! # WPS Shared
//!
//! Configuration, telemetry, constants and shared types for the workplace
//! strategy dashboard.

pub mod constants;
pub mod types;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
