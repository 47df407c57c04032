pub mod config;
pub mod diagnostics;
pub mod error;
pub mod telemetry;
