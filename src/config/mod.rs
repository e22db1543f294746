//! Configuration model for ccux.
//!
//! This module defines the Config struct that represents `ccux.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, `CCUX_*` environment overrides, and validation.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

pub use model::Config;
pub use operations::CONFIG_FILE;
pub use types::Framework;
