//! Layered configuration
//!
//! Implements the 3-layer configuration merge:
//! 1. Built-in defaults (theme, strings, component defaults)
//! 2. Optional TOML config file
//! 3. Caller overrides

mod defaults;
mod effective;

pub use defaults::BuiltinDefaults;
pub use effective::{ConfigError, ConfigOrigin, ConfigSource, EffectiveConfig};
