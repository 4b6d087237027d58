//! Configuration for hashprobe tables
//!
//! The [`Config`] trait provides validation, environment initialization,
//! presets and JSON persistence. [`TableConfig`] is the configuration consumed by
//! the fixed-capacity tables.
//!
//! ```rust
//! use hashprobe::config::{Config, TableConfig};
//! use hashprobe::hash_map::LinearProbeTable;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TableConfig::memory_preset();
//! let mut table = LinearProbeTable::from_config(&config)?;
//! table.add("now is the")?;
//! assert!(table.exists("now is the"));
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Initialization
//!
//! Variables use the `HASHPROBE_TABLE_{FIELD}` format by default:
//!
//! ```rust
//! use hashprobe::config::{Config, TableConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TableConfig::from_env()?;
//! let config = TableConfig::from_env_with_prefix("MYAPP_")?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod table;


pub use table::TableConfig;

/// Default environment variable prefix
pub const ENV_PREFIX: &str = "HASHPROBE_";

/// Common configuration trait providing validation, environment initialization,
/// and preset management functionality.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables with the
    /// `HASHPROBE_` prefix.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Initialize configuration from environment variables with a custom prefix.
    ///
    /// Unset or unparsable numeric variables keep their default.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Large tables with room to keep probe runs short.
    fn performance_preset() -> Self;

    /// Small tables for constrained environments.
    fn memory_preset() -> Self;

    /// Tables with a tight probe cap so every operation has a small worst case.
    fn realtime_preset() -> Self;

    /// Balanced defaults suitable for most uses.
    fn balanced_preset() -> Self
    where
        Self: Default,
    {
        Self::default()
    }

    /// Save configuration to a JSON file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load and validate configuration from a JSON file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Parse environment variable `var_name`, falling back to `default` when it is
/// unset or does not parse.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr + Clone,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
