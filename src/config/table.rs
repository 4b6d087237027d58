//! Table configuration: capacity, hasher and probe cap.

use super::{parse_env_var, Config};
use crate::error::{check_capacity, HashProbeError, Result};
use crate::hash_map::{BuiltinHasher, POSITIONAL_MODULUS};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Default capacity of fixed-size tables
pub const DEFAULT_CAPACITY: usize = 16;

/// Largest capacity a fixed-size table accepts
pub const MAX_CAPACITY: usize = 1 << 28;

/// Configuration for fixed-capacity tables.
///
/// `max_probes` lowers the probe limit of open-addressing tables below the
/// strategy's own bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Number of slots
    pub capacity: usize,
    /// Primary hash function
    pub hasher: BuiltinHasher,
    /// Optional cap on slots examined per operation
    pub max_probes: Option<usize>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            hasher: BuiltinHasher::default(),
            max_probes: None,
        }
    }
}

impl TableConfig {
    /// Naive hasher so that anagrams collide; for exercising collision handling
    pub fn collision_stress_preset() -> Self {
        Self {
            capacity: 8,
            hasher: BuiltinHasher::Naive,
            max_probes: None,
        }
    }
}

impl Config for TableConfig {
    fn validate(&self) -> Result<()> {
        check_capacity(self.capacity)?;
        if self.max_probes == Some(0) {
            return Err(HashProbeError::configuration("max_probes must be greater than 0"));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.capacity = parse_env_var(&format!("{}TABLE_CAPACITY", prefix), config.capacity);

        if let Ok(name) = env::var(format!("{}TABLE_HASHER", prefix)) {
            let modulus = parse_env_var(&format!("{}TABLE_MODULUS", prefix), POSITIONAL_MODULUS);
            config.hasher = BuiltinHasher::from_name(&name, modulus)?;
        }

        let max_probes: usize = parse_env_var(&format!("{}TABLE_MAX_PROBES", prefix), 0);
        if max_probes > 0 {
            config.max_probes = Some(max_probes);
        }

        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self { capacity: 4096, hasher: BuiltinHasher::default(), max_probes: None }
    }

    fn memory_preset() -> Self {
        Self { capacity: 16, hasher: BuiltinHasher::default(), max_probes: None }
    }

    fn realtime_preset() -> Self {
        Self { capacity: 1024, hasher: BuiltinHasher::default(), max_probes: Some(8) }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self)
            .map_err(|e| HashProbeError::configuration(format!("Failed to serialize table config: {}", e)))?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| HashProbeError::invalid_data(format!("Failed to parse table config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}
