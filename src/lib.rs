//! # hashprobe: String Hash Tables and Collision Resolution
//!
//! This crate provides a family of small hash tables that store strings keyed
//! by themselves, each resolving digest collisions differently.
//!
//! ## Key Features
//!
//! - **Pluggable hashing**: naive character sum, position-weighted sum, keyed
//!   `ahash`, or any `Fn(&str) -> u64`
//! - **Direct addressing**: last write wins, to show what collisions cost
//! - **Separate chaining**: singly-linked, insertion-ordered chains per digest
//! - **Open addressing**: linear, quadratic and double-hash probing over a fixed
//!   number of slots
//! - **Bounded probing**: a full table reports `TableFull` instead of looping
//! - **Configuration**: presets, environment variables and JSON files
//!
//! ## Quick Start
//!
//! ```rust
//! use hashprobe::{ChainedTable, DirectTable, NaiveHasher, QuadraticProbeTable};
//!
//! // Anagrams collide under the naive hasher
//! let mut direct = DirectTable::with_hasher(NaiveHasher);
//! direct.add("oof");
//! direct.add("foo");
//! assert_eq!(direct.find("oof"), Some("foo"));
//!
//! // Chaining keeps both
//! let mut chained = ChainedTable::with_hasher(NaiveHasher);
//! chained.add("oof");
//! chained.add("foo");
//! assert_eq!(chained.find("oof"), Some("oof"));
//!
//! // So does probing, up to the fixed capacity
//! let mut table = QuadraticProbeTable::with_hasher(8, NaiveHasher).unwrap();
//! table.add("oof").unwrap();
//! table.add("foo").unwrap();
//! assert!(table.exists("oof") && table.exists("foo"));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod hash_map;

// Re-export core types
pub use config::{Config, TableConfig};
pub use error::{HashProbeError, Result};
pub use hash_map::{
    ChainedTable, CollisionStats, DirectTable, DoubleHashTable, LinearProbeTable, NaiveHasher,
    OpenAddressingTable, PositionalHasher, QuadraticProbeTable, SearchOutcome, StringHasher,
};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently logs the version only)
pub fn init() {
    log::debug!("Initializing hashprobe v{}", VERSION);
}
