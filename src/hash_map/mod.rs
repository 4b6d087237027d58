//! String hash tables with different collision resolution strategies
//!
//! This module provides one table per strategy:
//! - `DirectTable`: digest-addressed, last write wins on collision
//! - `ChainedTable`: separate chaining with singly-linked chains
//! - `LinearProbeTable`: open addressing, `+1` probing
//! - `QuadraticProbeTable`: open addressing, `+k²` probing
//! - `DoubleHashTable`: open addressing, stride from a second hash
//!
//! Every table takes its [`StringHasher`] at construction and defaults to
//! [`PositionalHasher`].

mod chained_table;
mod collision_resolution;
mod direct_table;
mod hash_functions;
mod open_addressing;

pub use chained_table::{Chain, ChainIter, ChainedTable};
pub use collision_resolution::{
    CollisionStats, DoubleHashProbe, LinearProbe, ProbeSequence, ProbeStep, ProbeStrategy,
    QuadraticProbe, QUADRATIC_PERIOD_FACTOR,
};
pub use direct_table::DirectTable;
pub use hash_functions::{
    BuiltinHasher, NaiveHasher, PositionalHasher, SeededHasher, StringHasher, POSITIONAL_MODULUS,
};
pub use open_addressing::{
    DoubleHashTable, LinearProbeTable, OpenAddressingTable, QuadraticProbeTable, SearchOutcome,
};
