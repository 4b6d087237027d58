//! Fixed-capacity open-addressing tables
//!
//! One table type, [`OpenAddressingTable`], is parameterised by a
//! [`ProbeStrategy`]; the aliases [`LinearProbeTable`], [`QuadraticProbeTable`]
//! and [`DoubleHashTable`] pick the strategy. Capacity never changes and there
//! is no deletion, so the first empty slot on a probe sequence ends a lookup.
//!
//! Probe sequences are bounded. A full table reports
//! [`HashProbeError::TableFull`] on insertion and an exhausted search on lookup
//! instead of probing forever.

use crate::config::TableConfig;
use crate::error::{check_capacity, HashProbeError, Result};
use crate::hash_map::collision_resolution::{
    CollisionStats, DoubleHashProbe, LinearProbe, ProbeSequence, ProbeStrategy, QuadraticProbe,
};
use crate::hash_map::hash_functions::{BuiltinHasher, PositionalHasher, StringHasher};
use std::fmt;

/// Open addressing with linear probing
pub type LinearProbeTable<H = PositionalHasher> = OpenAddressingTable<LinearProbe, H>;

/// Open addressing with quadratic probing
pub type QuadraticProbeTable<H = PositionalHasher> = OpenAddressingTable<QuadraticProbe, H>;

/// Open addressing with double hashing
pub type DoubleHashTable<H = PositionalHasher> = OpenAddressingTable<DoubleHashProbe, H>;

/// Result of walking a probe sequence looking for a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The value sits in `slot`
    Found {
        /// Slot holding the value
        slot: usize,
        /// Slots examined, the matching one included
        probes: usize,
    },
    /// An empty slot was reached first, so the value was never added
    Absent {
        /// Slots examined, the empty one included
        probes: usize,
    },
    /// Every slot on the bounded sequence was occupied by other values
    Exhausted {
        /// Slots examined
        probes: usize,
    },
}

impl SearchOutcome {
    /// Slot of the value, if found
    pub fn slot(&self) -> Option<usize> {
        match *self {
            SearchOutcome::Found { slot, .. } => Some(slot),
            _ => None,
        }
    }

    /// Slots examined by the search
    pub fn probes(&self) -> usize {
        match *self {
            SearchOutcome::Found { probes, .. }
            | SearchOutcome::Absent { probes }
            | SearchOutcome::Exhausted { probes } => probes,
        }
    }
}

/// Fixed-capacity hash table resolving collisions with strategy `P`
pub struct OpenAddressingTable<P, H = PositionalHasher> {
    slots: Vec<Option<String>>,
    len: usize,
    strategy: P,
    hasher: H,
    max_probes: Option<usize>,
    stats: CollisionStats,
}

impl<P: ProbeStrategy + Default> OpenAddressingTable<P, PositionalHasher> {
    /// Create a table of `capacity` slots using the positional hasher
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_strategy(capacity, P::default(), PositionalHasher::default())
    }
}

impl<P: ProbeStrategy + Default, H: StringHasher> OpenAddressingTable<P, H> {
    /// Create a table of `capacity` slots using `hasher`
    pub fn with_hasher(capacity: usize, hasher: H) -> Result<Self> {
        Self::with_strategy(capacity, P::default(), hasher)
    }
}

impl<P: ProbeStrategy + Default> OpenAddressingTable<P, BuiltinHasher> {
    /// Create a table from a validated configuration
    pub fn from_config(config: &TableConfig) -> Result<Self> {
        use crate::config::Config;

        config.validate()?;
        let table = Self::with_strategy(config.capacity, P::default(), config.hasher)?;
        Ok(match config.max_probes {
            Some(limit) => table.with_max_probes(limit),
            None => table,
        })
    }
}

impl<P: ProbeStrategy, H: StringHasher> OpenAddressingTable<P, H> {
    /// Create a table of `capacity` slots with an explicit strategy and hasher
    pub fn with_strategy(capacity: usize, strategy: P, hasher: H) -> Result<Self> {
        check_capacity(capacity)?;

        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity).map_err(|e| {
            HashProbeError::configuration(format!("cannot allocate {} slots: {}", capacity, e))
        })?;
        slots.resize_with(capacity, || None);

        Ok(Self {
            slots,
            len: 0,
            strategy,
            hasher,
            max_probes: None,
            stats: CollisionStats::default(),
        })
    }

    /// Cap probe sequences at `limit` slots (never above the strategy's own limit).
    ///
    /// The cap is raised to the longest probe run of the values already
    /// stored, so none of them becomes unreachable.
    pub fn with_max_probes(mut self, limit: usize) -> Self {
        let floor = self.stats.max_probe_length.max(1);
        if limit < floor {
            log::debug!(
                "raising probe cap {} to {} to keep {} stored values reachable",
                limit,
                floor,
                self.len
            );
        }
        self.max_probes = Some(limit.max(floor));
        self
    }

    /// Digest of `value` under this table's hasher
    #[inline]
    pub fn digest(&self, value: &str) -> u64 {
        self.hasher.digest(value)
    }

    /// Slot where probing for `value` starts
    #[inline]
    pub fn home_slot(&self, value: &str) -> usize {
        (self.digest(value) % self.capacity() as u64) as usize
    }

    /// Maximum number of slots one probe sequence examines
    pub fn probe_limit(&self) -> usize {
        let natural = self.strategy.probe_limit(self.capacity());
        match self.max_probes {
            Some(limit) => natural.min(limit),
            None => natural,
        }
    }

    /// Slots visited when inserting or looking up `value`
    pub fn probe_sequence(&self, value: &str) -> ProbeSequence {
        self.strategy
            .sequence(value, self.home_slot(value), self.capacity(), self.probe_limit())
    }

    /// Store `value` in the first free slot of its probe sequence.
    ///
    /// Duplicates are stored again. Returns the slot used, or
    /// [`HashProbeError::TableFull`] when no free slot is reachable.
    pub fn add(&mut self, value: impl Into<String>) -> Result<usize> {
        let value = value.into();
        let mut probes = 0;

        for slot in self.probe_sequence(&value) {
            probes += 1;
            if self.slots[slot].is_none() {
                if probes > 1 {
                    log::debug!(
                        "{} probing placed {:?} in slot {} after {} probes",
                        self.strategy.name(),
                        value,
                        slot,
                        probes
                    );
                }
                self.slots[slot] = Some(value);
                self.len += 1;
                self.stats.record_insert(probes);
                return Ok(slot);
            }
            log::trace!("slot {} occupied while adding {:?}", slot, value);
        }

        self.stats.record_failure();
        log::warn!(
            "{} table full: no free slot for {:?} after {} probes (len {}, capacity {})",
            self.strategy.name(),
            value,
            probes,
            self.len,
            self.capacity()
        );
        Err(HashProbeError::table_full(self.capacity(), probes))
    }

    /// Walk the probe sequence of `value` and report where it ended
    pub fn search(&self, value: &str) -> SearchOutcome {
        let mut probes = 0;

        for slot in self.probe_sequence(value) {
            probes += 1;
            match self.slots[slot].as_deref() {
                Some(stored) if stored == value => return SearchOutcome::Found { slot, probes },
                Some(_) => continue,
                None => return SearchOutcome::Absent { probes },
            }
        }

        log::debug!(
            "{} search for {:?} exhausted after {} probes",
            self.strategy.name(),
            value,
            probes
        );
        SearchOutcome::Exhausted { probes }
    }

    /// The stored value equal to `value`, if any
    pub fn find(&self, value: &str) -> Option<&str> {
        self.search(value)
            .slot()
            .and_then(|slot| self.slots[slot].as_deref())
    }

    /// True if `value` has been added
    pub fn exists(&self, value: &str) -> bool {
        self.find(value).is_some()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if nothing has been added
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fixed number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Occupied slots divided by capacity
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Collision statistics gathered by [`add`](Self::add)
    pub fn stats(&self) -> &CollisionStats {
        &self.stats
    }

    /// Occupied `(slot, value)` pairs in slot order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, value)| value.as_deref().map(|value| (slot, value)))
    }

    /// The probe strategy in use
    pub fn strategy(&self) -> &P {
        &self.strategy
    }

    /// The hasher in use
    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}

impl<P: ProbeStrategy, H: StringHasher> fmt::Display for OpenAddressingTable<P, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "OpenAddressingTable {{ strategy: {}, len: {}, capacity: {}, collisions: {} }}",
            self.strategy.name(),
            self.len,
            self.capacity(),
            self.stats.collisions
        )?;
        for (slot, value) in self.iter() {
            writeln!(f, "\t{}: {:?}", slot, value)?;
        }
        Ok(())
    }
}
