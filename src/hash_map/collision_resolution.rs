//! Probe strategies for open addressing
//!
//! Each strategy turns a value and its home slot into a finite
//! [`ProbeSequence`] of slot indices:
//! - [`LinearProbe`]: `+1` per attempt
//! - [`QuadraticProbe`]: `+k²` at attempt `k`, applied to the current slot
//! - [`DoubleHashProbe`]: `+stride` per attempt, stride taken from a second hash
//!
//! Sequences are bounded. Linear and double-hash sequences visit every slot
//! within `capacity` attempts. The quadratic position `home + Σ j²` taken modulo
//! `capacity` repeats with a period dividing `6 · capacity`, so that many
//! attempts reach every slot the strategy can ever reach.

use crate::hash_map::hash_functions::{SeededHasher, StringHasher};

/// Attempts per slot allowed to quadratic probing before the sequence repeats
pub const QUADRATIC_PERIOD_FACTOR: usize = 6;

/// How a probe sequence advances from one slot to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStep {
    /// Next slot is `current + 1`
    Linear,
    /// Next slot is `current + k²` at attempt `k`
    Quadratic,
    /// Next slot is `current + stride`
    Stride(usize),
}

impl ProbeStep {
    #[inline]
    fn advance(self, current: usize, attempt: usize, capacity: usize) -> usize {
        let offset = match self {
            ProbeStep::Linear => 1,
            ProbeStep::Quadratic => {
                let k = (attempt % capacity) as u128;
                k * k
            }
            ProbeStep::Stride(stride) => stride as u128,
        };
        ((current as u128 + offset) % capacity as u128) as usize
    }
}

/// Collision resolution strategy for open-addressing tables
pub trait ProbeStrategy {
    /// Short strategy name used in diagnostics
    fn name(&self) -> &'static str;

    /// Step rule for `value` in a table of `capacity` slots
    fn step(&self, value: &str, capacity: usize) -> ProbeStep;

    /// Number of attempts after which the sequence yields nothing new
    fn probe_limit(&self, capacity: usize) -> usize {
        capacity
    }

    /// Build the bounded probe sequence starting at `home`
    fn sequence(&self, value: &str, home: usize, capacity: usize, limit: usize) -> ProbeSequence {
        ProbeSequence::new(home, capacity, self.step(value, capacity), limit)
    }
}

/// Linear probing: scan forward one slot at a time, wrapping around
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearProbe;

impl ProbeStrategy for LinearProbe {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn step(&self, _value: &str, _capacity: usize) -> ProbeStep {
        ProbeStep::Linear
    }
}

/// Quadratic probing: advance by successive squares, wrapping around
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuadraticProbe;

impl ProbeStrategy for QuadraticProbe {
    fn name(&self) -> &'static str {
        "quadratic"
    }

    fn step(&self, _value: &str, _capacity: usize) -> ProbeStep {
        ProbeStep::Quadratic
    }

    fn probe_limit(&self, capacity: usize) -> usize {
        capacity.saturating_mul(QUADRATIC_PERIOD_FACTOR)
    }
}

/// Double hashing: stride derived from a second, independent hash
#[derive(Debug, Clone, Default)]
pub struct DoubleHashProbe<S = SeededHasher> {
    secondary: S,
}

impl<S: StringHasher> DoubleHashProbe<S> {
    /// Use `secondary` to derive strides
    pub fn new(secondary: S) -> Self {
        Self { secondary }
    }

    /// The second hash function
    pub fn secondary(&self) -> &S {
        &self.secondary
    }

    /// Stride for `value`: always in `[1, capacity)` and coprime with
    /// `capacity`, so `capacity` attempts visit every slot exactly once.
    ///
    /// Starts from `1 + secondary(value) mod (capacity - 1)` and walks forward
    /// (wrapping back to 1) until the candidate shares no factor with
    /// `capacity`. A single-slot table uses stride 1.
    pub fn stride(&self, value: &str, capacity: usize) -> usize {
        if capacity <= 1 {
            return 1;
        }

        let span = capacity - 1;
        let mut stride = 1 + (self.secondary.digest(value) % span as u64) as usize;
        while gcd(stride, capacity) != 1 {
            stride = stride % span + 1;
        }
        stride
    }
}

impl<S: StringHasher> ProbeStrategy for DoubleHashProbe<S> {
    fn name(&self) -> &'static str {
        "double_hash"
    }

    fn step(&self, value: &str, capacity: usize) -> ProbeStep {
        ProbeStep::Stride(self.stride(value, capacity))
    }
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Bounded sequence of slot indices visited by one insertion or lookup.
///
/// The first item is always the home slot.
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    capacity: usize,
    current: usize,
    attempt: usize,
    step: ProbeStep,
    remaining: usize,
}

impl ProbeSequence {
    /// Create a sequence of at most `limit` slots starting at `home`
    pub fn new(home: usize, capacity: usize, step: ProbeStep, limit: usize) -> Self {
        debug_assert!(capacity > 0, "probe sequence over an empty table");
        Self {
            capacity,
            current: home % capacity.max(1),
            attempt: 0,
            step,
            remaining: limit,
        }
    }

    /// Slots yielded so far
    pub fn attempts(&self) -> usize {
        self.attempt
    }

    /// Step rule in use
    pub fn step(&self) -> ProbeStep {
        self.step
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        if self.attempt > 0 {
            self.current = self.step.advance(self.current, self.attempt, self.capacity);
        }
        self.attempt += 1;
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}

/// Collision resolution statistics for one table
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CollisionStats {
    /// Successful insertions
    pub inserts: usize,
    /// Insertions whose home slot was already taken
    pub collisions: usize,
    /// Slots examined by all successful insertions
    pub total_probes: usize,
    /// Longest probe run of a successful insertion
    pub max_probe_length: usize,
    /// Insertions rejected because the probe limit ran out
    pub failed_inserts: usize,
}

impl CollisionStats {
    pub(crate) fn record_insert(&mut self, probes: usize) {
        self.inserts += 1;
        self.total_probes += probes;
        self.max_probe_length = self.max_probe_length.max(probes);
        if probes > 1 {
            self.collisions += 1;
        }
    }

    pub(crate) fn record_failure(&mut self) {
        self.failed_inserts += 1;
    }

    /// Mean slots examined per successful insertion
    pub fn average_probe_length(&self) -> f64 {
        if self.inserts == 0 {
            0.0
        } else {
            self.total_probes as f64 / self.inserts as f64
        }
    }
}
