//! Property-based testing for the hashers and every table
//!
//! Uses proptest to check round trips on arbitrary (and deliberately
//! colliding) inputs.

use hashprobe::hash_map::{
    ChainedTable, DoubleHashProbe, DoubleHashTable, LinearProbeTable, NaiveHasher,
    PositionalHasher, ProbeStrategy, QuadraticProbeTable, SearchOutcome, SeededHasher,
    StringHasher, POSITIONAL_MODULUS,
};
use proptest::prelude::*;
use std::collections::HashSet;

// =============================================================================
// PROPERTY TEST GENERATORS
// =============================================================================

/// Short lowercase words; small alphabet so naive digests collide often
fn word_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::char::range('a', 'f'), 0..8)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Distinct words, fewer than `max`
fn distinct_words(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set(word_strategy(), 0..max)
        .prop_map(|set| set.into_iter().collect())
}

// =============================================================================
// HASHER PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_naive_hash_ignores_order(word in "[a-z]{0,12}") {
        let mut reversed: Vec<char> = word.chars().collect();
        reversed.reverse();
        let reversed: String = reversed.into_iter().collect();

        prop_assert_eq!(NaiveHasher.digest(&word), NaiveHasher.digest(&reversed));
    }

    #[test]
    fn prop_positional_hash_is_bounded(word in any::<String>()) {
        let hasher = PositionalHasher::default();
        prop_assert!(hasher.digest(&word) < POSITIONAL_MODULUS);
    }

    #[test]
    fn prop_hashers_are_deterministic(word in any::<String>()) {
        prop_assert_eq!(NaiveHasher.digest(&word), NaiveHasher.digest(&word));
        prop_assert_eq!(
            PositionalHasher::default().digest(&word),
            PositionalHasher::default().digest(&word)
        );
        prop_assert_eq!(SeededHasher::default().digest(&word), SeededHasher::default().digest(&word));
    }

    #[test]
    fn prop_double_hash_stride_is_coprime(word in any::<String>(), capacity in 1usize..512) {
        let stride = DoubleHashProbe::<SeededHasher>::default().stride(&word, capacity);
        prop_assert!(stride >= 1);

        let (mut a, mut b) = (stride, capacity);
        while b != 0 {
            let r = a % b;
            a = b;
            b = r;
        }
        prop_assert_eq!(a, 1);
    }
}

// =============================================================================
// TABLE PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_chained_round_trip(words in prop::collection::vec(word_strategy(), 0..64)) {
        let mut table = ChainedTable::with_hasher(NaiveHasher);
        for word in &words {
            table.add(word.as_str());
        }

        prop_assert_eq!(table.len(), words.len());
        for word in &words {
            prop_assert_eq!(table.find(word), Some(word.as_str()));
        }
    }

    #[test]
    fn prop_linear_round_trip(words in distinct_words(32)) {
        let mut table = LinearProbeTable::with_hasher(32, NaiveHasher).unwrap();
        for word in &words {
            table.add(word.as_str()).unwrap();
        }
        for word in &words {
            prop_assert_eq!(table.find(word), Some(word.as_str()));
        }
    }

    #[test]
    fn prop_double_hash_round_trip(words in distinct_words(32)) {
        let mut table = DoubleHashTable::with_hasher(32, NaiveHasher).unwrap();
        for word in &words {
            table.add(word.as_str()).unwrap();
        }
        for word in &words {
            prop_assert_eq!(table.find(word), Some(word.as_str()));
        }
    }

    #[test]
    fn prop_quadratic_finds_whatever_it_stored(words in distinct_words(32)) {
        // 37 is not a power of two, so the cumulative-square sequence may miss
        // free slots; only successful insertions are required to be found
        let mut table = QuadraticProbeTable::with_hasher(37, NaiveHasher).unwrap();
        let mut stored = Vec::new();
        for word in &words {
            if table.add(word.as_str()).is_ok() {
                stored.push(word);
            }
        }
        for word in stored {
            prop_assert_eq!(table.find(word), Some(word.as_str()));
        }
    }

    #[test]
    fn prop_absent_words_are_not_found(
        words in distinct_words(16),
        probe in word_strategy(),
    ) {
        prop_assume!(!words.contains(&probe));

        let mut table = LinearProbeTable::with_hasher(16, NaiveHasher).unwrap();
        for word in &words {
            table.add(word.as_str()).unwrap();
        }

        prop_assert_eq!(table.find(&probe), None);
        let found = matches!(table.search(&probe), SearchOutcome::Found { .. });
        prop_assert!(!found);
    }

    #[test]
    fn prop_each_value_occupies_one_slot(words in distinct_words(24)) {
        let mut table = DoubleHashTable::new(24).unwrap();
        let mut slots = HashSet::new();
        for word in &words {
            let slot = table.add(word.as_str()).unwrap();
            prop_assert!(slots.insert(slot), "slot {} reused", slot);
            prop_assert_eq!(table.search(word).slot(), Some(slot));
        }
        prop_assert_eq!(table.len(), slots.len());
    }

    #[test]
    fn prop_probe_sequences_stay_in_bounds(word in any::<String>(), capacity in 1usize..128) {
        let table = QuadraticProbeTable::new(capacity).unwrap();
        let limit = table.strategy().probe_limit(capacity);
        let slots: Vec<usize> = table.probe_sequence(&word).collect();

        prop_assert_eq!(slots.len(), limit);
        prop_assert!(slots.iter().all(|&slot| slot < capacity));
        prop_assert_eq!(slots[0], table.home_slot(&word));
    }
}
