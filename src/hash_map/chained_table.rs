//! Separate chaining
//!
//! Every digest owns a singly-linked chain of the values that hash to it, in
//! insertion order. Lookups compare stored values, not digests, so colliding
//! values stay individually retrievable. Duplicates get their own node.

use crate::hash_map::hash_functions::{PositionalHasher, StringHasher};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Node in a collision chain
#[derive(Debug)]
struct ChainNode {
    value: String,
    next: Option<Box<ChainNode>>,
}

/// Append-only sequence of values sharing one digest
#[derive(Debug)]
pub struct Chain {
    head: Option<Box<ChainNode>>,
    len: usize,
}

impl Chain {
    fn single(value: String) -> Self {
        Self {
            head: Some(Box::new(ChainNode { value, next: None })),
            len: 1,
        }
    }

    /// Walk to the tail and link a new node there
    fn append(&mut self, value: String) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(ChainNode { value, next: None }));
        self.len += 1;
    }

    fn find(&self, value: &str) -> Option<&str> {
        self.iter().find(|stored| *stored == value)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false for chains held by a table
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Values from head to tail
    pub fn iter(&self) -> ChainIter<'_> {
        ChainIter { next: self.head.as_deref() }
    }
}

/// Iterator over the values of a [`Chain`]
pub struct ChainIter<'a> {
    next: Option<&'a ChainNode>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.value.as_str()
        })
    }
}

/// Hash table resolving collisions by separate chaining
pub struct ChainedTable<H = PositionalHasher> {
    members: HashMap<u64, Chain, ahash::RandomState>,
    hasher: H,
    len: usize,
}

impl ChainedTable<PositionalHasher> {
    /// Create an empty table using the positional hasher
    pub fn new() -> Self {
        Self::with_hasher(PositionalHasher::default())
    }
}

impl Default for ChainedTable<PositionalHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: StringHasher> ChainedTable<H> {
    /// Create an empty table using `hasher`
    pub fn with_hasher(hasher: H) -> Self {
        Self {
            members: HashMap::default(),
            hasher,
            len: 0,
        }
    }

    /// Digest of `value` under this table's hasher
    #[inline]
    pub fn digest(&self, value: &str) -> u64 {
        self.hasher.digest(value)
    }

    /// Append `value` to the chain of its digest, starting a chain if needed
    pub fn add(&mut self, value: impl Into<String>) {
        let value = value.into();
        let key = self.digest(&value);

        match self.members.get_mut(&key) {
            Some(chain) => {
                chain.append(value);
                log::trace!("digest {} chain grew to {}", key, chain.len());
            }
            None => {
                self.members.insert(key, Chain::single(value));
            }
        }
        self.len += 1;
    }

    /// First stored value equal to `value`
    pub fn find(&self, value: &str) -> Option<&str> {
        self.members.get(&self.digest(value))?.find(value)
    }

    /// True if `value` has been added
    pub fn exists(&self, value: &str) -> bool {
        self.find(value).is_some()
    }

    /// Chain holding every value with the same digest as `value`
    pub fn chain(&self, value: &str) -> Option<&Chain> {
        self.members.get(&self.digest(value))
    }

    /// Total values stored, duplicates included
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if nothing has been added
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct digests
    pub fn chain_count(&self) -> usize {
        self.members.len()
    }

    /// Length of the longest chain
    pub fn longest_chain(&self) -> usize {
        self.members.values().map(Chain::len).max().unwrap_or(0)
    }

    /// Chains in digest order
    pub fn iter(&self) -> impl Iterator<Item = (u64, &Chain)> {
        let ordered: BTreeMap<u64, &Chain> = self.members.iter().map(|(&key, chain)| (key, chain)).collect();
        ordered.into_iter()
    }

    /// The hasher in use
    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}

impl<H: StringHasher> fmt::Display for ChainedTable<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "ChainedTable {{ len: {}, chains: {}, longest: {} }}",
            self.len(),
            self.chain_count(),
            self.longest_chain()
        )?;
        for (key, chain) in self.iter() {
            let values: Vec<&str> = chain.iter().collect();
            writeln!(f, "\t{}: {:?}", key, values)?;
        }
        Ok(())
    }
}
