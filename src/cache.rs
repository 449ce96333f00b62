//! Content-keyed memoization of evaluation results.
//!
//! Facts are identified by a blake3 digest of a canonical, type-tagged
//! walk of the document, so two structurally equal facts hit the same
//! entry no matter where they were built. Entries map a fact digest to
//! the matched rule index, with `None` recording a definitive no-match.

use dashmap::DashMap;
use serde_json::{Number, Value};

/// How an engine memoizes evaluation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Remember every distinct fact seen.
    #[default]
    Unbounded,
    /// Remember at most this many distinct facts; the cache is flushed
    /// wholesale when it is full and another fact arrives. A limit of
    /// zero stores nothing.
    Bounded(usize),
    /// No memoization; every call re-evaluates.
    Disabled,
}

/// Digest identifying a fact by content.
pub(crate) type FactKey = [u8; 32];

#[derive(Debug)]
pub(crate) struct MatchCache {
    policy: CachePolicy,
    entries: DashMap<FactKey, Option<usize>>,
}

impl MatchCache {
    pub(crate) fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            entries: DashMap::new(),
        }
    }

    pub(crate) fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// Whether lookups can ever hit. Lets the engine skip hashing the
    /// fact entirely when the cache is disabled.
    pub(crate) fn enabled(&self) -> bool {
        self.policy != CachePolicy::Disabled
    }

    /// The cached result for `key`: `Some(Some(i))` for a match at rule
    /// `i`, `Some(None)` for a remembered no-match, `None` for a miss.
    pub(crate) fn lookup(&self, key: &FactKey) -> Option<Option<usize>> {
        self.entries.get(key).map(|entry| *entry)
    }

    pub(crate) fn store(&self, key: FactKey, result: Option<usize>) {
        match self.policy {
            CachePolicy::Disabled => {}
            CachePolicy::Unbounded => {
                self.entries.insert(key, result);
            }
            CachePolicy::Bounded(limit) => {
                if limit == 0 {
                    return;
                }
                if self.entries.len() >= limit && !self.entries.contains_key(&key) {
                    self.entries.clear();
                }
                self.entries.insert(key, result);
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

// -- Fact digests -----------------------------------------------------------

const TAG_NULL: u8 = 0;
const TAG_FALSE: u8 = 1;
const TAG_TRUE: u8 = 2;
const TAG_INT: u8 = 3;
const TAG_UINT: u8 = 4;
const TAG_FLOAT: u8 = 5;
const TAG_STRING: u8 = 6;
const TAG_ARRAY: u8 = 7;
const TAG_OBJECT: u8 = 8;

/// Digest a fact's content.
///
/// Object keys hash in map order, which is already canonical (the
/// underlying map is ordered by key), and every node carries a type tag
/// and length prefix so distinct documents cannot collide by
/// concatenation. Integer and float representations of the same number
/// hash differently; that only costs a cache miss, never a wrong hit.
pub(crate) fn fact_key(fact: &Value) -> FactKey {
    let mut hasher = blake3::Hasher::new();
    hash_value(&mut hasher, fact);
    hasher.finalize().into()
}

fn hash_value(hasher: &mut blake3::Hasher, value: &Value) {
    match value {
        Value::Null => {
            hasher.update(&[TAG_NULL]);
        }
        Value::Bool(false) => {
            hasher.update(&[TAG_FALSE]);
        }
        Value::Bool(true) => {
            hasher.update(&[TAG_TRUE]);
        }
        Value::Number(n) => hash_number(hasher, n),
        Value::String(s) => {
            hasher.update(&[TAG_STRING]);
            hasher.update(&(s.len() as u64).to_le_bytes());
            hasher.update(s.as_bytes());
        }
        Value::Array(items) => {
            hasher.update(&[TAG_ARRAY]);
            hasher.update(&(items.len() as u64).to_le_bytes());
            for item in items {
                hash_value(hasher, item);
            }
        }
        Value::Object(map) => {
            hasher.update(&[TAG_OBJECT]);
            hasher.update(&(map.len() as u64).to_le_bytes());
            for (key, item) in map {
                hasher.update(&(key.len() as u64).to_le_bytes());
                hasher.update(key.as_bytes());
                hash_value(hasher, item);
            }
        }
    }
}

fn hash_number(hasher: &mut blake3::Hasher, n: &Number) {
    if let Some(i) = n.as_i64() {
        hasher.update(&[TAG_INT]);
        hasher.update(&i.to_le_bytes());
    } else if let Some(u) = n.as_u64() {
        hasher.update(&[TAG_UINT]);
        hasher.update(&u.to_le_bytes());
    } else if let Some(f) = n.as_f64() {
        hasher.update(&[TAG_FLOAT]);
        hasher.update(&f.to_bits().to_le_bytes());
    } else {
        hasher.update(&[TAG_FLOAT]);
    }
}
