//! Sharded hash-consing interner for pattern trees.
//!
//! Structurally equal patterns intern to the same `PatternId`. Lookup is
//! keyed by the pattern's structural fingerprint and confirmed with full
//! equality, so fingerprint collisions never merge distinct patterns.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lemon_ir::{Fingerprint, Np, VerbPattern};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::id::{Owner, MAX_SLOT, NUM_SHARDS};
use crate::PatternId;

/// Error when interning a pattern fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InternError {
    /// Shard ran out of 28-bit slots.
    #[error("interner shard {shard} exceeded capacity: {count} patterns, max is {max}", max = MAX_SLOT)]
    ShardOverflow { shard: usize, count: usize },
}

/// Per-shard storage for interned patterns.
struct Shard<T> {
    /// Fingerprint to slots. More than one slot means a collision.
    map: FxHashMap<u64, Vec<u32>>,
    patterns: Vec<T>,
}

impl<T> Shard<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            map: FxHashMap::default(),
            patterns: Vec::with_capacity(capacity),
        }
    }
}

impl<T: Eq> Shard<T> {
    fn find(&self, fingerprint: u64, pattern: &T) -> Option<u32> {
        self.map
            .get(&fingerprint)?
            .iter()
            .copied()
            .find(|&slot| self.patterns[slot as usize] == *pattern)
    }
}

/// Sharded pattern interner for concurrent access.
///
/// # Thread Safety
/// Uses `RwLock` per shard for concurrent read/write access.
/// Wrap in `SharedPatternInterner` to share across threads.
pub struct PatternInterner<T> {
    owner: Owner,
    shards: [RwLock<Shard<T>>; NUM_SHARDS],
    /// Total count of interned patterns across all shards (O(1) `len()`).
    total_count: AtomicUsize,
}

/// Interner for verb patterns.
pub type VerbInterner = PatternInterner<VerbPattern>;

/// Interner for noun-phrase patterns.
pub type NpInterner = PatternInterner<Np>;

impl<T> PatternInterner<T> {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Create an interner that preallocates `per_shard` slots in every shard.
    pub fn with_capacity(per_shard: usize) -> Self {
        Self {
            owner: Owner::fresh(),
            shards: std::array::from_fn(|_| RwLock::new(Shard::with_capacity(per_shard))),
            total_count: AtomicUsize::new(0),
        }
    }

    /// Get the number of interned patterns.
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    /// Check if the interner is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether `id` was issued by this interner.
    pub fn contains(&self, id: PatternId<T>) -> bool {
        id.owner() == self.owner
    }

    /// Run `f` on the pattern behind `id` without cloning it.
    ///
    /// `None` for an id issued by another interner. Holds the shard's read
    /// lock while `f` runs; do not intern from `f`.
    pub fn with<R>(&self, id: PatternId<T>, f: impl FnOnce(&T) -> R) -> Option<R> {
        if !self.contains(id) {
            return None;
        }
        let guard = self.shards[id.shard()].read();
        guard.patterns.get(id.slot()).map(f)
    }

    #[inline]
    fn id(&self, shard: u32, slot: u32) -> PatternId<T> {
        PatternId::new(self.owner, shard, slot)
    }
}

impl<T: Clone> PatternInterner<T> {
    /// Look up an interned pattern, returning a copy.
    pub fn get(&self, id: PatternId<T>) -> Option<T> {
        self.with(id, T::clone)
    }
}

impl<T: Fingerprint + Eq + Clone> PatternInterner<T> {
    /// Compute shard for a pattern from its fingerprint.
    #[inline]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "result is bounded by NUM_SHARDS (16)"
    )]
    fn shard_for(fingerprint: u64) -> u32 {
        (fingerprint % NUM_SHARDS as u64) as u32
    }

    /// Try to intern a pattern, returning its id or an error on overflow.
    ///
    /// Clones the pattern only when it is not already interned.
    pub fn try_intern(&self, pattern: &T) -> Result<PatternId<T>, InternError> {
        let fingerprint = pattern.fingerprint();
        let shard_idx = Self::shard_for(fingerprint);
        let shard = &self.shards[shard_idx as usize];

        // Fast path: check if already interned
        {
            let guard = shard.read();
            if let Some(slot) = guard.find(fingerprint, pattern) {
                return Ok(self.id(shard_idx, slot));
            }
        }

        // Slow path: need to insert
        let mut guard = shard.write();

        // Double-check after acquiring write lock
        if let Some(slot) = guard.find(fingerprint, pattern) {
            return Ok(self.id(shard_idx, slot));
        }

        let count = guard.patterns.len();
        let slot = u32::try_from(count)
            .ok()
            .filter(|&slot| slot <= MAX_SLOT)
            .ok_or(InternError::ShardOverflow {
                shard: shard_idx as usize,
                count,
            })?;

        let slots = guard.map.entry(fingerprint).or_default();
        if !slots.is_empty() {
            tracing::debug!(
                fingerprint,
                shard = shard_idx,
                existing = slots.len(),
                "fingerprint collision between unequal patterns"
            );
        }
        slots.push(slot);
        guard.patterns.push(pattern.clone());

        self.total_count.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(shard = shard_idx, slot, "interned new pattern");

        Ok(self.id(shard_idx, slot))
    }

    /// Intern a pattern, returning its id.
    ///
    /// # Panics
    /// Panics if a shard runs out of slots.
    /// Use `try_intern` for fallible interning.
    pub fn intern(&self, pattern: &T) -> PatternId<T> {
        self.try_intern(pattern).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up the id of an already interned pattern without inserting it.
    pub fn lookup(&self, pattern: &T) -> Option<PatternId<T>> {
        let fingerprint = pattern.fingerprint();
        let shard_idx = Self::shard_for(fingerprint);
        let guard = self.shards[shard_idx as usize].read();
        guard
            .find(fingerprint, pattern)
            .map(|slot| self.id(shard_idx, slot))
    }
}

impl<T> Default for PatternInterner<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe shared reference to a pattern interner.
///
/// Clones share the same tables and owner, so ids from one clone resolve in
/// another.
pub struct SharedPatternInterner<T>(Arc<PatternInterner<T>>);

impl<T> SharedPatternInterner<T> {
    pub fn new() -> Self {
        SharedPatternInterner(Arc::new(PatternInterner::new()))
    }
}

impl<T> Clone for SharedPatternInterner<T> {
    fn clone(&self) -> Self {
        SharedPatternInterner(Arc::clone(&self.0))
    }
}

impl<T> Default for SharedPatternInterner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::ops::Deref for SharedPatternInterner<T> {
    type Target = PatternInterner<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
