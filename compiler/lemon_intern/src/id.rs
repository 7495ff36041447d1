//! Handles to interned patterns.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU32, Ordering};

/// Shard count of every `PatternInterner`.
pub(crate) const NUM_SHARDS: usize = 16;

/// Largest slot index a shard can hand out.
pub(crate) const MAX_SLOT: u32 = (1 << 28) - 1;

static NEXT_OWNER: AtomicU32 = AtomicU32::new(0);

/// Identity of one interner instance, stamped into every id it issues.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct Owner(u32);

impl Owner {
    pub(crate) fn fresh() -> Self {
        Owner(NEXT_OWNER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to a pattern of kind `T` held by one specific interner.
///
/// The kind is part of the type, so a verb id cannot be passed to an NP
/// interner. The issuing interner is recorded in the id, so another
/// interner of the same kind resolves it to `None`. Ids are only obtained
/// from an interner; there is no public constructor.
pub struct PatternId<T> {
    owner: Owner,
    /// Shard in the top 4 bits, slot within the shard in the low 28.
    slot: u32,
    kind: PhantomData<fn() -> T>,
}

impl<T> PatternId<T> {
    #[inline]
    pub(crate) fn new(owner: Owner, shard: u32, slot: u32) -> Self {
        debug_assert!((shard as usize) < NUM_SHARDS);
        debug_assert!(slot <= MAX_SLOT);
        PatternId {
            owner,
            slot: (shard << 28) | slot,
            kind: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn owner(self) -> Owner {
        self.owner
    }

    #[inline]
    pub(crate) fn shard(self) -> usize {
        (self.slot >> 28) as usize
    }

    #[inline]
    pub(crate) fn slot(self) -> usize {
        (self.slot & MAX_SLOT) as usize
    }
}

// Manual impls: derives would demand the same traits from `T`.

impl<T> Clone for PatternId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PatternId<T> {}

impl<T> PartialEq for PatternId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.slot == other.slot
    }
}

impl<T> Eq for PatternId<T> {}

impl<T> Hash for PatternId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owner.hash(state);
        self.slot.hash(state);
    }
}

impl<T> fmt::Debug for PatternId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PatternId(#{} {}:{})",
            self.owner.0,
            self.shard(),
            self.slot()
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_packs_shard_and_slot() {
        let owner = Owner::fresh();
        let id = PatternId::<()>::new(owner, 5, 1234);
        assert_eq!(id.shard(), 5);
        assert_eq!(id.slot(), 1234);
        assert_eq!(id.owner(), owner);

        let last = PatternId::<()>::new(owner, 15, MAX_SLOT);
        assert_eq!(last.shard(), 15);
        assert_eq!(last.slot(), MAX_SLOT as usize);
    }

    #[test]
    fn test_owners_are_distinct() {
        assert_ne!(Owner::fresh(), Owner::fresh());
    }

    #[test]
    fn test_same_slot_different_owner_differs() {
        let a = PatternId::<()>::new(Owner::fresh(), 2, 9);
        let b = PatternId::<()>::new(Owner::fresh(), 2, 9);
        assert_ne!(a, b);

        let set: HashSet<_> = [a, a, b].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_debug_shows_owner_and_location() {
        let owner = Owner::fresh();
        let id = PatternId::<()>::new(owner, 3, 7);
        assert_eq!(format!("{id:?}"), format!("PatternId(#{} 3:7)", owner.0));
    }
}
