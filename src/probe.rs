use crate::slot::Slot;

/// The linear probing policy.
///
/// A stateless addressing strategy over a slot array: a key's probe sequence
/// starts at its home bucket (`hash % capacity`) and advances by +1, wrapping
/// at the array end. Colliding keys resolve strictly in scan order; there is
/// no secondary hash and no displacement, which makes clustering a known
/// performance characteristic rather than a correctness concern.
///
/// Both probes are pure reads. The hash is computed by the caller from its
/// `BuildHasher`, and key equality is injected per call as a closure, so the
/// policy itself carries no configuration.
///
/// Every probe sequence is finite only while the array has at least one empty
/// slot. The map's load-factor policy grows the array before it can fill, so
/// the precondition is enforced structurally and never checked here; probing
/// a full array would scan forever.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearProbe;

impl LinearProbe {
    /// Locates the slot an insertion for a key should occupy.
    ///
    /// Returns the first slot in the key's probe sequence that is either
    /// empty (a fresh insertion) or holds a matching key (an update). The
    /// caller must ensure `slots` is non-empty and not full.
    pub fn insert_slot<K, V, F>(&self, slots: &[Slot<K, V>], hash: u64, mut is_match: F) -> usize
    where
        F: FnMut(&K) -> bool,
    {
        let capacity = slots.len();
        let mut bucket = (hash as usize) % capacity;

        while slots[bucket].is_occupied() && !is_match(&slots[bucket].key) {
            bucket = (bucket + 1) % capacity;
        }

        bucket
    }

    /// Locates the slot holding a key, or reports that it is absent.
    ///
    /// Walks the same probe sequence as [`insert_slot`], but the first empty
    /// slot terminates the search with `None`: under linear probing without
    /// tombstones, an empty slot proves no later slot can hold the key. The
    /// caller must ensure `slots` is non-empty and not full.
    ///
    /// [`insert_slot`]: LinearProbe::insert_slot
    pub fn find_slot<K, V, F>(
        &self,
        slots: &[Slot<K, V>],
        hash: u64,
        mut is_match: F,
    ) -> Option<usize>
    where
        F: FnMut(&K) -> bool,
    {
        let capacity = slots.len();
        let mut bucket = (hash as usize) % capacity;

        while slots[bucket].is_occupied() {
            if is_match(&slots[bucket].key) {
                return Some(bucket);
            }
            bucket = (bucket + 1) % capacity;
        }

        None
    }
}
