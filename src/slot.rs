/// A single storage slot: a key plus an optionally-present owned value.
///
/// The value doubles as the occupancy marker. A slot whose `value` is `None`
/// is empty, and its key is a default-valued placeholder that must never be
/// read as live data; there is no separate occupied flag and no tombstone
/// state. Dropping a slot drops the owned value through `Option`'s drop
/// glue, so the backing array needs no manual cleanup on growth or clear.
///
/// `Clone` deep-copies the owned value. It exists for rehashing-adjacent
/// debugging and tests; the map itself moves slots, it never clones them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot<K, V> {
    /// The slot's key. Only meaningful while `value` is present.
    pub key: K,
    /// The stored value. `None` marks the slot empty.
    pub value: Option<V>,
}

impl<K, V> Slot<K, V> {
    /// Creates an empty slot with a placeholder key.
    pub fn empty() -> Self
    where
        K: Default,
    {
        Self {
            key: K::default(),
            value: None,
        }
    }

    /// Creates an occupied slot holding `key` and `value`.
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value: Some(value),
        }
    }

    /// Returns `true` if the slot holds no value.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Returns `true` if the slot holds a value.
    pub fn is_occupied(&self) -> bool {
        self.value.is_some()
    }

    /// Vacates the slot, returning its key and value if it was occupied.
    ///
    /// The slot is left empty with a default placeholder key.
    pub fn take(&mut self) -> Option<(K, V)>
    where
        K: Default,
    {
        let value = self.value.take()?;
        let key = core::mem::take(&mut self.key);
        Some((key, value))
    }
}

impl<K, V> Default for Slot<K, V>
where
    K: Default,
{
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::vec;

    use super::*;

    #[test]
    fn test_empty_slot() {
        let slot: Slot<u64, i32> = Slot::empty();
        assert!(slot.is_empty());
        assert!(!slot.is_occupied());
        assert_eq!(slot.key, 0);
        assert_eq!(slot.value, None);
        assert_eq!(slot, Slot::default());
    }

    #[test]
    fn test_occupied_slot() {
        let slot = Slot::new(7u64, "seven");
        assert!(slot.is_occupied());
        assert_eq!(slot.key, 7);
        assert_eq!(slot.value, Some("seven"));
    }

    #[test]
    fn test_take_vacates() {
        let mut slot = Slot::new(3u64, "three");
        assert_eq!(slot.take(), Some((3, "three")));
        assert!(slot.is_empty());
        assert_eq!(slot.key, 0);
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_clone_deep_copies_value() {
        let slot = Slot::new(1u64, Box::new(vec![1, 2, 3]));
        let mut copy = slot.clone();
        if let Some(v) = copy.value.as_mut() {
            v.push(4);
        }

        assert_eq!(slot.value.as_deref(), Some(&vec![1, 2, 3]));
        assert_eq!(copy.value.as_deref(), Some(&vec![1, 2, 3, 4]));
    }

    #[test]
    fn test_move_transfers_ownership() {
        let slot = Slot::new(9u64, Box::new(42));
        let moved = slot;
        assert_eq!(moved.value.as_deref(), Some(&42));
    }
}
