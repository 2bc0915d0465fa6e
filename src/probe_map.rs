use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::BuildHasher;
use core::hash::Hash;

use crate::probe::LinearProbe;
use crate::slot::Slot;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The default hash builder, foldhash's fast per-map-seeded hasher.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else {
        /// Placeholder for the default hash builder when the `foldhash`
        /// feature is disabled.
        ///
        /// Does not implement `BuildHasher`; construct maps through
        /// [`ProbeMap::with_hasher`] instead.
        pub type DefaultHashBuilder = ();
    }
}

/// Capacity of the first allocation, in slots.
const INITIAL_CAPACITY: usize = 4;

/// Fraction of slots that may be occupied before an insertion grows the
/// array.
const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.75;

/// Clamp bounds for [`ProbeMap::set_max_load_factor`]. Probe termination
/// requires load strictly below 1.0, and growth termination requires a bound
/// strictly above 0.
const MAX_LOAD_FACTOR_FLOOR: f64 = 0.10;
const MAX_LOAD_FACTOR_CEIL: f64 = 0.95;

/// The error returned by [`ProbeMap::at`] when the key has no entry.
///
/// Every other lookup-style operation reports absence through `Option` or
/// `bool` instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotFound;

impl core::fmt::Display for NotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("key not found in map")
    }
}

impl core::error::Error for NotFound {}

/// A hash map backed by open addressing with linear probing.
///
/// `ProbeMap<K, V, S>` stores every entry directly in one contiguous slot
/// array. A key's home bucket is `hash % capacity`; colliding keys occupy
/// the following slots in +1 wrapping scan order. Lookups therefore walk
/// neighboring memory, and no entry costs a separate allocation.
///
/// The array starts empty, allocates 4 slots on first insertion, and doubles
/// whenever an insertion would push the load factor above the configured
/// maximum (default 0.75). Keeping the array strictly below full is what
/// guarantees every probe sequence terminates. Removal compacts the probe
/// chain behind the vacated slot (backward-shift deletion), so the map never
/// accumulates tombstones.
///
/// Keys must implement `Default` in addition to `Hash + Eq`: an empty slot
/// stores a default-valued placeholder key, and only the presence of a value
/// marks a slot live.
///
/// This type is intentionally not `Clone`: it exclusively owns its slot
/// array and every value inside, and moving the map is the only supported
/// way to transfer that ownership. For concurrent use, wrap the whole map in
/// external synchronization; it performs no internal locking.
///
/// # Examples
///
/// ```rust
/// use probe_map::ProbeMap;
///
/// let mut map: ProbeMap<&str, i32> = ProbeMap::new();
/// map.insert("apples", 3);
/// map.insert("pears", 5);
///
/// assert_eq!(map.get(&"apples"), Some(&3));
/// assert_eq!(map.len(), 2);
///
/// map.remove(&"apples");
/// assert!(!map.contains_key(&"apples"));
/// ```
pub struct ProbeMap<K, V, S = DefaultHashBuilder> {
    slots: Vec<Slot<K, V>>,
    len: usize,
    max_load_factor: f64,
    hash_builder: S,
    probe: LinearProbe,
}

impl<K, V, S> Debug for ProbeMap<K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for slot in &self.slots {
            if let Some(value) = slot.value.as_ref() {
                map.entry(&slot.key, value);
            }
        }
        map.finish()
    }
}

fn empty_slots<K, V>(capacity: usize) -> Vec<Slot<K, V>>
where
    K: Default,
{
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, Slot::empty);
    slots
}

impl<K, V, S> ProbeMap<K, V, S>
where
    K: Hash + Eq + Default,
    S: BuildHasher,
{
    /// Creates a new map with the given hash builder.
    ///
    /// No slots are allocated until the first insertion (or an explicit
    /// [`reserve`]).
    ///
    /// [`reserve`]: ProbeMap::reserve
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_map::DefaultHashBuilder;
    /// use probe_map::ProbeMap;
    ///
    /// let map: ProbeMap<u64, String> = ProbeMap::with_hasher(DefaultHashBuilder::default());
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), 0);
    /// ```
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            hash_builder,
            probe: LinearProbe,
        }
    }

    /// Creates a new map with the given hash builder and room for at least
    /// `capacity` entries before any growth.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        let mut map = Self::with_hasher(hash_builder);
        map.reserve(capacity);
        map
    }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_map::ProbeMap;
    ///
    /// let mut map: ProbeMap<i32, &str> = ProbeMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.insert(1, "a");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the backing array.
    ///
    /// This is 0 until the first insertion or [`reserve`], then a doubling
    /// multiple of 4. The number of entries the map holds before growing is
    /// `capacity * max_load_factor`, not `capacity`.
    ///
    /// [`reserve`]: ProbeMap::reserve
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the fraction of slots currently occupied, or 0.0 for an
    /// unallocated map.
    pub fn load_factor(&self) -> f64 {
        if self.slots.is_empty() {
            return 0.0;
        }
        self.len as f64 / self.slots.len() as f64
    }

    /// Returns the maximum load factor insertions are allowed to reach.
    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Sets the maximum load factor.
    ///
    /// The value is clamped to `[0.10, 0.95]`: probing relies on the array
    /// never filling completely, so a bound of 1.0 (or more) must stay
    /// unreachable. The new bound takes effect on the next insertion; the
    /// array is not rehashed eagerly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_map::ProbeMap;
    ///
    /// let mut map: ProbeMap<u64, u64> = ProbeMap::new();
    /// map.set_max_load_factor(0.5);
    /// assert_eq!(map.max_load_factor(), 0.5);
    ///
    /// map.set_max_load_factor(2.0);
    /// assert!(map.max_load_factor() < 1.0);
    /// ```
    pub fn set_max_load_factor(&mut self, max_load_factor: f64) {
        self.max_load_factor = max_load_factor.clamp(MAX_LOAD_FACTOR_FLOOR, MAX_LOAD_FACTOR_CEIL);
    }

    /// Returns a reference to the map's hash builder.
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the key is already present its value is replaced and the old value
    /// is returned; the map never holds two live entries for one key. If the
    /// insertion would push the load factor above the maximum, the array
    /// grows (doubling) before any slot is probed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_map::ProbeMap;
    ///
    /// let mut map: ProbeMap<i32, &str> = ProbeMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.insert(37, "b"), Some("a"));
    /// assert_eq!(map.get(&37), Some(&"b"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.insert_index(key, value).1
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_map::ProbeMap;
    ///
    /// let mut map: ProbeMap<i32, &str> = ProbeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        let index = self.find_index(key)?;
        self.slots[index].value.as_ref()
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_map::ProbeMap;
    ///
    /// let mut map: ProbeMap<i32, i32> = ProbeMap::new();
    /// map.insert(1, 10);
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value += 1;
    /// }
    /// assert_eq!(map.get(&1), Some(&11));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.find_index(key)?;
        self.slots[index].value.as_mut()
    }

    /// Returns a reference to the value corresponding to the key, or
    /// [`NotFound`] if the key has no entry.
    ///
    /// Unlike the get-or-create access of [`entry`], this never inserts.
    ///
    /// [`entry`]: ProbeMap::entry
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_map::NotFound;
    /// use probe_map::ProbeMap;
    ///
    /// let mut map: ProbeMap<i32, &str> = ProbeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.at(&1), Ok(&"a"));
    /// assert_eq!(map.at(&2), Err(NotFound));
    /// ```
    pub fn at(&self, key: &K) -> Result<&V, NotFound> {
        self.get(key).ok_or(NotFound)
    }

    /// Returns `true` if the map contains an entry for the key.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_index(key).is_some()
    }

    /// Returns the number of entries for the key: 1 if present, 0 if not.
    pub fn count(&self, key: &K) -> usize {
        usize::from(self.contains_key(key))
    }

    /// Removes a key from the map, returning its value if it was present.
    ///
    /// Removal is tombstone-free: after the slot is vacated, subsequent
    /// entries whose probe sequences passed through it are shifted backward
    /// to close the gap, so every remaining key stays reachable. The array
    /// never shrinks on removal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_map::ProbeMap;
    ///
    /// let mut map: ProbeMap<i32, &str> = ProbeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was present.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let index = self.find_index(key)?;
        self.remove_at(index)
    }

    /// Gets the given key's corresponding entry in the map for in-place
    /// manipulation.
    ///
    /// `entry(key).or_default()` is the get-or-create index access: absent
    /// keys are inserted with a default value through the same growth and
    /// probing path as [`insert`], then a mutable reference is returned.
    ///
    /// [`insert`]: ProbeMap::insert
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_map::ProbeMap;
    ///
    /// let mut map: ProbeMap<&str, u64> = ProbeMap::new();
    /// *map.entry("counter").or_default() += 1;
    /// *map.entry("counter").or_default() += 1;
    /// assert_eq!(map.get(&"counter"), Some(&2));
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V, S> {
        match self.find_index(&key) {
            Some(index) => Entry::Occupied(OccupiedEntry { map: self, index }),
            None => Entry::Vacant(VacantEntry { map: self, key }),
        }
    }

    /// Removes all entries and deallocates the backing array.
    ///
    /// Every owned value is dropped and the capacity is reset to 0; the next
    /// insertion re-allocates from the initial capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_map::ProbeMap;
    ///
    /// let mut map: ProbeMap<i32, &str> = ProbeMap::new();
    /// map.insert(1, "a");
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.slots = Vec::new();
        self.len = 0;
    }

    /// Grows the map so it can hold at least `n` entries without exceeding
    /// the maximum load factor.
    ///
    /// The capacity never shrinks, and growth goes through the same rehash
    /// routine insertion-driven growth uses. Reserving on an unallocated map
    /// performs the initial allocation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_map::ProbeMap;
    ///
    /// let mut map: ProbeMap<u64, u64> = ProbeMap::new();
    /// map.reserve(100);
    /// let capacity = map.capacity();
    /// assert!(capacity as f64 * map.max_load_factor() >= 100.0);
    ///
    /// for key in 0..100 {
    ///     map.insert(key, key);
    /// }
    /// assert_eq!(map.capacity(), capacity);
    /// ```
    pub fn reserve(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let target = self.capacity_for(n);
        if target > self.slots.len() {
            self.rehash_into(target);
        }
    }

    /// Returns an iterator over the key-value pairs of the map.
    ///
    /// Only occupied slots are yielded, in slot order of the backing array
    /// (an arbitrary order from the caller's point of view).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_map::ProbeMap;
    ///
    /// let mut map: ProbeMap<i32, &str> = ProbeMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// let mut total = 0;
    /// for (key, _value) in map.iter() {
    ///     total += *key;
    /// }
    /// assert_eq!(total, 3);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.slots.iter(),
        }
    }

    /// Returns an iterator over the key-value pairs of the map with mutable
    /// references to the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.slots.iter_mut(),
        }
    }

    /// Returns an iterator over the keys of the map.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values of the map.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Returns an iterator that removes and yields all key-value pairs from
    /// the map.
    ///
    /// After calling `drain()` the map is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_map::ProbeMap;
    ///
    /// let mut map: ProbeMap<i32, &str> = ProbeMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// let pairs: Vec<_> = map.drain().collect();
    /// assert_eq!(pairs.len(), 2);
    /// assert!(map.is_empty());
    /// ```
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        self.len = 0;
        Drain {
            inner: self.slots.drain(..),
        }
    }

    /// Locates the slot holding `key`, without ever allocating.
    fn find_index(&self, key: &K) -> Option<usize> {
        if self.slots.is_empty() {
            return None;
        }
        let hash = self.hash_builder.hash_one(key);
        self.probe.find_slot(&self.slots, hash, |k| k == key)
    }

    /// The insertion path shared by `insert` and the vacant half of the
    /// entry API: grow if the new entry would exceed the maximum load
    /// factor, then probe and fill. Returns the occupied slot index and the
    /// replaced value, if any.
    fn insert_index(&mut self, key: K, value: V) -> (usize, Option<V>) {
        self.ensure_room_for_insert();
        let hash = self.hash_builder.hash_one(&key);
        let index = self.probe.insert_slot(&self.slots, hash, |k| k == &key);
        let slot = &mut self.slots[index];
        match slot.value.replace(value) {
            Some(old_value) => (index, Some(old_value)),
            None => {
                slot.key = key;
                self.len += 1;
                (index, None)
            }
        }
    }

    /// Grows the array before an insertion that would exceed the maximum
    /// load factor, allocating the initial array if none exists yet.
    fn ensure_room_for_insert(&mut self) {
        let target = self.capacity_for(self.len + 1);
        if target != self.slots.len() {
            self.rehash_into(target);
        }
    }

    /// Smallest supported capacity (the current one doubled zero or more
    /// times, at least [`INITIAL_CAPACITY`]) that keeps `entries` at or
    /// below the maximum load factor.
    fn capacity_for(&self, entries: usize) -> usize {
        let mut capacity = self.slots.len().max(INITIAL_CAPACITY);
        while entries as f64 / capacity as f64 > self.max_load_factor {
            capacity *= 2;
        }
        capacity
    }

    /// Re-places every live entry into a fresh array of `new_capacity` empty
    /// slots, moving keys and values. Entries land wherever their probe
    /// sequence against the new array puts them.
    fn rehash_into(&mut self, new_capacity: usize) {
        let old_slots = core::mem::replace(&mut self.slots, empty_slots(new_capacity));
        for slot in old_slots {
            if let Some(value) = slot.value {
                let hash = self.hash_builder.hash_one(&slot.key);
                let index = self.probe.insert_slot(&self.slots, hash, |k| k == &slot.key);
                self.slots[index] = Slot::new(slot.key, value);
            }
        }
    }

    /// Vacates the slot at `index` and closes the gap by backward-shifting.
    ///
    /// Under linear probing without tombstones, simply emptying a slot would
    /// cut the probe chains of every key that probed through it. So after
    /// the target is taken out, the scan walks forward: each occupied slot
    /// whose home bucket does not lie in the cyclic interval
    /// `(gap, cursor]` probed through the gap, and is pulled back into it.
    /// The first empty slot ends the walk.
    fn remove_at(&mut self, index: usize) -> Option<(K, V)> {
        let removed = self.slots[index].take()?;
        let capacity = self.slots.len();

        let mut gap = index;
        let mut cursor = (index + 1) % capacity;
        while self.slots[cursor].is_occupied() {
            let hash = self.hash_builder.hash_one(&self.slots[cursor].key);
            let home = (hash as usize) % capacity;
            let home_in_range = if gap < cursor {
                home > gap && home <= cursor
            } else {
                home > gap || home <= cursor
            };
            if !home_in_range {
                self.slots.swap(gap, cursor);
                gap = cursor;
            }
            cursor = (cursor + 1) % capacity;
        }

        self.len -= 1;
        Some(removed)
    }

    /// Value of the occupied slot at `index`.
    fn slot_value(&self, index: usize) -> &V {
        match self.slots[index].value.as_ref() {
            Some(value) => value,
            // Probing only hands out indices of populated slots.
            None => unreachable!(),
        }
    }

    /// Mutable value of the occupied slot at `index`.
    fn slot_value_mut(&mut self, index: usize) -> &mut V {
        match self.slots[index].value.as_mut() {
            Some(value) => value,
            None => unreachable!(),
        }
    }
}

impl<K, V, S> ProbeMap<K, V, S>
where
    K: Hash + Eq + Default,
    S: BuildHasher + Default,
{
    /// Creates a new map using the default hash builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_map::ProbeMap;
    ///
    /// let map: ProbeMap<u64, String> = ProbeMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(S::default())
    }

    /// Creates a new map with room for at least `capacity` entries, using
    /// the default hash builder.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, S::default())
    }
}

impl<K, V, S> Default for ProbeMap<K, V, S>
where
    K: Hash + Eq + Default,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

/// A view into a single entry in the map, which may either be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`ProbeMap`].
///
/// [`entry`]: ProbeMap::entry
pub enum Entry<'a, K, V, S = DefaultHashBuilder> {
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V, S>),
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V, S>),
}

impl<'a, K, V, S> Entry<'a, K, V, S>
where
    K: Hash + Eq + Default,
    S: BuildHasher,
{
    /// Inserts the given value if the entry is vacant and returns a mutable
    /// reference to the entry's value.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts a value computed from a closure if the entry is vacant and
    /// returns a mutable reference to the entry's value.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential inserts.
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }

    /// Returns a reference to this entry's key.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }
}

impl<'a, K, V, S> Entry<'a, K, V, S>
where
    K: Hash + Eq + Default,
    V: Default,
    S: BuildHasher,
{
    /// Inserts the default value if the entry is vacant and returns a
    /// mutable reference to the entry's value.
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(Default::default)
    }
}

/// A view into a vacant entry in the map.
pub struct VacantEntry<'a, K, V, S = DefaultHashBuilder> {
    map: &'a mut ProbeMap<K, V, S>,
    key: K,
}

impl<'a, K, V, S> VacantEntry<'a, K, V, S>
where
    K: Hash + Eq + Default,
    S: BuildHasher,
{
    /// Gets a reference to the key that would be used when inserting a
    /// value.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Takes ownership of the key.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Inserts the value into the map and returns a mutable reference to it.
    pub fn insert(self, value: V) -> &'a mut V {
        let VacantEntry { map, key } = self;
        let (index, _replaced) = map.insert_index(key, value);
        map.slot_value_mut(index)
    }
}

/// A view into an occupied entry in the map.
pub struct OccupiedEntry<'a, K, V, S = DefaultHashBuilder> {
    map: &'a mut ProbeMap<K, V, S>,
    index: usize,
}

impl<'a, K, V, S> OccupiedEntry<'a, K, V, S>
where
    K: Hash + Eq + Default,
    S: BuildHasher,
{
    /// Gets a reference to the key in the entry.
    pub fn key(&self) -> &K {
        &self.map.slots[self.index].key
    }

    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        self.map.slot_value(self.index)
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        self.map.slot_value_mut(self.index)
    }

    /// Converts the entry into a mutable reference to the value.
    pub fn into_mut(self) -> &'a mut V {
        let OccupiedEntry { map, index } = self;
        map.slot_value_mut(index)
    }

    /// Replaces the entry's value and returns the old value.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(self.get_mut(), value)
    }

    /// Removes the entry from the map and returns the value.
    pub fn remove(self) -> V {
        self.remove_entry().1
    }

    /// Removes the entry from the map and returns the key and value.
    pub fn remove_entry(self) -> (K, V) {
        let OccupiedEntry { map, index } = self;
        match map.remove_at(index) {
            Some(entry) => entry,
            // An occupied entry always points at a populated slot.
            None => unreachable!(),
        }
    }
}

/// An iterator over the key-value pairs of a `ProbeMap`.
pub struct Iter<'a, K, V> {
    inner: core::slice::Iter<'a, Slot<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let slot = self.inner.next()?;
            if let Some(value) = slot.value.as_ref() {
                return Some((&slot.key, value));
            }
        }
    }
}

/// An iterator over the key-value pairs of a `ProbeMap` with mutable value
/// references.
pub struct IterMut<'a, K, V> {
    inner: core::slice::IterMut<'a, Slot<K, V>>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let slot = self.inner.next()?;
            if let Some(value) = slot.value.as_mut() {
                return Some((&slot.key, value));
            }
        }
    }
}

/// An iterator over the keys of a `ProbeMap`.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}

/// An iterator over the values of a `ProbeMap`.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }
}

/// An owning iterator over the key-value pairs of a `ProbeMap`.
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<Slot<K, V>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let slot = self.inner.next()?;
            if let Some(value) = slot.value {
                return Some((slot.key, value));
            }
        }
    }
}

/// A draining iterator over the key-value pairs of a `ProbeMap`.
pub struct Drain<'a, K, V> {
    inner: alloc::vec::Drain<'a, Slot<K, V>>,
}

impl<'a, K, V> Iterator for Drain<'a, K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let slot = self.inner.next()?;
            if let Some(value) = slot.value {
                return Some((slot.key, value));
            }
        }
    }
}

impl<K, V, S> IntoIterator for ProbeMap<K, V, S>
where
    K: Hash + Eq + Default,
    S: BuildHasher,
{
    type IntoIter = IntoIter<K, V>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.slots.into_iter(),
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a ProbeMap<K, V, S>
where
    K: Hash + Eq + Default,
    S: BuildHasher,
{
    type IntoIter = Iter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut ProbeMap<K, V, S>
where
    K: Hash + Eq + Default,
    S: BuildHasher,
{
    type IntoIter = IterMut<'a, K, V>;
    type Item = (&'a K, &'a mut V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, S> FromIterator<(K, V)> for ProbeMap<K, V, S>
where
    K: Hash + Eq + Default,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::with_hasher(S::default());
        map.extend(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for ProbeMap<K, V, S>
where
    K: Hash + Eq + Default,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
