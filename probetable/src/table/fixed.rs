// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt;

use crate::error::Error;
use crate::error::ErrorKind;
use crate::hash::Fmix32;
use crate::hash::KeyHasher;
use crate::table::Iter;

/// An occupied slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Entry {
    pub(super) key: i32,
    pub(super) value: i32,
}

/// Outcome of scanning a key's probe sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// The slot holding the key.
    Occupied(usize),
    /// The first free slot on the sequence; the key is absent.
    Vacant(usize),
    /// Every slot was visited without a match or a free slot.
    Exhausted,
}

/// Fixed-capacity, open-addressing hash table with linear probing.
///
/// # Invariants
///
/// - `slots.len()` is the capacity and is never zero.
/// - Every occupied slot is reachable from its key's home slot without
///   crossing a free slot.
/// - No key occupies more than one slot.
/// - `len` equals the number of occupied slots.
pub struct FixedHashTable<H = Fmix32> {
    hasher: H,
    slots: Box<[Option<Entry>]>,
    len: usize,
}

impl FixedHashTable {
    /// Creates a table with `capacity` slots and the default [`Fmix32`] hasher.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::table::FixedHashTable;
    ///
    /// let table = FixedHashTable::new(1024);
    /// assert_eq!(table.capacity(), 1024);
    /// assert!(table.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self::with_hasher(capacity, Fmix32)
    }

    /// Creates a table with `capacity` slots, rejecting a zero capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ConfigInvalid`] if `capacity` is 0.
    pub fn try_new(capacity: usize) -> Result<Self, Error> {
        Self::try_with_hasher(capacity, Fmix32)
    }

    /// Creates a table with two slots per expected key.
    ///
    /// A zero `expected_keys` still yields a single-slot table.
    pub fn for_expected_keys(expected_keys: usize) -> Self {
        Self::new(expected_keys.saturating_mul(2).max(1))
    }
}

impl<H: KeyHasher> FixedHashTable<H> {
    /// Creates a table with `capacity` slots that hashes keys with `hasher`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn with_hasher(capacity: usize, hasher: H) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        Self::allocate(capacity, hasher)
    }

    /// Fallible version of [`FixedHashTable::with_hasher`].
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ConfigInvalid`] if `capacity` is 0.
    pub fn try_with_hasher(capacity: usize, hasher: H) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(
                Error::new(ErrorKind::ConfigInvalid, "capacity must be positive")
                    .with_context("capacity", capacity),
            );
        }
        Ok(Self::allocate(capacity, hasher))
    }

    fn allocate(capacity: usize, hasher: H) -> Self {
        let slots = vec![None; capacity].into_boxed_slice();
        tracing::debug!(
            capacity,
            bytes = capacity * size_of::<Option<Entry>>(),
            "allocated fixed hash table"
        );
        Self {
            hasher,
            slots,
            len: 0,
        }
    }

    /// Inserts `key` with `value`, or overwrites the value if `key` is present.
    ///
    /// Updating an existing key never fails, even when the table is full.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::CapacityExceeded`] if `key` is new and every slot
    /// is occupied. The table is not modified in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::error::ErrorKind;
    /// use probetable::table::FixedHashTable;
    ///
    /// let mut table = FixedHashTable::new(2);
    /// table.insert(1, 10).unwrap();
    /// table.insert(2, 20).unwrap();
    /// table.insert(2, 21).unwrap();
    ///
    /// let err = table.insert(3, 30).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
    /// assert_eq!(table.lookup(2), Some(21));
    /// ```
    pub fn insert(&mut self, key: i32, value: i32) -> Result<(), Error> {
        match self.find(key).0 {
            Probe::Occupied(index) => {
                self.slots[index] = Some(Entry { key, value });
            }
            Probe::Vacant(index) => {
                self.slots[index] = Some(Entry { key, value });
                self.len += 1;
            }
            Probe::Exhausted => {
                tracing::warn!(
                    capacity = self.capacity(),
                    key,
                    "rejected insert into full table"
                );
                return Err(Error::capacity_exceeded(self.capacity(), key));
            }
        }
        Ok(())
    }

    /// Returns the value stored for `key`, or `None` if it is absent.
    pub fn lookup(&self, key: i32) -> Option<i32> {
        match self.find(key).0 {
            Probe::Occupied(index) => self.slots[index].map(|entry| entry.value),
            Probe::Vacant(_) | Probe::Exhausted => None,
        }
    }

    /// Returns true if `key` is stored in the table.
    pub fn contains_key(&self, key: i32) -> bool {
        matches!(self.find(key).0, Probe::Occupied(_))
    }

    /// Returns how many slots past its home slot `key` is stored.
    ///
    /// A key sitting in its home slot has distance 0. Returns `None` if the
    /// key is absent.
    pub fn probe_distance(&self, key: i32) -> Option<usize> {
        match self.find(key) {
            (Probe::Occupied(_), steps) => Some(steps - 1),
            _ => None,
        }
    }

    /// Returns the slot index where the probe sequence for `key` starts.
    pub fn home_slot(&self, key: i32) -> usize {
        self.hasher.hash(key) as usize % self.slots.len()
    }

    /// Scans the probe sequence of `key`.
    ///
    /// Returns the outcome and the number of slots visited, which never
    /// exceeds the capacity.
    fn find(&self, key: i32) -> (Probe, usize) {
        let capacity = self.slots.len();
        let mut index = self.home_slot(key);
        for step in 1..=capacity {
            match self.slots[index] {
                None => return (Probe::Vacant(index), step),
                Some(entry) if entry.key == key => return (Probe::Occupied(index), step),
                Some(_) => {}
            }
            index += 1;
            if index == capacity {
                index = 0;
            }
        }
        (Probe::Exhausted, capacity)
    }
}

impl<H> FixedHashTable<H> {
    /// Returns the number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no key is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Returns the fraction of occupied slots.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.slots.len() as f64
    }

    /// Returns the size of the slot array in bytes.
    pub fn allocated_bytes(&self) -> usize {
        size_of_val(&*self.slots)
    }

    /// Returns the key hasher.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Returns an iterator over `(key, value)` pairs in slot order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.slots, self.len)
    }
}

impl<'a, H> IntoIterator for &'a FixedHashTable<H> {
    type Item = (i32, i32);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<H> fmt::Debug for FixedHashTable<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Uses the key itself as its hash, so home slots are `key % capacity`.
    struct IdentityHasher;

    impl KeyHasher for IdentityHasher {
        fn hash(&self, key: i32) -> u32 {
            key as u32
        }
    }

    #[test]
    fn test_colliding_keys_probe_forward() {
        let mut table = FixedHashTable::with_hasher(8, IdentityHasher);
        assert_eq!(table.home_slot(1), table.home_slot(9));

        table.insert(1, 100).unwrap();
        table.insert(9, 200).unwrap();

        assert_eq!(table.lookup(1), Some(100));
        assert_eq!(table.lookup(9), Some(200));
        assert_eq!(table.slots[1], Some(Entry { key: 1, value: 100 }));
        assert_eq!(table.slots[2], Some(Entry { key: 9, value: 200 }));
        assert_eq!(table.probe_distance(1), Some(0));
        assert_eq!(table.probe_distance(9), Some(1));
    }

    #[test]
    fn test_probe_wraps_around() {
        let mut table = FixedHashTable::with_hasher(4, IdentityHasher);
        table.insert(3, 30).unwrap();
        table.insert(7, 70).unwrap();
        table.insert(11, 110).unwrap();

        assert_eq!(table.slots[0], Some(Entry { key: 7, value: 70 }));
        assert_eq!(table.slots[1], Some(Entry { key: 11, value: 110 }));
        assert_eq!(table.lookup(11), Some(110));
        assert_eq!(table.probe_distance(11), Some(2));
        // 15 also starts at slot 3 and stops at the free slot 2.
        assert_eq!(table.find(15), (Probe::Vacant(2), 4));
    }

    #[test]
    fn test_absent_key_stops_at_first_gap() {
        let mut table = FixedHashTable::with_hasher(8, IdentityHasher);
        table.insert(2, 1).unwrap();
        table.insert(10, 1).unwrap();

        assert_eq!(table.find(18), (Probe::Vacant(4), 3));
        assert_eq!(table.find(5), (Probe::Vacant(5), 1));
    }

    #[test]
    fn test_probe_steps_bounded_by_capacity() {
        let capacity = 16;
        let mut table = FixedHashTable::with_hasher(capacity, IdentityHasher);
        for key in 0..capacity as i32 {
            table.insert(key, key).unwrap();
        }
        assert!(table.is_full());

        for key in 0..capacity as i32 {
            let (probe, steps) = table.find(key);
            assert_eq!(probe, Probe::Occupied(key as usize));
            assert_eq!(steps, 1);
        }
        for key in [16, 100, -1, i32::MIN, i32::MAX] {
            assert_eq!(table.find(key), (Probe::Exhausted, capacity));
            assert_eq!(table.lookup(key), None);
        }
    }

    #[test]
    fn test_rejected_insert_leaves_table_untouched() {
        let mut table = FixedHashTable::with_hasher(3, IdentityHasher);
        for key in 0..3 {
            table.insert(key, key * 10).unwrap();
        }
        let before = table.slots.clone();

        let err = table.insert(3, 30).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
        assert_eq!(table.slots, before);
        assert_eq!(table.len(), 3);

        // Updates still go through on a full table.
        table.insert(1, 11).unwrap();
        assert_eq!(table.lookup(1), Some(11));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_borrowed_hasher() {
        let hasher = IdentityHasher;
        let mut table = FixedHashTable::with_hasher(4, &hasher);
        table.insert(5, 50).unwrap();
        assert_eq!(table.home_slot(5), 1);
        assert_eq!(table.lookup(5), Some(50));
    }

    #[test]
    fn test_allocated_bytes() {
        let table = FixedHashTable::new(10);
        assert_eq!(
            table.allocated_bytes(),
            10 * size_of::<Option<Entry>>()
        );
    }

    #[test]
    fn test_default_hasher() {
        let table = FixedHashTable::new(4);
        assert_eq!(*table.hasher(), Fmix32);
        assert_eq!(table.home_slot(1), (crate::hash::fmix32(1) % 4) as usize);
    }

    #[test]
    #[should_panic(expected = "capacity must be positive")]
    fn test_zero_capacity_panics() {
        let _ = FixedHashTable::new(0);
    }
}
