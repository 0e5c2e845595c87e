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

use std::iter::FusedIterator;
use std::slice;

use crate::table::fixed::Entry;

/// Iterator over the `(key, value)` pairs of a
/// [`FixedHashTable`](crate::table::FixedHashTable), in slot order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    slots: slice::Iter<'a, Option<Entry>>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(super) fn new(slots: &'a [Option<Entry>], len: usize) -> Self {
        Self {
            slots: slots.iter(),
            remaining: len,
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = self.slots.by_ref().flatten().next()?;
        self.remaining -= 1;
        Some((entry.key, entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use crate::table::FixedHashTable;

    #[test]
    fn test_iter_visits_every_entry_once() {
        let mut table = FixedHashTable::new(64);
        for key in 0..32 {
            table.insert(key, -key).unwrap();
        }
        table.insert(5, 500).unwrap();

        let iter = table.iter();
        assert_eq!(iter.len(), 32);

        let mut pairs: Vec<_> = iter.collect();
        pairs.sort_unstable();
        let mut expected: Vec<_> = (0..32).map(|key| (key, -key)).collect();
        expected[5] = (5, 500);
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_iter_empty_table() {
        let table = FixedHashTable::new(8);
        assert_eq!(table.iter().next(), None);
        assert_eq!(format!("{table:?}"), "{}");
    }

    #[test]
    fn test_debug_prints_entries() {
        let mut table = FixedHashTable::new(1);
        table.insert(-3, 9).unwrap();
        assert_eq!(format!("{table:?}"), "{-3: 9}");
    }
}
