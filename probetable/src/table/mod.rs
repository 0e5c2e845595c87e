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

//! Fixed-capacity hash table over 32-bit integer keys and values.
//!
//! All entries live in one contiguous slot array that is allocated when the
//! table is created and never resized. Collisions are resolved by linear
//! probing: a key is stored in the first free slot at or after its home slot
//! (`hash(key) % capacity`), wrapping around at the end of the array.
//!
//! # Usage
//!
//! ```rust
//! use probetable::table::FixedHashTable;
//!
//! let mut table = FixedHashTable::new(16);
//! table.insert(7, 70).unwrap();
//! table.insert(7, 71).unwrap();
//!
//! assert_eq!(table.lookup(7), Some(71));
//! assert_eq!(table.lookup(8), None);
//! assert_eq!(table.len(), 1);
//! ```
//!
//! # Capacity
//!
//! The table never grows. Inserting a new key into a table whose slots are
//! all occupied returns [`ErrorKind::CapacityExceeded`](crate::error::ErrorKind::CapacityExceeded)
//! and leaves the table untouched. Probe sequences get long as the table
//! fills up, so size it well above the expected number of keys:
//!
//! ```rust
//! use probetable::table::FixedHashTable;
//!
//! // Two slots per expected key.
//! let table = FixedHashTable::for_expected_keys(1_000);
//! assert_eq!(table.capacity(), 2_000);
//! ```
//!
//! # Notes
//!
//! - There is no removal. Once a slot is occupied it stays occupied.
//! - Mutation takes `&mut self`; share a table across threads only behind
//!   external synchronization.

mod fixed;
mod iter;

pub use self::fixed::FixedHashTable;
pub use self::iter::Iter;
