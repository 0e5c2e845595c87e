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

//! A fixed-capacity, open-addressing hash table over 32-bit integer keys and
//! values.
//!
//! The table lives in a single slot array allocated once at construction.
//! Keys are placed by linear probing from a home slot derived from an
//! avalanche hash of the key, and every probe scan is bounded by the table
//! capacity, so a full table reports an error instead of spinning.
//!
//! # Usage
//!
//! ```rust
//! use probetable::table::FixedHashTable;
//!
//! let mut table = FixedHashTable::for_expected_keys(1_000);
//! for key in 0..1_000 {
//!     table.insert(key, key * 2).unwrap();
//! }
//!
//! let checksum: i64 = (0..1_000).filter_map(|key| table.lookup(key)).map(i64::from).sum();
//! assert_eq!(checksum, 999_000);
//! ```

pub mod error;
pub mod hash;
pub mod table;
