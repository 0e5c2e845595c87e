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

//! Key hashing for the fixed hash table.
//!
//! A table maps every key to its home slot through a [`KeyHasher`]. The
//! default hasher is [`Fmix32`], the 32-bit murmur3 finalizer, which spreads
//! consecutive integer keys across the whole table.

mod fmix32;

pub use self::fmix32::Fmix32;
pub use self::fmix32::fmix32;

/// Maps a 32-bit key to a well-distributed 32-bit hash.
///
/// Implementations must be pure: the same key must always produce the same
/// hash for the lifetime of a table, or previously inserted keys become
/// unreachable.
pub trait KeyHasher {
    /// Hash `key`.
    fn hash(&self, key: i32) -> u32;
}

impl<H: KeyHasher + ?Sized> KeyHasher for &H {
    #[inline]
    fn hash(&self, key: i32) -> u32 {
        (**self).hash(key)
    }
}
