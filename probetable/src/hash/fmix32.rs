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

/// Avalanche mix of a 32-bit key.
///
/// This is the finalizer of MurmurHash3 x86_32. All arithmetic wraps, and
/// negative keys are mixed through their unsigned bit pattern.
#[inline]
pub const fn fmix32(key: i32) -> u32 {
    let mut x = key as u32;
    x ^= x >> 16;
    x = x.wrapping_mul(0x85EBCA6B);
    x ^= x >> 13;
    x = x.wrapping_mul(0xC2B2AE35);
    x ^ (x >> 16)
}

/// The default [`KeyHasher`](super::KeyHasher), backed by [`fmix32`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Fmix32;

impl super::KeyHasher for Fmix32 {
    #[inline]
    fn hash(&self, key: i32) -> u32 {
        fmix32(key)
    }
}
