// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Memoization of rasterized textures.

use ahash::AHashMap;
use std::hash::Hash;

/// A map remembering both successes and failures.
///
/// Entries live as long as the cache: there is no eviction, so the number of
/// entries grows with the number of distinct keys requested. A failed entry
/// (`None`) is never retried.
#[derive(Debug)]
pub(crate) struct MemoCache<K, V> {
    entries: AHashMap<K, Option<V>>,
}

impl<K: Eq + Hash, V: Copy> MemoCache<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            entries: AHashMap::new(),
        }
    }

    /// Returns the cached value, running `create` only on the first request for `key`.
    pub(crate) fn get_or_create(
        &mut self,
        key: K,
        create: impl FnOnce() -> Option<V>,
    ) -> Option<V> {
        *self.entries.entry(key).or_insert_with(create)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
