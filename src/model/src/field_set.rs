// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// The presence bitmap of a record or builder.
///
/// Bit `i` is set if attribute `i` was explicitly set, as opposed to left at
/// its zero value. Resources reserve bit 0 for the "link" flag, see
/// [Resource][crate::Resource].
///
/// # Example
/// ```
/// # use ocm_model::FieldSet;
/// let mut set = FieldSet::EMPTY;
/// assert!(set.is_empty());
/// set.insert(3);
/// assert!(set.contains(3));
/// assert!(!set.contains(2));
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec![3]);
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct FieldSet(u64);

impl FieldSet {
    /// The maximum number of bits in a set.
    pub const CAPACITY: u32 = u64::BITS;

    /// A set without any bits.
    pub const EMPTY: FieldSet = FieldSet(0);

    /// Returns true if `bit` is in the set.
    ///
    /// Bits beyond [FieldSet::CAPACITY] are never in the set.
    pub const fn contains(&self, bit: u32) -> bool {
        bit < Self::CAPACITY && self.0 & (1 << bit) != 0
    }

    /// Adds `bit` to the set.
    ///
    /// # Panics
    /// If `bit` is not below [FieldSet::CAPACITY]. The generated code checks
    /// the number of attributes at compile time.
    pub fn insert(&mut self, bit: u32) {
        assert!(bit < Self::CAPACITY, "bit {bit} out of range");
        self.0 |= 1 << bit;
    }

    /// Removes `bit` from the set.
    pub fn remove(&mut self, bit: u32) {
        if bit < Self::CAPACITY {
            self.0 &= !(1 << bit);
        }
    }

    /// Sets or clears `bit` depending on `value`.
    pub fn assign(&mut self, bit: u32, value: bool) {
        if value {
            self.insert(bit);
        } else {
            self.remove(bit);
        }
    }

    /// Returns true if no bits are set.
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if no bits, other than `reserved`, are set.
    ///
    /// Resources use this to ignore the link flag in emptiness checks.
    pub const fn is_empty_except(&self, reserved: u32) -> bool {
        if reserved >= Self::CAPACITY {
            return self.is_empty();
        }
        self.0 & !(1 << reserved) == 0
    }

    /// The number of bits in the set.
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates over the bits in the set, in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + use<> {
        let set = *self;
        (0..Self::CAPACITY).filter(move |bit| set.contains(*bit))
    }
}

impl std::fmt::Debug for FieldSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
