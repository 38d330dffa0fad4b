// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A set of record IDs with tracked bounds.
//!
//! The trie uses the bounds to skip subtrees that cannot contain a filtered
//! record, and the search index intersects one set per query keyword. Both
//! paths are hot, so this is an open-addressing table over plain `u64` slots
//! rather than a `HashSet`: no per-entry allocation and no SipHash.
//!
//! # Slot layout
//!
//! ```text
//! bit 63      bits 0..=62
//! ┌────────┬──────────────────────┐
//! │ filled │      record id       │
//! └────────┴──────────────────────┘
//! ```
//!
//! The table always has a power-of-two number of slots and grows when the
//! load factor exceeds 0.7. Probing uses double hashing with an odd step, so
//! every slot is eventually visited.

use std::fmt;

/// Position of a record in the caller-supplied sequence.
pub type RecordId = usize;

const INITIAL_NUM_SLOTS: usize = 16;
const MAX_LOAD_FACTOR: f64 = 0.7;
const SLOT_FILLED: u64 = 1 << 63;

/// Largest ID that fits beside the filled bit.
pub const MAX_RECORD_ID: RecordId = (SLOT_FILLED - 1) as RecordId;

#[derive(Clone)]
pub struct RecordIdSet {
    len: usize,
    slots: Vec<u64>,
    /// Valid only when `len > 0`.
    min: RecordId,
    max: RecordId,
}

impl RecordIdSet {
    pub fn new() -> Self {
        Self {
            len: 0,
            slots: vec![0; INITIAL_NUM_SLOTS],
            min: RecordId::MAX,
            max: 0,
        }
    }

    /// Add `id`. Returns false if it was already present.
    ///
    /// # Panics
    ///
    /// If `id` exceeds [`MAX_RECORD_ID`], or if the table is full despite
    /// growing. Both mean an invariant is already broken.
    pub fn insert(&mut self, id: RecordId) -> bool {
        assert!(
            id <= MAX_RECORD_ID,
            "record id {id} collides with the slot filled bit"
        );

        let (idx, exists) = probe(&self.slots, id);
        if exists {
            return false;
        }

        self.slots[idx] = id as u64 | SLOT_FILLED;
        self.len += 1;
        self.min = self.min.min(id);
        self.max = self.max.max(id);

        if self.len as f64 / self.slots.len() as f64 > MAX_LOAD_FACTOR {
            self.grow();
        }
        true
    }

    pub fn contains(&self, id: RecordId) -> bool {
        id <= MAX_RECORD_ID && probe(&self.slots, id).1
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Smallest and largest IDs in the set, or `None` when empty.
    pub fn bounds(&self) -> Option<(RecordId, RecordId)> {
        (self.len > 0).then_some((self.min, self.max))
    }

    /// Could any ID in `[lo, hi]` be in this set? Bounds check only.
    #[inline]
    pub fn may_intersect(&self, lo: RecordId, hi: RecordId) -> bool {
        self.len > 0 && lo <= self.max && hi >= self.min
    }

    /// IDs in slot order, which is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.slots
            .iter()
            .filter(|&&slot| slot & SLOT_FILLED != 0)
            .map(|&slot| (slot & !SLOT_FILLED) as RecordId)
    }

    /// IDs in ascending order.
    pub fn to_sorted_vec(&self) -> Vec<RecordId> {
        let mut ids: Vec<RecordId> = self.iter().collect();
        ids.sort_unstable();
        ids
    }

    fn grow(&mut self) {
        let mut slots = vec![0u64; self.slots.len() * 2];
        for id in self.iter() {
            let (idx, exists) = probe(&slots, id);
            debug_assert!(!exists, "duplicate record id {id} while growing");
            slots[idx] = id as u64 | SLOT_FILLED;
        }
        self.slots = slots;
    }
}

/// Find the slot holding `target`, or the first empty slot on its probe path.
///
/// Returns `(slot index, found)`.
fn probe(slots: &[u64], target: RecordId) -> (usize, bool) {
    debug_assert!(slots.len().is_power_of_two());
    let mask = slots.len() as u64 - 1;
    let shift = 64 - slots.len().trailing_zeros();

    // Fibonacci hashing for the start slot, an odd step for the stride.
    let key = target as u64;
    let h1 = key.wrapping_mul(0x9E37_79B9_7F4A_7C15).checked_shr(shift).unwrap_or(0);
    let h2 = key.wrapping_mul(0xD234_91F2_4A15_D7EE) | 1;

    for i in 0..=mask {
        let idx = (h1.wrapping_add(i.wrapping_mul(h2)) & mask) as usize;
        let slot = slots[idx];
        if slot & SLOT_FILLED == 0 {
            return (idx, false);
        }
        if slot & !SLOT_FILLED == key {
            return (idx, true);
        }
    }

    panic!("all {} record id slots are full", slots.len());
}

impl Default for RecordIdSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for RecordIdSet {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|id| other.contains(id))
    }
}

impl Eq for RecordIdSet {}

impl fmt::Debug for RecordIdSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.to_sorted_vec()).finish()
    }
}

impl FromIterator<RecordId> for RecordIdSet {
    fn from_iter<I: IntoIterator<Item = RecordId>>(iter: I) -> Self {
        let mut set = RecordIdSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<RecordId> for RecordIdSet {
    fn extend<I: IntoIterator<Item = RecordId>>(&mut self, iter: I) {
        for id in iter {
            self.insert(id);
        }
    }
}
