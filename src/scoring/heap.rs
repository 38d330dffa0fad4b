// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded top-K selection over scored records.

use super::ScoredRecord;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry ordered so the *worst-ranked* record sits on top, ready to be
/// evicted once the heap holds more than `limit` entries.
struct WorstFirst<'a>(ScoredRecord<'a>);

impl PartialEq for WorstFirst<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for WorstFirst<'_> {}

impl Ord for WorstFirst<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // rank_cmp says Less for the better record; BinaryHeap pops Greater
        // first, so the worst record comes out first.
        self.0.rank_cmp(&other.0)
    }
}

impl PartialOrd for WorstFirst<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The best `limit` records, best first.
///
/// Time complexity: O(n log k) for heap operations + O(k log k) for the final
/// sort, which beats sorting everything when k << n.
pub fn top_records_desc_by_score<'a, I>(scored: I, limit: usize) -> Vec<ScoredRecord<'a>>
where
    I: IntoIterator<Item = ScoredRecord<'a>>,
{
    if limit == 0 {
        return Vec::new();
    }

    let mut heap: BinaryHeap<WorstFirst<'a>> = BinaryHeap::with_capacity(limit + 1);
    for record in scored {
        heap.push(WorstFirst(record));
        if heap.len() > limit {
            heap.pop();
        }
    }

    // into_sorted_vec is ascending by Ord, i.e. best first.
    let top: Vec<ScoredRecord<'a>> = heap.into_sorted_vec().into_iter().map(|w| w.0).collect();
    crate::contracts::check_ranked_order(&top);
    top
}
