// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the trie and the ranker.
//!
//! Debug-mode assertions that verify the invariants the rest of the crate
//! relies on. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Are called by the index after every build and by the tests
//!
//! # Contract Table
//!
//! | Contract Function          | Invariant                                      |
//! |----------------------------|------------------------------------------------|
//! | `check_trie_well_formed`   | children sorted, records sorted, bounds exact  |
//! | `check_ranked_order`       | score desc, then text asc, then id asc         |
//! | `check_subset`             | AND semantics: narrowed set ⊆ previous set     |
//!
//! # Usage
//!
//! ```ignore
//! use fuzzy_palette::contracts::*;
//!
//! // In debug builds, this panics if an invariant is violated
//! check_trie_well_formed(&trie);
//!
//! // In release builds, this is a no-op
//! ```

use crate::fuzzy::FuzzyTrie;
use crate::record_set::{RecordId, RecordIdSet};
use crate::scoring::ScoredRecord;
use std::cmp::Ordering;

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

/// Partition math divides by both of these.
const _: () = {
    use crate::scoring::{MAX_NUM_PARTITIONS, MIN_RECORDS_PER_PARTITION};
    assert!(MIN_RECORDS_PER_PARTITION > 0);
    assert!(MAX_NUM_PARTITIONS > 0);
};

// ============================================================================
// TRIE CONTRACTS
// ============================================================================

/// Check CHILDREN_SORTED, RECORDS_SORTED and BOUNDS_EXACT for every node.
///
/// Child IDs are always greater than their parent's ID (the arena is
/// append-only), so one reverse pass computes exact subtree bounds.
///
/// # Panics (debug builds only)
/// Panics naming the first node that violates an invariant.
pub fn check_trie_well_formed(trie: &FuzzyTrie) {
    if !cfg!(debug_assertions) {
        return;
    }

    let nodes = trie.nodes();
    let mut exact: Vec<Option<(RecordId, RecordId)>> = vec![None; nodes.len()];

    for (i, node) in nodes.iter().enumerate().rev() {
        debug_assert!(
            node.children.windows(2).all(|w| w[0].label < w[1].label),
            "Contract violation: node {} children not strictly sorted by label",
            i
        );
        debug_assert!(
            node.records.windows(2).all(|w| w[0] < w[1]),
            "Contract violation: node {} records not strictly sorted",
            i
        );

        let mut bounds = node
            .records
            .first()
            .copied()
            .zip(node.records.last().copied());
        for edge in &node.children {
            debug_assert!(
                edge.node.index() > i,
                "Contract violation: node {} has child {} allocated before it",
                i,
                edge.node.index()
            );
            if let Some((lo, hi)) = exact[edge.node.index()] {
                bounds = Some(match bounds {
                    Some((min, max)) => (min.min(lo), max.max(hi)),
                    None => (lo, hi),
                });
            }
        }

        if let Some((lo, hi)) = bounds {
            debug_assert!(
                node.subtree_min == lo && node.subtree_max == hi,
                "Contract violation: node {} bounds [{}, {}] != exact [{}, {}]",
                i,
                node.subtree_min,
                node.subtree_max,
                lo,
                hi
            );
        }
        exact[i] = bounds;
    }
}

// ============================================================================
// SEARCH CONTRACTS
// ============================================================================

/// Check that `narrowed` only contains IDs from `previous`.
#[inline]
pub fn check_subset(narrowed: &RecordIdSet, previous: &RecordIdSet) {
    debug_assert!(
        narrowed.iter().all(|id| previous.contains(id)),
        "Contract violation: keyword intersection produced ids outside the previous set"
    );
}

/// Check that ranked records are ordered by score desc, text asc, id asc.
#[inline]
pub fn check_ranked_order(ranked: &[ScoredRecord]) {
    for (i, pair) in ranked.windows(2).enumerate() {
        debug_assert!(
            pair[0].rank_cmp(&pair[1]) != Ordering::Greater,
            "Contract violation: ranked[{}] ({:?}, {}) sorts after ranked[{}] ({:?}, {})",
            i,
            pair[0].text,
            pair[0].score,
            i + 1,
            pair[1].text,
            pair[1].score
        );
    }
}
