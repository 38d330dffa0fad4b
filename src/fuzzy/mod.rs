// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy keyword matching: typo tolerance via edit distance.
//!
//! Two implementations here: the trie, which finds every keyword with a
//! prefix near the query and reuses work as the query grows one character at
//! a time, and a plain DP for one-off (query, keyword) comparisons.

mod levenshtein;
pub mod trie;

pub use levenshtein::*;
pub use trie::{
    ActiveNodeSet, FuzzyTrie, NodeId, EDIT_DIST_FOR_DELETE_PREFIX_CHAR,
    EDIT_DIST_FOR_DELETE_QUERY_CHAR, EDIT_DIST_FOR_REPLACE_PREFIX_CHAR,
};
