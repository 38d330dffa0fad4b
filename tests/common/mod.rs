//! Shared test utilities and fixtures.

#![allow(dead_code)]

use fuzzy_palette::fuzzy::prefix_edit_distance;
use fuzzy_palette::{build_index, keywords, RecordId, SearchIndex};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// The record list used by the prefix-query scenario.
pub const FOOB_RECORDS: &[&str] = &[
    "foo", "bar", "foobar", "barbaz", "barfoo", ".foobar", "foo.bar",
];

/// Realistic palette content: file paths and commands.
pub const PALETTE_RECORDS: &[&str] = &[
    "src/index.rs",
    "src/fuzzy/trie.rs",
    "src/scoring/rank.rs",
    "README.md",
    "Cargo.toml",
    "Open File",
    "Open Folder",
    "Save File",
    "Save As",
    "Close Window",
    "Toggle Line Comment",
    "Go to Definition",
    "Go to Symbol",
    "configmap",
    "cluster",
    "allocator",
    "allocation",
];

pub fn build(records: &[&str]) -> SearchIndex {
    build_index(records.iter().copied())
}

/// Record texts for `ids`, in order.
pub fn texts(index: &SearchIndex, ids: &[RecordId]) -> Vec<String> {
    ids.iter()
        .map(|&id| index.record(id).unwrap_or_default().to_string())
        .collect()
}

// ============================================================================
// ORACLES
// ============================================================================

/// Records with a keyword whose prefix is within `max` edits of `keyword`.
///
/// Brute force over every (record, keyword) pair with the plain DP.
pub fn oracle_prefix_matches(records: &[String], keyword: &str, max: usize) -> BTreeSet<RecordId> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            keywords(record)
                .iter()
                .any(|kw| prefix_edit_distance(keyword, kw) <= max)
        })
        .map(|(id, _)| id)
        .collect()
}

/// Records that match every keyword of `query`.
pub fn oracle_and_matches(records: &[String], query: &str, max: usize) -> BTreeSet<RecordId> {
    let query_keywords = keywords(query);
    if query_keywords.is_empty() {
        return BTreeSet::new();
    }
    (0..records.len())
        .filter(|&id| {
            query_keywords.iter().all(|kw| {
                oracle_prefix_matches(&records[id..=id], kw, max).contains(&0)
            })
        })
        .collect()
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short words over a small alphabet, so random queries actually collide.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{1,6}").unwrap()
}

/// Records made of 1 to 3 words joined by separators.
pub fn record_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(word_strategy(), 1..4),
        prop::sample::select(vec![" ", "/", ".", "_", "-"]),
    )
        .prop_map(|(words, sep)| words.join(sep))
}

pub fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(record_strategy(), 1..20)
}
