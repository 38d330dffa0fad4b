// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix edit distance, computed directly with a DP row.
//!
//! The trie answers "which keywords have a prefix within `T` edits of the
//! query?" incrementally. This module answers the same question for a single
//! (query, keyword) pair from scratch, which makes it the reference the trie
//! is checked against.
//!
//! The distance is `min over j of levenshtein(query, keyword[..j])`. Trailing
//! keyword characters are free, because the query is only a prefix of what
//! the user means to type.

/// Minimum unit-cost edit distance between `query` and any prefix of `keyword`.
///
/// Counts characters, not bytes.
pub fn prefix_edit_distance(query: &str, keyword: &str) -> usize {
    let keyword: Vec<char> = keyword.chars().collect();

    // dp[j] = distance between the query prefix seen so far and keyword[..j]
    let mut dp: Vec<usize> = (0..=keyword.len()).collect();
    for (i, qc) in query.chars().enumerate() {
        let mut diag = dp[0];
        dp[0] = i + 1;
        for (j, &kc) in keyword.iter().enumerate() {
            let above = dp[j + 1];
            let cost = usize::from(qc != kc);
            dp[j + 1] = (above + 1).min(dp[j] + 1).min(diag + cost);
            diag = above;
        }
    }

    dp.into_iter().min().unwrap_or(0)
}

/// Is some prefix of `keyword` within `max` edits of `query`?
///
/// Same DP as [`prefix_edit_distance`] with an early exit: row minima never
/// decrease, so once a whole row is above `max` the answer is no.
pub fn within_prefix_edit_distance(query: &str, keyword: &str, max: usize) -> bool {
    let keyword: Vec<char> = keyword.chars().collect();

    let mut dp: Vec<usize> = (0..=keyword.len()).collect();
    for (i, qc) in query.chars().enumerate() {
        let mut diag = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];
        for (j, &kc) in keyword.iter().enumerate() {
            let above = dp[j + 1];
            let cost = usize::from(qc != kc);
            dp[j + 1] = (above + 1).min(dp[j] + 1).min(diag + cost);
            diag = above;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return false;
        }
    }

    dp.into_iter().min().unwrap_or(0) <= max
}
