// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Record scoring: a local alignment of the raw query against each record.
//!
//! # The DP
//!
//! Rows are record characters, columns are query characters. Only two rows
//! are ever alive, so memory is O(query length).
//!
//! ```text
//!             ""    f     o     o     b
//!   row 0      0   -2    -4    -6    -8      (-DELETE × col)
//!   'f'        0  1.5   -0.5  -2.5  -4.5     (first column always 0)
//!   'o'        0   ..    2.5    ..    ..
//!   ...
//! ```
//!
//! Each cell takes the best of:
//!
//! - `cur[col-1] - DELETE_QUERY_CHAR_COST`: skip a query character
//! - `prev[col] - INSERT_QUERY_CHAR_COST`: skip a record character
//! - `prev[col-1] + similarity` on a (possibly case-insensitive) match, plus
//!   the boundary bonus in the first column, else `prev[col-1] - REPLACE`
//!
//! The record score is the best value seen in the last column, divided by
//! `bonus + MATCH_CHAR_SCORE × record length`. An exact whole-record match at
//! the start therefore scores exactly 1.0, and a longer record with the same
//! match scores less.
//!
//! Skipping a query character costs more than skipping a record character:
//! the query is what the user typed, so every character in it should count.

use super::{heap, ScoredRecord};
use crate::record_set::RecordId;
use tracing::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub const MIN_RECORDS_PER_PARTITION: usize = 64;
pub const MAX_NUM_PARTITIONS: usize = 128;

// At 1.0 or 1.5, "foo" outranks "foo.bar" for the query "foob".
pub const DELETE_QUERY_CHAR_COST: f64 = 2.0;
pub const INSERT_QUERY_CHAR_COST: f64 = 1.0;
pub const REPLACE_QUERY_CHAR_COST: f64 = 1.0;
pub const MATCH_CHAR_SCORE: f64 = 1.0;
pub const MATCH_CHAR_DIFFERENT_CASE_SCORE: f64 = 0.2;
pub const ALIGN_AT_START_OR_AFTER_SEPARATOR_BONUS: f64 = 0.5;

/// Rank `candidates` against `query` and return the best `limit` IDs.
///
/// `query` should be the raw (normalized, untokenized) query string.
pub fn rank_records(candidates: &[(RecordId, &str)], query: &str, limit: usize) -> Vec<RecordId> {
    let scored = score_all_records(candidates, query);
    heap::top_records_desc_by_score(scored, limit)
        .into_iter()
        .map(|r| r.id)
        .collect()
}

/// Score every candidate, in input order.
///
/// Splits the work into [`num_partitions`] contiguous chunks. With the
/// `parallel` feature and more than one chunk, chunks run on the rayon pool
/// and the call blocks until all of them finish.
pub fn score_all_records<'a>(
    candidates: &[(RecordId, &'a str)],
    query: &str,
) -> Vec<ScoredRecord<'a>> {
    let query: Vec<char> = query.chars().collect();
    let mut scored: Vec<ScoredRecord<'a>> = candidates
        .iter()
        .map(|&(id, text)| ScoredRecord::new(id, text, 0.0))
        .collect();
    if scored.is_empty() {
        return scored;
    }

    let partitions = num_partitions(scored.len());
    let chunk_size = scored.len() / partitions + 1;
    trace!(
        candidates = scored.len(),
        partitions,
        chunk_size,
        "scoring candidates"
    );

    #[cfg(feature = "parallel")]
    {
        if partitions > 1 {
            scored
                .par_chunks_mut(chunk_size)
                .for_each(|chunk| score_partition(chunk, &query));
            return scored;
        }
    }

    for chunk in scored.chunks_mut(chunk_size) {
        score_partition(chunk, &query);
    }
    scored
}

/// How many chunks to split `num_records` candidates into.
pub fn num_partitions(num_records: usize) -> usize {
    (num_records / MIN_RECORDS_PER_PARTITION).clamp(1, MAX_NUM_PARTITIONS)
}

/// Normalized score of a single record. Allocates its own scratch rows.
pub fn score_record(record: &str, query: &str) -> f64 {
    let query: Vec<char> = query.chars().collect();
    let mut prev = vec![0.0; query.len() + 1];
    let mut cur = vec![0.0; query.len() + 1];
    score_with_rows(record, &query, &mut prev, &mut cur)
}

/// One worker's share: scratch rows are allocated once per chunk.
fn score_partition(chunk: &mut [ScoredRecord<'_>], query: &[char]) {
    let mut prev = vec![0.0; query.len() + 1];
    let mut cur = vec![0.0; query.len() + 1];
    for record in chunk {
        record.score = score_with_rows(record.text, query, &mut prev, &mut cur);
    }
}

fn score_with_rows(record: &str, query: &[char], prev: &mut Vec<f64>, cur: &mut Vec<f64>) -> f64 {
    let num_cols = query.len();
    for (col, cell) in prev.iter_mut().enumerate() {
        *cell = -DELETE_QUERY_CHAR_COST * col as f64;
    }

    let mut best = f64::NEG_INFINITY;
    let mut num_record_chars = 0usize;
    let mut prev_char: Option<char> = None;

    for rc in record.chars() {
        let at_boundary = match prev_char {
            None => true,
            Some(pc) => is_boundary_separator(pc) && !is_boundary_separator(rc),
        };

        cur[0] = 0.0;
        for col in 1..=num_cols {
            let skip = (cur[col - 1] - DELETE_QUERY_CHAR_COST).max(prev[col] - INSERT_QUERY_CHAR_COST);
            let diagonal = match char_similarity(rc, query[col - 1]) {
                Some(sim) if col == 1 && at_boundary => {
                    prev[col - 1] + sim + ALIGN_AT_START_OR_AFTER_SEPARATOR_BONUS
                }
                Some(sim) => prev[col - 1] + sim,
                None => prev[col - 1] - REPLACE_QUERY_CHAR_COST,
            };
            cur[col] = skip.max(diagonal);
        }

        best = best.max(cur[num_cols]);
        std::mem::swap(prev, cur);
        prev_char = Some(rc);
        num_record_chars += 1;
    }

    if num_record_chars == 0 {
        return 0.0;
    }
    best / (ALIGN_AT_START_OR_AFTER_SEPARATOR_BONUS + MATCH_CHAR_SCORE * num_record_chars as f64)
}

/// Separators that earn the alignment bonus for the character after them.
#[inline]
fn is_boundary_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '/')
}

/// Match credit for a record/query character pair, or `None` for a mismatch.
#[inline]
fn char_similarity(record_char: char, query_char: char) -> Option<f64> {
    if record_char == query_char {
        return Some(MATCH_CHAR_SCORE);
    }

    let same_ignoring_case = match (record_char.is_ascii(), query_char.is_ascii()) {
        (true, true) => record_char.eq_ignore_ascii_case(&query_char),
        (false, false) => record_char.to_lowercase().eq(query_char.to_lowercase()),
        _ => false,
    };
    same_ignoring_case.then_some(MATCH_CHAR_DIFFERENT_CASE_SCORE)
}
