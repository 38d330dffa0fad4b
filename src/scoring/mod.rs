// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidate records get their numbers.
//!
//! The trie decides *which* records are candidates, keyword by keyword. The
//! ranker then looks at the whole raw query against the whole record text
//! and decides *where* each one lands. It never sees keywords, so a query
//! like `"foo/bar"` still rewards records where the slash lines up.
//!
//! - [`rank`]: the alignment DP and the partitioned (optionally parallel)
//!   scoring loop
//! - [`heap`]: bounded top-K selection with a deterministic tie-break

pub mod heap;
pub mod rank;

pub use heap::top_records_desc_by_score;
pub use rank::*;

use crate::record_set::RecordId;
use std::cmp::Ordering;

/// A candidate with its normalized score. Lives for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord<'a> {
    pub id: RecordId,
    pub text: &'a str,
    pub score: f64,
}

impl<'a> ScoredRecord<'a> {
    pub fn new(id: RecordId, text: &'a str, score: f64) -> Self {
        Self { id, text, score }
    }

    /// Result order: score (desc) → text (asc) → id (asc).
    ///
    /// `Less` means `self` is ranked ahead of `other`. NaN scores compare
    /// equal so the text and id keys still decide.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        match other.score.partial_cmp(&self.score) {
            Some(Ordering::Equal) | None => match self.text.cmp(other.text) {
                Ordering::Equal => self.id.cmp(&other.id),
                other_ord => other_ord,
            },
            Some(ord) => ord,
        }
    }
}
