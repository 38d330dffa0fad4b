// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search index: records in, ranked record IDs out.
//!
//! # Architecture
//!
//! ```text
//! build:   records ──▶ tokenizer ──▶ FuzzyTrie::insert(keyword, id)
//!
//! search:  query ──▶ tokenizer ──▶ keyword 1 ──▶ trie ──▶ set₁
//!                                  keyword 2 ──▶ trie(filter = set₁) ──▶ set₂
//!                                  ...
//!                    normalized query + setₙ ──▶ ranker ──▶ top-K IDs
//! ```
//!
//! Keywords are ANDed: each lookup is filtered by the previous keyword's
//! result, so a record must match every keyword to be ranked. The ranker
//! ignores keywords entirely and aligns the whole query against each
//! candidate's text.
//!
//! # Sessions
//!
//! [`SearchIndex::search`] takes `&mut self` because the trie's prefix cache
//! is updated on every lookup. One index serves one query session, typically
//! one palette being typed into. Use [`SharedSearchIndex`] when several
//! threads need the same index; it serializes every call behind one lock.

use crate::config::SearchConfig;
use crate::contracts;
use crate::error::Result;
use crate::fuzzy::FuzzyTrie;
use crate::record_set::{RecordId, RecordIdSet};
use crate::scoring;
use crate::tokenizer;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use tracing::debug;

pub struct SearchIndex {
    records: Vec<String>,
    trie: FuzzyTrie,
    config: SearchConfig,
}

impl SearchIndex {
    /// Build with the default configuration. A record's ID is its position.
    pub fn build<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_unchecked(records, SearchConfig::default())
    }

    /// Build with a custom configuration, which is validated first.
    pub fn build_with_config<I, S>(records: I, config: SearchConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;
        Ok(Self::build_unchecked(records, config))
    }

    fn build_unchecked<I, S>(records: I, config: SearchConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cache_capacity =
            NonZeroUsize::new(config.prefix_cache_capacity).unwrap_or(NonZeroUsize::MIN);
        let mut trie = FuzzyTrie::with_threshold(config.edit_dist_threshold, cache_capacity);

        let records: Vec<String> = records
            .into_iter()
            .map(|r| {
                tokenizer::normalize_query(tokenizer::truncate_chars(
                    r.as_ref(),
                    config.max_record_chars,
                ))
            })
            .collect();

        for (id, record) in records.iter().enumerate() {
            tokenizer::for_each_keyword(record, |keyword| trie.insert(keyword, id));
        }

        contracts::check_trie_well_formed(&trie);
        debug!(
            records = records.len(),
            nodes = trie.node_count(),
            pairs = trie.len(),
            "built search index"
        );

        Self {
            records,
            trie,
            config,
        }
    }

    /// Record IDs matching every keyword of `query`, best first.
    ///
    /// Returns at most `config.max_results` IDs. A query with no keywords
    /// (empty, or only separators) returns nothing.
    pub fn search(&mut self, query: &str) -> Vec<RecordId> {
        let query = tokenizer::normalize_query(tokenizer::truncate_chars(
            query,
            self.config.max_query_chars,
        ));

        let trie = &mut self.trie;
        let mut num_keywords = 0usize;
        let mut candidates: Option<RecordIdSet> = None;
        tokenizer::for_each_keyword(&query, |keyword| {
            num_keywords += 1;
            if candidates.as_ref().is_some_and(RecordIdSet::is_empty) {
                return;
            }
            let narrowed = trie.record_ids_for_prefix(keyword, candidates.as_ref());
            if let Some(previous) = &candidates {
                contracts::check_subset(&narrowed, previous);
            }
            candidates = Some(narrowed);
        });

        let Some(candidates) = candidates else {
            debug!(query = %query, "query has no keywords");
            return Vec::new();
        };

        let candidates: Vec<(RecordId, &str)> = candidates
            .to_sorted_vec()
            .into_iter()
            .map(|id| (id, self.records[id].as_str()))
            .collect();
        let results = scoring::rank_records(&candidates, &query, self.config.max_results);

        debug!(
            query = %query,
            keywords = num_keywords,
            candidates = candidates.len(),
            results = results.len(),
            "search complete"
        );
        results
    }

    /// Stored text of record `id`: truncated, then NFC-normalized.
    pub fn record(&self, id: RecordId) -> Option<&str> {
        self.records.get(id).map(String::as_str)
    }

    pub fn records(&self) -> &[String] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Forget cached query prefixes. Call when a new session starts.
    pub fn reset_session(&mut self) {
        self.trie.clear_cache();
    }

    /// Number of query prefixes currently cached.
    pub fn cached_prefix_count(&self) -> usize {
        self.trie.cached_prefix_count()
    }
}

impl std::fmt::Debug for SearchIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchIndex")
            .field("records", &self.records.len())
            .field("trie", &self.trie)
            .field("config", &self.config)
            .finish()
    }
}

/// Build an index over `records` with the default configuration.
pub fn build_index<I, S>(records: I) -> SearchIndex
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SearchIndex::build(records)
}

/// Search `index` for `query`. See [`SearchIndex::search`].
pub fn search(index: &mut SearchIndex, query: &str) -> Vec<RecordId> {
    index.search(query)
}

/// A [`SearchIndex`] that can be searched from several threads.
///
/// Every call takes the same lock, so searches run one at a time and share
/// one prefix cache.
pub struct SharedSearchIndex {
    inner: Mutex<SearchIndex>,
}

impl SharedSearchIndex {
    pub fn new(index: SearchIndex) -> Self {
        Self {
            inner: Mutex::new(index),
        }
    }

    pub fn search(&self, query: &str) -> Vec<RecordId> {
        self.inner.lock().search(query)
    }

    pub fn reset_session(&self) {
        self.inner.lock().reset_session();
    }

    /// Text of record `id`, copied out from under the lock.
    pub fn record(&self, id: RecordId) -> Option<String> {
        self.inner.lock().record(id).map(str::to_string)
    }

    pub fn into_inner(self) -> SearchIndex {
        self.inner.into_inner()
    }
}

impl From<SearchIndex> for SharedSearchIndex {
    fn from(index: SearchIndex) -> Self {
        Self::new(index)
    }
}
