// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tunables for building and searching an index.
//!
//! Defaults reproduce the fixed scoring model: edit distance threshold 2.0
//! and at most 100 results. Length caps bound worst-case ranking cost, since
//! the alignment DP is O(record chars × query chars) per candidate. Long input
//! is truncated, never rejected.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default maximum edit distance between a query keyword and a trie prefix.
pub const DEFAULT_EDIT_DIST_THRESHOLD: f64 = 2.0;

/// Default maximum number of record IDs returned by a search.
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Default number of query prefixes whose active node sets are kept.
pub const DEFAULT_PREFIX_CACHE_CAPACITY: usize = 1024;

/// Default cap on record length, in characters.
pub const DEFAULT_MAX_RECORD_CHARS: usize = 1024;

/// Default cap on query length, in characters.
pub const DEFAULT_MAX_QUERY_CHARS: usize = 256;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub edit_dist_threshold: f64,
    pub max_results: usize,
    pub prefix_cache_capacity: usize,
    pub max_record_chars: usize,
    pub max_query_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            edit_dist_threshold: DEFAULT_EDIT_DIST_THRESHOLD,
            max_results: DEFAULT_MAX_RESULTS,
            prefix_cache_capacity: DEFAULT_PREFIX_CACHE_CAPACITY,
            max_record_chars: DEFAULT_MAX_RECORD_CHARS,
            max_query_chars: DEFAULT_MAX_QUERY_CHARS,
        }
    }
}

impl SearchConfig {
    /// Check that every value is usable. Indexes built from an invalid config
    /// would either match nothing or panic on cache construction.
    pub fn validate(&self) -> Result<()> {
        if !self.edit_dist_threshold.is_finite() || self.edit_dist_threshold < 0.0 {
            return Err(Error::Config(format!(
                "editDistThreshold must be a finite non-negative number, got {}",
                self.edit_dist_threshold
            )));
        }
        if self.max_results == 0 {
            return Err(Error::Config("maxResults must be positive".to_string()));
        }
        if self.prefix_cache_capacity == 0 {
            return Err(Error::Config(
                "prefixCacheCapacity must be positive".to_string(),
            ));
        }
        if self.max_record_chars == 0 || self.max_query_chars == 0 {
            return Err(Error::Config(
                "maxRecordChars and maxQueryChars must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
