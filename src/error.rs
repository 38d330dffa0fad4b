// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for the recoverable edges of the crate.
//!
//! Building and searching never fail: empty records, empty queries, and
//! queries that match nothing all produce empty results. Broken internal
//! invariants panic instead. What is left is configuration and loading
//! records from disk, which is what this enum covers.

use thiserror::Error;

/// Result alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A `SearchConfig` value is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading records or a config file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A config file is not valid JSON for `SearchConfig`.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}
