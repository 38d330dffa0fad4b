// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typo-tolerant, incremental fuzzy search over short text records.
//!
//! Built for command and file palettes: a fixed set of records, a query that
//! grows and shrinks one keystroke at a time, and a few milliseconds to answer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ tokenizer.rs │────▶│ fuzzy/trie.rs│────▶│ record_set.rs│
//! │  (keywords)  │     │ (active node │     │ (candidates, │
//! │              │     │  sets, cache)│     │   bounds)    │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                    │                     │
//!        ▼                    ▼                     ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                        index.rs                          │
//! │   (build, search: AND over keywords, then rank)          │
//! └─────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │            scoring/ (alignment DP, top-K heap)           │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! | Module        | Role                                                   |
//! |---------------|--------------------------------------------------------|
//! | `tokenizer`   | NFC, lowercase, split on whitespace and punctuation    |
//! | `record_set`  | Open-addressing ID set with min/max bounds             |
//! | `fuzzy`       | Edit-distance-bounded prefix trie with prefix cache    |
//! | `index`       | Build and search orchestration                         |
//! | `scoring`     | Parallel alignment scoring and bounded top-K           |
//! | `palette`     | Aliases and empty-query policy for a command palette   |
//! | `contracts`   | Debug-mode invariant checks                            |
//!
//! # Usage
//!
//! ```
//! use fuzzy_palette::{build_index, search};
//!
//! let records = ["foo", "bar", "foobar", "barbaz", "barfoo", ".foobar", "foo.bar"];
//! let mut index = build_index(records);
//!
//! let ids = search(&mut index, "foob");
//! let found: Vec<&str> = ids.iter().map(|&id| records[id]).collect();
//! assert_eq!(found, ["foobar", ".foobar", "foo.bar", "foo"]);
//! ```

pub mod config;
pub mod contracts;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod palette;
pub mod record_set;
pub mod scoring;
pub mod tokenizer;

// Re-exports for public API
pub use config::SearchConfig;
pub use error::{Error, Result};
pub use fuzzy::FuzzyTrie;
pub use index::{build_index, search, SearchIndex, SharedSearchIndex};
pub use palette::{Palette, PaletteItem};
pub use record_set::{RecordId, RecordIdSet};
pub use scoring::{rank_records, ScoredRecord};
pub use tokenizer::keywords;
