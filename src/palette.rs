// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A command palette on top of [`SearchIndex`].
//!
//! Two policies the engine itself does not have:
//!
//! - **Aliases**: an item may declare short names (`"w"` for "Save File").
//!   When the whole query equals an alias, ignoring case, every item with
//!   that alias goes first in name order, without being scored. Engine
//!   results follow them.
//! - **Empty query**: either every item in name order, or nothing.
//!
//! The palette keeps one index for its lifetime, so typing into it reuses
//! the prefix cache keystroke by keystroke.

use crate::index::SearchIndex;
use crate::tokenizer;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteItem {
    pub name: String,
    pub aliases: Vec<String>,
}

impl PaletteItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }
}

pub struct Palette {
    items: Vec<PaletteItem>,
    index: SearchIndex,
    /// Folded alias → positions in `items`, ascending.
    aliases: HashMap<String, Vec<usize>>,
    empty_query_shows_all: bool,
    query: String,
    results: Vec<usize>,
}

impl Palette {
    /// Items are sorted by name; the index is built over the names.
    pub fn new(mut items: Vec<PaletteItem>, empty_query_shows_all: bool) -> Self {
        items.sort_by(|a, b| a.name.cmp(&b.name));

        let mut aliases: HashMap<String, Vec<usize>> = HashMap::new();
        for (pos, item) in items.iter().enumerate() {
            for alias in &item.aliases {
                let positions = aliases.entry(fold(alias)).or_default();
                if positions.last() != Some(&pos) {
                    positions.push(pos);
                }
            }
        }

        let index = SearchIndex::build(items.iter().map(|item| item.name.as_str()));
        let results = if empty_query_shows_all {
            (0..items.len()).collect()
        } else {
            Vec::new()
        };

        Self {
            items,
            index,
            aliases,
            empty_query_shows_all,
            query: String::new(),
            results,
        }
    }

    /// Update the query. Returns false, doing nothing, if it did not change.
    pub fn set_query(&mut self, query: &str) -> bool {
        if query == self.query {
            return false;
        }
        self.query = query.to_string();

        self.results = if query.is_empty() {
            if self.empty_query_shows_all {
                (0..self.items.len()).collect()
            } else {
                Vec::new()
            }
        } else {
            let promoted: &[usize] = self
                .aliases
                .get(&fold(query))
                .map(Vec::as_slice)
                .unwrap_or_default();
            let mut results = promoted.to_vec();
            results.extend(
                self.index
                    .search(query)
                    .into_iter()
                    .filter(|pos| !promoted.contains(pos)),
            );
            results
        };

        debug!(query, results = self.results.len(), "palette query updated");
        true
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Items for the current query, in display order.
    pub fn results(&self) -> Vec<&PaletteItem> {
        self.results.iter().map(|&pos| &self.items[pos]).collect()
    }

    /// All items, sorted by name.
    pub fn items(&self) -> &[PaletteItem] {
        &self.items
    }
}

/// Case-insensitive comparison key: NFC, then lowercase.
fn fold(text: &str) -> String {
    tokenizer::normalize_query(text).to_lowercase()
}
