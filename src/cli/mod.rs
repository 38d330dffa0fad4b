// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fuzzy-palette command-line interface.
//!
//! Two subcommands: `search` runs one query against a records file, and
//! `interactive` reads queries from stdin against a single index, the way a
//! palette would as the user types.

pub mod display;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "fuzzy-palette",
    about = "Typo-tolerant incremental search over short records",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a records file once and print the ranked matches
    Search {
        /// File with one record per line
        #[arg(short, long)]
        records: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// JSON file with search settings (camelCase keys)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print results as a JSON array of {"id", "record"}
        #[arg(long)]
        json: bool,
    },

    /// Read queries from stdin, one per line, against one index
    Interactive {
        /// File with one record per line
        #[arg(short, long)]
        records: PathBuf,

        /// JSON file with search settings (camelCase keys)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// One record per line. Trailing `\r` is stripped; empty lines are kept so
/// that record IDs match line numbers (0-based).
pub fn load_records(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read records from {}", path.display()))?;
    Ok(contents
        .lines()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect())
}
