// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Instant;

use fuzzy_palette::{SearchConfig, SearchIndex};

mod cli;
use cli::display::{self, BOLD, DIM};
use cli::{load_records, Cli, Commands};

#[derive(Serialize)]
struct JsonHit<'a> {
    id: usize,
    record: &'a str,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search {
            records,
            query,
            limit,
            config,
            json,
        } => run_search(&records, &query, limit, config.as_deref(), json),
        Commands::Interactive { records, config } => run_interactive(&records, config.as_deref()),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    match path {
        Some(path) => SearchConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(SearchConfig::default()),
    }
}

fn build(records_path: &Path, config: SearchConfig) -> Result<SearchIndex> {
    let records = load_records(records_path)?;
    SearchIndex::build_with_config(records, config).context("failed to build index")
}

fn run_search(
    records_path: &Path,
    query: &str,
    limit: usize,
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    config.max_results = limit;
    let mut index = build(records_path, config)?;

    let ids = index.search(query);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if json {
        let hits: Vec<JsonHit> = ids
            .iter()
            .filter_map(|&id| index.record(id).map(|record| JsonHit { id, record }))
            .collect();
        serde_json::to_writer_pretty(&mut out, &hits)?;
        writeln!(out)?;
    } else {
        print_results(&mut out, &index, &ids)?;
    }
    Ok(())
}

fn run_interactive(records_path: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let mut index = build(records_path, config)?;
    eprintln!(
        "{} {} records, one query per line, Ctrl-D to quit",
        display::styled(&[BOLD], "fuzzy-palette"),
        index.len()
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let query = line.context("failed to read query from stdin")?;

        let start = Instant::now();
        let ids = index.search(&query);
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        print_results(&mut out, &index, &ids)?;
        writeln!(
            out,
            "{} {}",
            display::styled(&[DIM], &format!("{} results in", ids.len())),
            display::timing_ms(elapsed_ms)
        )?;
        out.flush()?;
    }
    Ok(())
}

fn print_results(out: &mut impl Write, index: &SearchIndex, ids: &[usize]) -> Result<()> {
    for (rank, &id) in ids.iter().enumerate() {
        if let Some(record) = index.record(id) {
            writeln!(out, "{}", display::result_line(rank, id, record))?;
        }
    }
    Ok(())
}
