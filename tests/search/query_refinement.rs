//! Typing and deleting one character at a time.

use super::common::{build, oracle_and_matches, PALETTE_RECORDS};
use fuzzy_palette::SearchIndex;
use std::collections::BTreeSet;

fn prefixes(query: &str) -> Vec<&str> {
    query
        .char_indices()
        .map(|(i, c)| &query[..i + c.len_utf8()])
        .collect()
}

fn check_against_oracle(index: &mut SearchIndex, records: &[String], query: &str) {
    let found: BTreeSet<_> = index.search(query).into_iter().collect();
    let expected = oracle_and_matches(records, query, 2);
    assert_eq!(found, expected, "query {query:?}");
}

#[test]
fn test_typing_forward_then_back() {
    let records: Vec<String> = PALETTE_RECORDS.iter().map(|r| r.to_string()).collect();
    let mut index = build(PALETTE_RECORDS);

    let query = "go to defin";
    let steps = prefixes(query);
    for step in &steps {
        check_against_oracle(&mut index, &records, step);
    }
    for step in steps.iter().rev() {
        check_against_oracle(&mut index, &records, step);
    }
}

#[test]
fn test_session_reset_between_queries() {
    let records: Vec<String> = PALETTE_RECORDS.iter().map(|r| r.to_string()).collect();
    let mut index = build(PALETTE_RECORDS);

    for step in prefixes("src/scoring") {
        check_against_oracle(&mut index, &records, step);
    }
    index.reset_session();
    assert_eq!(index.cached_prefix_count(), 0);
    for step in prefixes("alocator") {
        check_against_oracle(&mut index, &records, step);
    }
}
