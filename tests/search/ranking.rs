//! Ranker ordering, independent of the trie.

use fuzzy_palette::scoring::{rank_records, score_all_records, score_record};
use fuzzy_palette::RecordId;

fn rank(records: &[&str], query: &str) -> Vec<String> {
    let candidates: Vec<(RecordId, &str)> = records.iter().copied().enumerate().collect();
    rank_records(&candidates, query, records.len())
        .into_iter()
        .map(|id| records[id].to_string())
        .collect()
}

#[test]
fn test_boundary_preference() {
    let ranked = rank(&["foo/foobar.go", "foo/bar.go", "foobar.go"], "bar");
    assert_eq!(ranked, vec!["foo/bar.go", "foobar.go", "foo/foobar.go"]);
}

#[test]
fn test_case_partial_credit() {
    let ranked = rank(&["foobar", "FooBar", "FOOBAR"], "FooBar");
    assert_eq!(ranked[0], "FooBar");
    assert!(score_record("foobar", "FooBar") > 0.0);
}

#[test]
fn test_ties_sorted_by_text() {
    // Identical scores: only the text decides.
    let ranked = rank(&["xyz b", "xyz a", "xyz c"], "xyz");
    assert_eq!(ranked, vec!["xyz a", "xyz b", "xyz c"]);
}

#[test]
fn test_duplicate_records_sorted_by_id() {
    let candidates = [(7, "same"), (2, "same"), (5, "same")];
    assert_eq!(rank_records(&candidates, "same", 3), vec![2, 5, 7]);
}

#[test]
fn test_scores_are_normalized() {
    let scored = score_all_records(&[(0, "foobar"), (1, "foobar and more")], "foobar");
    assert!((scored[0].score - 1.0).abs() < 1e-12);
    assert!(scored[1].score < scored[0].score);
    assert!(scored[1].score > 0.0);
}
