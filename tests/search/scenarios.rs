//! Concrete end-to-end scenarios with known answers.

use super::common::{build, texts, FOOB_RECORDS};
use fuzzy_palette::{search, FuzzyTrie};

#[test]
fn test_foob_ranks_prefix_matches() {
    let mut index = build(FOOB_RECORDS);
    let ids = search(&mut index, "foob");
    assert_eq!(
        texts(&index, &ids),
        vec!["foobar", ".foobar", "foo.bar", "foo"]
    );
}

#[test]
fn test_exact_case_ranks_first() {
    let mut index = build(&["foo", "FOO", "FoO", "fOo"]);
    let ids = search(&mut index, "FoO");
    assert_eq!(ids.len(), 4);
    assert_eq!(index.record(ids[0]), Some("FoO"));
}

#[test]
fn test_trie_growth_keeps_earlier_keywords() {
    // Inserting "cluster" grows the arena after "configmap" has claimed the
    // shared 'c' node. Both must survive.
    let mut trie = FuzzyTrie::new();
    trie.insert("configmap", 0);
    trie.insert("cluster", 1);

    assert_eq!(trie.record_ids_for_prefix("cluster", None).to_sorted_vec(), vec![1]);
    assert_eq!(trie.record_ids_for_prefix("configmap", None).to_sorted_vec(), vec![0]);
}

#[test]
fn test_near_duplicate_keywords() {
    let mut index = build(&["allocation", "allocator"]);
    let ids = search(&mut index, "allocator");
    assert_eq!(texts(&index, &ids), vec!["allocator", "allocation"]);
}

#[test]
fn test_typo_in_query() {
    let mut index = build(&["foobar", "bazqux"]);
    assert_eq!(search(&mut index, "fobar"), vec![0]);
    assert_eq!(search(&mut index, "foxbar"), vec![0]);
}

#[test]
fn test_multi_keyword_query_ranks_whole_string() {
    let mut index = build(&["settings", "set_text", "set_tesx", "test_set"]);
    let ids = search(&mut index, "set_tes");
    assert_eq!(index.record(ids[0]), Some("set_tesx"));
}

#[test]
fn test_boundary_match_first() {
    let mut index = build(&["foo/foobar.go", "foo/bar.go", "foobar.go"]);
    let ids = search(&mut index, "bar");
    assert_eq!(index.record(ids[0]), Some("foo/bar.go"));
}

#[test]
fn test_unicode_records() {
    let mut index = build(&["Café au lait", "cafeteria", "naïve"]);
    let ids = search(&mut index, "café");
    assert_eq!(index.record(ids[0]), Some("Café au lait"));
    assert!(ids.contains(&1));
}

#[test]
fn test_case_insensitive_paths() {
    let mut index = build(&[
        "fOo/first.txt",
        "Foo/second.txt",
        "foo/third.txt",
        "bar/first.txt",
        "bar/second.txt",
        "FoO/first.txt",
    ]);
    let ids = search(&mut index, "FoO");
    assert_eq!(
        texts(&index, &ids),
        vec![
            "FoO/first.txt",
            "Foo/second.txt",
            "foo/third.txt",
            "fOo/first.txt",
            "bar/first.txt",
        ]
    );
}

#[test]
fn test_shared_prefix_prefers_shorter_record() {
    let mut index = build(&["save", "force save"]);
    let ids = search(&mut index, "s");
    assert_eq!(texts(&index, &ids), vec!["save", "force save"]);
}

#[test]
fn test_multi_component_path_query() {
    let mut index = build(&[
        "foo/bar/test.txt",
        "foo/bar/test.go",
        "foo/baz/test.go",
        "doc.txt",
        "main.go",
    ]);
    let ids = search(&mut index, "foo/bar");
    assert_eq!(
        texts(&index, &ids),
        vec!["foo/bar/test.go", "foo/bar/test.txt", "foo/baz/test.go", "main.go"]
    );
}

#[test]
fn test_arena_growth_through_index() {
    let mut index = build(&["configmap", "cluster"]);
    assert_eq!(search(&mut index, "cluster"), vec![1]);
}

#[test]
fn test_leaf_bounds_filter_second_keyword() {
    // The second keyword ends on leaf nodes holding record 1 only; their
    // bounds must be set for the filtered lookup to reach them.
    let mut index = build(&[
        "./allocation/xxxxxxxxx/allocator.go",
        "./allocation/yyyyyyyyy/allocator.go",
    ]);
    assert_eq!(search(&mut index, "yyyyyyyy/allo"), vec![1]);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_decomposed_record_matches_composed_query() {
    let mut index = build(&["cafes", "cafe\u{301}"]);
    let ids = search(&mut index, "caf\u{e9}");
    assert_eq!(ids, vec![1, 0]);
    assert_eq!(index.record(1), Some("caf\u{e9}"));
}
