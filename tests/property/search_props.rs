//! Index-level properties: AND semantics, determinism, caps.

use super::common::{corpus_strategy, oracle_and_matches, record_strategy};
use fuzzy_palette::{build_index, SearchConfig, SearchIndex};
use proptest::prelude::*;
use std::collections::BTreeSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A two-keyword query returns a subset of each keyword's own results.
    #[test]
    fn prop_and_semantics(records in corpus_strategy(), a in "[a-e]{1,4}", b in "[a-e]{1,4}") {
        let mut index = build_index(&records);
        let both: BTreeSet<_> = index.search(&format!("{a} {b}")).into_iter().collect();
        let only_a: BTreeSet<_> = index.search(&a).into_iter().collect();
        let only_b: BTreeSet<_> = index.search(&b).into_iter().collect();

        prop_assert!(both.is_subset(&only_a));
        prop_assert!(both.is_subset(&only_b));
    }

    /// The candidate set equals the brute-force AND over keywords.
    #[test]
    fn diff_search_matches_oracle(records in corpus_strategy(), query in record_strategy()) {
        let mut index = build_index(&records);
        let found: BTreeSet<_> = index.search(&query).into_iter().collect();
        prop_assert_eq!(found, oracle_and_matches(&records, &query, 2));
    }

    /// Same index, same query, same order.
    #[test]
    fn prop_search_deterministic(records in corpus_strategy(), query in record_strategy()) {
        let mut index = build_index(&records);
        let first = index.search(&query);
        let second = index.search(&query);
        prop_assert_eq!(&first, &second);

        let mut fresh = build_index(&records);
        prop_assert_eq!(fresh.search(&query), first);
    }

    /// Never more than max_results.
    #[test]
    fn prop_respects_limit(records in corpus_strategy(), query in "[a-e]{1,3}", max_results in 1usize..5) {
        let config = SearchConfig { max_results, ..SearchConfig::default() };
        let mut index = SearchIndex::build_with_config(&records, config).unwrap();
        prop_assert!(index.search(&query).len() <= max_results);
    }
}
