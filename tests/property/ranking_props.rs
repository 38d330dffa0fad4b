//! Ranker properties.

use fuzzy_palette::contracts::check_ranked_order;
use fuzzy_palette::scoring::{
    rank_records, score_all_records, score_record, top_records_desc_by_score,
};
use fuzzy_palette::RecordId;
use proptest::prelude::*;

fn candidates(texts: &[String]) -> Vec<(RecordId, &str)> {
    texts.iter().enumerate().map(|(i, t)| (i, t.as_str())).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Shuffling the candidates does not change the ranking.
    #[test]
    fn prop_rank_order_independent(
        texts in prop::collection::vec("[a-cA-C /._]{0,12}", 0..300),
        query in "[a-cA-C]{1,4}",
        seed in any::<u64>(),
    ) {
        let forward = candidates(&texts);
        let mut shuffled = forward.clone();
        // Deterministic Fisher-Yates with a tiny LCG.
        let mut state = seed | 1;
        for i in (1..shuffled.len()).rev() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let j = (state >> 33) as usize % (i + 1);
            shuffled.swap(i, j);
        }

        prop_assert_eq!(
            rank_records(&forward, &query, 50),
            rank_records(&shuffled, &query, 50)
        );
    }

    /// Parallel scoring gives the same numbers as scoring one at a time.
    #[test]
    fn prop_partitioned_scores_match_single(
        texts in prop::collection::vec("[a-c /]{0,10}", 0..400),
        query in "[a-c]{1,4}",
    ) {
        let scored = score_all_records(&candidates(&texts), &query);
        prop_assert_eq!(scored.len(), texts.len());
        for record in &scored {
            prop_assert_eq!(record.score, score_record(record.text, &query));
        }
    }

    /// Top-K output is sorted and is a prefix of the full sort.
    #[test]
    fn prop_top_k_is_prefix_of_full_sort(
        texts in prop::collection::vec("[a-c]{0,6}", 0..200),
        query in "[a-c]{1,3}",
        limit in 0usize..40,
    ) {
        let cands = candidates(&texts);
        let mut full = score_all_records(&cands, &query);
        full.sort_by(|a, b| a.rank_cmp(b));

        let top = top_records_desc_by_score(score_all_records(&cands, &query), limit);
        check_ranked_order(&top);
        prop_assert_eq!(top.len(), limit.min(texts.len()));
        prop_assert_eq!(
            top.iter().map(|r| r.id).collect::<Vec<_>>(),
            full.iter().take(limit).map(|r| r.id).collect::<Vec<_>>()
        );
    }

    /// An exact match of the whole record scores 1.0 and nothing scores higher.
    #[test]
    fn prop_exact_match_is_max(record in "[a-z]{1,12}", other in "[a-z ]{1,12}") {
        prop_assert!((score_record(&record, &record) - 1.0).abs() < 1e-9);
        prop_assert!(score_record(&other, &record) <= 1.0 + 1e-9);
    }
}
