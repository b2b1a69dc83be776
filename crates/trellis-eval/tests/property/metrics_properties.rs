use std::collections::HashSet;

use proptest::prelude::*;
use trellis_core::models::{CandidateItem, GroundTruth, RankingMetrics, Schema, Triple};
use trellis_eval::metrics;

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z_]{0,12}"
}

fn candidate_strategy() -> impl Strategy<Value = (String, String, String, f64)> {
    (
        name_strategy(),
        name_strategy(),
        name_strategy(),
        0.0f64..1.0,
    )
}

fn build_candidates(parts: &[(String, String, String, f64)]) -> Vec<CandidateItem> {
    parts
        .iter()
        .enumerate()
        .map(|(i, (sub, rel, obj, distance))| {
            CandidateItem::new(
                format!("c{i}"),
                Triple::new(sub, rel, obj),
                Schema::new("Thing", rel, "Thing"),
                *distance,
                format!("{sub} {rel} {obj}"),
            )
        })
        .collect()
}

fn truth_strategy() -> impl Strategy<Value = GroundTruth> {
    (
        "[A-Za-z ]{0,30}",
        prop::option::of((name_strategy(), name_strategy(), name_strategy())),
    )
        .prop_map(|(answer, triple)| {
            GroundTruth::new(answer, triple.map(|(s, r, o)| Triple::new(s, r, o)))
        })
}

// ── All three metrics live in the unit interval ───────────────────────────

proptest! {
    #[test]
    fn metrics_stay_in_unit_interval(
        parts in prop::collection::vec(candidate_strategy(), 0..10),
        truth in truth_strategy(),
        ks in prop::collection::vec(0usize..12, 1..5)
    ) {
        let result = metrics::evaluate(&build_candidates(&parts), &truth, &ks);

        for (k, m) in &result.by_k {
            for (name, value) in [
                ("precision", m.precision),
                ("recall", m.recall),
                ("ndcg", m.ndcg),
            ] {
                prop_assert!(
                    (0.0..=1.0).contains(&value),
                    "{name}@{k} out of range: {value}"
                );
            }
        }
    }
}

// ── An empty candidate list scores zero at every requested K ──────────────

proptest! {
    #[test]
    fn empty_list_scores_zero_at_every_k(
        truth in truth_strategy(),
        ks in prop::collection::vec(1usize..20, 1..6)
    ) {
        let result = metrics::evaluate(&[], &truth, &ks);

        for &k in &ks {
            prop_assert_eq!(result.get(k), Some(&RankingMetrics::ZERO));
        }
    }
}

// ── Every requested cutoff stays addressable in the output ────────────────

proptest! {
    #[test]
    fn every_requested_k_is_keyed(
        parts in prop::collection::vec(candidate_strategy(), 1..6),
        truth in truth_strategy(),
        ks in prop::collection::vec(0usize..12, 1..6)
    ) {
        let result = metrics::evaluate(&build_candidates(&parts), &truth, &ks);

        let distinct: HashSet<usize> = ks.iter().copied().collect();
        prop_assert_eq!(result.by_k.len(), distinct.len());
        for &k in &ks {
            prop_assert!(result.get(k).is_some(), "missing entry for k={k}");
        }
    }
}

// ── Evaluation is deterministic ───────────────────────────────────────────

proptest! {
    #[test]
    fn evaluation_is_deterministic(
        parts in prop::collection::vec(candidate_strategy(), 0..8),
        truth in truth_strategy(),
        ks in prop::collection::vec(1usize..10, 1..5)
    ) {
        let candidates = build_candidates(&parts);
        let first = metrics::evaluate(&candidates, &truth, &ks);
        let second = metrics::evaluate(&candidates, &truth, &ks);

        prop_assert_eq!(first, second);
    }
}

// ── An exact hit at rank 1 maxes out every metric at K = 1 ────────────────

proptest! {
    #[test]
    fn exact_top_hit_maxes_every_metric_at_one(
        parts in prop::collection::vec(candidate_strategy(), 1..6)
    ) {
        let candidates = build_candidates(&parts);
        let truth = GroundTruth::new("irrelevant", Some(candidates[0].triple.clone()));

        let result = metrics::evaluate(&candidates, &truth, &[1]);
        let m = result.get(1).unwrap();

        prop_assert_eq!(m.precision, 1.0);
        prop_assert_eq!(m.recall, 1.0);
        prop_assert_eq!(m.ndcg, 1.0);
    }
}
