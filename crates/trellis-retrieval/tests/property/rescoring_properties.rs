use proptest::prelude::*;
use trellis_core::models::{CandidateItem, Schema, Triple};
use trellis_core::question::QuestionType;
use trellis_retrieval::ranking::scorer;
use trellis_retrieval::ranking::SignalWeights;
use trellis_retrieval::QuestionClassifier;

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

// ── Multi-signal scoring is order independent ─────────────────────────────

proptest! {
    #[test]
    fn scoring_ignores_input_order(
        parts in prop::collection::vec(candidate_strategy(), 1..8),
        query in "[a-z ?]{0,60}"
    ) {
        let weights = SignalWeights::default();
        let forward = scorer::score(&query, build_candidates(&parts), &weights);

        let mut reversed_input = build_candidates(&parts);
        reversed_input.reverse();
        let backward = scorer::score(&query, reversed_input, &weights);

        prop_assert_eq!(forward.len(), backward.len());
        for c in &forward {
            let twin = backward
                .iter()
                .find(|b| b.id == c.id)
                .expect("candidate lost during rescoring");
            prop_assert_eq!(c.rerank_score, twin.rerank_score);
        }
    }
}

// ── Every candidate comes back scored, finite, and in rank order ──────────

proptest! {
    #[test]
    fn scores_are_total_and_sorted(
        parts in prop::collection::vec(candidate_strategy(), 0..8),
        query in "[a-z ?]{0,60}"
    ) {
        let scored = scorer::score(&query, build_candidates(&parts), &SignalWeights::default());

        prop_assert_eq!(scored.len(), parts.len());
        for c in &scored {
            let score = c.rerank_score.expect("rescored candidate missing score");
            prop_assert!(score.is_finite(), "non-finite score {score}");
            prop_assert!(
                c.signal_breakdown.as_ref().is_some_and(|b| b.len() == 4),
                "breakdown must carry all four signals"
            );
        }
        for pair in scored.windows(2) {
            prop_assert!(
                pair[0].ranking_score() >= pair[1].ranking_score(),
                "output not sorted by score"
            );
        }
    }
}

// ── Each signal stays within its clamp ────────────────────────────────────

proptest! {
    #[test]
    fn signal_components_stay_clamped(
        parts in prop::collection::vec(candidate_strategy(), 1..6),
        query in "[a-z ?]{0,60}"
    ) {
        let scored = scorer::score(&query, build_candidates(&parts), &SignalWeights::default());
        for c in &scored {
            let breakdown = c.signal_breakdown.as_ref().unwrap();
            for key in ["entity_match", "relation_match", "type_match"] {
                let v = breakdown[key];
                prop_assert!((0.0..=1.0).contains(&v), "{key} out of range: {v}");
            }
        }
    }
}

// ── Classification is total and deterministic ─────────────────────────────

proptest! {
    #[test]
    fn classification_is_total_and_deterministic(question in ".{0,120}") {
        let classifier = QuestionClassifier::new();
        let first = classifier.classify(&question);
        let second = classifier.classify(&question);

        prop_assert!(QuestionType::ALL.contains(&first));
        prop_assert_eq!(first, second);
    }
}
