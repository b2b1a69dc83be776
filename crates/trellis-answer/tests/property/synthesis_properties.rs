use proptest::prelude::*;
use trellis_answer::synthesize::{fallback, NO_ANSWER};
use trellis_answer::verbalize;
use trellis_core::models::{CandidateItem, Schema, Triple};
use trellis_core::question::QuestionType;

fn field_strategy() -> impl Strategy<Value = String> {
    ".{0,16}"
}

fn candidate_strategy() -> impl Strategy<Value = CandidateItem> {
    (
        field_strategy(),
        field_strategy(),
        field_strategy(),
        field_strategy(),
        field_strategy(),
        0.0f64..1.5,
    )
        .prop_map(|(sub, rel, obj, st, ot, distance)| {
            CandidateItem::new(
                "c",
                Triple::new(sub, rel.clone(), obj),
                Schema::new(st, rel, ot),
                distance,
                "doc",
            )
        })
}

fn question_type_strategy() -> impl Strategy<Value = QuestionType> {
    prop::sample::select(QuestionType::ALL.to_vec())
}

// ── Fallback extraction is total ──────────────────────────────────────────

proptest! {
    #[test]
    fn extraction_never_panics_and_never_returns_empty_marker(
        question in ".{0,80}",
        qt in question_type_strategy(),
        candidates in prop::collection::vec(candidate_strategy(), 0..6)
    ) {
        let answer = fallback::extract(&question, qt, &candidates);
        if candidates.is_empty() {
            prop_assert_eq!(answer, NO_ANSWER);
        }
    }
}

// ── Verbalization always produces a chain ─────────────────────────────────

proptest! {
    #[test]
    fn verbalize_is_never_empty_for_nonempty_input(
        qt in question_type_strategy(),
        candidates in prop::collection::vec(candidate_strategy(), 1..6)
    ) {
        let chain = verbalize::verbalize(qt, &candidates);
        prop_assert!(!chain.render().is_empty());
        prop_assert!(
            chain.lines.iter().any(|l| l.starts_with("Knowledge 1:")),
            "chain missing its knowledge line"
        );
    }

    #[test]
    fn verbalize_chain_shape_is_stable_per_type(
        candidates in prop::collection::vec(candidate_strategy(), 1..6)
    ) {
        // Subject, Object, Relationship share the 5-line shape; Type has 6.
        for qt in [QuestionType::Subject, QuestionType::Object, QuestionType::Relationship] {
            prop_assert_eq!(verbalize::verbalize(qt, &candidates).len(), 5);
        }
        prop_assert_eq!(verbalize::verbalize(QuestionType::Type, &candidates).len(), 6);
    }
}
