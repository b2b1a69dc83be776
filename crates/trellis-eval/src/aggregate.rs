//! Batch-level statistics over per-question evaluations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::runner::QuestionEvaluation;
use crate::similarity::{AnswerSimilarity, Winner};

/// Mean and population standard deviation of one metric column.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricStats {
    pub mean: f64,
    pub std: f64,
}

impl MetricStats {
    pub const ZERO: MetricStats = MetricStats { mean: 0.0, std: 0.0 };

    /// Stats over a column of values. An empty column scores zero.
    pub fn of(values: &[f64]) -> MetricStats {
        if values.is_empty() {
            return Self::ZERO;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        MetricStats {
            mean,
            std: variance.sqrt(),
        }
    }
}

/// Per-question-type slice of an evaluation run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TypeBreakdown {
    pub count: usize,
    pub rag_composite: MetricStats,
    pub llm_composite: MetricStats,
    pub rag_wins: usize,
    pub llm_wins: usize,
    pub ties: usize,
}

/// Aggregated view of one evaluation run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EvalSummary {
    pub total_questions: usize,
    /// Answer-quality stats for the pipeline, keyed by score name.
    pub rag_answer: HashMap<String, MetricStats>,
    /// Answer-quality stats for the baseline; empty when no baseline ran.
    pub llm_answer: HashMap<String, MetricStats>,
    /// Ranking stats keyed `"{metric}@{k}"`.
    pub retrieval: HashMap<String, MetricStats>,
    /// Keyed by question-type label.
    pub by_question_type: HashMap<String, TypeBreakdown>,
}

/// Aggregate per-question evaluations into run-level statistics.
pub fn summarize(results: &[QuestionEvaluation]) -> EvalSummary {
    let rag: Vec<&AnswerSimilarity> = results.iter().map(|r| &r.rag_scores).collect();
    let llm: Vec<&AnswerSimilarity> = results
        .iter()
        .filter_map(|r| r.llm_scores.as_ref())
        .collect();

    EvalSummary {
        total_questions: results.len(),
        rag_answer: answer_stats(&rag),
        llm_answer: answer_stats(&llm),
        retrieval: retrieval_stats(results),
        by_question_type: type_breakdown(results),
    }
}

fn answer_stats(sims: &[&AnswerSimilarity]) -> HashMap<String, MetricStats> {
    let mut columns: HashMap<&'static str, Vec<f64>> = HashMap::new();
    for sim in sims {
        for (name, value) in sim.fields() {
            columns.entry(name).or_default().push(value);
        }
    }
    columns
        .into_iter()
        .map(|(name, values)| (name.to_string(), MetricStats::of(&values)))
        .collect()
}

fn retrieval_stats(results: &[QuestionEvaluation]) -> HashMap<String, MetricStats> {
    let mut columns: HashMap<String, Vec<f64>> = HashMap::new();
    for result in results {
        for (key, value) in result.retrieval.flatten() {
            columns.entry(key).or_default().push(value);
        }
    }
    columns
        .into_iter()
        .map(|(key, values)| (key, MetricStats::of(&values)))
        .collect()
}

fn type_breakdown(results: &[QuestionEvaluation]) -> HashMap<String, TypeBreakdown> {
    let mut by_type: HashMap<&'static str, Vec<&QuestionEvaluation>> = HashMap::new();
    for result in results {
        by_type
            .entry(result.question_type.label())
            .or_default()
            .push(result);
    }

    by_type
        .into_iter()
        .map(|(label, subset)| {
            let rag: Vec<f64> = subset
                .iter()
                .map(|r| r.rag_scores.composite_score)
                .collect();
            let llm: Vec<f64> = subset
                .iter()
                .filter_map(|r| r.llm_scores.as_ref())
                .map(|s| s.composite_score)
                .collect();

            let mut breakdown = TypeBreakdown {
                count: subset.len(),
                rag_composite: MetricStats::of(&rag),
                llm_composite: MetricStats::of(&llm),
                ..TypeBreakdown::default()
            };
            for result in &subset {
                match result.winner {
                    Some(Winner::Rag) => breakdown.rag_wins += 1,
                    Some(Winner::Llm) => breakdown.llm_wins += 1,
                    Some(Winner::Tie) => breakdown.ties += 1,
                    None => {}
                }
            }
            (label.to_string(), breakdown)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::models::{MetricsResult, RankingMetrics, SynthesisStage};
    use trellis_core::question::QuestionType;

    fn sim(composite: f64) -> AnswerSimilarity {
        AnswerSimilarity {
            exact_match: 0.0,
            contains_match: 0.0,
            word_overlap: 0.0,
            composite_score: composite,
        }
    }

    fn evaluation(
        question_type: QuestionType,
        rag_composite: f64,
        llm_composite: Option<f64>,
        precision_at_1: f64,
    ) -> QuestionEvaluation {
        let rag_scores = sim(rag_composite);
        let llm_scores = llm_composite.map(sim);
        let winner = llm_scores
            .as_ref()
            .map(|llm| crate::similarity::winner(&rag_scores, llm));

        let mut retrieval = MetricsResult::new();
        retrieval.insert(
            1,
            RankingMetrics {
                precision: precision_at_1,
                recall: precision_at_1,
                ndcg: precision_at_1,
            },
        );

        QuestionEvaluation {
            question: "q".to_string(),
            expected_answer: "a".to_string(),
            question_type,
            source_file: "test.json".to_string(),
            rag_answer: "a".to_string(),
            synthesis_stage: SynthesisStage::Fallback,
            llm_answer: llm_scores.as_ref().map(|_| "b".to_string()),
            rag_scores,
            llm_scores,
            winner,
            retrieval,
        }
    }

    #[test]
    fn population_std_matches_hand_computation() {
        let stats = MetricStats::of(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((stats.mean - 5.0).abs() < 1e-9);
        assert!((stats.std - 2.0).abs() < 1e-9);
    }

    #[test]
    fn empty_and_singleton_columns() {
        assert_eq!(MetricStats::of(&[]), MetricStats::ZERO);
        let single = MetricStats::of(&[3.0]);
        assert_eq!(single.mean, 3.0);
        assert_eq!(single.std, 0.0);
    }

    #[test]
    fn summarize_collects_answer_and_retrieval_columns() {
        let results = vec![
            evaluation(QuestionType::Subject, 0.4, Some(0.2), 1.0),
            evaluation(QuestionType::Subject, 0.8, Some(0.2), 0.0),
        ];
        let summary = summarize(&results);

        assert_eq!(summary.total_questions, 2);
        let rag = summary.rag_answer["composite_score"];
        assert!((rag.mean - 0.6).abs() < 1e-9);
        assert!((rag.std - 0.2).abs() < 1e-9);
        let llm = summary.llm_answer["composite_score"];
        assert!((llm.mean - 0.2).abs() < 1e-9);
        assert_eq!(llm.std, 0.0);

        let p1 = summary.retrieval["precision@1"];
        assert!((p1.mean - 0.5).abs() < 1e-9);
        assert!((p1.std - 0.5).abs() < 1e-9);
    }

    #[test]
    fn llm_stats_stay_empty_without_baseline() {
        let results = vec![evaluation(QuestionType::Object, 0.5, None, 1.0)];
        let summary = summarize(&results);

        assert!(summary.llm_answer.is_empty());
        assert_eq!(summary.rag_answer.len(), 4);
        let breakdown = summary.by_question_type["object"];
        assert_eq!(breakdown.llm_composite, MetricStats::ZERO);
        assert_eq!(breakdown.rag_wins + breakdown.llm_wins + breakdown.ties, 0);
    }

    #[test]
    fn breakdown_groups_by_type_and_tallies_winners() {
        let results = vec![
            evaluation(QuestionType::Subject, 0.9, Some(0.1), 1.0),
            evaluation(QuestionType::Subject, 0.5, Some(0.5), 1.0),
            evaluation(QuestionType::Object, 0.1, Some(0.9), 0.0),
        ];
        let summary = summarize(&results);

        let subject = summary.by_question_type["subject"];
        assert_eq!(subject.count, 2);
        assert_eq!(subject.rag_wins, 1);
        assert_eq!(subject.ties, 1);
        assert!((subject.rag_composite.mean - 0.7).abs() < 1e-9);

        let object = summary.by_question_type["object"];
        assert_eq!(object.count, 1);
        assert_eq!(object.llm_wins, 1);
    }

    #[test]
    fn empty_run_summarizes_to_empty_maps() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_questions, 0);
        assert!(summary.rag_answer.is_empty());
        assert!(summary.retrieval.is_empty());
        assert!(summary.by_question_type.is_empty());
    }
}
