//! Evaluation report writers: JSON dump, CSV comparison table, and a
//! Markdown summary, all timestamped into the configured report
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use trellis_core::config::EvalConfig;
use trellis_core::errors::EvalError;

use crate::runner::EvalOutcome;

const ANSWER_METRICS: [&str; 4] = [
    "exact_match",
    "contains_match",
    "word_overlap",
    "composite_score",
];
const RANKING_METRICS: [&str; 3] = ["precision", "recall", "ndcg"];

/// Where one run's reports landed.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub json: PathBuf,
    pub csv: PathBuf,
    pub markdown: PathBuf,
}

/// Write all three report formats for a finished run.
pub fn write_all(outcome: &EvalOutcome, config: &EvalConfig) -> Result<ReportPaths, EvalError> {
    let dir = Path::new(&config.report_dir);
    fs::create_dir_all(dir).map_err(|e| EvalError::WriteFailed {
        path: config.report_dir.clone(),
        reason: e.to_string(),
    })?;

    let stamp = outcome.timestamp.format("%Y%m%d_%H%M%S");
    let paths = ReportPaths {
        json: dir.join(format!("evaluation_results_{stamp}.json")),
        csv: dir.join(format!("evaluation_comparison_{stamp}.csv")),
        markdown: dir.join(format!("evaluation_report_{stamp}.md")),
    };

    let json = serde_json::to_string_pretty(outcome).map_err(|e| EvalError::WriteFailed {
        path: paths.json.display().to_string(),
        reason: e.to_string(),
    })?;
    write_text(&paths.json, &json)?;
    write_text(&paths.csv, &render_csv(outcome))?;
    write_text(&paths.markdown, &render_markdown(outcome, config))?;

    info!(
        run_id = %outcome.run_id,
        dir = %dir.display(),
        "evaluation reports written"
    );
    Ok(paths)
}

/// Per-question comparison table.
///
/// Answer scores print at 3 decimals; diff columns carry an explicit
/// sign. Questions without a baseline answer leave the LLM and diff
/// columns empty.
pub fn render_csv(outcome: &EvalOutcome) -> String {
    let mut header: Vec<String> = [
        "question",
        "expected_answer",
        "question_type",
        "rag_answer",
        "llm_answer",
        "winner",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    for metric in ANSWER_METRICS {
        header.push(format!("rag_{metric}"));
        header.push(format!("llm_{metric}"));
        header.push(format!("diff_{metric}"));
    }

    let mut lines = vec![header.join(",")];
    for result in &outcome.results {
        let mut row = vec![
            csv_field(&result.question),
            csv_field(&result.expected_answer),
            result.question_type.label().to_string(),
            csv_field(&result.rag_answer),
            csv_field(result.llm_answer.as_deref().unwrap_or("")),
            result
                .winner
                .map(|w| w.label().to_string())
                .unwrap_or_default(),
        ];
        for (i, (_, rag_value)) in result.rag_scores.fields().into_iter().enumerate() {
            row.push(format!("{rag_value:.3}"));
            match result.llm_scores {
                Some(llm) => {
                    let llm_value = llm.fields()[i].1;
                    row.push(format!("{llm_value:.3}"));
                    row.push(format!("{:+.3}", rag_value - llm_value));
                }
                None => {
                    row.push(String::new());
                    row.push(String::new());
                }
            }
        }
        lines.push(row.join(","));
    }
    lines.join("\n") + "\n"
}

/// Human-readable run summary.
pub fn render_markdown(outcome: &EvalOutcome, config: &EvalConfig) -> String {
    let summary = &outcome.summary;
    let compared = !summary.llm_answer.is_empty();
    let mut md: Vec<String> = Vec::new();

    md.push("# RAG vs LLM Evaluation Report".to_string());
    md.push(String::new());
    md.push(format!("- Run ID: {}", outcome.run_id));
    md.push(format!(
        "- Generated: {}",
        outcome.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    md.push(format!("- Total questions: {}", summary.total_questions));

    md.push(String::new());
    md.push("## Answer Quality".to_string());
    md.push(String::new());
    if compared {
        md.push("| Metric | RAG | LLM | Improvement |".to_string());
        md.push("|--------|-----|-----|-------------|".to_string());
        for metric in ANSWER_METRICS {
            let rag = summary.rag_answer.get(metric).copied().unwrap_or_default();
            let llm = summary.llm_answer.get(metric).copied().unwrap_or_default();
            md.push(format!(
                "| {metric} | {:.4} | {:.4} | {:+.1}% |",
                rag.mean,
                llm.mean,
                improvement(rag.mean, llm.mean)
            ));
        }
    } else {
        md.push("| Metric | Mean | Std |".to_string());
        md.push("|--------|------|-----|".to_string());
        for metric in ANSWER_METRICS {
            if let Some(stats) = summary.rag_answer.get(metric) {
                md.push(format!("| {metric} | {:.4} | {:.4} |", stats.mean, stats.std));
            }
        }
    }

    md.push(String::new());
    md.push("## Retrieval Quality".to_string());
    md.push(String::new());
    md.push("| Metric | Mean | Std |".to_string());
    md.push("|--------|------|-----|".to_string());
    for &k in &config.k_values {
        for metric in RANKING_METRICS {
            let key = format!("{metric}@{k}");
            if let Some(stats) = summary.retrieval.get(&key) {
                md.push(format!("| {key} | {:.4} | {:.4} |", stats.mean, stats.std));
            }
        }
    }

    if !summary.by_question_type.is_empty() {
        md.push(String::new());
        md.push("## By Question Type".to_string());
        let mut labels: Vec<&String> = summary.by_question_type.keys().collect();
        labels.sort();
        for label in labels {
            let breakdown = summary.by_question_type[label];
            md.push(String::new());
            md.push(format!("### {label} ({} questions)", breakdown.count));
            md.push(format!(
                "- RAG composite: {:.4} (std {:.4})",
                breakdown.rag_composite.mean, breakdown.rag_composite.std
            ));
            if compared {
                md.push(format!(
                    "- LLM composite: {:.4} (std {:.4})",
                    breakdown.llm_composite.mean, breakdown.llm_composite.std
                ));
                md.push(format!(
                    "- Wins: RAG {}, LLM {}, ties {}",
                    breakdown.rag_wins, breakdown.llm_wins, breakdown.ties
                ));
            }
        }
    }

    if !outcome.results.is_empty() {
        md.push(String::new());
        md.push("## Examples".to_string());
        for (i, result) in outcome.results.iter().take(5).enumerate() {
            md.push(String::new());
            md.push(format!("### {}. {}", i + 1, result.question));
            md.push(format!("- Type: {}", result.question_type.label()));
            md.push(format!("- Expected: {}", result.expected_answer));
            md.push(format!("- RAG: {}", result.rag_answer));
            if let Some(llm_answer) = &result.llm_answer {
                md.push(format!("- LLM: {llm_answer}"));
            }
            if let Some(winner) = result.winner {
                md.push(format!("- Winner: {}", winner.label()));
            }
        }
    }

    md.join("\n") + "\n"
}

fn improvement(rag_mean: f64, llm_mean: f64) -> f64 {
    if llm_mean > 0.0 {
        (rag_mean - llm_mean) / llm_mean * 100.0
    } else {
        0.0
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn write_text(path: &Path, content: &str) -> Result<(), EvalError> {
    fs::write(path, content).map_err(|e| EvalError::WriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
