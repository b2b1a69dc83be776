use serde::{Deserialize, Serialize};

use super::defaults;

/// Batch evaluation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Cutoffs for Precision@K / Recall@K / nDCG@K.
    pub k_values: Vec<usize>,
    /// Questions sampled per run when `scan_all` is off.
    pub sample_size: usize,
    /// Evaluate every loaded question, ignoring `sample_size`.
    pub scan_all: bool,
    /// Directory of QA dataset JSON files.
    pub dataset_dir: String,
    /// Directory reports are written under.
    pub report_dir: String,
    /// Fixed sampling seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            k_values: defaults::DEFAULT_K_VALUES.to_vec(),
            sample_size: defaults::DEFAULT_SAMPLE_SIZE,
            scan_all: false,
            dataset_dir: defaults::DEFAULT_DATASET_DIR.to_string(),
            report_dir: defaults::DEFAULT_REPORT_DIR.to_string(),
            seed: None,
        }
    }
}
