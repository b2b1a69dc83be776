use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Precision/recall/nDCG at a single cutoff K.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingMetrics {
    pub precision: f64,
    pub recall: f64,
    pub ndcg: f64,
}

impl RankingMetrics {
    /// All three metrics zero, the value for an empty candidate list.
    pub const ZERO: RankingMetrics = RankingMetrics {
        precision: 0.0,
        recall: 0.0,
        ndcg: 0.0,
    };
}

/// Retrieval quality for one query at each requested K.
///
/// Keys are the requested cutoffs; each entry is computed at
/// min(K, candidate count).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricsResult {
    pub by_k: HashMap<usize, RankingMetrics>,
}

impl MetricsResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, k: usize, metrics: RankingMetrics) {
        self.by_k.insert(k, metrics);
    }

    pub fn get(&self, k: usize) -> Option<&RankingMetrics> {
        self.by_k.get(&k)
    }

    /// Flatten to the "{metric}@{k}" key form used by reports and
    /// aggregation.
    pub fn flatten(&self) -> HashMap<String, f64> {
        let mut flat = HashMap::with_capacity(self.by_k.len() * 3);
        for (k, m) in &self.by_k {
            flat.insert(format!("precision@{k}"), m.precision);
            flat.insert(format!("recall@{k}"), m.recall);
            flat.insert(format!("ndcg@{k}"), m.ndcg);
        }
        flat
    }
}
