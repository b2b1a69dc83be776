//! Brute-force in-memory vector store.
//!
//! Embeds rendered documents at index time and scans all of them per
//! query with cosine distance. Suitable for tests and small corpora;
//! larger deployments sit behind the same [`IVectorStore`] seam.

use tracing::debug;
use trellis_core::errors::TrellisResult;
use trellis_core::models::CandidateItem;
use trellis_core::traits::{IEmbeddingProvider, IVectorStore};

use crate::document::{self, KnowledgeEntry};

struct StoredDoc {
    id: String,
    entry: KnowledgeEntry,
    document: String,
    embedding: Vec<f32>,
}

/// In-memory store over rendered triple documents.
#[derive(Default)]
pub struct MemoryVectorStore {
    docs: Vec<StoredDoc>,
}

impl MemoryVectorStore {
    pub fn new() -> Self {
        Self { docs: Vec::new() }
    }

    /// Render and embed entries, then add them to the index.
    pub fn index(
        &mut self,
        entries: &[KnowledgeEntry],
        embedder: &dyn IEmbeddingProvider,
    ) -> TrellisResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let documents: Vec<String> = entries
            .iter()
            .map(|e| document::render(&e.triple, &e.schema))
            .collect();
        let embeddings = embedder.embed_batch(&documents)?;

        for ((entry, document), embedding) in entries.iter().zip(documents).zip(embeddings) {
            self.docs.push(StoredDoc {
                id: entry.id.clone(),
                entry: entry.clone(),
                document,
                embedding,
            });
        }

        debug!(indexed = entries.len(), total = self.docs.len(), "indexed entries");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl IVectorStore for MemoryVectorStore {
    fn query(&self, embedding: &[f32], n_results: usize) -> TrellisResult<Vec<CandidateItem>> {
        let mut scored: Vec<(f64, &StoredDoc)> = self
            .docs
            .iter()
            .map(|doc| (1.0 - cosine_similarity(embedding, &doc.embedding), doc))
            .collect();

        // Ascending distance = closest first.
        scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(n_results);

        Ok(scored
            .into_iter()
            .map(|(distance, doc)| {
                CandidateItem::new(
                    doc.id.clone(),
                    doc.entry.triple.clone(),
                    doc.entry.schema.clone(),
                    distance,
                    doc.document.clone(),
                )
            })
            .collect())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// Cosine similarity between two vectors.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let dot: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (*x as f64) * (*y as f64))
        .sum();
    let norm_a: f64 = a
        .iter()
        .map(|x| (*x as f64) * (*x as f64))
        .sum::<f64>()
        .sqrt();
    let norm_b: f64 = b
        .iter()
        .map(|x| (*x as f64) * (*x as f64))
        .sum::<f64>()
        .sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
