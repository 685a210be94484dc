// ============================================================
// Layer 2 — StatsUseCase
// ============================================================
// How many jokes survive analysis and filtering, per category.

use anyhow::Result;

use crate::application::{build_corpus, config::PipelineConfig};
use crate::data::loader::JsonJokeLoader;

#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    pub documents:       usize,
    /// Largest category first
    pub category_counts: Vec<(String, usize)>,
    /// Mean tokens per analyzed joke
    pub mean_tokens:     f64,
}

pub struct StatsUseCase {
    config: PipelineConfig,
}

impl StatsUseCase {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<StatsReport> {
        let loader = JsonJokeLoader::new(&self.config.dataset_path);
        let corpus = build_corpus(&self.config, &loader)?;

        let total_tokens: usize = corpus.documents().iter().map(Vec::len).sum();
        let mean_tokens = if corpus.is_empty() {
            0.0
        } else {
            total_tokens as f64 / corpus.len() as f64
        };

        Ok(StatsReport {
            documents:       corpus.len(),
            category_counts: corpus.category_counts(),
            mean_tokens,
        })
    }
}
