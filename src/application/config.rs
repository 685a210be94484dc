// ============================================================
// Layer 2 — Pipeline Configuration
// ============================================================
// Every knob of a run in one serialisable struct.
//
// Values are layered, later layers winning:
//
//   PipelineConfig::default()
//       │
//       ▼
//   --config <file.json>     (missing fields keep their default)
//       │
//       ▼
//   command line flags       (only the flags actually given)
//
// The same struct is written next to the metrics as
// run_config.json so every report records how it was produced.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::data::{dataset::CorpusFilter, lemmatizer::LemmatizerKind};
use crate::ml::vectorizer::{Featurization, VectorizerSettings};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub dataset_path:           String,
    /// Empty keeps every category
    pub categories:             Vec<String>,
    pub min_category_size:      usize,
    pub lemmatizer:             LemmatizerKind,
    pub remove_stopwords:       bool,
    /// Added to the English stopword list when stopwords are removed
    pub extra_stopwords:        Vec<String>,
    pub keep_numbers:           bool,
    pub min_token_len:          usize,
    pub train_fraction:         f64,
    /// None shuffles differently on every run
    pub seed:                   Option<u64>,
    pub min_document_frequency: f32,
    pub max_document_frequency: f32,
    /// Additive smoothing for Naive Bayes
    pub alpha:                  f64,
    pub featurizations:         Vec<Featurization>,
    /// Where metrics.csv and run_config.json go; None skips the report
    pub report_dir:             Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            dataset_path:           "data/jokes.json".to_string(),
            categories:             Vec::new(),
            min_category_size:      20,
            lemmatizer:             LemmatizerKind::Morphy,
            remove_stopwords:       true,
            extra_stopwords:        Vec::new(),
            keep_numbers:           false,
            min_token_len:          2,
            train_fraction:         0.8,
            seed:                   Some(42),
            min_document_frequency: 0.001,
            max_document_frequency: 1.0,
            alpha:                  1.0,
            featurizations:         vec![Featurization::Counts, Featurization::TfIdf],
            report_dir:             None,
        }
    }
}

impl PipelineConfig {
    /// Reject settings no run could use.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.train_fraction > 0.0 && self.train_fraction <= 1.0,
            "train_fraction must be in (0, 1], got {}",
            self.train_fraction
        );
        ensure!(
            (0.0..=1.0).contains(&self.min_document_frequency)
                && (0.0..=1.0).contains(&self.max_document_frequency)
                && self.min_document_frequency <= self.max_document_frequency,
            "document frequencies must satisfy 0 <= min ({}) <= max ({}) <= 1",
            self.min_document_frequency,
            self.max_document_frequency
        );
        ensure!(self.alpha > 0.0, "alpha must be positive, got {}", self.alpha);
        ensure!(!self.featurizations.is_empty(), "at least one featurization is required");
        Ok(())
    }

    pub fn corpus_filter(&self) -> CorpusFilter {
        CorpusFilter {
            categories:        self.categories.clone(),
            min_category_size: self.min_category_size,
        }
    }

    pub fn vectorizer_settings(&self) -> VectorizerSettings {
        VectorizerSettings {
            min_document_frequency: self.min_document_frequency,
            max_document_frequency: self.max_document_frequency,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let cfg = PipelineConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.featurizations, vec![Featurization::Counts, Featurization::TfIdf]);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg: PipelineConfig =
            serde_json::from_str(r#"{ "alpha": 0.5, "lemmatizer": "snowball", "featurizations": ["dictionary"] }"#)
                .expect("parse");
        assert_eq!(cfg.alpha, 0.5);
        assert_eq!(cfg.lemmatizer, LemmatizerKind::Snowball);
        assert_eq!(cfg.featurizations, vec![Featurization::Dictionary]);
        assert_eq!(cfg.min_category_size, 20);
        assert_eq!(cfg.dataset_path, "data/jokes.json");
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let mut cfg = PipelineConfig::default();
        cfg.train_fraction = 0.0;
        assert!(cfg.validate().is_err());

        let mut cfg = PipelineConfig::default();
        cfg.min_document_frequency = 0.6;
        cfg.max_document_frequency = 0.5;
        assert!(cfg.validate().is_err());

        let mut cfg = PipelineConfig::default();
        cfg.featurizations.clear();
        assert!(cfg.validate().is_err());
    }
}
