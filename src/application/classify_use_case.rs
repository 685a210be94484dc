// ============================================================
// Layer 2 — ClassifyUseCase
// ============================================================
// Trains on the whole filtered corpus with the first configured
// featurization, then labels new texts. Nothing is held out and
// nothing is saved; every run retrains.

use anyhow::{ensure, Context, Result};

use crate::application::{build_corpus, config::PipelineConfig};
use crate::data::{analyzer::Analyzer, loader::JsonJokeLoader};
use crate::ml::classifier::JokeClassifier;

/// A text and its predicted category. `None` when the text has
/// no tokens left after analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub text:     String,
    pub category: Option<String>,
}

pub struct ClassifyUseCase {
    config: PipelineConfig,
}

impl ClassifyUseCase {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn classify(&self, texts: &[String]) -> Result<Vec<Prediction>> {
        let cfg = &self.config;
        let featurization = *cfg
            .featurizations
            .first()
            .context("at least one featurization is required")?;

        let loader = JsonJokeLoader::new(&cfg.dataset_path);
        let corpus = build_corpus(cfg, &loader)?;
        ensure!(!corpus.is_empty(), "No jokes left to train on after filtering");

        let classifier = JokeClassifier::train(
            &corpus,
            featurization,
            &cfg.vectorizer_settings(),
            cfg.alpha,
        )?;

        let analyzer   = Analyzer::from_config(cfg)?;
        let categories = classifier.predict_categories(&analyzer, texts)?;

        Ok(texts
            .iter()
            .cloned()
            .zip(categories)
            .map(|(text, category)| Prediction { text, category })
            .collect())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fixtures::{config_for, jokes_file};

    #[test]
    fn test_predicts_obvious_categories() {
        let file = jokes_file();
        let texts = vec![
            "The judge fined my lawyer in court.".to_string(),
            "A priest prayed in the church.".to_string(),
            "...".to_string(),
        ];
        let predictions = ClassifyUseCase::new(config_for(&file)).classify(&texts).expect("classify");

        assert_eq!(predictions.len(), 3);
        assert_eq!(predictions[0].category.as_deref(), Some("Lawyer"));
        assert_eq!(predictions[1].category.as_deref(), Some("Religion"));
        assert_eq!(predictions[2].category, None);
        assert_eq!(predictions[2].text, "...");
    }
}
