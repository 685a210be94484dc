// ============================================================
// Layer 2 — EvaluateUseCase
// ============================================================
// Orchestrates the comparison of featurizations:
//
//   Step 1: Build the filtered corpus     (Layer 4 - data)
//   Step 2: Split train/test              (Layer 4 - data)
//   Step 3: Evaluate each featurization   (Layer 5 - ml)
//   Step 4: Write the report, if asked    (Layer 6 - infra)
//
// Every featurization sees the same split, so their scores are
// directly comparable.

use anyhow::{ensure, Result};

use crate::application::{build_corpus, config::PipelineConfig};
use crate::data::loader::JsonJokeLoader;
use crate::infra::{
    config_store::ConfigStore,
    metrics::{EvaluationMetrics, MetricsLogger},
};
use crate::ml::trainer::evaluate;

pub struct EvaluateUseCase {
    config: PipelineConfig,
}

impl EvaluateUseCase {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<Vec<EvaluationMetrics>> {
        let cfg = &self.config;
        ensure!(
            cfg.train_fraction < 1.0,
            "train_fraction {} leaves no jokes for the test split; use a value below 1.0",
            cfg.train_fraction
        );

        // ── Step 1: Corpus ────────────────────────────────────────────────────
        let loader = JsonJokeLoader::new(&cfg.dataset_path);
        let corpus = build_corpus(cfg, &loader)?;
        ensure!(
            !corpus.is_empty(),
            "No jokes left to evaluate after filtering '{}'",
            cfg.dataset_path
        );

        // ── Step 2: Train / test split ────────────────────────────────────────
        let (train, test) = corpus.split(cfg.train_fraction, cfg.seed);
        tracing::info!("Split: {} train, {} test", train.len(), test.len());
        ensure!(
            !train.is_empty() && !test.is_empty(),
            "train_fraction {} splits {} jokes into {} train and {} test; both need at least one",
            cfg.train_fraction,
            corpus.len(),
            train.len(),
            test.len()
        );

        // ── Step 3: One evaluation per featurization ──────────────────────────
        let settings = cfg.vectorizer_settings();
        let results = cfg
            .featurizations
            .iter()
            .map(|&featurization| evaluate(&train, &test, featurization, &settings, cfg.alpha))
            .collect::<Result<Vec<_>>>()?;

        // ── Step 4: Report ────────────────────────────────────────────────────
        if let Some(dir) = &cfg.report_dir {
            let logger = MetricsLogger::new(dir)?;
            for m in &results {
                logger.log(m)?;
            }
            let config_path = ConfigStore::save(dir, cfg)?;
            tracing::info!(
                "Report written to '{}' and '{}'",
                logger.csv_path().display(),
                config_path.display(),
            );
        }

        Ok(results)
    }
}
