// ============================================================
// Layer 6 — Metrics Logger
// ============================================================
// Records evaluation results to a CSV file, one row per
// featurization per run.
//
// Metrics recorded per row:
//   - featurization:   dictionary, counts or tfidf
//   - vocabulary_size: number of feature columns
//   - train_rows:      documents in the train split
//   - test_rows:       documents in the test split
//   - train_accuracy:  fraction of train documents labelled correctly
//   - test_accuracy:   fraction of test documents labelled correctly
//   - test_f1:         F1 score on the test split
//
// Output file: <report_dir>/metrics.csv
//
// Example CSV output:
//   featurization,vocabulary_size,train_rows,test_rows,train_accuracy,test_accuracy,test_f1
//   counts,8231,4620,1155,0.912000,0.741000,0.702000
//   tfidf,8231,4620,1155,0.934000,0.756000,0.719000
//
// The file is appended to, so repeated runs build a history.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};
use serde::{Deserialize, Serialize};

use crate::ml::vectorizer::Featurization;

const CSV_HEADER: &str =
    "featurization,vocabulary_size,train_rows,test_rows,train_accuracy,test_accuracy,test_f1";

/// Scores of one featurization on one train/test split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationMetrics {
    pub featurization: Featurization,

    /// Feature columns the classifier saw
    pub vocabulary_size: usize,

    pub train_rows: usize,
    pub test_rows:  usize,

    /// Range: [0.0, 1.0]
    pub train_accuracy: f64,

    /// Range: [0.0, 1.0]
    pub test_accuracy: f64,

    pub test_f1: f64,
}

impl EvaluationMetrics {
    /// Train accuracy minus test accuracy
    pub fn generalization_gap(&self) -> f64 {
        self.train_accuracy - self.test_accuracy
    }
}

/// Appends evaluation metrics to a CSV file.
pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Create a new MetricsLogger.
    /// Writes the CSV header if the file doesn't exist yet.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create report directory '{}'", dir.display()))?;

        let csv_path = dir.join("metrics.csv");

        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)
                .with_context(|| format!("Cannot create '{}'", csv_path.display()))?;
            writeln!(f, "{CSV_HEADER}")?;
            tracing::debug!("Created metrics CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append one row.
    pub fn log(&self, m: &EvaluationMetrics) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot open '{}'", self.csv_path.display()))?;

        writeln!(
            f,
            "{},{},{},{},{:.6},{:.6},{:.6}",
            m.featurization,
            m.vocabulary_size,
            m.train_rows,
            m.test_rows,
            m.train_accuracy,
            m.test_accuracy,
            m.test_f1,
        )?;

        tracing::debug!(
            "Logged {} metrics: test_accuracy={:.4}",
            m.featurization,
            m.test_accuracy,
        );

        Ok(())
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample(featurization: Featurization) -> EvaluationMetrics {
        EvaluationMetrics {
            featurization,
            vocabulary_size: 120,
            train_rows:      80,
            test_rows:       20,
            train_accuracy:  0.9,
            test_accuracy:   0.75,
            test_f1:         0.7,
        }
    }

    #[test]
    fn test_generalization_gap() {
        let gap = sample(Featurization::Counts).generalization_gap();
        assert!((gap - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_header_written_once_and_rows_appended() {
        let dir = tempfile::tempdir().expect("tempdir");

        let logger = MetricsLogger::new(dir.path()).expect("logger");
        logger.log(&sample(Featurization::Counts)).expect("log");

        // a second logger on the same directory keeps the existing file
        let logger = MetricsLogger::new(dir.path()).expect("logger");
        logger.log(&sample(Featurization::TfIdf)).expect("log");

        let csv = fs::read_to_string(logger.csv_path()).expect("read");
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "counts,120,80,20,0.900000,0.750000,0.700000");
        assert!(lines[2].starts_with("tfidf,"));
    }
}
