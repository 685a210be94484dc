// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// one goal per command.
//
// Rules for this layer:
//   - No ML math or text processing here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Every use case starts the same way: load the jokes, analyze
// them, and build the filtered LabeledCorpus. `build_corpus`
// is that shared first step.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

/// Run settings and their defaults
pub mod config;

/// Category counts of the filtered corpus
pub mod stats_use_case;

/// Dictionary and example vectors
pub mod inspect_use_case;

/// Train/test evaluation per featurization
pub mod evaluate_use_case;

/// Predict categories for new texts
pub mod classify_use_case;

use anyhow::Result;

use crate::data::{analyzer::Analyzer, dataset::LabeledCorpus};
use crate::domain::traits::JokeSource;
use config::PipelineConfig;

/// Load, analyze and filter the jokes described by `cfg`.
pub fn build_corpus(cfg: &PipelineConfig, source: &dyn JokeSource) -> Result<LabeledCorpus> {
    cfg.validate()?;

    let jokes = source.load_all()?;
    tracing::info!("Loaded {} jokes", jokes.len());

    let analyzer = Analyzer::from_config(cfg)?;
    Ok(LabeledCorpus::build(&jokes, &analyzer, &cfg.corpus_filter()))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::config::PipelineConfig;

    /// Twelve jokes in three clearly separated categories.
    pub const JOKES_JSON: &str = r#"[
        {"id": "1",  "category": "Lawyer",   "body": "A lawyer asked the judge for a lower fee."},
        {"id": "2",  "category": "Lawyer",   "body": "The judge told the lawyer the court was closed."},
        {"id": "3",  "category": "Lawyer",   "body": "My lawyer charges a fee to read the court verdict."},
        {"id": "4",  "category": "Lawyer",   "body": "How many lawyers does a judge need in court?"},
        {"id": "5",  "category": "Religion", "body": "A priest and a rabbi walk into a church."},
        {"id": "6",  "category": "Religion", "body": "The priest said a prayer for the rabbi."},
        {"id": "7",  "category": "Religion", "body": "The rabbi asked the priest about the church choir."},
        {"id": "8",  "category": "Religion", "body": "A nun, a priest and a prayer book."},
        {"id": "9",  "category": "Animal",   "body": "Why did the dog chase the cat up the tree?"},
        {"id": "10", "category": "Animal",   "body": "The cat told the dog to stop barking."},
        {"id": "11", "category": "Animal",   "body": "A dog, a cat and a parrot walk into a barn."},
        {"id": "12", "category": "Animal",   "body": "The parrot taught the cat to bark like a dog."}
    ]"#;

    pub fn jokes_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(JOKES_JSON.as_bytes()).expect("write jokes");
        file
    }

    /// Defaults pointed at `file`, with category size limits off.
    pub fn config_for(file: &NamedTempFile) -> PipelineConfig {
        PipelineConfig {
            dataset_path:           file.path().display().to_string(),
            min_category_size:      1,
            min_document_frequency: 0.0,
            ..PipelineConfig::default()
        }
    }
}
