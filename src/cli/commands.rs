// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the four subcommands: `stats`, `inspect`, `evaluate`
// and `classify`, and all their configurable flags.
//
// Every flag is optional. A flag that is given overrides the
// --config file, which overrides the built-in defaults:
//
//   PipelineConfig::default() → --config file → flags
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for malformed values
//   - type conversion (string → usize, f64, LemmatizerKind, ...)
//
// Reference: Rust Book §12 (Building a CLI Program)

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::application::config::PipelineConfig;
use crate::data::lemmatizer::LemmatizerKind;
use crate::infra::config_store::ConfigStore;
use crate::ml::vectorizer::Featurization;

/// The four top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count jokes per category after analysis and filtering
    Stats(StatsArgs),

    /// Show the bag-of-words dictionary and example vectors
    Inspect(InspectArgs),

    /// Train on a split and report accuracy per featurization
    Evaluate(EvaluateArgs),

    /// Train on all jokes and predict the category of new texts
    Classify(ClassifyArgs),
}

/// Dataset and text analysis flags shared by every command.
#[derive(Args, Debug, Default)]
pub struct DataArgs {
    /// JSON file holding an array of { "body", "category" } records
    #[arg(long)]
    pub dataset: Option<String>,

    /// JSON file with PipelineConfig fields; flags override it
    #[arg(long)]
    pub config: Option<String>,

    /// Only keep these categories (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub categories: Option<Vec<String>>,

    /// Drop categories with fewer analyzed jokes than this
    #[arg(long)]
    pub min_category_size: Option<usize>,

    /// morphy, snowball or none
    #[arg(long)]
    pub lemmatizer: Option<LemmatizerKind>,

    /// Keep English stopwords in the token lists
    #[arg(long)]
    pub keep_stopwords: bool,

    /// Extra word to treat as a stopword (repeatable)
    #[arg(long = "stopword")]
    pub extra_stopwords: Vec<String>,

    /// Keep purely numeric tokens
    #[arg(long)]
    pub keep_numbers: bool,

    /// Drop tokens shorter than this many characters
    #[arg(long)]
    pub min_token_len: Option<usize>,
}

impl DataArgs {
    /// Defaults, then the --config file, then these flags.
    pub fn base_config(&self) -> Result<PipelineConfig> {
        let mut cfg = match &self.config {
            Some(path) => ConfigStore::load(path)?,
            None       => PipelineConfig::default(),
        };

        if let Some(v) = &self.dataset           { cfg.dataset_path = v.clone(); }
        if let Some(v) = &self.categories        { cfg.categories = v.clone(); }
        if let Some(v) = self.min_category_size  { cfg.min_category_size = v; }
        if let Some(v) = self.lemmatizer         { cfg.lemmatizer = v; }
        if self.keep_stopwords                   { cfg.remove_stopwords = false; }
        if self.keep_numbers                     { cfg.keep_numbers = true; }
        if let Some(v) = self.min_token_len      { cfg.min_token_len = v; }
        cfg.extra_stopwords.extend(self.extra_stopwords.iter().cloned());

        Ok(cfg)
    }
}

/// Vectorizer and classifier flags shared by `evaluate` and `classify`.
#[derive(Args, Debug, Default)]
pub struct ModelArgs {
    /// Drop words found in a smaller fraction of jokes than this
    #[arg(long)]
    pub min_df: Option<f32>,

    /// Drop words found in a larger fraction of jokes than this
    #[arg(long)]
    pub max_df: Option<f32>,

    /// Naive Bayes additive smoothing (1.0 = Laplace)
    #[arg(long)]
    pub alpha: Option<f64>,
}

impl ModelArgs {
    fn apply(&self, cfg: &mut PipelineConfig) {
        if let Some(v) = self.min_df { cfg.min_document_frequency = v; }
        if let Some(v) = self.max_df { cfg.max_document_frequency = v; }
        if let Some(v) = self.alpha  { cfg.alpha = v; }
    }
}

/// All arguments for the `stats` command
#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub data: DataArgs,
}

impl TryFrom<StatsArgs> for PipelineConfig {
    type Error = anyhow::Error;

    fn try_from(a: StatsArgs) -> Result<Self> {
        a.data.base_config()
    }
}

/// All arguments for the `inspect` command
#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// How many dictionary words to list
    #[arg(long, default_value_t = 20)]
    pub vocab_preview: usize,

    /// How many jokes to show as vectors
    #[arg(long, default_value_t = 3)]
    pub samples: usize,
}

/// All arguments for the `evaluate` command
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Fraction of jokes used for training, the rest for testing
    #[arg(long)]
    pub train_fraction: Option<f64>,

    /// Shuffle seed for the split
    #[arg(long, conflicts_with = "random_split")]
    pub seed: Option<u64>,

    /// Shuffle differently on every run
    #[arg(long)]
    pub random_split: bool,

    /// Featurizations to compare (comma separated: dictionary,counts,tfidf)
    #[arg(long, value_delimiter = ',')]
    pub featurizations: Option<Vec<Featurization>>,

    /// Append metrics.csv and write run_config.json to this directory
    #[arg(long)]
    pub report_dir: Option<String>,
}

impl TryFrom<EvaluateArgs> for PipelineConfig {
    type Error = anyhow::Error;

    fn try_from(a: EvaluateArgs) -> Result<Self> {
        let mut cfg = a.data.base_config()?;
        a.model.apply(&mut cfg);

        if let Some(v) = a.train_fraction { cfg.train_fraction = v; }
        if let Some(v) = a.seed           { cfg.seed = Some(v); }
        if a.random_split                 { cfg.seed = None; }
        if let Some(v) = a.featurizations { cfg.featurizations = v; }
        if a.report_dir.is_some()         { cfg.report_dir = a.report_dir; }

        Ok(cfg)
    }
}

/// All arguments for the `classify` command
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Featurization to train with (default: first configured)
    #[arg(long)]
    pub featurization: Option<Featurization>,

    /// Texts to classify
    #[arg(required = true)]
    pub texts: Vec<String>,
}

impl ClassifyArgs {
    /// Split into the run config and the texts to classify.
    pub fn into_parts(self) -> Result<(PipelineConfig, Vec<String>)> {
        let mut cfg = self.data.base_config()?;
        self.model.apply(&mut cfg);
        if let Some(f) = self.featurization {
            cfg.featurizations = vec![f];
        }
        Ok((cfg, self.texts))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn evaluate_config(argv: &[&str]) -> PipelineConfig {
        let cli = Cli::try_parse_from(argv).expect("parse");
        match cli.command {
            Commands::Evaluate(args) => PipelineConfig::try_from(args).expect("config"),
            other => panic!("expected evaluate, got {other:?}"),
        }
    }

    #[test]
    fn test_no_flags_means_defaults() {
        assert_eq!(evaluate_config(&["joke-classifier", "evaluate"]), PipelineConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cfg = evaluate_config(&[
            "joke-classifier", "evaluate",
            "--dataset", "jokes.json",
            "--categories", "Puns,Animal",
            "--lemmatizer", "snowball",
            "--keep-stopwords",
            "--featurizations", "dictionary,tfidf",
            "--alpha", "0.5",
            "--random-split",
        ]);
        assert_eq!(cfg.dataset_path, "jokes.json");
        assert_eq!(cfg.categories, vec!["Puns", "Animal"]);
        assert_eq!(cfg.lemmatizer, LemmatizerKind::Snowball);
        assert!(!cfg.remove_stopwords);
        assert_eq!(cfg.featurizations, vec![Featurization::Dictionary, Featurization::TfIdf]);
        assert_eq!(cfg.alpha, 0.5);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut file_cfg = PipelineConfig::default();
        file_cfg.min_category_size = 3;
        file_cfg.alpha = 0.1;
        let path = ConfigStore::save(dir.path(), &file_cfg).expect("save");
        let path = path.display().to_string();

        let cfg = evaluate_config(&["joke-classifier", "evaluate", "--config", &path, "--alpha", "2.0"]);
        assert_eq!(cfg.min_category_size, 3);
        assert_eq!(cfg.alpha, 2.0);
    }

    #[test]
    fn test_classify_requires_text() {
        assert!(Cli::try_parse_from(["joke-classifier", "classify"]).is_err());

        let cli = Cli::try_parse_from(["joke-classifier", "classify", "--featurization", "counts", "a joke"])
            .expect("parse");
        let Commands::Classify(args) = cli.command else { panic!("expected classify") };
        let (cfg, texts) = args.into_parts().expect("parts");
        assert_eq!(cfg.featurizations, vec![Featurization::Counts]);
        assert_eq!(texts, vec!["a joke"]);
    }

    #[test]
    fn test_unknown_lemmatizer_is_rejected() {
        assert!(Cli::try_parse_from(["joke-classifier", "stats", "--lemmatizer", "wordnet"]).is_err());
    }
}
