// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Four commands are supported:
//   1. `stats`    — jokes per category after filtering
//   2. `inspect`  — the bag-of-words dictionary and vectors
//   3. `evaluate` — train/test accuracy per featurization
//   4. `classify` — predict categories for new texts
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{ClassifyArgs, Commands, EvaluateArgs, InspectArgs, StatsArgs};

use crate::application::config::PipelineConfig;

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "joke-classifier",
    version = "0.1.0",
    about = "Classify jokes by category with bag-of-words / TF-IDF features and Naive Bayes."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Stats(args)    => run_stats(args),
            Commands::Inspect(args)  => run_inspect(args),
            Commands::Evaluate(args) => run_evaluate(args),
            Commands::Classify(args) => run_classify(args),
        }
    }
}

fn run_stats(args: StatsArgs) -> Result<()> {
    use crate::application::stats_use_case::StatsUseCase;

    let cfg    = PipelineConfig::try_from(args)?;
    let report = StatsUseCase::new(cfg).execute()?;

    println!("{:<32} {:>8}", "category", "jokes");
    for (category, count) in &report.category_counts {
        println!("{:<32} {:>8}", category, count);
    }
    println!("{:<32} {:>8}", "total", report.documents);
    println!("\nMean tokens per joke: {:.1}", report.mean_tokens);
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    use crate::application::inspect_use_case::InspectUseCase;

    let cfg    = args.data.base_config()?;
    let report = InspectUseCase::new(cfg, args.vocab_preview, args.samples).execute()?;

    println!("Documents:                  {}", report.documents);
    println!("Dictionary size:            {}", report.dictionary_size);
    println!("CountVectorizer vocabulary: {}", report.library_vocabulary_size);

    if !report.preview.is_empty() {
        println!("\nFirst dictionary entries:");
        for (position, word) in &report.preview {
            println!("  {:>6}  {}", position, word);
        }
    }

    for (i, sample) in report.samples.iter().enumerate() {
        println!("\nJoke {} [{}]", i + 1, sample.category);
        println!("  tokens:  {}", sample.tokens.join(" "));
        let entries: Vec<String> = sample
            .nonzero
            .iter()
            .map(|(pos, count)| format!("{pos}:{count}"))
            .collect();
        println!("  vector:  {}", entries.join(" "));
    }
    Ok(())
}

fn run_evaluate(args: EvaluateArgs) -> Result<()> {
    use crate::application::evaluate_use_case::EvaluateUseCase;

    let cfg     = PipelineConfig::try_from(args)?;
    let results = EvaluateUseCase::new(cfg).execute()?;

    println!(
        "{:<12} {:>10} {:>8} {:>8} {:>10} {:>10} {:>8} {:>8}",
        "features", "vocabulary", "train", "test", "train_acc", "test_acc", "test_f1", "gap"
    );
    for m in &results {
        println!(
            "{:<12} {:>10} {:>8} {:>8} {:>10.4} {:>10.4} {:>8.4} {:>8.4}",
            m.featurization.as_str(),
            m.vocabulary_size,
            m.train_rows,
            m.test_rows,
            m.train_accuracy,
            m.test_accuracy,
            m.test_f1,
            m.generalization_gap(),
        );
    }
    Ok(())
}

fn run_classify(args: ClassifyArgs) -> Result<()> {
    use crate::application::classify_use_case::ClassifyUseCase;

    let (cfg, texts) = args.into_parts()?;
    let predictions  = ClassifyUseCase::new(cfg).classify(&texts)?;

    for p in &predictions {
        let category = p.category.as_deref().unwrap_or("(no usable words)");
        println!("{:<24} {}", category, p.text);
    }
    Ok(())
}
