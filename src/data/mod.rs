// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from the raw JSON file
// to the labelled token lists the ML layer consumes.
//
// The pipeline flows in this order:
//
//   jokes.json
//       │
//       ▼
//   JsonJokeLoader    → parses { body, category } records
//       │
//       ▼
//   Analyzer          → normalise, tokenise, tag, lemmatise, filter
//       │               (TextNormalizer, WordTokenizer, PosTagger,
//       │                Lemmatize, StopwordFilter)
//       ▼
//   LabeledCorpus     → token lists + integer labels, small
//       │               categories dropped
//       ▼
//   split_train_test  → shuffled train / test corpora
//
// Reference: Rust Book §13 (Iterators and Closures)

/// JSON dataset loading
pub mod loader;

/// Contraction expansion and punctuation removal
pub mod preprocessor;

/// Word tokenization and stopword filtering
pub mod tokenizer;

/// Rule-based part-of-speech tagging
pub mod tagger;

/// Part-of-speech aware lemmatization
pub mod lemmatizer;

/// The full per-document analysis pipeline
pub mod analyzer;

/// Labelled corpus built from analyzed jokes
pub mod dataset;

/// Shuffled train/test split
pub mod splitter;
