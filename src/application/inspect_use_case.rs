// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Shows what the hand-written bag-of-words actually builds:
//
//   Step 1: Build the filtered corpus        (Layer 4 - data)
//   Step 2: Build the Dictionary             (Layer 5 - ml)
//   Step 3: Vectorize the first few jokes    (Layer 5 - ml)
//   Step 4: Fit the library CountVectorizer
//           for a vocabulary size comparison (Layer 5 - ml)

use anyhow::Result;

use crate::application::{build_corpus, config::PipelineConfig};
use crate::data::loader::JsonJokeLoader;
use crate::ml::{
    bag_of_words::{nonzero, Dictionary},
    vectorizer::{Featurization, Featurizer},
};

/// One analyzed joke and its count vector.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSample {
    pub category: String,
    pub tokens:   Vec<String>,
    /// Non-zero (position, count) entries of the dictionary vector
    pub nonzero:  Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InspectReport {
    pub documents:               usize,
    pub dictionary_size:         usize,
    /// Vocabulary of the library CountVectorizer after document
    /// frequency pruning
    pub library_vocabulary_size: usize,
    /// The first dictionary words with their positions
    pub preview:                 Vec<(usize, String)>,
    pub samples:                 Vec<DocumentSample>,
}

pub struct InspectUseCase {
    config:        PipelineConfig,
    vocab_preview: usize,
    samples:       usize,
}

impl InspectUseCase {
    pub fn new(config: PipelineConfig, vocab_preview: usize, samples: usize) -> Self {
        Self { config, vocab_preview, samples }
    }

    pub fn execute(&self) -> Result<InspectReport> {
        let loader = JsonJokeLoader::new(&self.config.dataset_path);
        let corpus = build_corpus(&self.config, &loader)?;

        let dictionary = Dictionary::build(corpus.documents());
        tracing::info!("Dictionary holds {} words", dictionary.len());

        let preview = dictionary
            .words()
            .iter()
            .take(self.vocab_preview)
            .cloned()
            .enumerate()
            .collect();

        let samples = corpus
            .documents()
            .iter()
            .zip(corpus.labels())
            .take(self.samples)
            .map(|(tokens, &label)| DocumentSample {
                category: corpus.categories().name_of(label).unwrap_or_default().to_string(),
                tokens:   tokens.clone(),
                nonzero:  nonzero(&dictionary.vectorize(tokens)),
            })
            .collect();

        let library_vocabulary_size = if dictionary.is_empty() {
            0
        } else {
            Featurizer::fit(Featurization::Counts, &corpus, &self.config.vectorizer_settings())?
                .vocabulary_len()
        };

        Ok(InspectReport {
            documents: corpus.len(),
            dictionary_size: dictionary.len(),
            library_vocabulary_size,
            preview,
            samples,
        })
    }
}
