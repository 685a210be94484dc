// ============================================================
// Layer 5 — Featurizers
// ============================================================
// Turns analyzed documents into the dense feature matrix the
// classifier trains on. Three interchangeable featurizations:
//
//   dictionary  the hand-written bag-of-words (ml::bag_of_words),
//               raw counts, column order = first encounter
//
//   counts      linfa-preprocessing CountVectorizer,
//               raw counts, vocabulary pruned by document frequency
//
//   tfidf       linfa-preprocessing TfIdfVectorizer,
//               counts reweighted by inverse document frequency
//
// The library vectorizers re-tokenize the space-joined token list.
// Their default split pattern drops one-character words, so they
// split on whitespace instead and see exactly the analyzer's tokens.
// Lowercasing is already done by the normalizer and is switched off.
//
// Reference: linfa-preprocessing docs (countgrams, tf_idf_vectorization)

use std::{fmt, str::FromStr};

use anyhow::Result;
use linfa_preprocessing::{
    tf_idf_vectorization::{FittedTfIdfVectorizer, TfIdfVectorizer},
    CountVectorizer,
};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use sprs::CsMat;

use crate::data::dataset::{join_documents, LabeledCorpus};
use crate::ml::bag_of_words::Dictionary;

/// Analyzed tokens are joined with single spaces
const TOKEN_PATTERN: &str = r"\S+";

/// Which feature representation to train on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Featurization {
    Dictionary,
    Counts,
    TfIdf,
}

impl Featurization {
    pub fn as_str(&self) -> &'static str {
        match self {
            Featurization::Dictionary => "dictionary",
            Featurization::Counts     => "counts",
            Featurization::TfIdf      => "tfidf",
        }
    }
}

impl fmt::Display for Featurization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Featurization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dictionary" | "bow" => Ok(Featurization::Dictionary),
            "counts" | "count"   => Ok(Featurization::Counts),
            "tfidf" | "tf-idf"   => Ok(Featurization::TfIdf),
            other => Err(format!(
                "unknown featurization '{other}' (expected dictionary, counts or tfidf)"
            )),
        }
    }
}

/// Relative document-frequency bounds for vocabulary pruning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorizerSettings {
    pub min_document_frequency: f32,
    pub max_document_frequency: f32,
}

impl Default for VectorizerSettings {
    fn default() -> Self {
        Self { min_document_frequency: 0.0, max_document_frequency: 1.0 }
    }
}

/// A fitted featurizer. Columns are fixed at fit time; words first
/// seen at transform time contribute nothing.
pub enum Featurizer {
    Dictionary(Dictionary),
    Counts(CountVectorizer),
    TfIdf(FittedTfIdfVectorizer),
}

impl Featurizer {
    pub fn fit(
        featurization: Featurization,
        corpus:        &LabeledCorpus,
        settings:      &VectorizerSettings,
    ) -> Result<Self> {
        let featurizer = match featurization {
            Featurization::Dictionary => {
                Featurizer::Dictionary(Dictionary::build(corpus.documents()))
            }
            Featurization::Counts => {
                let fitted = CountVectorizer::params()
                    .convert_to_lowercase(false)
                    .split_regex(TOKEN_PATTERN)
                    .document_frequency(
                        settings.min_document_frequency,
                        settings.max_document_frequency,
                    )
                    .fit(&corpus.joined())?;
                Featurizer::Counts(fitted)
            }
            Featurization::TfIdf => {
                let fitted = TfIdfVectorizer::default()
                    .convert_to_lowercase(false)
                    .split_regex(TOKEN_PATTERN)
                    .document_frequency(
                        settings.min_document_frequency,
                        settings.max_document_frequency,
                    )
                    .fit(&corpus.joined())?;
                Featurizer::TfIdf(fitted)
            }
        };

        tracing::debug!(
            "Fitted {} featurizer: {} features",
            featurization,
            featurizer.vocabulary_len(),
        );
        Ok(featurizer)
    }

    pub fn featurization(&self) -> Featurization {
        match self {
            Featurizer::Dictionary(_) => Featurization::Dictionary,
            Featurizer::Counts(_)     => Featurization::Counts,
            Featurizer::TfIdf(_)      => Featurization::TfIdf,
        }
    }

    /// One dense row per document.
    pub fn transform(&self, documents: &[Vec<String>]) -> Result<Array2<f64>> {
        let matrix = match self {
            Featurizer::Dictionary(dict) => dict.vectorize_all(documents),
            Featurizer::Counts(fitted) => {
                counts_to_dense(&fitted.transform(&join_documents(documents)))
            }
            Featurizer::TfIdf(fitted) => {
                fitted.transform(&join_documents(documents)).to_dense()
            }
        };
        Ok(matrix)
    }

    /// Number of columns `transform` produces.
    pub fn vocabulary_len(&self) -> usize {
        match self {
            Featurizer::Dictionary(dict) => dict.len(),
            Featurizer::Counts(fitted)   => fitted.nentries(),
            Featurizer::TfIdf(fitted)    => fitted.nentries(),
        }
    }
}

/// Densify a sparse count matrix for the classifier.
fn counts_to_dense(counts: &CsMat<usize>) -> Array2<f64> {
    let mut dense = Array2::<f64>::zeros(counts.shape());
    for (&count, (row, col)) in counts.iter() {
        dense[[row, col]] = count as f64;
    }
    dense
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::CategoryIndex;

    fn corpus() -> LabeledCorpus {
        let documents: Vec<Vec<String>> = [
            "lawyer court judge",
            "lawyer judge fee",
            "priest church prayer",
            "priest rabbi church",
        ]
        .iter()
        .map(|d| d.split_whitespace().map(str::to_string).collect())
        .collect();
        let categories = CategoryIndex::from_names(["law", "religion"]);
        LabeledCorpus::from_parts(documents, vec![0, 0, 1, 1], categories)
            .expect("valid corpus")
    }

    #[test]
    fn test_parse_featurization() {
        assert_eq!("tfidf".parse::<Featurization>(), Ok(Featurization::TfIdf));
        assert_eq!("Counts".parse::<Featurization>(), Ok(Featurization::Counts));
        assert_eq!("dictionary".parse::<Featurization>(), Ok(Featurization::Dictionary));
        assert!("word2vec".parse::<Featurization>().is_err());
    }

    #[test]
    fn test_rows_match_documents_for_every_featurization() {
        let corpus = corpus();
        for featurization in [Featurization::Dictionary, Featurization::Counts, Featurization::TfIdf] {
            let featurizer = Featurizer::fit(featurization, &corpus, &VectorizerSettings::default())
                .expect("fit");
            let matrix = featurizer.transform(corpus.documents()).expect("transform");
            assert_eq!(matrix.nrows(), corpus.labels().len(), "{featurization}");
            assert_eq!(matrix.ncols(), featurizer.vocabulary_len(), "{featurization}");
            assert_eq!(featurizer.featurization(), featurization);
        }
    }

    #[test]
    fn test_counts_agree_with_dictionary_totals() {
        let corpus   = corpus();
        let settings = VectorizerSettings::default();
        let dict     = Featurizer::fit(Featurization::Dictionary, &corpus, &settings).expect("fit");
        let counts   = Featurizer::fit(Featurization::Counts, &corpus, &settings).expect("fit");

        assert_eq!(dict.vocabulary_len(), counts.vocabulary_len());
        let a = dict.transform(corpus.documents()).expect("transform");
        let b = counts.transform(corpus.documents()).expect("transform");
        assert_eq!(a.sum(), b.sum());
    }

    #[test]
    fn test_unknown_words_contribute_nothing() {
        let corpus     = corpus();
        let featurizer = Featurizer::fit(Featurization::Counts, &corpus, &VectorizerSettings::default())
            .expect("fit");
        let unseen = vec![vec!["spaceship".to_string(), "alien".to_string()]];
        let matrix = featurizer.transform(&unseen).expect("transform");
        assert_eq!(matrix.sum(), 0.0);
    }

    #[test]
    fn test_single_character_tokens_are_features() {
        let documents: Vec<Vec<String>> = vec![
            vec!["x".into(), "cat".into()],
            vec!["y".into(), "dog".into()],
        ];
        let corpus = LabeledCorpus::from_parts(documents, vec![0, 1], CategoryIndex::from_names(["a", "b"]))
            .expect("valid corpus");
        for featurization in [Featurization::Dictionary, Featurization::Counts, Featurization::TfIdf] {
            let featurizer = Featurizer::fit(featurization, &corpus, &VectorizerSettings::default())
                .expect("fit");
            assert_eq!(featurizer.vocabulary_len(), 4, "{featurization}");
            let matrix = featurizer.transform(corpus.documents()).expect("transform");
            let nonzero = matrix.iter().filter(|&&v| v > 0.0).count();
            assert_eq!(nonzero, 4, "{featurization}");
        }
    }

    #[test]
    fn test_max_document_frequency_prunes_common_words() {
        let corpus   = corpus();
        let settings = VectorizerSettings { min_document_frequency: 0.0, max_document_frequency: 0.3 };
        let featurizer = Featurizer::fit(Featurization::Counts, &corpus, &settings).expect("fit");
        // lawyer, judge, priest, church appear in half the documents
        assert_eq!(featurizer.vocabulary_len(), 4);
    }
}
