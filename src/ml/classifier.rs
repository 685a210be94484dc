// ============================================================
// Layer 5 — Joke Classifier
// ============================================================
// A fitted featurizer plus a Multinomial Naive Bayes model,
// trained together and used together:
//
//   tokens ──► Featurizer::transform ──► MultinomialNb::predict ──► label
//
// Naive Bayes treats each feature column as an independent count
// given the class. `alpha` is the additive (Laplace/Lidstone)
// smoothing that keeps unseen word/class pairs from zeroing out
// a whole prediction; 1.0 is Laplace smoothing.
//
// Reference: linfa-bayes docs (MultinomialNb)

use anyhow::{ensure, Result};
use linfa::prelude::*;
use linfa_bayes::MultinomialNb;
use ndarray::{Array1, Array2};

use crate::data::{analyzer::Analyzer, dataset::LabeledCorpus};
use crate::domain::category::CategoryIndex;
use crate::ml::vectorizer::{Featurization, Featurizer, VectorizerSettings};

pub struct JokeClassifier {
    featurizer: Featurizer,
    model:      MultinomialNb<f64, usize>,
    categories: CategoryIndex,
}

impl JokeClassifier {
    pub fn train(
        corpus:        &LabeledCorpus,
        featurization: Featurization,
        settings:      &VectorizerSettings,
        alpha:         f64,
    ) -> Result<Self> {
        ensure!(!corpus.is_empty(), "Cannot train a classifier on an empty corpus");

        let featurizer = Featurizer::fit(featurization, corpus, settings)?;
        ensure!(
            featurizer.vocabulary_len() > 0,
            "The {} vocabulary is empty; lower min_document_frequency",
            featurization
        );

        let records = featurizer.transform(corpus.documents())?;
        let dataset = Dataset::new(records, corpus.targets());
        let model   = MultinomialNb::params().alpha(alpha).fit(&dataset)?;

        tracing::info!(
            "Trained {} classifier on {} documents ({} features, {} categories)",
            featurization,
            corpus.len(),
            featurizer.vocabulary_len(),
            corpus.categories().len(),
        );

        Ok(Self { featurizer, model, categories: corpus.categories().clone() })
    }

    pub fn featurizer(&self) -> &Featurizer {
        &self.featurizer
    }

    /// Predicted label for each analyzed document.
    pub fn predict(&self, documents: &[Vec<String>]) -> Result<Array1<usize>> {
        let records = self.featurizer.transform(documents)?;
        Ok(self.predict_records(&records))
    }

    /// Predicted label for each row of an already featurized matrix.
    pub fn predict_records(&self, records: &Array2<f64>) -> Array1<usize> {
        self.model.predict(records)
    }

    /// Analyze raw texts and name their predicted category.
    /// A text with no tokens left after analysis gets `None`.
    pub fn predict_categories(
        &self,
        analyzer: &Analyzer,
        texts:    &[String],
    ) -> Result<Vec<Option<String>>> {
        let analyzed: Vec<Vec<String>> = texts.iter().map(|t| analyzer.analyze(t)).collect();

        let (rows, documents): (Vec<usize>, Vec<Vec<String>>) = analyzed
            .into_iter()
            .enumerate()
            .filter(|(_, tokens)| !tokens.is_empty())
            .unzip();

        let mut out = vec![None; texts.len()];
        if documents.is_empty() {
            return Ok(out);
        }

        let labels = self.predict(&documents)?;
        for (row, label) in rows.into_iter().zip(labels.iter()) {
            out[row] = self.categories.name_of(*label).map(str::to_string);
        }
        Ok(out)
    }
}
