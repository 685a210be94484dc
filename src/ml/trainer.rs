// ============================================================
// Layer 5 — Evaluation
// ============================================================
// Fit on the train split, score on both splits:
//
//   train split ──► JokeClassifier::train
//                       │
//          ┌────────────┴────────────┐
//          ▼                         ▼
//   predict(train)             predict(test)
//          │                         │
//   ConfusionMatrix            ConfusionMatrix
//          │                         │
//   train_accuracy            test_accuracy, test_f1
//
// A train accuracy far above the test accuracy means the
// vocabulary is memorising individual jokes.

use anyhow::{ensure, Result};
use linfa::prelude::*;

use crate::data::dataset::LabeledCorpus;
use crate::infra::metrics::EvaluationMetrics;
use crate::ml::classifier::JokeClassifier;
use crate::ml::vectorizer::{Featurization, VectorizerSettings};

pub fn evaluate(
    train:         &LabeledCorpus,
    test:          &LabeledCorpus,
    featurization: Featurization,
    settings:      &VectorizerSettings,
    alpha:         f64,
) -> Result<EvaluationMetrics> {
    ensure!(!train.is_empty(), "The train split is empty");
    ensure!(!test.is_empty(), "The test split is empty");

    let classifier = JokeClassifier::train(train, featurization, settings, alpha)?;

    let train_cm = confusion(&classifier, train)?;
    let test_cm  = confusion(&classifier, test)?;

    let metrics = EvaluationMetrics {
        featurization:   classifier.featurizer().featurization(),
        vocabulary_size: classifier.featurizer().vocabulary_len(),
        train_rows:      train.len(),
        test_rows:       test.len(),
        train_accuracy:  f64::from(train_cm.accuracy()),
        test_accuracy:   f64::from(test_cm.accuracy()),
        test_f1:         f64::from(test_cm.f1_score()),
    };

    tracing::info!(
        "{}: train accuracy {:.4}, test accuracy {:.4}",
        featurization,
        metrics.train_accuracy,
        metrics.test_accuracy,
    );
    Ok(metrics)
}

fn confusion(classifier: &JokeClassifier, corpus: &LabeledCorpus) -> Result<ConfusionMatrix<usize>> {
    let records   = classifier.featurizer().transform(corpus.documents())?;
    let dataset   = Dataset::new(records, corpus.targets());
    let predicted = classifier.predict_records(dataset.records());
    Ok(predicted.confusion_matrix(&dataset)?)
}
