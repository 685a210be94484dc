// ============================================================
// Layer 5 — ML Layer
// ============================================================
// Everything between an analyzed corpus and a predicted label.
// All linfa code lives here; no other layer imports it.
//
//   bag_of_words.rs — hand-written word → position dictionary
//                     and count vectors
//
//   vectorizer.rs   — the three featurizations (dictionary,
//                     counts, tfidf) behind one Featurizer
//
//   classifier.rs   — featurizer + Multinomial Naive Bayes
//
//   trainer.rs      — train/test evaluation, accuracy and F1
//
// Reference: linfa book (Naive Bayes)

/// Hand-written bag-of-words dictionary
pub mod bag_of_words;

/// Feature extraction
pub mod vectorizer;

/// Multinomial Naive Bayes joke classifier
pub mod classifier;

/// Train/test evaluation
pub mod trainer;
