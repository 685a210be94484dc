// ============================================================
// Layer 4 — Labelled Corpus
// ============================================================
// Analyzed jokes paired with integer category labels:
//
//   Vec<Joke>
//       │  category whitelist
//       │  Analyzer::analyze, jokes with no tokens dropped
//       │  categories below min_category_size dropped
//       ▼
//   documents[i] : Vec<String>   ◄── same row ──►   labels[i] : usize
//
// Subsets and splits keep the full CategoryIndex, so a label
// means the same category in the train and the test corpus.

use std::collections::{BTreeMap, HashSet};

use ndarray::Array1;

use crate::data::{analyzer::Analyzer, splitter::split_train_test};
use crate::domain::{category::CategoryIndex, joke::Joke};

/// Which jokes make it into the corpus.
#[derive(Debug, Clone, Default)]
pub struct CorpusFilter {
    /// Only these categories; empty keeps every category
    pub categories: Vec<String>,
    /// Categories with fewer analyzed jokes are dropped
    pub min_category_size: usize,
}

/// Analyzed documents with one integer label per document.
/// `documents[i]` always belongs to `labels[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledCorpus {
    documents:  Vec<Vec<String>>,
    labels:     Vec<usize>,
    categories: CategoryIndex,
}

impl LabeledCorpus {
    pub fn build(jokes: &[Joke], analyzer: &Analyzer, filter: &CorpusFilter) -> Self {
        let wanted: HashSet<&str> = filter.categories.iter().map(String::as_str).collect();

        let mut analyzed: Vec<(Vec<String>, &str)> = Vec::with_capacity(jokes.len());
        let mut empty = 0usize;
        for joke in jokes {
            if !wanted.is_empty() && !wanted.contains(joke.category.as_str()) {
                continue;
            }
            let tokens = analyzer.analyze(&joke.body);
            if tokens.is_empty() {
                empty += 1;
                continue;
            }
            analyzed.push((tokens, joke.category.as_str()));
        }
        if empty > 0 {
            tracing::warn!("Dropped {} jokes with no tokens left after analysis", empty);
        }

        let mut sizes: BTreeMap<&str, usize> = BTreeMap::new();
        for (_, category) in &analyzed {
            *sizes.entry(*category).or_insert(0) += 1;
        }
        let small: Vec<&str> = sizes
            .iter()
            .filter(|&(_, &n)| n < filter.min_category_size)
            .map(|(c, _)| *c)
            .collect();
        if !small.is_empty() {
            tracing::info!(
                "Dropped {} categories with fewer than {} jokes",
                small.len(),
                filter.min_category_size
            );
        }
        analyzed.retain(|(_, c)| !small.contains(c));

        let categories = CategoryIndex::from_names(analyzed.iter().map(|(_, c)| *c));
        if categories.is_empty() {
            tracing::warn!("No category survived filtering; the corpus is empty");
        }
        let mut documents = Vec::with_capacity(analyzed.len());
        let mut labels    = Vec::with_capacity(analyzed.len());
        for (tokens, category) in analyzed {
            if let Some(label) = categories.label_of(category) {
                documents.push(tokens);
                labels.push(label);
            }
        }

        tracing::info!(
            "Corpus ready: {} documents in {} categories",
            documents.len(),
            categories.len()
        );
        Self { documents, labels, categories }
    }

    /// Assemble a corpus from already analyzed rows.
    #[cfg(test)]
    pub fn from_parts(
        documents:  Vec<Vec<String>>,
        labels:     Vec<usize>,
        categories: CategoryIndex,
    ) -> anyhow::Result<Self> {
        anyhow::ensure!(
            documents.len() == labels.len(),
            "{} documents but {} labels",
            documents.len(),
            labels.len()
        );
        anyhow::ensure!(
            labels.iter().all(|&l| l < categories.len()),
            "label out of range for {} categories",
            categories.len()
        );
        Ok(Self { documents, labels, categories })
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[Vec<String>] {
        &self.documents
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn categories(&self) -> &CategoryIndex {
        &self.categories
    }

    pub fn targets(&self) -> Array1<usize> {
        Array1::from(self.labels.clone())
    }

    /// Token lists joined with single spaces, the input shape the
    /// library vectorizers take.
    pub fn joined(&self) -> Array1<String> {
        join_documents(&self.documents)
    }

    /// (category, document count), largest first, ties by name.
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        let mut counts = vec![0usize; self.categories.len()];
        for &label in &self.labels {
            counts[label] += 1;
        }
        let mut out: Vec<(String, usize)> = self
            .categories
            .names()
            .iter()
            .cloned()
            .zip(counts)
            .collect();
        out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        out
    }

    /// The rows at `rows`, in that order. Keeps the full category index
    /// so labels mean the same thing in every subset.
    pub fn subset(&self, rows: &[usize]) -> Self {
        Self {
            documents:  rows.iter().map(|&r| self.documents[r].clone()).collect(),
            labels:     rows.iter().map(|&r| self.labels[r]).collect(),
            categories: self.categories.clone(),
        }
    }

    /// Shuffle row indices and split into (train, test) corpora.
    pub fn split(&self, train_fraction: f64, seed: Option<u64>) -> (Self, Self) {
        let rows: Vec<usize> = (0..self.len()).collect();
        let (train, test)    = split_train_test(rows, train_fraction, seed);
        (self.subset(&train), self.subset(&test))
    }
}

pub fn join_documents(documents: &[Vec<String>]) -> Array1<String> {
    documents.iter().map(|tokens| tokens.join(" ")).collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::lemmatizer::IdentityLemmatizer;
    use crate::data::tokenizer::StopwordFilter;

    fn analyzer() -> Analyzer {
        Analyzer::new(Box::new(IdentityLemmatizer), StopwordFilter::none(), 1, false).unwrap()
    }

    fn jokes() -> Vec<Joke> {
        vec![
            Joke::new("cat meows", "Animal"),
            Joke::new("dog barks", "Animal"),
            Joke::new("pun intended", "Puns"),
            Joke::new("!!!", "Puns"),
            Joke::new("lawyer bills", "Lawyer"),
            Joke::new("cow moos", "Animal"),
        ]
    }

    #[test]
    fn test_rows_align_with_labels() {
        let corpus = LabeledCorpus::build(&jokes(), &analyzer(), &CorpusFilter::default());
        assert_eq!(corpus.len(), 5);
        assert_eq!(corpus.documents().len(), corpus.labels().len());
        assert_eq!(corpus.joined().len(), corpus.targets().len());

        let animal = corpus.categories().label_of("Animal").unwrap();
        assert_eq!(corpus.documents()[0], vec!["cat", "meows"]);
        assert_eq!(corpus.labels()[0], animal);
    }

    #[test]
    fn test_min_category_size_drops_small_categories() {
        let filter = CorpusFilter { categories: vec![], min_category_size: 2 };
        let corpus = LabeledCorpus::build(&jokes(), &analyzer(), &filter);
        // "Puns" has one analyzable joke left, "Lawyer" one
        assert_eq!(corpus.categories().names(), &["Animal".to_string()]);
        assert_eq!(corpus.len(), 3);
    }

    #[test]
    fn test_everything_filtered_leaves_empty_index() {
        let filter = CorpusFilter { categories: vec![], min_category_size: 10 };
        let corpus = LabeledCorpus::build(&jokes(), &analyzer(), &filter);
        assert!(corpus.is_empty());
        assert!(corpus.categories().is_empty());
        assert!(corpus.category_counts().is_empty());
    }

    #[test]
    fn test_category_whitelist() {
        let filter = CorpusFilter { categories: vec!["Puns".into(), "Lawyer".into()], min_category_size: 0 };
        let corpus = LabeledCorpus::build(&jokes(), &analyzer(), &filter);
        assert_eq!(corpus.category_counts(),
                   vec![("Lawyer".to_string(), 1), ("Puns".to_string(), 1)]);
    }

    #[test]
    fn test_category_counts_sorted() {
        let corpus = LabeledCorpus::build(&jokes(), &analyzer(), &CorpusFilter::default());
        let counts = corpus.category_counts();
        assert_eq!(counts[0], ("Animal".to_string(), 3));
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), corpus.len());
    }

    #[test]
    fn test_split_keeps_alignment() {
        let corpus = LabeledCorpus::build(&jokes(), &analyzer(), &CorpusFilter::default());
        let (train, test) = corpus.split(0.6, Some(3));
        assert_eq!(train.len() + test.len(), corpus.len());
        for part in [&train, &test] {
            for (doc, &label) in part.documents().iter().zip(part.labels()) {
                let row = corpus.documents().iter().position(|d| d == doc).unwrap();
                assert_eq!(corpus.labels()[row], label);
            }
        }
    }

    #[test]
    fn test_from_parts_validates() {
        let idx = CategoryIndex::from_names(["a"]);
        assert!(LabeledCorpus::from_parts(vec![vec!["x".into()]], vec![], idx.clone()).is_err());
        assert!(LabeledCorpus::from_parts(vec![vec!["x".into()]], vec![1], idx.clone()).is_err());
        assert!(LabeledCorpus::from_parts(vec![vec!["x".into()]], vec![0], idx).is_ok());
    }
}
