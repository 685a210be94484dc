// ============================================================
// Layer 5 — Hand-written Bag-of-Words
// ============================================================
// The two routines every bag-of-words vectorizer is built on,
// written out in full:
//
//   Dictionary::build   scan the token lists once, give each new
//                       word the next unused integer, in the order
//                       words are first seen
//
//   Dictionary::vectorize
//                       a vector of dictionary length, zero
//                       everywhere; +1 at the word's position for
//                       every token the dictionary knows
//
// Example:
//   docs   = [["cat", "sat"], ["cat", "ran", "cat"]]
//   dict   = { cat: 0, sat: 1, ran: 2 }
//   vector(["cat", "ran", "cat", "dog"]) = [2, 0, 1]   ("dog" unknown)
//
// The library CountVectorizer (ml::vectorizer) produces the same
// counts with a different column order.

use std::collections::HashMap;

use ndarray::Array2;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    positions: HashMap<String, usize>,
    words:     Vec<String>,
}

impl Dictionary {
    /// Build a word → position mapping in first-encounter order.
    pub fn build<D, T>(documents: D) -> Self
    where
        D: IntoIterator<Item = T>,
        T: AsRef<[String]>,
    {
        let mut dict = Self::default();
        for doc in documents {
            for token in doc.as_ref() {
                if !dict.positions.contains_key(token) {
                    dict.positions.insert(token.clone(), dict.words.len());
                    dict.words.push(token.clone());
                }
            }
        }
        dict
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn position(&self, word: &str) -> Option<usize> {
        self.positions.get(word).copied()
    }

    /// Words in position order: `words()[i]` sits at position `i`.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Count vector for one token list. Tokens missing from the
    /// dictionary are skipped.
    pub fn vectorize(&self, tokens: &[String]) -> Vec<usize> {
        let mut vector = vec![0usize; self.len()];
        for token in tokens {
            if let Some(pos) = self.position(token) {
                vector[pos] += 1;
            }
        }
        vector
    }

    /// One row per document, as a dense matrix for the classifier.
    pub fn vectorize_all(&self, documents: &[Vec<String>]) -> Array2<f64> {
        let mut matrix = Array2::<f64>::zeros((documents.len(), self.len()));
        for (row, tokens) in documents.iter().enumerate() {
            for token in tokens {
                if let Some(pos) = self.position(token) {
                    matrix[[row, pos]] += 1.0;
                }
            }
        }
        matrix
    }
}

/// The (position, count) entries of a count vector that are non-zero.
pub fn nonzero(vector: &[usize]) -> Vec<(usize, usize)> {
    vector
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(pos, &count)| (pos, count))
        .collect()
}
