// ============================================================
// Layer 4 — Word Tokenizer and Stopword Filter
// ============================================================
// Splits normalised text into word tokens and decides which
// tokens carry too little topical signal to keep.
//
// Tokenisation uses Unicode word boundaries (UAX #29) from the
// unicode-segmentation crate, so accented words and digits are
// kept whole.
//
// Stopwords come from the stop-words crate's English list. The
// words contraction expansion produces ("would", "will", "not")
// are already on it; bare "s", "t", "d" fall to the min token
// length.
//
// Reference: unicode-segmentation crate documentation
//            stop-words crate documentation

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};
use unicode_segmentation::UnicodeSegmentation;

pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Split text into owned word tokens, in order.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(str::to_string).collect()
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// English stopword set plus any caller-supplied extras.
pub struct StopwordFilter {
    words: HashSet<String>,
}

impl StopwordFilter {
    /// The English list from the stop-words crate
    pub fn english() -> Self {
        let words: Vec<String> = get(LANGUAGE::English);
        Self { words: words.into_iter().map(|w| w.to_lowercase()).collect() }
    }

    /// An empty filter that keeps every token
    pub fn none() -> Self {
        Self { words: HashSet::new() }
    }

    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(extra.into_iter().map(Into::into));
        self
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_words() {
        let t = WordTokenizer::new();
        assert_eq!(t.tokenize("a horse walks into a bar"),
                   vec!["a", "horse", "walks", "into", "a", "bar"]);
    }

    #[test]
    fn test_tokenize_keeps_accents_and_numbers() {
        let t = WordTokenizer::new();
        assert_eq!(t.tokenize("café 42"), vec!["café", "42"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(WordTokenizer::new().tokenize("   ").is_empty());
    }

    #[test]
    fn test_english_stopwords() {
        let f = StopwordFilter::english();
        assert!(f.len() > 100);
        assert!(f.is_stopword("the"));
        assert!(f.is_stopword("and"));
        assert!(!f.is_stopword("lawyer"));
    }

    #[test]
    fn test_none_and_extra() {
        let f = StopwordFilter::none().with_extra(["joke"]);
        assert!(f.is_stopword("joke"));
        assert!(!f.is_stopword("the"));
    }
}
