// ============================================================
// Layer 4 — Document Analyzer
// ============================================================
// Turns one raw joke body into the token list every featurizer
// consumes. The steps run in this order:
//
//   raw body
//       │  TextNormalizer   lowercase, contractions, punctuation
//       ▼
//   normalised text
//       │  WordTokenizer    Unicode word boundaries
//       ▼
//   surface tokens
//       │  PosTagger        tags need the full sentence context,
//       │                   so tagging runs before any filtering
//       ▼
//   (token, tag) pairs
//       │  Lemmatize        base form per word class
//       ▼
//   lemmas
//       │  filters          stopwords (surface form or lemma),
//       │                   short tokens, bare numbers
//       ▼
//   Vec<String>

use anyhow::Result;

use crate::data::{
    preprocessor::TextNormalizer,
    tagger::PosTagger,
    tokenizer::{StopwordFilter, WordTokenizer},
};
use crate::domain::traits::Lemmatize;
use crate::application::config::PipelineConfig;

pub struct Analyzer {
    normalizer:    TextNormalizer,
    tokenizer:     WordTokenizer,
    tagger:        PosTagger,
    lemmatizer:    Box<dyn Lemmatize>,
    stopwords:     StopwordFilter,
    min_token_len: usize,
    keep_numbers:  bool,
}

impl Analyzer {
    pub fn new(
        lemmatizer:    Box<dyn Lemmatize>,
        stopwords:     StopwordFilter,
        min_token_len: usize,
        keep_numbers:  bool,
    ) -> Result<Self> {
        Ok(Self {
            normalizer: TextNormalizer::new()?,
            tokenizer:  WordTokenizer::new(),
            tagger:     PosTagger::new(),
            lemmatizer,
            stopwords,
            min_token_len,
            keep_numbers,
        })
    }

    /// Build the analyzer described by the pipeline configuration
    pub fn from_config(cfg: &PipelineConfig) -> Result<Self> {
        let stopwords = if cfg.remove_stopwords {
            StopwordFilter::english().with_extra(cfg.extra_stopwords.iter().cloned())
        } else {
            StopwordFilter::none()
        };
        tracing::debug!(
            "Analyzer: {} lemmatizer, {} stopwords, min token length {}",
            cfg.lemmatizer,
            stopwords.len(),
            cfg.min_token_len,
        );
        Self::new(cfg.lemmatizer.build(), stopwords, cfg.min_token_len, cfg.keep_numbers)
    }

    /// Analyze one document into its final token list
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let normalised = self.normalizer.normalize(text);
        let tokens     = self.tokenizer.tokenize(&normalised);
        let tags       = self.tagger.tag(&tokens);

        tokens
            .iter()
            .zip(tags)
            .filter(|(token, _)| !self.stopwords.is_stopword(token))
            .map(|(token, tag)| self.lemmatizer.lemmatize(token, tag))
            .filter(|lemma| self.keep(lemma))
            .collect()
    }

    fn keep(&self, lemma: &str) -> bool {
        if lemma.chars().count() < self.min_token_len {
            return false;
        }
        if !self.keep_numbers && lemma.chars().all(|c| c.is_numeric()) {
            return false;
        }
        !self.stopwords.is_stopword(lemma)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::lemmatizer::{IdentityLemmatizer, MorphyLemmatizer};

    fn morphy() -> Analyzer {
        Analyzer::new(Box::new(MorphyLemmatizer::new()), StopwordFilter::english(), 2, false)
            .unwrap()
    }

    #[test]
    fn test_full_pipeline() {
        let tokens = morphy().analyze("The lawyers walked into the bars, didn't they?");
        assert_eq!(tokens, vec!["lawyer", "walk", "bar"]);
    }

    #[test]
    fn test_numbers_dropped_unless_kept() {
        let a = morphy();
        assert_eq!(a.analyze("42 monkeys"), vec!["monkey"]);

        let keep = Analyzer::new(Box::new(IdentityLemmatizer), StopwordFilter::none(), 1, true)
            .unwrap();
        assert_eq!(keep.analyze("42 monkeys"), vec!["42", "monkeys"]);
    }

    #[test]
    fn test_min_token_len() {
        let a = Analyzer::new(Box::new(IdentityLemmatizer), StopwordFilter::none(), 4, false)
            .unwrap();
        assert_eq!(a.analyze("a cat ate the mouse"), vec!["mouse"]);
    }

    #[test]
    fn test_only_stopwords_gives_empty() {
        assert!(morphy().analyze("The, and... of it!").is_empty());
        assert!(morphy().analyze("").is_empty());
    }

    #[test]
    fn test_from_default_config() {
        let a = Analyzer::from_config(&PipelineConfig::default()).unwrap();
        assert_eq!(a.analyze("Blondes"), vec!["blonde"]);
    }
}
