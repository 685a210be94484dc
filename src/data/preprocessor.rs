// ============================================================
// Layer 4 — Text Normaliser
// ============================================================
// Cleans a raw joke body before tokenisation.
//
// Joke bodies scraped from the web contain:
//   - Typographic quotes (’ “ ”) instead of ASCII ones
//   - Non-breaking / zero-width spaces, tabs, \r\n line endings
//   - Contractions ("don't", "they're") that would otherwise
//     become half-words after punctuation is stripped
//   - Punctuation glued to words ("bar." "Why?!")
//
// Normalisation steps (applied in order):
//   1. Map typographic characters and odd whitespace to ASCII
//   2. Lowercase
//   3. Expand contractions ("won't" → "will not", "n't" → " not")
//   4. Replace every remaining non-alphanumeric character with a space
//   5. Collapse whitespace runs, trim
//
// Reference: regex crate documentation
//            Rust Book §8 (Strings in Rust)

use anyhow::{Context, Result};
use regex::Regex;

/// Contractions handled before the generic suffix rules.
/// Order matters: "won't" must not fall through to "n't" → "wo not".
const IRREGULAR_CONTRACTIONS: [(&str, &str); 4] = [
    ("won't",  "will not"),
    ("can't",  "can not"),
    ("shan't", "shall not"),
    ("ain't",  "is not"),
];

pub struct TextNormalizer {
    /// word-final contraction suffixes and their expansions
    suffixes: Vec<(Regex, &'static str)>,
    /// anything that is not a letter, digit or whitespace
    punctuation: Regex,
    whitespace: Regex,
}

impl TextNormalizer {
    pub fn new() -> Result<Self> {
        let table = [
            (r"n't\b", " not"),
            (r"'re\b", " are"),
            (r"'ll\b", " will"),
            (r"'ve\b", " have"),
            (r"'d\b",  " would"),
            (r"'m\b",  " am"),
            (r"'s\b",  ""),
        ];

        let suffixes = table
            .iter()
            .map(|(pattern, replacement)| {
                Regex::new(pattern)
                    .with_context(|| format!("Bad contraction pattern '{pattern}'"))
                    .map(|re| (re, *replacement))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            suffixes,
            punctuation: Regex::new(r"[^\p{L}\p{N}\s]+")?,
            whitespace:  Regex::new(r"\s+")?,
        })
    }

    /// Normalise a raw joke body. Returns lowercase words separated
    /// by single spaces, with no punctuation left.
    pub fn normalize(&self, text: &str) -> String {
        // ── Step 1 + 2: character mapping and lowercase ──────────────────────
        let mut out: String = text
            .chars()
            .map(|c| match c {
                '\u{2018}' | '\u{2019}' | '\u{02BC}' | '`' => '\'',
                '\u{201C}' | '\u{201D}'                    => '"',
                '\u{00A0}' | '\u{200B}' | '\u{FEFF}'       => ' ',
                c if c.is_control()                        => ' ',
                c => c,
            })
            .flat_map(char::to_lowercase)
            .collect();

        // ── Step 3: contractions ──────────────────────────────────────────────
        for (word, expansion) in IRREGULAR_CONTRACTIONS {
            if out.contains(word) {
                out = out.replace(word, expansion);
            }
        }
        for (re, replacement) in &self.suffixes {
            out = re.replace_all(&out, *replacement).into_owned();
        }

        // ── Step 4 + 5: punctuation and whitespace ────────────────────────────
        let out = self.punctuation.replace_all(&out, " ");
        self.whitespace.replace_all(&out, " ").trim().to_string()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn norm(s: &str) -> String {
        TextNormalizer::new().unwrap().normalize(s)
    }

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(norm("Why did the Chicken cross the road?!"),
                   "why did the chicken cross the road");
    }

    #[test]
    fn test_expands_contractions() {
        assert_eq!(norm("I don't know, they're here"), "i do not know they are here");
        assert_eq!(norm("You won't believe it"), "you will not believe it");
        assert_eq!(norm("I can't and I'll try"), "i can not and i will try");
    }

    #[test]
    fn test_typographic_apostrophe_is_a_contraction() {
        assert_eq!(norm("She\u{2019}d say I\u{2019}m late"), "she would say i am late");
    }

    #[test]
    fn test_possessive_is_dropped() {
        assert_eq!(norm("The lawyer's fee"), "the lawyer fee");
    }

    #[test]
    fn test_collapses_whitespace_and_control_chars() {
        assert_eq!(norm("  knock\t\tknock\r\n who's\u{00A0}there  "),
                   "knock knock who there");
    }

    #[test]
    fn test_keeps_digits_and_accents() {
        assert_eq!(norm("Café No. 42"), "café no 42");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(norm(""), "");
        assert_eq!(norm("?!..."), "");
    }
}
