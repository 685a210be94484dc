// ============================================================
// Layer 4 — Part-of-Speech Tagger
// ============================================================
// Assigns each token one of the four WordNet word classes so
// the lemmatizer can apply the right inflection rules.
//
// A full statistical tagger is out of proportion for picking
// between "noun plural" and "verb third person" rules, so the
// tagger combines three cheap signals, strongest first:
//
//   1. Left context     "the saw" → noun,  "to saw" → verb,
//                       "they walks" → verb
//   2. Irregular forms  "went", "bought", "taken" → verb
//   3. Suffixes         -ly adverb, -ing/-ed verb,
//                       -ous/-ful/-able/... adjective
//
// Anything left over is a noun, which is also what WordNet's
// lemmatizer assumes when it is given no tag.

use std::collections::HashSet;

use crate::data::lemmatizer::VERB_EXCEPTIONS;
use crate::domain::pos_tag::PosTag;

const NOUN_CONTEXT: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "my", "your", "his",
    "her", "its", "our", "their", "some", "any", "no", "every", "each",
    "of", "in", "on", "at", "with", "for", "from", "by", "about", "into",
];

const VERB_CONTEXT: &[&str] = &[
    "to", "will", "would", "can", "could", "shall", "should", "may", "might",
    "must", "do", "does", "did", "not", "i", "you", "he", "she", "we", "they",
];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "able", "ible", "ive", "less", "ic", "al", "ish",
];

/// Words ending in -ly that are not adverbs
const LY_NON_ADVERBS: &[(&str, PosTag)] = &[
    ("family", PosTag::Noun), ("fly", PosTag::Noun), ("belly", PosTag::Noun),
    ("jelly", PosTag::Noun), ("bully", PosTag::Noun), ("ally", PosTag::Noun),
    ("reply", PosTag::Noun), ("supply", PosTag::Noun), ("butterfly", PosTag::Noun),
    ("ugly", PosTag::Adjective), ("silly", PosTag::Adjective),
    ("lonely", PosTag::Adjective), ("lovely", PosTag::Adjective),
    ("friendly", PosTag::Adjective), ("holy", PosTag::Adjective),
    ("jolly", PosTag::Adjective), ("elderly", PosTag::Adjective),
    ("curly", PosTag::Adjective), ("only", PosTag::Adjective),
];

/// -ing words that are nouns in their own right
const ING_NOUNS: &[&str] = &[
    "morning", "evening", "nothing", "something", "anything", "everything",
    "thing", "wedding", "building", "ceiling", "king", "ring", "wing",
    "string", "spring", "ending", "meeting", "painting", "darling", "pudding",
];

/// Adjectives that no suffix rule recognises, incl. -er/-est comparatives
const COMMON_ADJECTIVES: &[&str] = &[
    "good", "bad", "big", "small", "old", "new", "young", "little", "great",
    "long", "short", "happy", "sad", "funny", "stupid", "dumb", "smart",
    "fat", "pretty", "rich", "poor", "hot", "cold", "better", "best",
    "worse", "worst", "bigger", "biggest", "smaller", "smallest", "older",
    "oldest", "younger", "youngest", "taller", "tallest", "shorter",
    "longer", "faster", "slower", "smarter", "dumber", "richer", "poorer",
    "harder", "easier", "stronger", "weaker", "higher", "lower", "greater",
    "larger", "largest", "nicer", "nicest", "cheaper", "darker", "colder",
    "hotter", "fatter", "thinner", "louder", "quicker", "funnier",
    "funniest", "happier", "happiest", "dumbest", "stupidest",
];

pub struct PosTagger {
    noun_context:  HashSet<&'static str>,
    verb_context:  HashSet<&'static str>,
    verb_forms:    HashSet<&'static str>,
    ing_nouns:     HashSet<&'static str>,
    adjectives:    HashSet<&'static str>,
}

impl PosTagger {
    pub fn new() -> Self {
        Self {
            noun_context: NOUN_CONTEXT.iter().copied().collect(),
            verb_context: VERB_CONTEXT.iter().copied().collect(),
            verb_forms:   VERB_EXCEPTIONS.iter().map(|(form, _)| *form).collect(),
            ing_nouns:    ING_NOUNS.iter().copied().collect(),
            adjectives:   COMMON_ADJECTIVES.iter().copied().collect(),
        }
    }

    /// Tag a token sequence. The output has one tag per input token.
    pub fn tag(&self, tokens: &[String]) -> Vec<PosTag> {
        tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                let previous = i.checked_sub(1).map(|p| tokens[p].as_str());
                self.tag_word(token, previous)
            })
            .collect()
    }

    fn tag_word(&self, word: &str, previous: Option<&str>) -> PosTag {
        let by_form = self.tag_by_form(word);

        match previous {
            // "the funny dog": keep adjectives and adverbs, the rest is a noun
            Some(p) if self.noun_context.contains(p) => match by_form {
                PosTag::Adjective | PosTag::Adverb => by_form,
                _ => PosTag::Noun,
            },
            Some(p) if self.verb_context.contains(p) => match by_form {
                PosTag::Adverb | PosTag::Adjective => by_form,
                _ => PosTag::Verb,
            },
            _ => by_form,
        }
    }

    /// Word-class guess from the word alone
    fn tag_by_form(&self, word: &str) -> PosTag {
        if self.adjectives.contains(word) {
            return PosTag::Adjective;
        }
        if let Some((_, tag)) = LY_NON_ADVERBS.iter().find(|(w, _)| *w == word) {
            return *tag;
        }
        if self.verb_forms.contains(word) {
            return PosTag::Verb;
        }
        if word.len() > 4 && word.ends_with("ly") {
            return PosTag::Adverb;
        }
        if self.ing_nouns.contains(word) {
            return PosTag::Noun;
        }
        if (word.len() > 4 && word.ends_with("ing")) || (word.len() > 3 && word.ends_with("ed")) {
            return PosTag::Verb;
        }
        if word.len() > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            return PosTag::Adjective;
        }
        PosTag::Noun
    }
}

impl Default for PosTagger {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<PosTag> {
        let tokens: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        PosTagger::new().tag(&tokens)
    }

    #[test]
    fn test_one_tag_per_token() {
        assert_eq!(tags("a horse walks into a bar").len(), 6);
        assert!(tags("").is_empty());
    }

    #[test]
    fn test_context_decides_ambiguous_words() {
        use PosTag::*;
        assert_eq!(tags("the saw"), vec![Noun, Noun]);
        assert_eq!(tags("i saw"),   vec![Noun, Verb]);
        assert_eq!(tags("to walk"), vec![Noun, Verb]);
    }

    #[test]
    fn test_suffix_rules() {
        use PosTag::*;
        assert_eq!(tags("quickly"),   vec![Adverb]);
        assert_eq!(tags("jumping"),   vec![Verb]);
        assert_eq!(tags("walked"),    vec![Verb]);
        assert_eq!(tags("dangerous"), vec![Adjective]);
        assert_eq!(tags("lawyers"),   vec![Noun]);
    }

    #[test]
    fn test_exceptions_to_suffix_rules() {
        use PosTag::*;
        assert_eq!(tags("family"),  vec![Noun]);
        assert_eq!(tags("silly"),   vec![Adjective]);
        assert_eq!(tags("morning"), vec![Noun]);
        assert_eq!(tags("bought"),  vec![Verb]);
    }

    #[test]
    fn test_adjective_survives_determiner() {
        use PosTag::*;
        assert_eq!(tags("the funniest joke"), vec![Noun, Adjective, Noun]);
    }
}
