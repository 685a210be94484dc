// ============================================================
// Layer 4 — Lemmatizers
// ============================================================
// Reduces inflected words to a base form so "dogs", "dog" and
// "dog's" count as the same vocabulary entry.
//
// Three strategies, chosen by LemmatizerKind in the config:
//
//   Morphy    — WordNet-style morphological rules. First looks
//               the word up in per-class exception tables
//               ("went" → "go", "mice" → "mouse"), then applies
//               suffix detachment rules for the word's class:
//                 noun: ies→y  (s|x|z|ch|sh)es→(…)  men→man  s→
//                 verb: ies→y  es→  s→  ed→  ing→
//                 adj:  ier→y iest→y  er→  est→
//               followed by consonant un-doubling ("runn" → "run")
//               and silent-e restoration ("hop" + "ing" → "hope").
//               WordNet validates candidates against its dictionary;
//               without one, the restoration rules are heuristics.
//
//   Snowball  — the Porter2 English stemmer from rust-stemmers.
//               Faster and more aggressive; output is a stem
//               ("funni"), not always a dictionary word.
//
//   None      — words pass through unchanged.
//
// Reference: WordNet morphy(7WN) documentation
//            rust-stemmers crate documentation

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};

use crate::domain::pos_tag::PosTag;
use crate::domain::traits::Lemmatize;

// ─── Exception tables ─────────────────────────────────────────────────────────

pub(crate) const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("am", "be"), ("are", "be"), ("is", "be"), ("was", "be"), ("were", "be"),
    ("been", "be"), ("being", "be"),
    ("has", "have"), ("had", "have"), ("having", "have"),
    ("does", "do"), ("did", "do"), ("done", "do"),
    ("went", "go"), ("gone", "go"), ("goes", "go"),
    ("saw", "see"), ("seen", "see"),
    ("ate", "eat"), ("eaten", "eat"),
    ("said", "say"), ("says", "say"),
    ("made", "make"), ("took", "take"), ("taken", "take"),
    ("came", "come"), ("got", "get"), ("gotten", "get"),
    ("gave", "give"), ("given", "give"),
    ("knew", "know"), ("known", "know"),
    ("thought", "think"), ("told", "tell"), ("found", "find"),
    ("left", "leave"), ("felt", "feel"), ("brought", "bring"),
    ("bought", "buy"), ("ran", "run"), ("sat", "sit"), ("stood", "stand"),
    ("wrote", "write"), ("written", "write"),
    ("spoke", "speak"), ("spoken", "speak"),
    ("began", "begin"), ("begun", "begin"),
    ("drank", "drink"), ("drunk", "drink"),
    ("drove", "drive"), ("driven", "drive"),
    ("fell", "fall"), ("fallen", "fall"),
    ("flew", "fly"), ("flown", "fly"),
    ("forgot", "forget"), ("forgotten", "forget"),
    ("heard", "hear"), ("held", "hold"), ("kept", "keep"), ("paid", "pay"),
    ("sent", "send"), ("sold", "sell"), ("slept", "sleep"),
    ("threw", "throw"), ("thrown", "throw"),
    ("understood", "understand"), ("woke", "wake"), ("won", "win"),
    ("wore", "wear"), ("worn", "wear"),
    ("broke", "break"), ("broken", "break"),
    ("chose", "choose"), ("chosen", "choose"),
    ("caught", "catch"), ("taught", "teach"), ("fought", "fight"),
    ("meant", "mean"), ("met", "meet"), ("lost", "lose"),
    ("sang", "sing"), ("sung", "sing"), ("swam", "swim"),
    ("became", "become"),
    ("dies", "die"), ("died", "die"), ("dying", "die"),
    ("lies", "lie"), ("lied", "lie"), ("lying", "lie"),
    ("ties", "tie"), ("tied", "tie"),
    ("used", "use"), ("laid", "lay"), ("led", "lead"),
    ("built", "build"), ("spent", "spend"), ("hung", "hang"),
    ("shot", "shoot"), ("stole", "steal"), ("stolen", "steal"),
    ("bit", "bite"), ("bitten", "bite"), ("hid", "hide"), ("hidden", "hide"),
    ("rode", "ride"), ("ridden", "ride"), ("rose", "rise"), ("risen", "rise"),
    ("shook", "shake"), ("shaken", "shake"), ("sank", "sink"),
    ("struck", "strike"), ("swore", "swear"), ("tore", "tear"), ("torn", "tear"),
    ("wept", "weep"), ("fed", "feed"), ("fled", "flee"), ("dug", "dig"),
    ("lent", "lend"), ("bent", "bend"), ("sought", "seek"), ("stuck", "stick"),
    ("swung", "swing"), ("froze", "freeze"), ("frozen", "freeze"),
    ("grew", "grow"), ("grown", "grow"), ("blew", "blow"), ("blown", "blow"),
    ("drew", "draw"), ("drawn", "draw"), ("flies", "fly"),
];

const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("children", "child"), ("feet", "foot"), ("teeth", "tooth"),
    ("mice", "mouse"), ("geese", "goose"), ("people", "person"),
    ("oxen", "ox"), ("wives", "wife"), ("knives", "knife"), ("lives", "life"),
    ("wolves", "wolf"), ("leaves", "leaf"), ("halves", "half"),
    ("shelves", "shelf"), ("thieves", "thief"), ("loaves", "loaf"),
    ("calves", "calf"), ("elves", "elf"), ("selves", "self"),
    ("potatoes", "potato"), ("tomatoes", "tomato"), ("heroes", "hero"),
    ("echoes", "echo"), ("shoes", "shoe"), ("toes", "toe"),
    ("buses", "bus"), ("pies", "pie"), ("ties", "tie"), ("lies", "lie"),
    ("dice", "die"), ("cacti", "cactus"), ("data", "datum"),
];

const ADJECTIVE_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "good"), ("best", "good"),
    ("worse", "bad"), ("worst", "bad"),
    ("further", "far"), ("farther", "far"),
    ("furthest", "far"), ("farthest", "far"),
    ("larger", "large"), ("largest", "large"),
    ("stranger", "strange"), ("strangest", "strange"),
];

// ─── LemmatizerKind ───────────────────────────────────────────────────────────
/// Which lemmatization strategy the analyzer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LemmatizerKind {
    #[default]
    Morphy,
    Snowball,
    None,
}

impl LemmatizerKind {
    /// Build the lemmatizer for this strategy
    pub fn build(self) -> Box<dyn Lemmatize> {
        match self {
            LemmatizerKind::Morphy   => Box::new(MorphyLemmatizer::new()),
            LemmatizerKind::Snowball => Box::new(SnowballLemmatizer::new()),
            LemmatizerKind::None     => Box::new(IdentityLemmatizer),
        }
    }
}

impl FromStr for LemmatizerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "morphy"   => Ok(LemmatizerKind::Morphy),
            "snowball" => Ok(LemmatizerKind::Snowball),
            "none"     => Ok(LemmatizerKind::None),
            other => Err(format!(
                "unknown lemmatizer '{other}' (expected morphy, snowball or none)"
            )),
        }
    }
}

impl fmt::Display for LemmatizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LemmatizerKind::Morphy   => "morphy",
            LemmatizerKind::Snowball => "snowball",
            LemmatizerKind::None     => "none",
        };
        f.write_str(s)
    }
}

// ─── MorphyLemmatizer ─────────────────────────────────────────────────────────
pub struct MorphyLemmatizer {
    nouns:      HashMap<&'static str, &'static str>,
    verbs:      HashMap<&'static str, &'static str>,
    adjectives: HashMap<&'static str, &'static str>,
}

impl MorphyLemmatizer {
    pub fn new() -> Self {
        Self {
            nouns:      NOUN_EXCEPTIONS.iter().copied().collect(),
            verbs:      VERB_EXCEPTIONS.iter().copied().collect(),
            adjectives: ADJECTIVE_EXCEPTIONS.iter().copied().collect(),
        }
    }

    fn noun(&self, w: &str) -> String {
        if let Some(base) = self.nouns.get(w) {
            return base.to_string();
        }
        if w.len() <= 3 || w.ends_with("ss") || w.ends_with("us") || w.ends_with("is") {
            return w.to_string();
        }
        if let Some(stem) = w.strip_suffix("ies") {
            return format!("{stem}y");
        }
        for suffix in ["sses", "xes", "zes", "ches", "shes"] {
            if w.ends_with(suffix) {
                return w[..w.len() - 2].to_string();
            }
        }
        if let Some(stem) = w.strip_suffix("men") {
            return format!("{stem}man");
        }
        match w.strip_suffix('s') {
            Some(stem) => stem.to_string(),
            None       => w.to_string(),
        }
    }

    fn verb(&self, w: &str) -> String {
        if let Some(base) = self.verbs.get(w) {
            return base.to_string();
        }
        if w.len() <= 3 {
            return w.to_string();
        }
        if let Some(stem) = w.strip_suffix("ies") {
            return format!("{stem}y");
        }
        if let Some(stem) = w.strip_suffix("es") {
            let sibilant = ["s", "x", "z", "ch", "sh", "o"].iter().any(|s| stem.ends_with(s));
            if sibilant && !w.ends_with("ses") {
                return stem.to_string();
            }
        }
        if let Some(stem) = w.strip_suffix("ing") {
            if stem.len() >= 2 && stem.chars().any(is_vowel) {
                return restore_stem(stem);
            }
            return w.to_string();
        }
        // "need", "speed": the -ed is part of the word
        if let Some(stem) = w.strip_suffix("ed") {
            if stem.len() >= 3 && !stem.ends_with('e') && stem.chars().any(is_vowel) {
                return restore_stem(stem);
            }
            return w.to_string();
        }
        if w.ends_with("ss") {
            return w.to_string();
        }
        match w.strip_suffix('s') {
            Some(stem) => stem.to_string(),
            None       => w.to_string(),
        }
    }

    fn adjective(&self, w: &str) -> String {
        if let Some(base) = self.adjectives.get(w) {
            return base.to_string();
        }
        if w.len() <= 4 {
            return w.to_string();
        }
        for (suffix, replacement) in [("iest", "y"), ("ier", "y")] {
            if let Some(stem) = w.strip_suffix(suffix) {
                return format!("{stem}{replacement}");
            }
        }
        for suffix in ["est", "er"] {
            if let Some(stem) = w.strip_suffix(suffix) {
                if stem.len() >= 2 {
                    return restore_stem(stem);
                }
            }
        }
        w.to_string()
    }
}

impl Default for MorphyLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatize for MorphyLemmatizer {
    fn lemmatize(&self, word: &str, tag: PosTag) -> String {
        match tag {
            PosTag::Noun      => self.noun(word),
            PosTag::Verb      => self.verb(word),
            PosTag::Adjective => self.adjective(word),
            PosTag::Adverb    => word.to_string(),
        }
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Repair a stem left behind by stripping -ing/-ed/-er/-est.
///
///   "runn"  → "run"   doubled final consonant after a short vowel
///   "hop"   → "hope"  consonant-vowel-consonant three-letter stem
///   "danc"  → "dance" stems ending in c, v or u never end a word
///   "walk"  → "walk"  everything else is kept
fn restore_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();

    if n >= 4 {
        let (a, b, c, d) = (chars[n - 4], chars[n - 3], chars[n - 2], chars[n - 1]);
        if c == d && "bdgmnprt".contains(d) && is_vowel(b) && !is_vowel(a) {
            return chars[..n - 1].iter().collect();
        }
    }

    let last = chars[n - 1];
    if matches!(last, 'v' | 'u') || (last == 'c' && n >= 2 && chars[n - 2] != 'c') {
        return format!("{stem}e");
    }

    if n == 3 && !is_vowel(chars[0]) && is_vowel(chars[1])
        && !is_vowel(last) && !matches!(last, 'w' | 'x' | 'y')
    {
        return format!("{stem}e");
    }

    stem.to_string()
}

// ─── SnowballLemmatizer ───────────────────────────────────────────────────────
pub struct SnowballLemmatizer {
    stemmer: Stemmer,
}

impl SnowballLemmatizer {
    pub fn new() -> Self {
        Self { stemmer: Stemmer::create(Algorithm::English) }
    }
}

impl Default for SnowballLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatize for SnowballLemmatizer {
    fn lemmatize(&self, word: &str, _tag: PosTag) -> String {
        self.stemmer.stem(word).into_owned()
    }
}

// ─── IdentityLemmatizer ───────────────────────────────────────────────────────
pub struct IdentityLemmatizer;

impl Lemmatize for IdentityLemmatizer {
    fn lemmatize(&self, word: &str, _tag: PosTag) -> String {
        word.to_string()
    }
}
