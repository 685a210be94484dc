// ============================================================
// Layer 3 — Part-of-Speech Tag
// ============================================================
// The coarse word classes a lemmatizer needs to pick the
// right inflection rules ("saw" the verb → "see",
// "saw" the noun → "saw"). These are the four WordNet
// classes; everything else is treated as a noun.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
}
