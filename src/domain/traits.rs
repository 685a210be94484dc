// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer programs against these traits, not
// against concrete loaders or lemmatizers:
//   - JsonJokeLoader implements JokeSource
//   - MorphyLemmatizer, SnowballLemmatizer and
//     IdentityLemmatizer implement Lemmatize
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::joke::Joke;
use crate::domain::pos_tag::PosTag;

// ─── JokeSource ───────────────────────────────────────────────────────────────
/// Any component that can load labelled jokes.
pub trait JokeSource {
    /// Load every joke record available from this source.
    fn load_all(&self) -> Result<Vec<Joke>>;
}

// ─── Lemmatize ────────────────────────────────────────────────────────────────
/// Reduces an inflected word to its base form.
///
/// `word` is already lowercased. `tag` is the word class the
/// tagger assigned; implementations that do not care about
/// word classes (stemmers) may ignore it.
pub trait Lemmatize {
    fn lemmatize(&self, word: &str, tag: PosTag) -> String;
}
