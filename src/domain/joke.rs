// ============================================================
// Layer 3 — Joke Domain Type
// ============================================================
// Represents a single joke record from the dataset.
// A plain data struct: the raw body text and the topical
// category label it was filed under.
//
// The dataset files carry more fields per record (id, rating,
// title, ...). Serde ignores unknown fields by default, so only
// the two we classify on are declared here.

use serde::{Deserialize, Serialize};

/// One labelled joke as it appears in the JSON dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    /// The joke text, before any normalisation
    pub body: String,

    /// The topical category, e.g. "Animal" or "Blonde Jokes"
    pub category: String,
}

impl Joke {
    /// Create a new Joke from a body and a category.
    ///
    /// Example:
    ///   let joke = Joke::new("Why did the chicken...", "Animal");
    #[cfg(test)]
    pub fn new(body: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            body:     body.into(),
            category: category.into(),
        }
    }
}
