// ============================================================
// Layer 4 — Dataset Loader
// ============================================================
// Loads joke records from a single JSON file on disk.
//
// Expected layout: one top-level array, one object per joke:
//
//   [
//     { "category": "Animal", "body": "Why did the ...", "id": 1 },
//     { "category": "Puns",   "body": "I used to be ...", "id": 2 },
//     ...
//   ]
//
// Only `body` and `category` are required. Any other fields are
// ignored. A record missing either field is an error that names
// the offending record index, so a broken dataset is fixed at the
// source instead of being silently shrunk.
//
// Reference: serde_json crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::{fs, path::PathBuf};

use crate::domain::joke::Joke;
use crate::domain::traits::JokeSource;

/// Loads all jokes from a JSON array file.
/// Implements the JokeSource trait from Layer 3.
pub struct JsonJokeLoader {
    /// Path to the JSON dataset
    path: PathBuf,
}

impl JsonJokeLoader {
    /// Create a new loader pointed at a dataset file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl JokeSource for JsonJokeLoader {
    fn load_all(&self) -> Result<Vec<Joke>> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read dataset '{}'", self.path.display()))?;

        parse_jokes(&raw)
            .with_context(|| format!("Invalid dataset '{}'", self.path.display()))
    }
}

/// Parse the contents of a dataset file.
/// Split out from load_all so it can be tested without touching disk.
pub fn parse_jokes(raw: &str) -> Result<Vec<Joke>> {
    let value: Value = serde_json::from_str(raw).context("Malformed JSON")?;

    let records = match value {
        Value::Array(records) => records,
        other => bail!("Expected a JSON array of jokes, found {}", kind_of(&other)),
    };

    let mut jokes = Vec::with_capacity(records.len());
    for (i, record) in records.into_iter().enumerate() {
        let joke: Joke = serde_json::from_value(record)
            .with_context(|| format!("Record {i} is not a joke with 'body' and 'category'"))?;
        jokes.push(joke);
    }

    tracing::info!("Loaded {} joke records", jokes.len());
    Ok(jokes)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null      => "null",
        Value::Bool(_)   => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_)  => "an array",
        Value::Object(_) => "an object",
    }
}
