// ============================================================
// Layer 3 — Category Index (label encoder)
// ============================================================
// Classifiers work on integer labels, the dataset on names.
// CategoryIndex is the bijection between the two.
//
// Names are sorted before numbering so the same set of
// categories always produces the same label numbers,
// independent of the order records appear in the file.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    names: Vec<String>,
}

impl CategoryIndex {
    /// Build an index over every distinct name in `names`.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        Self { names: unique.into_iter().collect() }
    }

    pub fn label_of(&self, name: &str) -> Option<usize> {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).ok()
    }

    pub fn name_of(&self, label: usize) -> Option<&str> {
        self.names.get(label).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_follow_sorted_names() {
        let idx = CategoryIndex::from_names(["Puns", "Animal", "Puns", "Blonde"]);
        assert_eq!(idx.len(), 3);
        assert_eq!(idx.label_of("Animal"), Some(0));
        assert_eq!(idx.label_of("Blonde"), Some(1));
        assert_eq!(idx.label_of("Puns"),   Some(2));
        assert_eq!(idx.label_of("Lawyer"), None);
    }

    #[test]
    fn test_name_round_trip() {
        let idx = CategoryIndex::from_names(vec!["b".to_string(), "a".to_string()]);
        for label in 0..idx.len() {
            let name = idx.name_of(label).unwrap();
            assert_eq!(idx.label_of(name), Some(label));
        }
        assert_eq!(idx.name_of(5), None);
    }
}
