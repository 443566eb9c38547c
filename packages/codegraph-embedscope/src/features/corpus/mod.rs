//! Snippet corpus
//!
//! An ordered, immutable set of labeled code texts. Snippet indices are
//! 1-based and stable across every component of a run.

mod samples;

use serde::{Deserialize, Serialize};

pub use samples::REFERENCE_SNIPPETS;

/// One unit of source code under analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// 1-based position in the corpus
    pub index: usize,
    pub label: String,
    pub text: String,
}

impl Snippet {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            label: format!("Snippet {index}"),
            text: text.into(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Ordered snippet collection (immutable once built)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    snippets: Vec<Snippet>,
}

impl Corpus {
    /// Build a corpus from texts, assigning indices 1..=n in input order
    pub fn new<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let snippets = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Snippet::new(i + 1, text))
            .collect();
        Self { snippets }
    }

    /// Build a corpus from `(label, text)` pairs
    pub fn from_labeled<I, L, S>(items: I) -> Self
    where
        I: IntoIterator<Item = (L, S)>,
        L: Into<String>,
        S: Into<String>,
    {
        let snippets = items
            .into_iter()
            .enumerate()
            .map(|(i, (label, text))| Snippet::new(i + 1, text).with_label(label))
            .collect();
        Self { snippets }
    }

    /// The ten built-in demonstration snippets
    pub fn reference() -> Self {
        Self::from_labeled(REFERENCE_SNIPPETS.iter().copied())
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Lookup by 1-based index
    pub fn get(&self, index: usize) -> Option<&Snippet> {
        index.checked_sub(1).and_then(|i| self.snippets.get(i))
    }

    /// Snippet texts in corpus order (the shape backends consume)
    pub fn texts(&self) -> Vec<String> {
        self.snippets.iter().map(|s| s.text.clone()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snippet> {
        self.snippets.iter()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Snippet;
    type IntoIter = std::slice::Iter<'a, Snippet>;

    fn into_iter(self) -> Self::IntoIter {
        self.snippets.iter()
    }
}
