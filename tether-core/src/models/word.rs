//! Words delivered by upstream text preprocessing.

use serde::{Deserialize, Serialize};

/// A single word of a source sentence.
///
/// The lemma is precomputed upstream and is authoritative for lemma-based
/// lookups; the surface text is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Surface text as it appears in the sentence.
    pub text: String,
    /// Precomputed lemma.
    pub lemma: String,
    /// Index of the containing sentence.
    pub sentence: u32,
    /// Position within the sentence.
    pub position: u32,
}

impl Word {
    /// A word whose lemma equals its surface text.
    pub fn new(text: impl Into<String>, sentence: u32, position: u32) -> Self {
        let text = text.into();
        Self {
            lemma: text.clone(),
            text,
            sentence,
            position,
        }
    }

    /// A word with a distinct lemma.
    pub fn with_lemma(
        text: impl Into<String>,
        lemma: impl Into<String>,
        sentence: u32,
        position: u32,
    ) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            sentence,
            position,
        }
    }
}
