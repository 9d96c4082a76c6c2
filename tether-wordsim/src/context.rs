//! Comparison context resolving the terms a measure actually sees.

use tether_core::Word;

/// The two sides of one similarity comparison.
///
/// Holds the raw strings plus, when available, the rich word forms. Term
/// resolution prefers the word's lemma when `lemmatize` is set; otherwise
/// the raw string wins. Contexts borrow their inputs and are built per
/// comparison, so constructing one is free of allocation.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonContext<'a> {
    first: &'a str,
    second: &'a str,
    first_word: Option<&'a Word>,
    second_word: Option<&'a Word>,
    lemmatize: bool,
}

impl<'a> ComparisonContext<'a> {
    /// Context over two plain strings.
    pub fn of(first: &'a str, second: &'a str) -> Self {
        Self {
            first,
            second,
            first_word: None,
            second_word: None,
            lemmatize: false,
        }
    }

    /// Context over two rich words.
    pub fn of_words(first: &'a Word, second: &'a Word, lemmatize: bool) -> Self {
        Self {
            first: &first.text,
            second: &second.text,
            first_word: Some(first),
            second_word: Some(second),
            lemmatize,
        }
    }

    /// Context pairing a plain string with a rich word.
    pub fn of_mixed(first: &'a str, second: &'a Word, lemmatize: bool) -> Self {
        Self {
            first,
            second: &second.text,
            first_word: None,
            second_word: Some(second),
            lemmatize,
        }
    }

    /// The first term as measures should see it.
    pub fn first_term(&self) -> &'a str {
        Self::resolve(self.first, self.first_word, self.lemmatize)
    }

    /// The second term as measures should see it.
    pub fn second_term(&self) -> &'a str {
        Self::resolve(self.second, self.second_word, self.lemmatize)
    }

    pub fn lemmatize(&self) -> bool {
        self.lemmatize
    }

    fn resolve(text: &'a str, word: Option<&'a Word>, lemmatize: bool) -> &'a str {
        match word {
            Some(w) if lemmatize => &w.lemma,
            _ => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_strings_pass_through() {
        let ctx = ComparisonContext::of("alpha", "beta");
        assert_eq!(ctx.first_term(), "alpha");
        assert_eq!(ctx.second_term(), "beta");
        assert!(!ctx.lemmatize());
    }

    #[test]
    fn test_lemmatize_prefers_lemma() {
        let first = Word::with_lemma("services", "service", 0, 0);
        let second = Word::with_lemma("running", "run", 0, 1);
        let ctx = ComparisonContext::of_words(&first, &second, true);
        assert_eq!(ctx.first_term(), "service");
        assert_eq!(ctx.second_term(), "run");
    }

    #[test]
    fn test_without_lemmatize_uses_surface_text() {
        let first = Word::with_lemma("services", "service", 0, 0);
        let second = Word::with_lemma("running", "run", 0, 1);
        let ctx = ComparisonContext::of_words(&first, &second, false);
        assert_eq!(ctx.first_term(), "services");
        assert_eq!(ctx.second_term(), "running");
    }

    #[test]
    fn test_mixed_keeps_string_side_raw() {
        let word = Word::with_lemma("parsers", "parser", 0, 0);
        let ctx = ComparisonContext::of_mixed("storage", &word, true);
        assert_eq!(ctx.first_term(), "storage");
        assert_eq!(ctx.second_term(), "parser");
    }
}
