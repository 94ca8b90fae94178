use crate::record::{Record, tokenize};

/// True if `token` equals one of `words`.
pub fn contains<S: AsRef<str>>(words: &[S], token: &str) -> bool {
    words.iter().any(|word| word.as_ref() == token)
}

/// True if every token in `required` equals some word in `words`.
///
/// Matching is whole-word and case-sensitive; callers upper-case both sides.
/// An empty `required` matches anything.
pub fn matches_all<S: AsRef<str>, T: AsRef<str>>(words: &[S], required: &[T]) -> bool {
    required
        .iter()
        .all(|token| contains(words, token.as_ref()))
}

/// The words a user is looking for, upper-cased and split like names are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    tokens: Vec<String>,
}

impl Query {
    pub fn new(text: &str) -> Self {
        Self {
            tokens: tokenize(&text.to_uppercase()),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// A query with no words (blank or only separators) matches nothing.
    pub fn matches(&self, record: &Record) -> bool {
        !self.is_empty() && matches_all(&record.name_words, &self.tokens)
    }
}
