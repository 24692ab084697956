//! Query normalization: raw user text into a tokenized AND-query.

use serde::{Deserialize, Serialize};

/// A normalized query: lowercase prefix terms combined with AND semantics.
///
/// Produced only by [`normalize`] and consumed only by
/// [`DocumentStore::query_ranked`](crate::store::DocumentStore::query_ranked).
/// A document matches when every term is a prefix of at least one of its
/// words, so the term `"hal"` matches `"haaland"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenQuery {
    terms: Vec<String>,
}

impl TokenQuery {
    /// The prefix terms, all lowercase, all nonempty.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// Normalizes raw user text into a [`TokenQuery`].
///
/// Trims the input, replaces every character that is not alphanumeric or
/// whitespace with a space, splits on whitespace, and lowercases the surviving
/// tokens. Returns `None` when no tokens remain; callers treat that as an
/// empty result, not an error. No minimum token length is enforced, so a
/// single-character query is legal and executed.
pub fn normalize(raw_query: &str) -> Option<TokenQuery> {
    let cleaned: String = raw_query
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c.is_whitespace() { c } else { ' ' })
        .collect();

    let terms: Vec<String> = cleaned
        .split_whitespace()
        .map(|token| token.to_lowercase())
        .collect();

    if terms.is_empty() {
        None
    } else {
        Some(TokenQuery { terms })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_lowercases() {
        let query = normalize("  Erling Haaland ").unwrap();
        assert_eq!(query.terms(), ["erling", "haaland"]);
    }

    #[test]
    fn punctuation_becomes_a_separator() {
        let query = normalize("N'Golo Kanté").unwrap();
        assert_eq!(query.terms(), ["n", "golo", "kanté"]);
    }

    #[test]
    fn empty_and_punctuation_only_yield_no_tokens() {
        assert!(normalize("").is_none());
        assert!(normalize("   ").is_none());
        assert!(normalize("!!! ---").is_none());
    }

    #[test]
    fn single_character_query_is_legal() {
        let query = normalize("h").unwrap();
        assert_eq!(query.terms(), ["h"]);
    }

    #[test]
    fn digits_survive() {
        let query = normalize("Schalke 04").unwrap();
        assert_eq!(query.terms(), ["schalke", "04"]);
    }
}
