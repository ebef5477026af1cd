use crate::util::{equals_ignore_case, normalize_lower};
use std::collections::HashSet;

/// The header-name allow-list consulted during preflight negotiation.
///
/// Membership is case-insensitive; the configured spelling is retained only
/// for configuration round-tripping and never echoed to clients, which always
/// receive back their own requested token list.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct AllowedHeaders {
    values: Vec<String>,
}

impl AllowedHeaders {
    /// Builds the allow-list from the provided iterator, trimming whitespace
    /// and removing case-insensitive duplicates.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();
        for value in values.into_iter() {
            let trimmed = value.into().trim().to_string();
            if trimmed.is_empty() {
                continue;
            }
            if seen.insert(normalize_lower(&trimmed)) {
                deduped.push(trimmed);
            }
        }

        Self { values: deduped }
    }

    pub fn allows(&self, candidate: &str) -> bool {
        self.values
            .iter()
            .any(|value| equals_ignore_case(value, candidate))
    }

    /// True when every requested token is covered by the allow-list.
    pub fn allows_all<'a, I>(&self, tokens: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens.into_iter().all(|token| self.allows(token))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
