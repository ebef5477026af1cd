use crate::constants::method;
use crate::util::equals_ignore_case;

/// The set of method tokens a preflight may request, in declared order.
///
/// Declared order is preserved because the `Access-Control-Allow-Methods`
/// value mirrors the configuration verbatim.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedMethods {
    values: Vec<String>,
}

impl AllowedMethods {
    /// Construct an explicit list of allowed methods, trimming entries and
    /// dropping case-insensitive duplicates while keeping the first spelling.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for value in values.into_iter() {
            let trimmed = value.into().trim().to_string();
            if trimmed.is_empty() {
                continue;
            }
            if !deduped.iter().any(|seen| equals_ignore_case(seen, &trimmed)) {
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

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Return the comma-joined header value, if any method is declared.
    pub fn header_value(&self) -> Option<String> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values.join(","))
        }
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([
            method::GET,
            method::HEAD,
            method::PUT,
            method::PATCH,
            method::POST,
            method::DELETE,
        ])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
