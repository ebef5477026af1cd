use crate::constants::header;
use crate::util::normalize_lower;
use indexmap::IndexMap;

/// The inbound request as seen by the engine: method token, case-insensitive
/// header multimap, and the raw `Origin` value when one was sent.
///
/// Header names are normalized to lowercase at this ingestion boundary so all
/// later lookups are exact. The transport collaborator builds one descriptor
/// per request; the engine never parses raw bytes.
#[derive(Debug, Clone, Default)]
pub struct RequestDescriptor {
    method: String,
    origin: Option<String>,
    headers: IndexMap<String, Vec<String>>,
}

impl RequestDescriptor {
    pub fn new<M: Into<String>>(method: M) -> Self {
        Self {
            method: method.into(),
            origin: None,
            headers: IndexMap::new(),
        }
    }

    /// Builder-style header insertion; repeated names accumulate values.
    pub fn header<N: AsRef<str>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.insert_header(name, value);
        self
    }

    pub fn insert_header<N: AsRef<str>, V: Into<String>>(&mut self, name: N, value: V) {
        let name = normalize_lower(name.as_ref().trim());
        let value = value.into();
        if name == normalize_lower(header::ORIGIN) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                self.origin = Some(trimmed.to_string());
            }
            return;
        }
        self.headers.entry(name).or_default().push(value);
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// The raw `Origin` header value; absent means not cross-origin.
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Lowercased names of every header other than `Origin`, in insertion order.
    pub fn header_names(&self) -> impl Iterator<Item = &str> {
        self.headers.keys().map(String::as_str)
    }

    /// First value recorded for the given name, case-insensitively.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&normalize_lower(name))
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All recorded values for the given name folded into one comma-separated
    /// string, matching how HTTP combines repeated header lines.
    pub fn combined_value(&self, name: &str) -> Option<String> {
        self.headers
            .get(&normalize_lower(name))
            .filter(|values| !values.is_empty())
            .map(|values| values.join(","))
    }
}

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;
