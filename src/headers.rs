use crate::constants::header;

/// A single response header as name/value strings, ready for the transport
/// collaborator to merge into the outgoing response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

pub type Headers = Vec<Header>;

/// Accumulates headers while folding repeated `Vary` members into a single
/// deduplicated entry.
#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Vec<Header>,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, header: Header) {
        if header.name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(header.value);
        } else {
            self.headers.push(header);
        }
    }

    pub(crate) fn add_vary<S: Into<String>>(&mut self, value: S) {
        let incoming = value.into();
        let incoming = incoming.trim();
        if incoming.is_empty() {
            return;
        }

        let existing = self
            .headers
            .iter_mut()
            .find(|header| header.name.eq_ignore_ascii_case(header::VARY));

        match existing {
            Some(header) => {
                let already_present = header
                    .value
                    .split(',')
                    .map(str::trim)
                    .any(|member| member.eq_ignore_ascii_case(incoming));
                if !already_present {
                    header.value.push_str(", ");
                    header.value.push_str(incoming);
                }
            }
            None => self
                .headers
                .push(Header::new(header::VARY, incoming.to_string())),
        }
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for header in other.headers {
            self.push(header);
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
