use crate::constants::{header, method, safelist};
use crate::request::RequestDescriptor;
use crate::util::normalize_lower;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// What kind of cross-origin traffic a request represents. Derived purely from
/// the method, header set, and `Origin` presence; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// No `Origin` header; the engine stays out of the way entirely.
    NotCrossOrigin,
    /// Exempt from preflight under the safelisted method/header/content-type rules.
    Simple,
    /// An `OPTIONS` probe carrying `Access-Control-Request-Method`.
    Preflight,
    /// A cross-origin request that required, or should have required, a prior
    /// preflight.
    ActualAfterPreflight,
}

static SAFELISTED_HEADERS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| safelist::REQUEST_HEADERS.into_iter().collect());

static SIMPLE_CONTENT_TYPES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| safelist::CONTENT_TYPES.into_iter().collect());

/// Classify an inbound request. Pure function: identical requests always yield
/// identical classifications.
pub fn classify(request: &RequestDescriptor) -> Classification {
    if request.origin().is_none() {
        return Classification::NotCrossOrigin;
    }

    if request.method().eq_ignore_ascii_case(method::OPTIONS)
        && request
            .value(header::ACCESS_CONTROL_REQUEST_METHOD)
            .is_some_and(|value| !value.trim().is_empty())
    {
        return Classification::Preflight;
    }

    if is_simple(request) {
        Classification::Simple
    } else {
        Classification::ActualAfterPreflight
    }
}

fn is_simple(request: &RequestDescriptor) -> bool {
    if !safelist::METHODS
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(request.method()))
    {
        return false;
    }

    // Descriptor names are already lowercase.
    for name in request.header_names() {
        if !SAFELISTED_HEADERS.contains(name) {
            return false;
        }
    }

    // An unlisted Content-Type value demotes the request even when the
    // method and header names qualify.
    if let Some(content_type) = request.value(header::CONTENT_TYPE) {
        let essence = content_type.split(';').next().unwrap_or(content_type);
        if !SIMPLE_CONTENT_TYPES.contains(normalize_lower(essence.trim()).as_str()) {
            return false;
        }
    }

    true
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;
