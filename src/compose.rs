use crate::constants::header;
use crate::headers::{Header, HeaderCollection};
use crate::origin::OriginResolution;
use crate::policy::Policy;
use crate::util::is_http_token;

/// Builds the response header set for each evaluation outcome. Enforces the
/// credentials/wildcard mutual exclusion by construction: the wildcard echo
/// only exists for credential-less policies.
pub(crate) struct HeaderComposer<'a> {
    policy: &'a Policy,
}

impl<'a> HeaderComposer<'a> {
    pub(crate) fn new(policy: &'a Policy) -> Self {
        Self { policy }
    }

    /// Headers for a matched origin. The decision depends on the request's
    /// `Origin`, so every outcome carries `Vary: Origin`.
    pub(crate) fn origin_headers(&self, resolution: &OriginResolution) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        match resolution {
            OriginResolution::Wildcard => {
                headers.add_vary(header::ORIGIN);
                headers.push(Header::new(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"));
            }
            OriginResolution::Literal(origin) => {
                headers.add_vary(header::ORIGIN);
                headers.push(Header::new(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    origin.clone(),
                ));
            }
            OriginResolution::Mismatch | OriginResolution::Conflict => {}
        }
        headers
    }

    /// `Vary: Origin` for denials under an origin-dependent policy, so shared
    /// caches never replay one origin's denial to another.
    pub(crate) fn denial_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if !self.policy.allowed_origins.is_wildcard() {
            headers.add_vary(header::ORIGIN);
        }
        headers
    }

    pub(crate) fn credentials_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if self.policy.allow_credentials {
            headers.push(Header::new(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true"));
        }
        headers
    }

    pub(crate) fn methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if let Some(value) = self.policy.allowed_methods.header_value() {
            headers.push(Header::new(header::ACCESS_CONTROL_ALLOW_METHODS, value));
        }
        headers
    }

    /// Echo the requested token list back, never the configured allow-list,
    /// so a preflight response does not leak unrelated capabilities.
    pub(crate) fn requested_headers_echo(&self, tokens: &[String]) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
        if !tokens.is_empty() {
            headers.push(Header::new(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                tokens.join(","),
            ));
        }
        headers
    }

    pub(crate) fn exposed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if let Some(value) = self.policy.exposed_headers.header_value() {
            headers.push(Header::new(header::ACCESS_CONTROL_EXPOSE_HEADERS, value));
        }
        headers
    }

    pub(crate) fn max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if let Some(seconds) = self.policy.max_age_seconds {
            headers.push(Header::new(
                header::ACCESS_CONTROL_MAX_AGE,
                seconds.to_string(),
            ));
        }
        headers
    }
}

/// Split an `Access-Control-Request-Headers` value into trimmed tokens,
/// keeping the caller's spelling for the echo. Returns `None` when the list
/// does not parse as HTTP tokens; callers treat that as an empty-deny rather
/// than an error.
pub(crate) fn parse_token_list(raw: &str) -> Option<Vec<String>> {
    if raw.trim().is_empty() {
        return Some(Vec::new());
    }

    let mut tokens = Vec::new();
    for piece in raw.split(',') {
        let token = piece.trim();
        if !is_http_token(token) {
            return None;
        }
        tokens.push(token.to_string());
    }
    Some(tokens)
}

#[cfg(test)]
#[path = "compose_test.rs"]
mod compose_test;
