use crate::util::equals_ignore_case;
use thiserror::Error;

// Origins beyond this size are never matched; nothing legitimate comes close.
const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Configuration for which request origins are permitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// Wildcard marker: any origin is allowed and `*` is echoed back.
    #[default]
    Any,
    /// Explicit pattern list; the first matching entry wins.
    List(Vec<OriginPattern>),
}

/// How a concrete `Origin` value resolved against the configured policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum OriginResolution {
    /// Allowed under the wildcard marker; echo `*`.
    Wildcard,
    /// Allowed by an explicit entry; echo the literal request origin so that
    /// `Vary: Origin` semantics hold downstream.
    Literal(String),
    /// No entry matched.
    Mismatch,
    /// Wildcard marker combined with credentials; never serve `*` here.
    Conflict,
}

/// A single allowed-origin entry: an exact origin string, or an origin with
/// the port position wildcarded. No substring or regex matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OriginPattern {
    Exact(String),
    AnyPort { scheme: String, host: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternParseError {
    #[error("origin pattern is empty")]
    Empty,
    #[error("origin pattern `{0}` is missing a scheme")]
    MissingScheme(String),
    #[error("origin pattern `{0}` is missing a host")]
    MissingHost(String),
    #[error("origin pattern `{0}` wildcards more than the port")]
    UnsupportedWildcard(String),
}

impl OriginPattern {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn any_port<S: Into<String>, H: Into<String>>(scheme: S, host: H) -> Self {
        Self::AnyPort {
            scheme: scheme.into(),
            host: host.into(),
        }
    }

    /// Parse a configuration entry. `https://app.example` matches exactly;
    /// `https://app.example:*` matches that scheme and host on any port.
    pub fn parse(spec: &str) -> Result<Self, PatternParseError> {
        let trimmed = spec.trim();
        if trimmed.is_empty() {
            return Err(PatternParseError::Empty);
        }

        let Some((scheme, rest)) = trimmed.split_once("://") else {
            return Err(PatternParseError::MissingScheme(trimmed.to_string()));
        };
        if scheme.is_empty() {
            return Err(PatternParseError::MissingScheme(trimmed.to_string()));
        }
        if rest.is_empty() {
            return Err(PatternParseError::MissingHost(trimmed.to_string()));
        }

        if let Some(host) = rest.strip_suffix(":*") {
            if host.is_empty() {
                return Err(PatternParseError::MissingHost(trimmed.to_string()));
            }
            if host.contains('*') || scheme.contains('*') {
                return Err(PatternParseError::UnsupportedWildcard(trimmed.to_string()));
            }
            return Ok(Self::AnyPort {
                scheme: scheme.to_string(),
                host: host.to_string(),
            });
        }

        if trimmed.contains('*') {
            return Err(PatternParseError::UnsupportedWildcard(trimmed.to_string()));
        }

        Ok(Self::Exact(trimmed.to_string()))
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            OriginPattern::Exact(value) => equals_ignore_case(value, candidate),
            OriginPattern::AnyPort { scheme, host } => {
                let Some((candidate_scheme, rest)) = candidate.split_once("://") else {
                    return false;
                };
                if !equals_ignore_case(scheme, candidate_scheme) {
                    return false;
                }
                let candidate_host = match rest.rsplit_once(':') {
                    Some((head, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => head,
                    _ => rest,
                };
                equals_ignore_case(host, candidate_host)
            }
        }
    }
}

impl From<String> for OriginPattern {
    fn from(value: String) -> Self {
        OriginPattern::Exact(value)
    }
}

impl From<&str> for OriginPattern {
    fn from(value: &str) -> Self {
        OriginPattern::Exact(value.to_owned())
    }
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginPattern>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Resolve a concrete `Origin` value against this configuration. The
    /// declared order decides which entry matches first; the boolean outcome
    /// does not depend on it.
    pub(crate) fn resolve(&self, origin: &str, credentials: bool) -> OriginResolution {
        if origin.len() > MAX_ORIGIN_LENGTH {
            return OriginResolution::Mismatch;
        }

        match self {
            AllowedOrigins::Any if credentials => OriginResolution::Conflict,
            AllowedOrigins::Any => OriginResolution::Wildcard,
            AllowedOrigins::List(patterns) => {
                if patterns.iter().any(|pattern| pattern.matches(origin)) {
                    OriginResolution::Literal(origin.to_string())
                } else {
                    OriginResolution::Mismatch
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
