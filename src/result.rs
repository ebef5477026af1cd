use crate::classify::Classification;
use crate::headers::Headers;

/// The computed outcome for one request: headers to merge into the response
/// plus the verdict for observability. Constructed fresh per request and
/// consumed immediately; never cached.
#[derive(Debug, Clone)]
pub struct Decision {
    pub classification: Classification,
    pub verdict: Verdict,
    pub headers: Headers,
    /// True when the decision is a complete preflight response and no
    /// application handler should run. The transport collaborator still
    /// chooses the status line.
    pub terminal: bool,
}

impl Decision {
    pub fn allowed(&self) -> bool {
        matches!(self.verdict, Verdict::Allowed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allowed,
    /// A normal negotiated outcome, communicated to clients solely through
    /// header absence. The underlying response body is still delivered for
    /// non-preflight requests.
    Denied(DenyReason),
    /// A wildcard origin combined with credentials reached evaluation. This is
    /// a configuration defect: no origin is served until the policy is fixed.
    PolicyConflict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    OriginNotAllowed,
    MethodNotAllowed,
    HeaderNotAllowed,
    /// `Access-Control-Request-Headers` did not parse as a token list.
    MalformedHeaderList,
}
