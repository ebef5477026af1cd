use crate::classify::{Classification, classify};
use crate::compose::{HeaderComposer, parse_token_list};
use crate::constants::header;
use crate::origin::OriginResolution;
use crate::policy::Policy;
use crate::preflight_cache::PreflightCache;
use crate::request::RequestDescriptor;
use crate::result::{Decision, DenyReason, Verdict};
use crate::store::PolicyStore;
use std::time::{Duration, Instant};

/// The cross-origin policy engine: classifies an inbound request, resolves its
/// origin against the active policy, and composes the response header set.
///
/// Evaluation is synchronous, side-effect-free per request, and safe to run
/// concurrently; each call works from one policy snapshot taken up front.
pub struct Engine {
    store: PolicyStore,
    preflight_cache: Option<PreflightCache>,
}

impl Engine {
    pub fn new(store: PolicyStore) -> Self {
        Self {
            store,
            preflight_cache: None,
        }
    }

    /// Engine with the preflight approval cache enabled. Entries are only
    /// written when the active policy sets `max_age_seconds`.
    pub fn with_preflight_cache(store: PolicyStore) -> Self {
        Self {
            store,
            preflight_cache: Some(PreflightCache::new()),
        }
    }

    pub fn store(&self) -> &PolicyStore {
        &self.store
    }

    pub fn preflight_cache(&self) -> Option<&PreflightCache> {
        self.preflight_cache.as_ref()
    }

    pub fn evaluate(&self, request: &RequestDescriptor) -> Decision {
        let policy = self.store.snapshot();
        match classify(request) {
            Classification::NotCrossOrigin => passthrough(),
            Classification::Preflight => self.evaluate_preflight(&policy, request),
            classification @ (Classification::Simple | Classification::ActualAfterPreflight) => {
                self.evaluate_request(&policy, request, classification)
            }
        }
    }

    /// Annotate a simple or actual cross-origin request. The underlying
    /// response body is delivered either way; a denial only withholds the
    /// `Access-Control-*` family.
    fn evaluate_request(
        &self,
        policy: &Policy,
        request: &RequestDescriptor,
        classification: Classification,
    ) -> Decision {
        let Some(origin) = request.origin() else {
            return passthrough();
        };
        let composer = HeaderComposer::new(policy);

        match policy.allowed_origins.resolve(origin, policy.allow_credentials) {
            OriginResolution::Conflict => conflict(classification, false),
            OriginResolution::Mismatch => {
                tracing::debug!(origin, "origin not allowed by policy");
                denial(&composer, classification, DenyReason::OriginNotAllowed, false)
            }
            resolution => {
                let mut headers = composer.origin_headers(&resolution);
                headers.extend(composer.credentials_header());
                headers.extend(composer.exposed_headers());
                Decision {
                    classification,
                    verdict: Verdict::Allowed,
                    headers: headers.into_headers(),
                    terminal: false,
                }
            }
        }
    }

    /// Negotiate a preflight. The decision is terminal: the transport
    /// collaborator answers it directly without running an application handler.
    fn evaluate_preflight(&self, policy: &Policy, request: &RequestDescriptor) -> Decision {
        let Some(origin) = request.origin() else {
            return passthrough();
        };
        let composer = HeaderComposer::new(policy);

        let resolution = match policy.allowed_origins.resolve(origin, policy.allow_credentials) {
            OriginResolution::Conflict => return conflict(Classification::Preflight, true),
            OriginResolution::Mismatch => {
                tracing::debug!(origin, "preflight origin not allowed by policy");
                return denial(
                    &composer,
                    Classification::Preflight,
                    DenyReason::OriginNotAllowed,
                    true,
                );
            }
            resolution => resolution,
        };

        let requested_method = request
            .value(header::ACCESS_CONTROL_REQUEST_METHOD)
            .map(str::trim)
            .unwrap_or_default();

        let raw_tokens = request
            .combined_value(header::ACCESS_CONTROL_REQUEST_HEADERS)
            .unwrap_or_default();
        let Some(tokens) = parse_token_list(&raw_tokens) else {
            tracing::debug!(origin, "unparsable Access-Control-Request-Headers");
            return denial(
                &composer,
                Classification::Preflight,
                DenyReason::MalformedHeaderList,
                true,
            );
        };

        // An unexpired cached approval skips the allow-list scans. Anything
        // else falls through to full evaluation.
        let cache = self.preflight_cache.as_ref().zip(policy.max_age_seconds);
        if let Some((cache, _)) = cache
            && cache.lookup(origin, requested_method, &tokens) == Some(true)
        {
            return approve_preflight(&composer, &resolution, &tokens);
        }

        let method_allowed = policy.allowed_methods.allows(requested_method);
        let headers_allowed = policy
            .allowed_headers
            .allows_all(tokens.iter().map(String::as_str));

        if let Some((cache, max_age)) = cache {
            let expires_at = Instant::now() + Duration::from_secs(u64::from(max_age));
            cache.record(
                origin,
                requested_method,
                &tokens,
                method_allowed && headers_allowed,
                expires_at,
            );
        }

        if !method_allowed {
            tracing::debug!(origin, requested_method, "preflight method not allowed");
            return denial(
                &composer,
                Classification::Preflight,
                DenyReason::MethodNotAllowed,
                true,
            );
        }
        if !headers_allowed {
            tracing::debug!(origin, "preflight request headers not allowed");
            return denial(
                &composer,
                Classification::Preflight,
                DenyReason::HeaderNotAllowed,
                true,
            );
        }

        approve_preflight(&composer, &resolution, &tokens)
    }
}

fn approve_preflight(
    composer: &HeaderComposer<'_>,
    resolution: &OriginResolution,
    tokens: &[String],
) -> Decision {
    let mut headers = composer.origin_headers(resolution);
    headers.extend(composer.credentials_header());
    headers.extend(composer.methods_header());
    headers.extend(composer.requested_headers_echo(tokens));
    headers.extend(composer.max_age_header());
    Decision {
        classification: Classification::Preflight,
        verdict: Verdict::Allowed,
        headers: headers.into_headers(),
        terminal: true,
    }
}

fn passthrough() -> Decision {
    Decision {
        classification: Classification::NotCrossOrigin,
        verdict: Verdict::Allowed,
        headers: Vec::new(),
        terminal: false,
    }
}

fn denial(
    composer: &HeaderComposer<'_>,
    classification: Classification,
    reason: DenyReason,
    terminal: bool,
) -> Decision {
    Decision {
        classification,
        verdict: Verdict::Denied(reason),
        headers: composer.denial_headers().into_headers(),
        terminal,
    }
}

// The store refuses conflicting policies, so reaching this means the defect
// slipped past configuration entirely. Refuse every origin and say so loudly.
fn conflict(classification: Classification, terminal: bool) -> Decision {
    tracing::error!("wildcard origin combined with credentials; refusing to serve any origin");
    Decision {
        classification,
        verdict: Verdict::PolicyConflict,
        headers: Vec::new(),
        terminal,
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;
