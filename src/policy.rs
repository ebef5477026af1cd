use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::AllowedOrigins;
use thiserror::Error;

/// The configured cross-origin access rules. Immutable per evaluation; swap
/// the whole object through [`PolicyStore`](crate::PolicyStore) to reload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Policy {
    pub allowed_origins: AllowedOrigins,
    pub allowed_methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub allow_credentials: bool,
    pub max_age_seconds: Option<u32>,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            allowed_origins: AllowedOrigins::Any,
            allowed_methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            exposed_headers: ExposedHeaders::default(),
            allow_credentials: false,
            max_age_seconds: None,
        }
    }
}

/// Configuration defects. Distinguished from ordinary denials: a policy that
/// fails validation must not serve any origin.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error(
        "a wildcard origin cannot be combined with credentials; list the allowed origins explicitly"
    )]
    CredentialsWithWildcardOrigin,
}

impl Policy {
    /// Check the policy for internal conflicts. Called by the store on every
    /// load and reload so a defective policy is caught before it can serve
    /// requests; the evaluation path still defends against it independently.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.allow_credentials && self.allowed_origins.is_wildcard() {
            return Err(PolicyError::CredentialsWithWildcardOrigin);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
