use crate::policy::{Policy, PolicyError};
use arc_swap::ArcSwap;
use std::sync::Arc;

/// Owns the active [`Policy`] and swaps it atomically on reload.
///
/// Readers take a whole-policy `Arc` snapshot per evaluation, so a concurrent
/// reload can never produce a half-old/half-new origin list. A policy that
/// fails validation is rejected here, before it can serve a single request;
/// on a rejected reload the previous policy stays active.
#[derive(Debug)]
pub struct PolicyStore {
    current: ArcSwap<Policy>,
}

impl PolicyStore {
    pub fn new(policy: Policy) -> Result<Self, PolicyError> {
        if let Err(error) = policy.validate() {
            tracing::error!(%error, "rejecting cross-origin policy");
            return Err(error);
        }
        Ok(Self {
            current: ArcSwap::from_pointee(policy),
        })
    }

    // Bypasses validation so the per-request conflict defense can be exercised.
    #[cfg(test)]
    pub(crate) fn new_unchecked(policy: Policy) -> Self {
        Self {
            current: ArcSwap::from_pointee(policy),
        }
    }

    /// The policy snapshot to use for one complete evaluation.
    pub fn snapshot(&self) -> Arc<Policy> {
        self.current.load_full()
    }

    pub fn reload(&self, policy: Policy) -> Result<(), PolicyError> {
        if let Err(error) = policy.validate() {
            tracing::error!(%error, "rejecting policy reload; previous policy stays active");
            return Err(error);
        }
        self.current.store(Arc::new(policy));
        tracing::info!("cross-origin policy replaced");
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;
