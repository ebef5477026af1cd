pub mod constants;

mod allowed_headers;
mod allowed_methods;
mod classify;
mod compose;
mod engine;
mod exposed_headers;
mod headers;
mod origin;
mod policy;
mod preflight_cache;
mod request;
mod result;
mod store;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use classify::{Classification, classify};
pub use engine::Engine;
pub use exposed_headers::ExposedHeaders;
pub use headers::{Header, Headers};
pub use origin::{AllowedOrigins, OriginPattern, PatternParseError};
pub use policy::{Policy, PolicyError};
pub use preflight_cache::PreflightCache;
pub use request::RequestDescriptor;
pub use result::{Decision, DenyReason, Verdict};
pub use store::PolicyStore;
