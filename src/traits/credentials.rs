//! Credential provider trait abstraction.
//!
//! The backend accepts unauthenticated requests, so the provider is
//! fail-soft: any failure to obtain a token must surface as `None`, never
//! as an error the stream consumer has to handle.

use async_trait::async_trait;

/// Trait for obtaining a bearer token for outgoing requests.
///
/// The transport calls [`TokenProvider::token`] once per request and never
/// caches the result across invocations, since tokens expire.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Fetch the current bearer token, if one is available.
    ///
    /// Returning `None` means the request goes out unauthenticated, which
    /// is a valid state. Implementations must swallow their own failures.
    async fn token(&self) -> Option<String>;
}
