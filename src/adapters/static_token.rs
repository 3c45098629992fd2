//! Fixed-token credential provider.

use async_trait::async_trait;

use crate::traits::TokenProvider;

/// Token provider that always returns the same (possibly absent) token.
///
/// Useful for deployments with a long-lived API key and as the default
/// provider for unauthenticated use. Anything that refreshes or expires
/// belongs in a caller-supplied [`TokenProvider`] implementation.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    /// Provider that yields the given token on every request.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Provider that yields no token - requests go out unauthenticated.
    pub fn unauthenticated() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn token(&self) -> Option<String> {
        self.token.clone()
    }
}
