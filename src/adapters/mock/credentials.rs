//! Mock token provider for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::traits::TokenProvider;

/// Token provider with a settable token and a fetch counter.
///
/// The counter lets tests assert that the transport fetches a fresh token
/// per invocation rather than caching one.
#[derive(Debug, Clone, Default)]
pub struct MockTokenProvider {
    token: Arc<Mutex<Option<String>>>,
    fetches: Arc<AtomicU64>,
}

impl MockTokenProvider {
    /// Provider that starts with no token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider that starts with the given token.
    pub fn with_token(token: impl Into<String>) -> Self {
        let provider = Self::new();
        provider.set_token(Some(token.into()));
        provider
    }

    /// Replace the current token.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.lock().unwrap() = token;
    }

    /// How many times `token()` has been called.
    pub fn fetch_count(&self) -> u64 {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenProvider for MockTokenProvider {
    async fn token(&self) -> Option<String> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.token.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_token_and_fetch_count() {
        let provider = MockTokenProvider::with_token("t1");
        assert_eq!(provider.token().await.as_deref(), Some("t1"));
        provider.set_token(None);
        assert_eq!(provider.token().await, None);
        assert_eq!(provider.fetch_count(), 2);
    }
}
