//! Client for the Vaelis backend generation API.
//!
//! [`VaelisClient`] owns the base URL plus the injected HTTP client and
//! token provider, and exposes the two generation paths: a buffered
//! request/response call and the streaming pipeline.

use std::sync::Arc;

use crate::adapters::{ReqwestHttpClient, StaticTokenProvider};
use crate::error::ClientError;
use crate::models::GenerateRequest;
use crate::stream::transport;
use crate::stream::{CancelToken, EventDispatcher, StreamHandle};
use crate::traits::{HttpClient, StreamHandler, TokenProvider};

/// Client for the Vaelis backend API.
pub struct VaelisClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
    tokens: Arc<dyn TokenProvider>,
}

impl VaelisClient {
    /// Create a client with the production HTTP adapter and no
    /// authentication.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Arc::new(ReqwestHttpClient::new()),
            tokens: Arc::new(StaticTokenProvider::unauthenticated()),
        }
    }

    /// Replace the HTTP client (dependency injection for tests or custom
    /// transports).
    pub fn with_http_client(mut self, http: Arc<dyn HttpClient>) -> Self {
        self.http = http;
        self
    }

    /// Replace the token provider.
    pub fn with_token_provider(mut self, tokens: Arc<dyn TokenProvider>) -> Self {
        self.tokens = tokens;
        self
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a non-streaming generation request.
    ///
    /// POSTs to `/ai/generate` and returns the parsed JSON body. A
    /// non-success status surfaces as [`ClientError::Server`].
    pub async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<serde_json::Value, ClientError> {
        let url = format!("{}/ai/generate", self.base_url);
        let headers = transport::request_headers(self.tokens.as_ref(), false).await;
        let body = serde_json::to_string(request)?;

        let response = self.http.post(&url, &body, &headers).await?;
        if !response.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "Request failed".to_string());
            return Err(ClientError::Server {
                status: response.status,
                message,
            });
        }
        Ok(response.json()?)
    }

    /// Open a streaming generation request.
    ///
    /// Returns immediately with a [`StreamHandle`]; the read loop runs as
    /// an independent task that feeds the `handler` and fires exactly one
    /// terminal callback. Must be called within a tokio runtime.
    ///
    /// Concurrent streams are independent: each gets its own decoder,
    /// parser, dispatcher, and cancellation token.
    pub fn stream_generate<H: StreamHandler>(
        &self,
        request: &GenerateRequest,
        handler: H,
    ) -> StreamHandle {
        let token = CancelToken::new();
        let cancel = token.clone();
        let url = format!("{}/ai/stream", self.base_url);
        let http = Arc::clone(&self.http);
        let tokens = Arc::clone(&self.tokens);
        let body = serde_json::to_string(request);

        let task = tokio::spawn(async move {
            match body {
                Ok(body) => {
                    transport::run_stream(http, tokens, url, body, handler, cancel).await;
                }
                Err(e) => {
                    // Request encoding cannot normally fail for these
                    // types; report through the usual terminal path.
                    let mut dispatcher = EventDispatcher::new(handler);
                    dispatcher.fail(&format!("Failed to encode request: {}", e));
                }
            }
        });

        StreamHandle::new(token, task)
    }
}
