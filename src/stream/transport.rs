//! The streaming read loop.
//!
//! Spawned as an independent task by `VaelisClient::stream_generate`.
//! Owns one long-lived response body at a time and drives the
//! decoder -> parser -> dispatcher chain until a terminal condition:
//! a terminal event on the wire, natural end of input, a transport
//! failure, or caller cancellation. Every path resolves to exactly one
//! terminal callback; nothing escapes the task.

use std::sync::Arc;

use futures_util::StreamExt;

use crate::traits::{Headers, HttpClient, StreamHandler, TokenProvider};

use super::cancel::CancelToken;
use super::decoder::FrameDecoder;
use super::dispatch::EventDispatcher;
use super::parser::EventParser;

/// Build the headers for a generation request.
///
/// The bearer token is fetched fresh on every invocation and never cached
/// here, since tokens expire. An absent token is a valid state: the
/// request simply goes out unauthenticated.
pub(crate) async fn request_headers(tokens: &dyn TokenProvider, streaming: bool) -> Headers {
    let mut headers = Headers::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    if streaming {
        headers.insert("Accept".to_string(), "text/event-stream".to_string());
    }
    if let Some(token) = tokens.token().await {
        headers.insert("Authorization".to_string(), format!("Bearer {}", token));
    }
    headers
}

/// Run one stream instance to completion.
pub(crate) async fn run_stream<H: StreamHandler>(
    http: Arc<dyn HttpClient>,
    tokens: Arc<dyn TokenProvider>,
    url: String,
    body: String,
    handler: H,
    cancel: CancelToken,
) {
    let mut dispatcher = EventDispatcher::new(handler);

    let headers = request_headers(tokens.as_ref(), true).await;

    tracing::debug!(%url, "opening generation stream");
    let mut stream = match http.post_stream(&url, &body, &headers).await {
        Ok(stream) => stream,
        Err(e) => {
            tracing::debug!(error = %e, "stream request failed");
            dispatcher.fail(&e.to_string());
            return;
        }
    };

    let mut decoder = FrameDecoder::new();
    let mut parser = EventParser::new();

    'read: loop {
        if cancel.is_cancelled() {
            break 'read;
        }

        let next = tokio::select! {
            biased;
            _ = cancel.cancelled() => break 'read,
            next = stream.next() => next,
        };

        match next {
            Some(Ok(chunk)) => {
                for line in decoder.feed(&chunk) {
                    for event in parser.parse_line(&line) {
                        dispatcher.dispatch(event);
                    }
                    if dispatcher.is_terminal() {
                        // Terminal event on the wire: stop reading now
                        // rather than waiting for end of input.
                        break 'read;
                    }
                }
            }
            Some(Err(e)) => {
                tracing::debug!(error = %e, "stream read failed");
                dispatcher.fail(&e.to_string());
                break 'read;
            }
            None => {
                if let Some(tail) = decoder.flush() {
                    tracing::debug!(
                        len = tail.len(),
                        "discarding unterminated trailing fragment"
                    );
                }
                // Silent stream closure counts as success.
                dispatcher.finish();
                break 'read;
            }
        }
    }

    // Dropping the body stream is the best-effort release of the read
    // resource; the connection is aborted on drop.
    drop(stream);

    if parser.skipped_payloads() > 0 {
        tracing::debug!(
            skipped = parser.skipped_payloads(),
            "skipped malformed payloads"
        );
    }

    // No-op unless the loop exited through a cancellation branch.
    dispatcher.cancel();
    tracing::debug!(%url, "generation stream closed");
}
