//! Cooperative stream cancellation.
//!
//! The token is shared between the caller-facing [`StreamHandle`] and the
//! transport's read loop. `stop()` is idempotent and irrevocable: the
//! first call sets the flag and wakes the loop; later calls are no-ops.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;
use tokio::task::JoinHandle;

#[derive(Debug, Default)]
struct Inner {
    cancelled: AtomicBool,
    notify: Notify,
}

/// Shared cancellation token observed by the transport between reads.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<Inner>,
}

impl CancelToken {
    /// Create a fresh, unset token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn stop(&self) {
        if !self.inner.cancelled.swap(true, Ordering::SeqCst) {
            // notify_one stores a permit, so a loop that selects after
            // this call still observes the wakeup.
            self.inner.notify.notify_one();
        }
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Resolve once cancellation is requested.
    ///
    /// Used by the transport to race an in-flight read against `stop()`.
    pub async fn cancelled(&self) {
        if self.is_cancelled() {
            return;
        }
        self.inner.notify.notified().await;
    }
}

/// Handle to a running stream instance.
///
/// Returned immediately by `stream_generate`; the read loop runs as an
/// independent task the caller does not block on.
#[derive(Debug)]
pub struct StreamHandle {
    token: CancelToken,
    task: JoinHandle<()>,
}

impl StreamHandle {
    pub(crate) fn new(token: CancelToken, task: JoinHandle<()>) -> Self {
        Self { token, task }
    }

    /// Stop the stream. Safe to call repeatedly.
    ///
    /// The terminal callback still fires exactly once (the cancelled
    /// outcome, unless the stream already terminated).
    pub fn stop(&self) {
        self.token.stop();
    }

    /// A clone of the underlying cancellation token.
    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Whether the read loop has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the read loop to exit.
    pub async fn wait(self) {
        // The task never panics; a JoinError can only be a cancellation
        // of the runtime itself, which there is nothing left to do about.
        let _ = self.task.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_starts_unset() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
    }

    #[test]
    fn test_stop_is_idempotent() {
        let token = CancelToken::new();
        token.stop();
        token.stop();
        token.stop();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_clones_share_state() {
        let token = CancelToken::new();
        let clone = token.clone();
        clone.stop();
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_resolves_immediately_when_set() {
        let token = CancelToken::new();
        token.stop();
        token.cancelled().await;
    }

    #[tokio::test]
    async fn test_cancelled_wakes_waiter() {
        let token = CancelToken::new();
        let waiter = token.clone();
        let task = tokio::spawn(async move { waiter.cancelled().await });
        tokio::task::yield_now().await;
        token.stop();
        task.await.unwrap();
    }

    #[tokio::test]
    async fn test_stop_before_wait_is_not_lost() {
        let token = CancelToken::new();
        // stop() before anyone awaits; the stored permit must not be lost
        token.stop();
        let waiter = token.clone();
        tokio::time::timeout(std::time::Duration::from_secs(1), waiter.cancelled())
            .await
            .expect("cancelled() should resolve");
    }
}
