//! Stream handler trait - the consumer side of the streaming pipeline.

/// Callback set invoked by the event dispatcher as a stream progresses.
///
/// Exactly one of the terminal callbacks (`on_done`, `on_error`,
/// `on_cancelled`) fires per stream instance; after it, no further
/// callbacks are invoked. `on_conversation_assigned` fires at most once.
///
/// `on_cancelled` defaults to delegating to [`StreamHandler::on_done`], so
/// handlers that do not care about the distinction see a cancelled stream
/// as a finished one. Override it to render cancellation differently.
pub trait StreamHandler: Send + 'static {
    /// The backend assigned a conversation identifier to this exchange.
    fn on_conversation_assigned(&mut self, conv_id: u64) {
        let _ = conv_id;
    }

    /// A cumulative snapshot of the assistant text so far.
    fn on_delta(&mut self, text: &str) {
        let _ = text;
    }

    /// The stream completed normally.
    fn on_done(&mut self);

    /// The stream failed, either server-reported or at the transport.
    fn on_error(&mut self, message: &str);

    /// The stream was stopped by the caller before completion.
    fn on_cancelled(&mut self) {
        self.on_done();
    }
}
