//! Event routing with terminal-outcome enforcement.

use crate::traits::StreamHandler;

use super::events::StreamEvent;

/// Routes parsed events to the caller's [`StreamHandler`] in arrival order.
///
/// The dispatcher owns the two per-stream invariants: the terminal
/// callbacks are mutually exclusive and fire at most once, and the
/// conversation id is assigned at most once (first one wins). After a
/// terminal callback the dispatcher is inert; further events are dropped.
#[derive(Debug)]
pub struct EventDispatcher<H: StreamHandler> {
    handler: H,
    conv_assigned: bool,
    terminal: bool,
}

impl<H: StreamHandler> EventDispatcher<H> {
    /// Wrap a handler.
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            conv_assigned: false,
            terminal: false,
        }
    }

    /// Route one parsed event.
    pub fn dispatch(&mut self, event: StreamEvent) {
        if self.terminal {
            return;
        }
        match event {
            StreamEvent::ConversationAssigned { conv_id } => {
                if self.conv_assigned {
                    tracing::debug!(conv_id, "dropping duplicate conversation id");
                    return;
                }
                self.conv_assigned = true;
                self.handler.on_conversation_assigned(conv_id);
            }
            StreamEvent::Delta { text } => self.handler.on_delta(&text),
            StreamEvent::Completed => {
                self.terminal = true;
                self.handler.on_done();
            }
            StreamEvent::Failed { message } => {
                self.terminal = true;
                self.handler.on_error(&message);
            }
        }
    }

    /// Terminate with the done callback (natural end of input).
    pub fn finish(&mut self) {
        if self.terminal {
            return;
        }
        self.terminal = true;
        self.handler.on_done();
    }

    /// Terminate with the error callback (transport failure).
    pub fn fail(&mut self, message: &str) {
        if self.terminal {
            return;
        }
        self.terminal = true;
        self.handler.on_error(message);
    }

    /// Terminate with the cancelled callback (caller-initiated stop).
    pub fn cancel(&mut self) {
        if self.terminal {
            return;
        }
        self.terminal = true;
        self.handler.on_cancelled();
    }

    /// Whether a terminal callback has fired.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
}
