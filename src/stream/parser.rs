//! Protocol line parsing.
//!
//! Maps one decoded line to its typed events. The wire format interleaves
//! non-protocol lines (keep-alives, blank separators) with `data: `
//! payloads, so anything without the prefix is ignored rather than treated
//! as an error.

use super::events::{EventPayload, StreamEvent};

/// Prefix marking a protocol event line.
const DATA_PREFIX: &str = "data: ";

/// Parser for the `data: <json>` line protocol.
///
/// Parsing is fail-soft: a payload that fails structural JSON parsing
/// yields no events and never kills the stream. That is a deliberate
/// contract decision, so the parser counts what it skipped and exposes
/// the count through [`EventParser::skipped_payloads`] for observability.
#[derive(Debug, Default)]
pub struct EventParser {
    skipped: u64,
}

impl EventParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one line, returning its events in effect order.
    ///
    /// A single payload may carry several fields at once; effects are
    /// emitted with conversation-id assignment first, then the delta,
    /// then the terminal marker. When both terminal markers are present,
    /// `done` wins over `error`. Empty deltas are dropped.
    pub fn parse_line(&mut self, line: &str) -> Vec<StreamEvent> {
        let Some(data) = line.strip_prefix(DATA_PREFIX) else {
            return Vec::new();
        };

        let payload: EventPayload = match serde_json::from_str(data) {
            Ok(payload) => payload,
            Err(_) => {
                self.skipped += 1;
                return Vec::new();
            }
        };

        let mut events = Vec::new();
        if let Some(conv_id) = payload.conv_id {
            events.push(StreamEvent::ConversationAssigned { conv_id });
        }
        if let Some(delta) = payload.delta {
            if !delta.is_empty() {
                events.push(StreamEvent::Delta { text: delta });
            }
        }
        if payload.done.unwrap_or(false) {
            events.push(StreamEvent::Completed);
        } else if payload.error.unwrap_or(false) {
            let message = payload
                .message
                .unwrap_or_else(|| "Stream error".to_string());
            events.push(StreamEvent::Failed { message });
        }
        events
    }

    /// Number of structurally invalid payloads skipped so far.
    pub fn skipped_payloads(&self) -> u64 {
        self.skipped
    }
}
