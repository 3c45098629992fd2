//! Typed stream events and the wire payload they are parsed from.

use serde::Deserialize;

/// Typed events produced by the streaming generation endpoint.
///
/// Exactly one `Completed` or `Failed` occurs per stream; the dispatcher
/// drops anything parsed after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// The backend assigned a conversation identifier.
    ConversationAssigned { conv_id: u64 },
    /// Cumulative snapshot of the assistant text so far.
    Delta { text: String },
    /// The backend reported normal completion.
    Completed,
    /// The backend reported an error.
    Failed { message: String },
}

/// Wire payload carried after the `data: ` prefix.
///
/// All fields are optional; a single payload may combine a conversation
/// id with a delta or a terminal marker.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct EventPayload {
    #[serde(default)]
    pub conv_id: Option<u64>,
    #[serde(default)]
    pub delta: Option<String>,
    #[serde(default)]
    pub done: Option<bool>,
    #[serde(default)]
    pub error: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}
