//! Conversation state reducer.
//!
//! Consumer-side state machine over an ordered turn list. Each streaming
//! episode is a transient sub-state: `submit` opens an in-progress
//! assistant turn, deltas replace its content while chunks arrive, and
//! `finalize` closes it. The reducer holds an explicit index of the
//! current in-progress turn, so at most one assistant turn is ever
//! in progress by construction.

use serde::{Deserialize, Serialize};

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One conversational entry.
///
/// User turn content is immutable once appended; assistant content is
/// mutable while the turn is in progress and frozen by `finalize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Identity, monotonically assigned, unique within the conversation.
    pub id: u64,
    pub role: Role,
    pub content: String,
    /// True for the assistant turn currently receiving deltas.
    pub in_progress: bool,
}

/// Ordered turn list plus the backend-issued conversation identifier.
#[derive(Debug, Default)]
pub struct Conversation {
    turns: Vec<Turn>,
    next_turn_id: u64,
    conv_id: Option<u64>,
    /// Index of the in-progress assistant turn, if a streaming episode
    /// is active. Set by `submit`, cleared by `finalize`.
    active: Option<usize>,
}

impl Conversation {
    /// Create an empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a new user prompt: append the finalized user turn and the
    /// empty in-progress assistant placeholder that deltas will fill.
    ///
    /// Submission policy (no new prompt while a response is streaming)
    /// belongs to the caller. If a stale in-progress turn somehow exists
    /// it is finalized first, keeping the single-in-progress invariant.
    pub fn submit(&mut self, prompt: &str) {
        if self.active.is_some() {
            self.finalize();
        }

        let user_id = self.next_id();
        self.turns.push(Turn {
            id: user_id,
            role: Role::User,
            content: prompt.to_string(),
            in_progress: false,
        });

        let assistant_id = self.next_id();
        self.turns.push(Turn {
            id: assistant_id,
            role: Role::Assistant,
            content: String::new(),
            in_progress: true,
        });
        self.active = Some(self.turns.len() - 1);
    }

    /// Replace the in-progress assistant turn's content.
    ///
    /// The protocol delivers cumulative snapshots, not diffs, so this is
    /// full replacement, never append. No-op when no turn is in progress.
    pub fn apply_delta(&mut self, text: &str) {
        if let Some(index) = self.active {
            self.turns[index].content = text.to_string();
        }
    }

    /// Close the current streaming episode. Idempotent.
    pub fn finalize(&mut self) {
        for turn in &mut self.turns {
            if turn.role == Role::Assistant {
                turn.in_progress = false;
            }
        }
        self.active = None;
    }

    /// Record the backend conversation id. First assignment wins;
    /// the id is immutable thereafter.
    pub fn assign_conv_id(&mut self, conv_id: u64) {
        if self.conv_id.is_none() {
            self.conv_id = Some(conv_id);
        }
    }

    /// The backend conversation id, once assigned.
    pub fn conv_id(&self) -> Option<u64> {
        self.conv_id
    }

    /// Whether an assistant turn is currently receiving deltas.
    pub fn is_streaming(&self) -> bool {
        self.active.is_some()
    }

    /// The ordered turn list.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_turn_id;
        self.next_turn_id += 1;
        id
    }
}
