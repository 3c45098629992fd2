//! Request types for the generation endpoints.

use serde::{Deserialize, Serialize};

/// Generation mode selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerateMode {
    #[default]
    Chat,
    Think,
    Study,
    Code,
    Document,
}

/// Request body for both the streaming and non-streaming generation
/// endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateRequest {
    /// The prompt to send
    pub prompt: String,
    /// Generation mode
    pub mode: GenerateMode,
    /// Whether the backend should augment the prompt with web search
    pub use_search: bool,
    /// Existing conversation to continue - None starts a new one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conv_id: Option<u64>,
}

impl GenerateRequest {
    /// Create a request that starts a new conversation in chat mode.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            mode: GenerateMode::default(),
            use_search: false,
            conv_id: None,
        }
    }

    /// Set the generation mode.
    pub fn with_mode(mut self, mode: GenerateMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable web search augmentation.
    pub fn with_search(mut self, use_search: bool) -> Self {
        self.use_search = use_search;
        self
    }

    /// Continue an existing conversation.
    pub fn with_conv_id(mut self, conv_id: u64) -> Self {
        self.conv_id = Some(conv_id);
        self
    }
}
