//! Vaelis client - async client for the Vaelis AI workspace backend.
//!
//! The crate centers on the streaming generation pipeline: a long-lived
//! POST whose response body carries a line-oriented `data: <json>` protocol,
//! decoded incrementally and dispatched to a caller-supplied
//! [`StreamHandler`]. A non-streaming [`VaelisClient::generate`] call and
//! the [`Conversation`] state reducer round out the surface.

pub mod adapters;
pub mod client;
pub mod conversation;
pub mod error;
pub mod models;
pub mod stream;
pub mod traits;

pub use client::VaelisClient;
pub use conversation::{Conversation, Role, Turn};
pub use error::ClientError;
pub use models::{GenerateMode, GenerateRequest};
pub use stream::{
    CancelToken, EventDispatcher, EventParser, FrameDecoder, StreamEvent, StreamHandle,
};
pub use traits::StreamHandler;
