//! Streaming generation pipeline.
//!
//! Data flows transport -> frame decoder -> event parser -> event
//! dispatcher; control flows from the cancellation token back into the
//! transport's read loop.
//!
//! # Module structure
//! - `decoder` - [`FrameDecoder`], raw byte chunks to complete lines
//! - `events` - [`StreamEvent`] and the wire payload
//! - `parser` - [`EventParser`], one protocol line to typed events
//! - `dispatch` - [`EventDispatcher`], callback routing with terminal-once
//!   enforcement
//! - `cancel` - [`CancelToken`] and [`StreamHandle`]
//! - `transport` - the spawned read loop

mod cancel;
mod decoder;
mod dispatch;
mod events;
mod parser;
pub(crate) mod transport;

pub use cancel::{CancelToken, StreamHandle};
pub use decoder::FrameDecoder;
pub use dispatch::EventDispatcher;
pub use events::StreamEvent;
pub use parser::EventParser;
