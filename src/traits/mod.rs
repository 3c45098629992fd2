//! Trait abstractions for external collaborators.
//!
//! The client depends on seams rather than concrete implementations:
//! [`HttpClient`] for the request issuer, [`TokenProvider`] for the
//! credential source, and [`StreamHandler`] for the consumer of streamed
//! events. Production adapters live in `crate::adapters`; mock
//! implementations for tests live in `crate::adapters::mock`.

mod credentials;
mod handler;
mod http;

pub use credentials::TokenProvider;
pub use handler::StreamHandler;
pub use http::{ByteStream, Headers, HttpClient, HttpError, Response};
