//! Mock adapters for testing.

mod credentials;
mod http;

pub use credentials::MockTokenProvider;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
