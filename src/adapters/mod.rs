//! Concrete implementations of the trait seams.
//!
//! Production adapters plus mock implementations used by the test suite.

pub mod mock;
mod reqwest_http;
mod static_token;

pub use reqwest_http::ReqwestHttpClient;
pub use static_token::StaticTokenProvider;
