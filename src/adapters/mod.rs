//! Adapter implementations of the trait abstractions.
//!
//! Production adapters wrap real transports (reqwest); the mock module
//! provides configurable fakes for testing.

pub mod mock;
pub mod reqwest_http;

pub use reqwest_http::ReqwestHttpClient;
