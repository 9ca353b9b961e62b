//! Mock adapters for testing.
//!
//! These provide configurable fake implementations of the trait
//! abstractions so tests can run without network access.

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
