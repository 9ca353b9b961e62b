//! Trait abstractions for external collaborators.
//!
//! These traits enable dependency injection and mocking in tests.

pub mod http;

pub use http::{Headers, HttpClient, HttpError, MultipartFile, Response};
