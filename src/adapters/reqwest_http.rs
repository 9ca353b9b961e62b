//! Reqwest-based HTTP client adapter.
//!
//! Production implementation of the [`HttpClient`] trait from `crate::traits`.

use async_trait::async_trait;

use crate::traits::{Headers, HttpClient, HttpError, MultipartFile, Response};

/// HTTP client implementation using reqwest.
///
/// Wraps a `reqwest::Client` and implements [`HttpClient`], providing
/// GET, POST, PATCH, and multipart POST operations.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a new ReqwestHttpClient with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a new ReqwestHttpClient with a custom reqwest::Client.
    ///
    /// This allows for advanced configuration like custom timeouts,
    /// connection pools, or TLS settings.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying reqwest::Client.
    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }

    /// Convert reqwest error to HttpError.
    fn convert_error(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(err.to_string())
        } else if err.is_connect() {
            HttpError::ConnectionFailed(err.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }

    /// Convert reqwest headers to our Headers type.
    fn convert_headers(headers: &reqwest::header::HeaderMap) -> Headers {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    /// Apply headers to a request builder.
    fn apply_headers(
        builder: reqwest::RequestBuilder,
        headers: &Headers,
    ) -> reqwest::RequestBuilder {
        let mut builder = builder;
        for (key, value) in headers {
            builder = builder.header(key, value);
        }
        builder
    }

    /// Send a prepared request and collect the response.
    async fn dispatch(builder: reqwest::RequestBuilder) -> Result<Response, HttpError> {
        let response = builder.send().await.map_err(Self::convert_error)?;

        let status = response.status().as_u16();
        let response_headers = Self::convert_headers(response.headers());
        let body = response.bytes().await.map_err(Self::convert_error)?;

        Ok(Response::with_headers(status, response_headers, body))
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let builder = Self::apply_headers(self.client.get(url), headers);
        Self::dispatch(builder).await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        let builder = Self::apply_headers(self.client.post(url).body(body.to_string()), headers);
        Self::dispatch(builder).await
    }

    async fn patch(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        let builder = Self::apply_headers(self.client.patch(url).body(body.to_string()), headers);
        Self::dispatch(builder).await
    }

    async fn post_multipart(
        &self,
        url: &str,
        file: MultipartFile,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        let part = reqwest::multipart::Part::bytes(file.data.to_vec())
            .file_name(file.file_name)
            .mime_str(&file.content_type)
            .map_err(|e| HttpError::Other(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part(file.field, part);

        let builder = Self::apply_headers(self.client.post(url).multipart(form), headers);
        Self::dispatch(builder).await
    }
}
