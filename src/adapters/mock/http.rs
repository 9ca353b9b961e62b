//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that can return predefined
//! responses or errors and records every request for verification.
//! Responses are keyed by method and URL, so a GET and a POST to the same
//! path can be configured independently.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, MultipartFile, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET, POST, PATCH)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (for POST/PATCH requests)
    pub body: Option<String>,
    /// Multipart payload (for multipart POST requests)
    pub multipart: Option<MultipartFile>,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful response
    Success(Response),
    /// Return an error
    Error(HttpError),
}

/// Mock HTTP client for testing.
///
/// This client can be configured to return specific responses for
/// method + URL pairs, allowing tests to verify HTTP interactions without
/// network access.
///
/// # Example
///
/// ```ignore
/// use verdant::adapters::mock::{MockHttpClient, MockResponse};
/// use verdant::traits::{Headers, HttpClient, Response};
/// use bytes::Bytes;
///
/// let client = MockHttpClient::new();
/// client.set_response(
///     "GET",
///     "http://localhost:8000/api/plants",
///     MockResponse::Success(Response::new(200, Bytes::from("[]"))),
/// );
///
/// let response = client.get("http://localhost:8000/api/plants", &Headers::new()).await?;
/// assert_eq!(response.status, 200);
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    /// Configured responses keyed by "METHOD url"
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            default_response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn key(method: &str, url: &str) -> String {
        format!("{} {}", method, url)
    }

    /// Set a response for a method + URL pair.
    ///
    /// Pairs are matched exactly first, then by URL prefix.
    pub fn set_response(&self, method: &str, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(Self::key(method, url), response);
    }

    /// Set a default response for requests without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Count recorded requests matching a method and URL suffix.
    pub fn count_requests(&self, method: &str, url_suffix: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && r.url.ends_with(url_suffix))
            .count()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    /// Clear all configured responses.
    pub fn clear_responses(&self) {
        self.responses.lock().unwrap().clear();
    }

    /// Record a request.
    fn record_request(
        &self,
        method: &str,
        url: &str,
        headers: &Headers,
        body: Option<String>,
        multipart: Option<MultipartFile>,
    ) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
            multipart,
        });
    }

    /// Get the configured response for a request.
    fn get_response(&self, method: &str, url: &str) -> Option<MockResponse> {
        let key = Self::key(method, url);
        let responses = self.responses.lock().unwrap();

        // Exact match first
        if let Some(response) = responses.get(&key) {
            return Some(response.clone());
        }

        // Then prefix match (for URL patterns)
        for (pattern, response) in responses.iter() {
            if key.starts_with(pattern) {
                return Some(response.clone());
            }
        }

        let default = self.default_response.lock().unwrap();
        default.clone()
    }

    /// Resolve the configured response, or an error if none is set.
    fn resolve(&self, method: &str, url: &str) -> Result<Response, HttpError> {
        match self.get_response(method, url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!(
                "No mock response for {} {}",
                method, url
            ))),
        }
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers, None, None);
        self.resolve("GET", url)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()), None);
        self.resolve("POST", url)
    }

    async fn patch(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("PATCH", url, headers, Some(body.to_string()), None);
        self.resolve("PATCH", url)
    }

    async fn post_multipart(
        &self,
        url: &str,
        file: MultipartFile,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, None, Some(file));
        self.resolve("POST", url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_mock_http_client_new() {
        let client = MockHttpClient::new();
        assert!(client.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_get_with_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "GET",
            "http://example.com/plants",
            MockResponse::Success(Response::new(200, Bytes::from("[]"))),
        );

        let response = client
            .get("http://example.com/plants", &Headers::new())
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, Bytes::from("[]"));

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].url, "http://example.com/plants");
    }

    #[tokio::test]
    async fn test_methods_keyed_independently() {
        let client = MockHttpClient::new();
        client.set_response(
            "GET",
            "http://example.com/plants",
            MockResponse::Success(Response::new(200, Bytes::from("[]"))),
        );
        client.set_response(
            "POST",
            "http://example.com/plants",
            MockResponse::Success(Response::new(200, Bytes::from(r#"{"id":"p1"}"#))),
        );

        let get = client
            .get("http://example.com/plants", &Headers::new())
            .await
            .unwrap();
        let post = client
            .post("http://example.com/plants", "{}", &Headers::new())
            .await
            .unwrap();

        assert_eq!(get.body, Bytes::from("[]"));
        assert_eq!(post.body, Bytes::from(r#"{"id":"p1"}"#));
    }

    #[tokio::test]
    async fn test_get_with_error() {
        let client = MockHttpClient::new();
        client.set_response(
            "GET",
            "http://example.com/error",
            MockResponse::Error(HttpError::ServerError {
                status: 500,
                message: "Internal Server Error".to_string(),
            }),
        );

        let result = client.get("http://example.com/error", &Headers::new()).await;

        assert!(result.is_err());
        match result {
            Err(HttpError::ServerError { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
            }
            _ => panic!("Expected ServerError"),
        }
    }

    #[tokio::test]
    async fn test_post_records_body() {
        let client = MockHttpClient::new();
        client.set_response(
            "POST",
            "http://example.com/plants",
            MockResponse::Success(Response::new(201, Bytes::from(r#"{"id":"p1"}"#))),
        );

        let response = client
            .post(
                "http://example.com/plants",
                r#"{"name":"Fern"}"#,
                &Headers::new(),
            )
            .await
            .unwrap();

        assert_eq!(response.status, 201);

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].body, Some(r#"{"name":"Fern"}"#.to_string()));
    }

    #[tokio::test]
    async fn test_patch_recorded() {
        let client = MockHttpClient::new();
        client.set_response(
            "PATCH",
            "http://example.com/alerts/a1/resolve",
            MockResponse::Success(Response::new(200, Bytes::from("{}"))),
        );

        client
            .patch("http://example.com/alerts/a1/resolve", "", &Headers::new())
            .await
            .unwrap();

        assert_eq!(client.count_requests("PATCH", "/alerts/a1/resolve"), 1);
    }

    #[tokio::test]
    async fn test_multipart_recorded() {
        let client = MockHttpClient::new();
        client.set_response(
            "POST",
            "http://example.com/detect-disease/p1",
            MockResponse::Success(Response::new(200, Bytes::from("{}"))),
        );

        let file = MultipartFile::new("file", "leaf.jpg", "image/jpeg", Bytes::from("imagebytes"));
        client
            .post_multipart("http://example.com/detect-disease/p1", file, &Headers::new())
            .await
            .unwrap();

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        let multipart = requests[0].multipart.as_ref().expect("multipart payload");
        assert_eq!(multipart.field, "file");
        assert_eq!(multipart.data, Bytes::from("imagebytes"));
    }

    #[tokio::test]
    async fn test_no_response_configured() {
        let client = MockHttpClient::new();

        let result = client
            .get("http://example.com/missing", &Headers::new())
            .await;

        assert!(result.is_err());
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_default_response() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(
            404,
            Bytes::from("Not Found"),
        )));

        let response = client
            .get("http://example.com/anything", &Headers::new())
            .await
            .unwrap();

        assert_eq!(response.status, 404);
    }

    #[tokio::test]
    async fn test_prefix_match() {
        let client = MockHttpClient::new();
        client.set_response(
            "GET",
            "http://example.com/plants/p1",
            MockResponse::Success(Response::new(200, Bytes::from("[]"))),
        );

        let response = client
            .get("http://example.com/plants/p1/detections", &Headers::new())
            .await
            .unwrap();

        assert_eq!(response.status, 200);
    }

    #[test]
    fn test_clear_requests() {
        let client = MockHttpClient::new();
        client.record_request("GET", "http://example.com", &Headers::new(), None, None);
        assert_eq!(client.get_requests().len(), 1);

        client.clear_requests();
        assert!(client.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_clear_responses() {
        let client = MockHttpClient::new();
        client.set_response(
            "GET",
            "http://example.com",
            MockResponse::Success(Response::new(200, Bytes::new())),
        );

        client.clear_responses();
        assert!(client.get_response("GET", "http://example.com").is_none());
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let client = MockHttpClient::new();
        client.set_response(
            "GET",
            "http://example.com",
            MockResponse::Success(Response::new(200, Bytes::from("ok"))),
        );

        let cloned = client.clone();
        cloned.get("http://example.com", &Headers::new()).await.unwrap();

        // Both handles see the same recorded requests
        assert_eq!(client.get_requests().len(), 1);
        assert_eq!(cloned.get_requests().len(), 1);
    }
}
