//! Plant care API client for backend communication.
//!
//! This module provides the typed HTTP client for the plant care service:
//! plant CRUD, alert listing and resolution, dashboard aggregates, and
//! image-based disease detection. No business logic lives here.

use std::sync::Arc;

use bytes::Bytes;

use crate::adapters::ReqwestHttpClient;
use crate::models::{Alert, DashboardStats, DetectionRecord, DetectionReport, NewPlant, Plant};
use crate::traits::{Headers, HttpClient, HttpError, MultipartFile, Response};

/// Error type for plant care client operations
#[derive(Debug)]
pub enum ApiError {
    /// HTTP transport failed
    Http(HttpError),
    /// JSON deserialization failed
    Json(serde_json::Error),
    /// Server returned an error status
    ServerError { status: u16, message: String },
}

impl ApiError {
    /// A short human-readable message suitable for an on-screen notice.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http(HttpError::ConnectionFailed(_)) => {
                "Unable to reach the plant care service. Check your connection.".to_string()
            }
            ApiError::Http(HttpError::Timeout(_)) => {
                "The plant care service took too long to respond.".to_string()
            }
            ApiError::Http(e) => format!("Request failed: {}", e),
            ApiError::Json(_) => "Received an invalid response from the service.".to_string(),
            ApiError::ServerError { status, .. } => match *status {
                404 => "The requested item was not found.".to_string(),
                400 => "The service rejected the request.".to_string(),
                500..=599 => "The plant care service is having trouble. Try again later.".to_string(),
                _ => format!("The service returned an error (HTTP {}).", status),
            },
        }
    }

    /// Whether the failed operation is worth retrying.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Http(HttpError::ConnectionFailed(_)) => true,
            ApiError::Http(HttpError::Timeout(_)) => true,
            ApiError::Http(_) => false,
            ApiError::Json(_) => false,
            ApiError::ServerError { status, .. } => *status >= 500 || *status == 429 || *status == 408,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Http(e) => write!(f, "HTTP error: {}", e),
            ApiError::Json(e) => write!(f, "JSON error: {}", e),
            ApiError::ServerError { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Http(e) => Some(e),
            ApiError::Json(e) => Some(e),
            ApiError::ServerError { .. } => None,
        }
    }
}

impl From<HttpError> for ApiError {
    fn from(e: HttpError) -> Self {
        ApiError::Http(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Json(e)
    }
}

/// Client for the plant care service API.
///
/// Holds the externally-supplied base URL (including the service's `/api`
/// prefix) and an [`HttpClient`] implementation, so tests can substitute
/// a mock transport.
pub struct PlantCareClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl PlantCareClient {
    /// Create a client with the production reqwest transport.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(base_url, Arc::new(ReqwestHttpClient::new()))
    }

    /// Create a client over an explicit transport.
    pub fn with_http(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, http }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn json_headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers
    }

    /// Map non-2xx responses to `ApiError::ServerError`.
    fn expect_success(response: Response) -> Result<Response, ApiError> {
        if response.is_success() {
            Ok(response)
        } else {
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::ServerError {
                status: response.status,
                message,
            })
        }
    }

    /// Fetch the full plant collection.
    pub async fn fetch_plants(&self) -> Result<Vec<Plant>, ApiError> {
        let response = self.http.get(&self.url("/plants"), &Headers::new()).await?;
        Ok(Self::expect_success(response)?.json()?)
    }

    /// Fetch a single plant by id.
    pub async fn fetch_plant(&self, plant_id: &str) -> Result<Plant, ApiError> {
        let url = self.url(&format!("/plants/{}", plant_id));
        let response = self.http.get(&url, &Headers::new()).await?;
        Ok(Self::expect_success(response)?.json()?)
    }

    /// Create a new plant. Returns the created plant with its server-assigned id.
    pub async fn create_plant(&self, request: &NewPlant) -> Result<Plant, ApiError> {
        let body = serde_json::to_string(request)?;
        let response = self
            .http
            .post(&self.url("/plants"), &body, &Self::json_headers())
            .await?;
        Ok(Self::expect_success(response)?.json()?)
    }

    /// Fetch the full alert collection, resolved alerts included.
    ///
    /// The caller filters; the endpoint does not.
    pub async fn fetch_alerts(&self) -> Result<Vec<Alert>, ApiError> {
        let response = self.http.get(&self.url("/alerts"), &Headers::new()).await?;
        Ok(Self::expect_success(response)?.json()?)
    }

    /// Mark an alert resolved on the server.
    pub async fn resolve_alert(&self, alert_id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("/alerts/{}/resolve", alert_id));
        let response = self.http.patch(&url, "", &Headers::new()).await?;
        Self::expect_success(response)?;
        Ok(())
    }

    /// Fetch the server-side dashboard aggregate.
    pub async fn fetch_dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let response = self
            .http
            .get(&self.url("/dashboard/stats"), &Headers::new())
            .await?;
        Ok(Self::expect_success(response)?.json()?)
    }

    /// Submit an image for disease analysis on one plant.
    ///
    /// The image is uploaded as a multipart form with a single `file` field,
    /// which is what the detection endpoint expects.
    pub async fn detect_disease(
        &self,
        plant_id: &str,
        file_name: &str,
        content_type: &str,
        image: Bytes,
    ) -> Result<DetectionReport, ApiError> {
        let url = self.url(&format!("/detect-disease/{}", plant_id));
        let file = MultipartFile::new("file", file_name, content_type, image);
        let response = self.http.post_multipart(&url, file, &Headers::new()).await?;
        Ok(Self::expect_success(response)?.json()?)
    }

    /// Fetch past detections for one plant, newest first.
    pub async fn fetch_plant_detections(
        &self,
        plant_id: &str,
    ) -> Result<Vec<DetectionRecord>, ApiError> {
        let url = self.url(&format!("/plants/{}/detections", plant_id));
        let response = self.http.get(&url, &Headers::new()).await?;
        Ok(Self::expect_success(response)?.json()?)
    }

    /// Record a watering on the server.
    pub async fn water_plant(&self, plant_id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("/plants/{}/water", plant_id));
        let response = self.http.post(&url, "", &Headers::new()).await?;
        Self::expect_success(response)?;
        Ok(())
    }
}
