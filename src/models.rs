//! Wire types for the plant care service API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Helper to deserialize id as either string or integer
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

fn default_health_status() -> String {
    "healthy".to_string()
}

/// A tracked plant, as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plant {
    /// Unique identifier assigned by the backend
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    /// Open string, e.g. "Fern" or "Tomato"
    pub plant_type: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_watered: Option<DateTime<Utc>>,
    #[serde(default)]
    pub soil_moisture: Option<f64>,
    #[serde(default = "default_health_status")]
    pub health_status: String,
}

/// Request body for creating a plant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPlant {
    pub name: String,
    pub plant_type: String,
}

impl NewPlant {
    pub fn new(name: impl Into<String>, plant_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            plant_type: plant_type.into(),
        }
    }
}

/// A health alert raised by the backend for one plant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub plant_id: String,
    /// e.g. "disease_detected" or "low_moisture"
    #[serde(default)]
    pub alert_type: String,
    pub message: String,
    pub severity: String,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub resolved: bool,
}

/// Server-side aggregate over plants, detections, and alerts.
///
/// Treated as an opaque snapshot: replaced wholesale on reload, never
/// recomputed locally, so it may transiently disagree with the plant and
/// alert lists until the next refresh.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardStats {
    pub total_plants: u64,
    pub total_detections: u64,
    pub active_alerts: u64,
    #[serde(default)]
    pub healthy_plants: u64,
    pub health_percentage: f64,
}

/// Result of one disease analysis, returned by the detection endpoint.
///
/// Ephemeral: lives only for the duration of one detection attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectionReport {
    pub disease_name: String,
    /// Percentage, 0-100
    pub confidence: f64,
    pub severity: String,
    pub description: String,
    pub treatment: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl DetectionReport {
    /// Whether the analysis found no disease.
    pub fn is_healthy(&self) -> bool {
        self.disease_name == "Healthy Plant"
    }
}

/// A stored past detection for one plant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectionRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub plant_id: String,
    pub disease_name: String,
    /// Fraction, 0.0-1.0 (the stored record keeps the raw model output)
    pub confidence: f64,
    pub severity: String,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}
