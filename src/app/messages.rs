//! AppMessage enum for async communication within the application.

use uuid::Uuid;

use crate::models::{Alert, DashboardStats, DetectionRecord, DetectionReport, Plant};

/// Messages received from async operations (remote call completions).
///
/// Load results carry the generation recorded when the load was issued so
/// the store can drop superseded responses.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Plant collection fetched
    PlantsLoaded { generation: u64, plants: Vec<Plant> },
    /// Plant fetch failed (fail-soft: logged, snapshot untouched)
    PlantsLoadFailed { error: String },
    /// Alert collection fetched
    AlertsLoaded { generation: u64, alerts: Vec<Alert> },
    /// Alert fetch failed (fail-soft)
    AlertsLoadFailed { error: String },
    /// Dashboard aggregate fetched
    StatsLoaded {
        generation: u64,
        stats: DashboardStats,
    },
    /// Stats fetch failed (fail-soft)
    StatsLoadFailed { error: String },
    /// Plant created on the backend - triggers a plants reload
    PlantCreated { plant: Plant },
    /// Plant creation failed - surfaced to the user
    PlantCreateFailed { error: String },
    /// Alert resolve request finished - triggers an alerts reload
    AlertResolved { alert_id: String },
    /// Alert resolve failed - surfaced, still triggers an alerts reload
    AlertResolveFailed { alert_id: String, error: String },
    /// Watering recorded - triggers a plants reload
    PlantWatered { plant_id: String },
    /// Watering failed - surfaced to the user
    PlantWaterFailed { plant_id: String, error: String },
    /// Disease analysis finished for the tagged attempt
    DetectionCompleted {
        attempt: Uuid,
        report: DetectionReport,
    },
    /// Disease analysis failed for the tagged attempt
    DetectionFailed { attempt: Uuid, error: String },
    /// Detection history fetched for one plant
    DetectionHistoryLoaded {
        plant_id: String,
        records: Vec<DetectionRecord>,
    },
    /// Detection history fetch failed (fail-soft)
    DetectionHistoryLoadFailed { plant_id: String, error: String },
}
