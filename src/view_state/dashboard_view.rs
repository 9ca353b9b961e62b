//! Dashboard-specific view state.

use crate::models::DashboardStats;
use crate::store::EntityStore;

/// Everything the dashboard needs to render its summary row and alert
/// panel, derived from the store in one place.
///
/// The stat numbers come from the server aggregate and are independent of
/// the plant and alert lists; they may briefly disagree until the next
/// stats refresh.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardViewState {
    /// Whether a stats snapshot has arrived yet
    pub stats_available: bool,
    pub total_plants: u64,
    pub total_detections: u64,
    pub active_alerts: u64,
    pub health_percentage: f64,
    /// Number of unresolved alerts in the local snapshot
    pub visible_alert_count: usize,
    /// True when the local snapshot has no unresolved alerts
    pub all_clear: bool,
}

impl DashboardViewState {
    /// Derive the dashboard numbers from the current snapshots.
    pub fn from_store(store: &EntityStore) -> Self {
        let stats = store.stats().copied().unwrap_or_default();
        let visible_alert_count = store.visible_alerts().len();
        Self {
            stats_available: store.stats().is_some(),
            total_plants: stats.total_plants,
            total_detections: stats.total_detections,
            active_alerts: stats.active_alerts,
            health_percentage: stats.health_percentage,
            visible_alert_count,
            all_clear: visible_alert_count == 0,
        }
    }
}
