//! Entity snapshots shared by all views.
//!
//! [`EntityStore`] is the single source of truth for plants, alerts, and
//! dashboard stats. Every load fully replaces its snapshot, never merges.
//! Per-entity load generations make overlapping refreshes deterministic:
//! a response from a superseded load is discarded instead of racing.

use tracing::debug;

use crate::models::{Alert, DashboardStats, Plant};

/// Number of alerts shown on the dashboard; the full set is retained.
pub const VISIBLE_ALERT_LIMIT: usize = 5;

/// Monotonic counter for in-flight loads of one entity kind.
#[derive(Debug, Default)]
struct LoadGeneration {
    issued: u64,
}

impl LoadGeneration {
    /// Record a new load being issued and return its generation.
    fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// A response is current only if no newer load was issued after it.
    fn is_current(&self, generation: u64) -> bool {
        generation == self.issued
    }
}

/// Holds the current snapshots of all remote entities.
///
/// Only methods on this struct mutate it; views read through accessors.
#[derive(Debug, Default)]
pub struct EntityStore {
    plants: Vec<Plant>,
    /// Full alert set as fetched, newest first
    alerts: Vec<Alert>,
    /// Unresolved subset of `alerts`, newest first
    visible_alerts: Vec<Alert>,
    stats: Option<DashboardStats>,
    plants_generation: LoadGeneration,
    alerts_generation: LoadGeneration,
    stats_generation: LoadGeneration,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Plants
    // =========================================================================

    /// Register an outgoing plants load; the returned generation must be
    /// passed back to [`apply_plants`](Self::apply_plants) with the response.
    pub fn begin_plants_load(&mut self) -> u64 {
        self.plants_generation.begin()
    }

    /// Replace the plant snapshot wholesale.
    ///
    /// Returns false (and leaves the snapshot untouched) when a newer load
    /// was issued after this one.
    pub fn apply_plants(&mut self, generation: u64, plants: Vec<Plant>) -> bool {
        if !self.plants_generation.is_current(generation) {
            debug!(
                generation,
                latest = self.plants_generation.issued,
                "dropping superseded plants response"
            );
            return false;
        }
        self.plants = plants;
        true
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn plant(&self, id: &str) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == id)
    }

    // =========================================================================
    // Alerts
    // =========================================================================

    pub fn begin_alerts_load(&mut self) -> u64 {
        self.alerts_generation.begin()
    }

    /// Replace both alert snapshots from a freshly fetched set.
    ///
    /// The visible set is the `resolved == false` subset, ordered by recency.
    pub fn apply_alerts(&mut self, generation: u64, mut alerts: Vec<Alert>) -> bool {
        if !self.alerts_generation.is_current(generation) {
            debug!(
                generation,
                latest = self.alerts_generation.issued,
                "dropping superseded alerts response"
            );
            return false;
        }
        alerts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        self.visible_alerts = alerts.iter().filter(|a| !a.resolved).cloned().collect();
        self.alerts = alerts;
        true
    }

    /// The full fetched alert set, resolved alerts included.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Unresolved alerts, newest first.
    pub fn visible_alerts(&self) -> &[Alert] {
        &self.visible_alerts
    }

    /// The newest unresolved alerts, capped for display.
    pub fn top_alerts(&self) -> &[Alert] {
        let n = self.visible_alerts.len().min(VISIBLE_ALERT_LIMIT);
        &self.visible_alerts[..n]
    }

    // =========================================================================
    // Dashboard stats
    // =========================================================================

    pub fn begin_stats_load(&mut self) -> u64 {
        self.stats_generation.begin()
    }

    /// Replace the stats snapshot wholesale. Never recomputed locally.
    pub fn apply_stats(&mut self, generation: u64, stats: DashboardStats) -> bool {
        if !self.stats_generation.is_current(generation) {
            debug!(
                generation,
                latest = self.stats_generation.issued,
                "dropping superseded stats response"
            );
            return false;
        }
        self.stats = Some(stats);
        true
    }

    pub fn stats(&self) -> Option<&DashboardStats> {
        self.stats.as_ref()
    }
}
