//! Message handling: applies async completions to application state.
//!
//! This is the single mutation point for the entity store. Declared side
//! effects of commands (reload-after-mutate) are scheduled here so callers
//! cannot forget them.

use tracing::{debug, info, warn};

use crate::notifications;

use super::{ActiveView, App, AppMessage, NoticeLevel};

impl App {
    /// Apply one async completion to the application state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::PlantsLoaded { generation, plants } => {
                if self.store.apply_plants(generation, plants) {
                    self.revalidate_selection();
                }
                self.mark_dirty();
            }
            AppMessage::PlantsLoadFailed { error } => {
                // Fail-soft: prior snapshot stays intact, no user interruption
                warn!("plants load failed: {}", error);
            }
            AppMessage::AlertsLoaded { generation, alerts } => {
                if self.store.apply_alerts(generation, alerts) {
                    let visible = self.store.visible_alerts().len();
                    if self.alerts_index >= visible {
                        self.alerts_index = visible.saturating_sub(1);
                    }
                }
                self.mark_dirty();
            }
            AppMessage::AlertsLoadFailed { error } => {
                warn!("alerts load failed: {}", error);
            }
            AppMessage::StatsLoaded { generation, stats } => {
                self.store.apply_stats(generation, stats);
                self.mark_dirty();
            }
            AppMessage::StatsLoadFailed { error } => {
                warn!("dashboard stats load failed: {}", error);
            }
            AppMessage::PlantCreated { plant } => {
                info!("plant created: {} ({})", plant.name, plant.id);
                self.notify(NoticeLevel::Info, format!("Added {}", plant.name));
                self.form.clear();
                // Data committed; leave the form and resynchronize
                self.view = ActiveView::Dashboard;
                self.load_plants();
            }
            AppMessage::PlantCreateFailed { error } => {
                warn!("plant create failed: {}", error);
                self.notify(NoticeLevel::Error, error);
            }
            AppMessage::AlertResolved { alert_id } => {
                debug!("alert resolved: {}", alert_id);
                self.load_alerts();
            }
            AppMessage::AlertResolveFailed { alert_id, error } => {
                warn!("alert resolve failed for {}: {}", alert_id, error);
                self.notify(NoticeLevel::Error, error);
                // Resynchronize regardless; the server may have applied it
                self.load_alerts();
            }
            AppMessage::PlantWatered { plant_id } => {
                debug!("plant watered: {}", plant_id);
                self.notify(NoticeLevel::Info, "Watering recorded");
                self.load_plants();
            }
            AppMessage::PlantWaterFailed { plant_id, error } => {
                warn!("water failed for {}: {}", plant_id, error);
                self.notify(NoticeLevel::Error, error);
            }
            AppMessage::DetectionCompleted { attempt, report } => {
                let disease = report.disease_name.clone();
                let confidence = report.confidence;
                if self.detection.complete(attempt, report) {
                    info!(
                        "analysis complete: {} ({:.0}% confidence)",
                        disease, confidence
                    );
                    self.notify(
                        NoticeLevel::Info,
                        format!("Analysis complete: {} ({:.0}%)", disease, confidence),
                    );
                    if self.config.notifications {
                        notifications::notify_analysis_complete(&disease);
                    }
                    // A detection may have raised new alerts server-side
                    self.load_alerts();
                    self.load_detection_history();
                } else {
                    debug!("dropping completion of superseded attempt {}", attempt);
                }
                self.mark_dirty();
            }
            AppMessage::DetectionFailed { attempt, error } => {
                if self.detection.fail(attempt, error.clone()) {
                    warn!("analysis failed: {}", error);
                    self.notify(NoticeLevel::Error, error);
                } else {
                    debug!("dropping failure of superseded attempt {}", attempt);
                }
                self.mark_dirty();
            }
            AppMessage::DetectionHistoryLoaded { plant_id, records } => {
                if self.selected_plant_id.as_deref() == Some(plant_id.as_str()) {
                    self.detection_history = records;
                    self.mark_dirty();
                }
            }
            AppMessage::DetectionHistoryLoadFailed { plant_id, error } => {
                warn!("detection history load failed for {}: {}", plant_id, error);
            }
        }
    }
}
