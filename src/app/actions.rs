//! User intents: loads, commands, and the detection trigger.
//!
//! Each action validates locally, then spawns an async task that calls the
//! API client and reports back through the message channel. Validation
//! failures never issue a remote call.

use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::models::NewPlant;

use super::{App, AppMessage};

/// MIME type for an image path, by extension. The backend only checks the
/// `image/` prefix, so unknown extensions default to JPEG.
fn image_content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        _ => "image/jpeg",
    }
}

impl App {
    /// Schedule a refresh of every entity snapshot.
    pub fn refresh_all(&mut self) {
        self.load_plants();
        self.load_alerts();
        self.load_dashboard_stats();
    }

    /// Fetch the full plant collection and replace the snapshot on arrival.
    pub fn load_plants(&mut self) {
        let generation = self.store.begin_plants_load();
        let client = Arc::clone(&self.client);
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            match client.fetch_plants().await {
                Ok(plants) => {
                    let _ = message_tx.send(AppMessage::PlantsLoaded { generation, plants });
                }
                Err(e) => {
                    let _ = message_tx.send(AppMessage::PlantsLoadFailed {
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    /// Fetch the full alert collection and replace the snapshot on arrival.
    pub fn load_alerts(&mut self) {
        let generation = self.store.begin_alerts_load();
        let client = Arc::clone(&self.client);
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            match client.fetch_alerts().await {
                Ok(alerts) => {
                    let _ = message_tx.send(AppMessage::AlertsLoaded { generation, alerts });
                }
                Err(e) => {
                    let _ = message_tx.send(AppMessage::AlertsLoadFailed {
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    /// Fetch the dashboard aggregate and replace the snapshot on arrival.
    pub fn load_dashboard_stats(&mut self) {
        let generation = self.store.begin_stats_load();
        let client = Arc::clone(&self.client);
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            match client.fetch_dashboard_stats().await {
                Ok(stats) => {
                    let _ = message_tx.send(AppMessage::StatsLoaded { generation, stats });
                }
                Err(e) => {
                    let _ = message_tx.send(AppMessage::StatsLoadFailed {
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    /// Fetch past detections for the selected plant.
    pub fn load_detection_history(&mut self) {
        let Some(plant_id) = self.selected_plant_id.clone() else {
            return;
        };
        let client = Arc::clone(&self.client);
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            match client.fetch_plant_detections(&plant_id).await {
                Ok(records) => {
                    let _ = message_tx.send(AppMessage::DetectionHistoryLoaded { plant_id, records });
                }
                Err(e) => {
                    let _ = message_tx.send(AppMessage::DetectionHistoryLoadFailed {
                        plant_id,
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    /// Submit the add-plant form.
    ///
    /// Rejected (no remote call, error notice raised) unless both fields
    /// are non-empty. On success the handler navigates back to the
    /// dashboard and schedules a plants reload; there is no optimistic
    /// insert, so server-assigned ids never race local state.
    pub fn submit_add_plant(&mut self) -> Result<(), ValidationError> {
        let name = self.form.name.trim().to_string();
        let plant_type = self.form.plant_type.trim().to_string();

        let result = if name.is_empty() {
            Err(ValidationError::EmptyPlantName)
        } else if plant_type.is_empty() {
            Err(ValidationError::EmptyPlantType)
        } else {
            Ok(())
        };
        if let Err(e) = result {
            debug!("add plant rejected: {}", e);
            self.notify_error(&e.into());
            return result;
        }

        let request = NewPlant::new(name, plant_type);
        let client = Arc::clone(&self.client);
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            match client.create_plant(&request).await {
                Ok(plant) => {
                    let _ = message_tx.send(AppMessage::PlantCreated { plant });
                }
                Err(e) => {
                    let _ = message_tx.send(AppMessage::PlantCreateFailed {
                        error: e.user_message(),
                    });
                }
            }
        });

        Ok(())
    }

    /// Ask the server to resolve an alert.
    ///
    /// The alerts reload is a declared side effect of this command: the
    /// handler schedules it on completion whether the resolve succeeded or
    /// not, so local state always reflects server truth rather than an
    /// optimistic flip.
    pub fn resolve_alert(&mut self, alert_id: String) {
        let client = Arc::clone(&self.client);
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            match client.resolve_alert(&alert_id).await {
                Ok(()) => {
                    let _ = message_tx.send(AppMessage::AlertResolved { alert_id });
                }
                Err(e) => {
                    let _ = message_tx.send(AppMessage::AlertResolveFailed {
                        alert_id,
                        error: e.user_message(),
                    });
                }
            }
        });
    }

    /// Resolve the alert under the cursor in the alerts panel.
    pub fn resolve_selected_alert(&mut self) {
        if let Some(alert) = self.store.visible_alerts().get(self.alerts_index) {
            self.resolve_alert(alert.id.clone());
        }
    }

    /// Record a watering for the selected plant.
    pub fn water_selected_plant(&mut self) {
        let Some(plant_id) = self.selected_plant_id.clone() else {
            return;
        };
        let client = Arc::clone(&self.client);
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            match client.water_plant(&plant_id).await {
                Ok(()) => {
                    let _ = message_tx.send(AppMessage::PlantWatered { plant_id });
                }
                Err(e) => {
                    let _ = message_tx.send(AppMessage::PlantWaterFailed {
                        plant_id,
                        error: e.user_message(),
                    });
                }
            }
        });
    }

    /// Take the typed image path as the selected image.
    pub fn select_image_from_input(&mut self) {
        let path = self.image_input.trim();
        if path.is_empty() {
            return;
        }
        self.detection.select_image(path.into());
        self.mark_dirty();
    }

    /// Trigger a disease analysis for the selected plant and image.
    ///
    /// Guarded: both an image and a plant selection are required, and only
    /// one analysis may be in flight. A rejected action issues no remote
    /// call. A second invocation while Analyzing is a silent no-op.
    pub fn analyze_image(&mut self) -> Result<(), ValidationError> {
        let Some(plant_id) = self.selected_plant_id.clone() else {
            let e = ValidationError::NoPlantSelected;
            self.notify_error(&e.into());
            return Err(e);
        };
        let Some(image_path) = self.detection.image().map(Path::to_path_buf) else {
            let e = ValidationError::NoImageSelected;
            self.notify_error(&e.into());
            return Err(e);
        };
        if self.detection.is_analyzing() {
            debug!("analysis already in flight, ignoring");
            return Ok(());
        }

        let Some(attempt) = self.detection.begin_analysis() else {
            return Ok(());
        };
        self.mark_dirty();

        let file_name = image_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image.jpg")
            .to_string();
        let content_type = image_content_type(&image_path);
        let client = Arc::clone(&self.client);
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            let image = match tokio::fs::read(&image_path).await {
                Ok(data) => Bytes::from(data),
                Err(e) => {
                    warn!("failed to read image {}: {}", image_path.display(), e);
                    let _ = message_tx.send(AppMessage::DetectionFailed {
                        attempt,
                        error: format!("Could not read image: {}", e),
                    });
                    return;
                }
            };

            match client
                .detect_disease(&plant_id, &file_name, content_type, image)
                .await
            {
                Ok(report) => {
                    let _ = message_tx.send(AppMessage::DetectionCompleted { attempt, report });
                }
                Err(e) => {
                    let _ = message_tx.send(AppMessage::DetectionFailed {
                        attempt,
                        error: e.user_message(),
                    });
                }
            }
        });

        Ok(())
    }
}
