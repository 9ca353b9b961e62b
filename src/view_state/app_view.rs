//! Main view state struct for UI rendering.
//!
//! [`AppViewState`] contains all data UI components need to render without
//! requiring access to the full App, using references to avoid cloning.

use crate::app::{ActiveView, AddPlantForm, App, Focus, Notice};
use crate::models::{Alert, DetectionRecord, Plant};

use super::{DashboardViewState, DetectionViewState};

/// Complete view state for UI rendering.
///
/// The lifetime `'a` represents the borrow from the App struct.
pub struct AppViewState<'a> {
    /// Current view being displayed
    pub view: ActiveView,
    /// Focused dashboard panel
    pub focus: Focus,
    /// Tick counter for animations
    pub tick_count: u64,

    /// All plants in server-returned order
    pub plants: &'a [Plant],
    /// Cursor position in the plant list
    pub plants_index: usize,
    /// The selected plant, resolved against the current snapshot
    pub selected_plant: Option<&'a Plant>,

    /// Newest unresolved alerts, capped for display
    pub top_alerts: &'a [Alert],
    /// Cursor position in the alert panel
    pub alerts_index: usize,

    /// Derived dashboard numbers
    pub dashboard: DashboardViewState,
    /// Derived detection-attempt state
    pub detection: DetectionViewState<'a>,
    /// Past detections for the selected plant
    pub detection_history: &'a [DetectionRecord],

    /// Add-plant form input state
    pub form: &'a AddPlantForm,
    /// Image path entry buffer
    pub image_input: &'a str,
    /// Most recent live notice
    pub notice: Option<&'a Notice>,
}

impl App {
    /// Snapshot the state needed for rendering.
    pub fn view_state(&self) -> AppViewState<'_> {
        AppViewState {
            view: self.view,
            focus: self.focus,
            tick_count: self.tick_count,
            plants: self.store.plants(),
            plants_index: self.plants_index,
            selected_plant: self.selected_plant(),
            top_alerts: self.store.top_alerts(),
            alerts_index: self.alerts_index,
            dashboard: DashboardViewState::from_store(&self.store),
            detection: DetectionViewState::from_workflow(
                &self.detection,
                self.selected_plant_id.is_some(),
            ),
            detection_history: &self.detection_history,
            form: &self.form,
            image_input: &self.image_input,
            notice: self.latest_notice(),
        }
    }
}
