//! Navigation and selection methods for the App.
//!
//! View transitions are pure: any view is reachable from any view.
//! Plant selection is independent of navigation and is re-validated
//! against the plant snapshot after every plants load.

use tracing::debug;

use super::{ActiveView, App, Focus};

impl App {
    /// Switch to a view. Entering the detection view refreshes the
    /// selected plant's history.
    pub fn activate_view(&mut self, view: ActiveView) {
        if self.view != view {
            self.view = view;
            self.mark_dirty();
        }
        if view == ActiveView::DiseaseDetection {
            self.load_detection_history();
        }
    }

    /// Cycle to the next view (Tab navigation).
    pub fn next_view(&mut self) {
        self.activate_view(self.view.next());
    }

    pub fn show_dashboard(&mut self) {
        self.activate_view(ActiveView::Dashboard);
    }

    pub fn show_detection(&mut self) {
        self.activate_view(ActiveView::DiseaseDetection);
    }

    pub fn show_add_plant(&mut self) {
        self.activate_view(ActiveView::AddPlant);
    }

    /// Toggle focus between the dashboard panels.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Plants => Focus::Alerts,
            Focus::Alerts => Focus::Plants,
        };
        self.mark_dirty();
    }

    /// Select the plant at a list position. Stays on the current view:
    /// selection is independent of navigation.
    pub fn select_plant_at(&mut self, index: usize) {
        if let Some(plant) = self.store.plants().get(index) {
            self.plants_index = index;
            self.selected_plant_id = Some(plant.id.clone());
            self.mark_dirty();
        }
    }

    /// The currently selected plant, resolved against the snapshot.
    pub fn selected_plant(&self) -> Option<&crate::models::Plant> {
        self.selected_plant_id
            .as_deref()
            .and_then(|id| self.store.plant(id))
    }

    /// Move the cursor up in the focused dashboard panel.
    pub fn move_up(&mut self) {
        match self.focus {
            Focus::Plants => {
                if self.plants_index > 0 {
                    self.select_plant_at(self.plants_index - 1);
                }
            }
            Focus::Alerts => {
                if self.alerts_index > 0 {
                    self.alerts_index -= 1;
                    self.mark_dirty();
                }
            }
        }
    }

    /// Move the cursor down in the focused dashboard panel.
    pub fn move_down(&mut self) {
        match self.focus {
            Focus::Plants => {
                if self.plants_index + 1 < self.store.plants().len() {
                    self.select_plant_at(self.plants_index + 1);
                }
            }
            Focus::Alerts => {
                if self.alerts_index + 1 < self.store.visible_alerts().len() {
                    self.alerts_index += 1;
                    self.mark_dirty();
                }
            }
        }
    }

    /// Re-resolve the selection after a plants load.
    ///
    /// Plant snapshots are replaced wholesale, so the selection holds an id,
    /// not a reference. A stale id fails closed to no selection; an unset
    /// selection defaults to the first plant in server-returned order.
    pub(crate) fn revalidate_selection(&mut self) {
        match self.selected_plant_id.take() {
            Some(id) => {
                if let Some(position) = self.store.plants().iter().position(|p| p.id == id) {
                    self.plants_index = position;
                    self.selected_plant_id = Some(id);
                } else {
                    debug!("selected plant {} gone from snapshot, clearing selection", id);
                    self.plants_index = 0;
                    self.detection_history.clear();
                }
            }
            None => {
                if let Some(first) = self.store.plants().first() {
                    self.selected_plant_id = Some(first.id.clone());
                    self.plants_index = 0;
                }
            }
        }
    }
}
