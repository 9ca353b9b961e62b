//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`ActiveView`] - Which view is currently displayed
//! - [`Focus`] - Which dashboard panel has focus
//! - [`AppMessage`] - Messages for async communication
//!
//! The `App` owns the entity store and the detection workflow and is the
//! only place that mutates them, always on the main loop: async work runs
//! in spawned tasks that report back through the message channel.

mod actions;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{ActiveView, AddPlantForm, Focus, FormField, Notice, NoticeLevel};

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::PlantCareClient;
use crate::config::ClientConfig;
use crate::detection::DetectionWorkflow;
use crate::error::ActionError;
use crate::models::DetectionRecord;
use crate::store::EntityStore;

/// Ticks a notice stays on screen before it expires.
const NOTICE_TTL_TICKS: u64 = 80;

/// Main application state
pub struct App {
    /// Snapshots of plants, alerts, and dashboard stats
    pub store: EntityStore,
    /// State machine for the current disease-detection attempt
    pub detection: DetectionWorkflow,
    /// Currently active view
    pub view: ActiveView,
    /// Focused dashboard panel
    pub focus: Focus,
    /// Id of the selected plant, resolved against the plant snapshot
    pub selected_plant_id: Option<String>,
    /// Cursor position in the plant list
    pub plants_index: usize,
    /// Cursor position in the visible-alert list
    pub alerts_index: usize,
    /// Past detections for the selected plant
    pub detection_history: Vec<DetectionRecord>,
    /// Add-plant form input state
    pub form: AddPlantForm,
    /// Image path entry buffer on the detection view
    pub image_input: String,
    /// Transient user-visible notices, oldest first
    pub notices: Vec<Notice>,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: when true, the UI needs to be redrawn
    pub needs_redraw: bool,
    /// Tick counter for notice expiry and animations
    pub tick_count: u64,
    /// Receiver for async messages (taken by the main loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Plant care API client (shared across async tasks)
    pub client: Arc<PlantCareClient>,
    /// Client configuration
    pub config: ClientConfig,
}

impl App {
    /// Create a new App with the production HTTP transport.
    pub fn new(config: ClientConfig) -> Self {
        let client = Arc::new(PlantCareClient::new(config.base_url.clone()));
        Self::with_client(config, client)
    }

    /// Create a new App over an explicit client (used by tests).
    pub fn with_client(config: ClientConfig, client: Arc<PlantCareClient>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            store: EntityStore::new(),
            detection: DetectionWorkflow::new(),
            view: ActiveView::default(),
            focus: Focus::default(),
            selected_plant_id: None,
            plants_index: 0,
            alerts_index: 0,
            detection_history: Vec::new(),
            form: AddPlantForm::default(),
            image_input: String::new(),
            notices: Vec::new(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_rx: Some(message_rx),
            message_tx,
            client,
            config,
        }
    }

    /// Schedule the initial loads of all entity snapshots.
    pub fn initialize(&mut self) {
        self.refresh_all();
    }

    /// Advance the tick counter and expire old notices.
    pub fn tick(&mut self) {
        self.tick_count += 1;
        let tick = self.tick_count;
        let before = self.notices.len();
        self.notices
            .retain(|n| n.raised_tick + NOTICE_TTL_TICKS > tick);
        if self.notices.len() != before {
            self.mark_dirty();
        }
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Mark the app to quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// The most recent notice, if any is still live.
    pub fn latest_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Raise a user-visible notice.
    pub(crate) fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notices
            .push(Notice::new(level, message, self.tick_count));
        self.mark_dirty();
    }

    /// Raise an error notice from an action failure.
    pub fn notify_error(&mut self, error: &ActionError) {
        self.notify(NoticeLevel::Error, error.user_message());
    }
}
