//! Type definitions for the application state.
//!
//! Contains enums and structs used for tracking UI state:
//! - [`ActiveView`] - Which view is currently displayed
//! - [`Focus`] - Which dashboard panel has focus
//! - [`AddPlantForm`] - Input state for the add-plant form
//! - [`Notice`] - A transient user-visible message

use uuid::Uuid;

/// The currently active view. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    DiseaseDetection,
    AddPlant,
}

impl ActiveView {
    /// Title shown in the header.
    pub fn title(&self) -> &'static str {
        match self {
            ActiveView::Dashboard => "Dashboard",
            ActiveView::DiseaseDetection => "Disease Detection",
            ActiveView::AddPlant => "Add Plant",
        }
    }

    /// Cycle to the next view (Tab navigation).
    pub fn next(&self) -> Self {
        match self {
            ActiveView::Dashboard => ActiveView::DiseaseDetection,
            ActiveView::DiseaseDetection => ActiveView::AddPlant,
            ActiveView::AddPlant => ActiveView::Dashboard,
        }
    }
}

/// Which dashboard panel has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Plants,
    Alerts,
}

/// Which field of the add-plant form is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    PlantType,
}

/// Input state for the add-plant form.
#[derive(Debug, Clone, Default)]
pub struct AddPlantForm {
    pub name: String,
    pub plant_type: String,
    pub field: FormField,
}

impl AddPlantForm {
    /// Switch editing to the other field.
    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            FormField::Name => FormField::PlantType,
            FormField::PlantType => FormField::Name,
        };
    }

    /// Append a character to the active field.
    pub fn push_char(&mut self, c: char) {
        match self.field {
            FormField::Name => self.name.push(c),
            FormField::PlantType => self.plant_type.push(c),
        }
    }

    /// Delete the last character of the active field.
    pub fn backspace(&mut self) {
        match self.field {
            FormField::Name => {
                self.name.pop();
            }
            FormField::PlantType => {
                self.plant_type.pop();
            }
        }
    }

    /// Reset the form after a successful submit.
    pub fn clear(&mut self) {
        self.name.clear();
        self.plant_type.clear();
        self.field = FormField::Name;
    }
}

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A transient user-visible message shown in the status line.
#[derive(Debug, Clone)]
pub struct Notice {
    pub id: Uuid,
    pub level: NoticeLevel,
    pub message: String,
    /// Tick count when the notice was raised (for expiry)
    pub raised_tick: u64,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>, raised_tick: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            raised_tick,
        }
    }
}
