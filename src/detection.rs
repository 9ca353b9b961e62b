//! Disease detection workflow state machine.
//!
//! One [`DetectionWorkflow`] tracks one analysis attempt at a time:
//! `Idle → ImageSelected → Analyzing → Completed | Failed`. Selecting a
//! new image discards any prior result; a completion belonging to a
//! superseded attempt is dropped by attempt-id mismatch.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::models::DetectionReport;

/// Current phase of the detection workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectionPhase {
    #[default]
    Idle,
    ImageSelected,
    Analyzing,
    Completed,
    Failed,
}

impl DetectionPhase {
    /// Label for the UI status indicator.
    pub fn label(&self) -> &'static str {
        match self {
            DetectionPhase::Idle => "No image selected",
            DetectionPhase::ImageSelected => "Ready to analyze",
            DetectionPhase::Analyzing => "Analyzing...",
            DetectionPhase::Completed => "Analysis complete",
            DetectionPhase::Failed => "Analysis failed",
        }
    }
}

/// State machine for a single disease-detection attempt.
#[derive(Debug, Default)]
pub struct DetectionWorkflow {
    phase: DetectionPhase,
    /// Local preview reference for the view layer
    image: Option<PathBuf>,
    /// Id of the in-flight (or last finished) attempt
    attempt: Option<Uuid>,
    report: Option<DetectionReport>,
    error: Option<String>,
}

impl DetectionWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DetectionPhase {
        self.phase
    }

    pub fn image(&self) -> Option<&Path> {
        self.image.as_deref()
    }

    pub fn report(&self) -> Option<&DetectionReport> {
        self.report.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_analyzing(&self) -> bool {
        self.phase == DetectionPhase::Analyzing
    }

    /// Whether an analyze action would be accepted (image guard only; the
    /// plant-selection guard lives with the coordinator).
    pub fn can_analyze(&self) -> bool {
        self.image.is_some() && !self.is_analyzing()
    }

    /// Select an image for analysis, discarding any prior result.
    ///
    /// Selecting while Analyzing abandons the in-flight attempt: the
    /// workflow returns to ImageSelected and the orphaned completion is
    /// later dropped by attempt-id mismatch.
    pub fn select_image(&mut self, path: PathBuf) {
        self.image = Some(path);
        self.attempt = None;
        self.report = None;
        self.error = None;
        self.phase = DetectionPhase::ImageSelected;
    }

    /// Start an analysis attempt.
    ///
    /// Returns the attempt id to tag the remote call with, or None when the
    /// guard rejects the action (no image, or already Analyzing).
    pub fn begin_analysis(&mut self) -> Option<Uuid> {
        if !self.can_analyze() {
            return None;
        }
        let attempt = Uuid::new_v4();
        self.attempt = Some(attempt);
        self.report = None;
        self.error = None;
        self.phase = DetectionPhase::Analyzing;
        Some(attempt)
    }

    /// Record a successful analysis. Returns false when the completion
    /// belongs to a superseded attempt.
    pub fn complete(&mut self, attempt: Uuid, report: DetectionReport) -> bool {
        if self.attempt != Some(attempt) || self.phase != DetectionPhase::Analyzing {
            return false;
        }
        self.report = Some(report);
        self.error = None;
        self.phase = DetectionPhase::Completed;
        true
    }

    /// Record a failed analysis. The image is retained so the user can
    /// re-trigger; there is no automatic retry.
    pub fn fail(&mut self, attempt: Uuid, message: String) -> bool {
        if self.attempt != Some(attempt) || self.phase != DetectionPhase::Analyzing {
            return false;
        }
        self.error = Some(message);
        self.report = None;
        self.phase = DetectionPhase::Failed;
        true
    }
}
