//! Detection-specific view state.

use std::path::Path;

use crate::detection::{DetectionPhase, DetectionWorkflow};
use crate::models::DetectionReport;

/// Everything the detection view needs to render the current attempt.
#[derive(Debug)]
pub struct DetectionViewState<'a> {
    pub phase: DetectionPhase,
    pub phase_label: &'static str,
    /// Preview reference for the selected image
    pub image: Option<&'a Path>,
    pub report: Option<&'a DetectionReport>,
    pub error: Option<&'a str>,
    /// Whether an analyze action would currently be accepted
    pub can_analyze: bool,
}

impl<'a> DetectionViewState<'a> {
    /// Derive from the workflow; `plant_selected` folds in the
    /// coordinator-side guard so the hint line matches real behavior.
    pub fn from_workflow(workflow: &'a DetectionWorkflow, plant_selected: bool) -> Self {
        Self {
            phase: workflow.phase(),
            phase_label: workflow.phase().label(),
            image: workflow.image(),
            report: workflow.report(),
            error: workflow.error(),
            can_analyze: workflow.can_analyze() && plant_selected,
        }
    }
}
