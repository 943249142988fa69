//! Owns UI state and bridges user actions to background backend calls.

mod background_jobs;
mod global_info;
mod jobs;
mod prediction;

#[cfg(test)]
mod test_support;

pub use prediction::{SCROLL_DELAY, SubmitOutcome};

use crate::api::{ActionTargets, PredictionApi};
use crate::config::AppConfig;
use crate::egui_app::state::*;
use crate::form::FieldId;
use jobs::ControllerJobs;
use std::sync::Arc;

/// Maintains app state and runs backend work off the UI thread.
pub struct EguiController {
    pub ui: UiState,
    api: Arc<dyn PredictionApi>,
    targets: ActionTargets,
    jobs: ControllerJobs,
}

impl EguiController {
    pub fn new(api: Arc<dyn PredictionApi>, targets: ActionTargets) -> Self {
        Self {
            ui: UiState::default(),
            api,
            targets,
            jobs: ControllerJobs::new(),
        }
    }

    /// Build a controller from loaded settings.
    pub fn from_config(api: Arc<dyn PredictionApi>, config: &AppConfig) -> Self {
        Self::new(api, config.targets.action_targets())
    }

    /// Replace one form field with the text typed into it.
    pub fn set_form_field(&mut self, field: FieldId, raw: impl Into<String>) {
        self.ui.form.set_field(field, raw);
    }

    pub fn reset_form(&mut self) {
        self.ui.form.reset();
        self.set_status("Form reset to default values", StatusTone::Info);
    }

    pub fn toggle_model_details(&mut self) {
        self.ui.show_model_details = !self.ui.show_model_details;
    }

    /// Drop the notice currently on screen.
    pub fn dismiss_notice(&mut self) {
        self.ui.notices.dismiss();
    }

    pub(crate) fn push_notice(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.ui.notices.push(Notice {
            title: title.into(),
            message: message.into(),
        });
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status = StatusBarState {
            text: text.into(),
            tone,
        };
    }

    /// Whether any background work still needs frames to be driven.
    pub fn has_pending_work(&self) -> bool {
        self.ui.prediction.phase.is_running()
            || self.is_prediction_cancelling()
            || self.ui.prediction.scroll_due.is_some()
            || matches!(self.ui.global.model_info, LoadState::Loading)
            || matches!(self.ui.global.importance, LoadState::Loading)
    }
}
