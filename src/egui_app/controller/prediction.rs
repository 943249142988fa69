use super::jobs::PredictionJob;
use super::*;
use crate::api::ApiError;
use crate::predict_flow::{SequenceEvent, SequenceStep};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Pause between a completed run and scrolling the results into view.
pub const SCROLL_DELAY: Duration = Duration::from_millis(100);

/// What happened when the user pressed Predict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Started(u64),
    /// A run is already in flight; the press was ignored.
    AlreadyRunning,
    /// A cancelled run is still finishing its current request; the press was ignored.
    Cancelling,
}

impl EguiController {
    pub fn is_prediction_running(&self) -> bool {
        self.ui.prediction.phase.is_running()
    }

    /// Whether a cancelled run's worker has yet to finish.
    pub fn is_prediction_cancelling(&self) -> bool {
        self.jobs.winding_down().is_some()
    }

    /// Whether pressing Predict would start a run.
    pub fn can_submit_prediction(&self) -> bool {
        !self.is_prediction_running() && !self.is_prediction_cancelling()
    }

    /// Start the predict sequence for the current form contents.
    pub fn submit_prediction(&mut self) -> SubmitOutcome {
        if let Some(request_id) = self.ui.prediction.phase.running_request() {
            debug!(request_id, "Ignoring predict while a run is in flight");
            return SubmitOutcome::AlreadyRunning;
        }
        if let Some(request_id) = self.jobs.winding_down() {
            debug!(request_id, "Ignoring predict while a cancelled run winds down");
            return SubmitOutcome::Cancelling;
        }
        let payload = self.ui.form.to_payload();
        let skipped = self.ui.form.non_numeric_fields();
        if !skipped.is_empty() {
            debug!(fields = ?skipped, "Submitting non-numeric fields as null");
        }
        self.ui.prediction.clear_results();
        let job = PredictionJob {
            payload,
            targets: self.targets.clone(),
        };
        let request_id = self.jobs.begin_prediction(self.api.clone(), job);
        self.ui.prediction.phase = PredictionPhase::Running { request_id };
        self.set_status(
            "Running model and generating explanations...",
            StatusTone::Busy,
        );
        info!(request_id, "Prediction sequence started");
        SubmitOutcome::Started(request_id)
    }

    /// Stop waiting on the current run. Late results from it are dropped.
    pub fn cancel_prediction(&mut self) {
        let Some(request_id) = self.ui.prediction.phase.running_request() else {
            return;
        };
        self.jobs.cancel_prediction(request_id);
        self.ui.prediction.phase = PredictionPhase::Cancelled;
        self.set_status("Prediction cancelled", StatusTone::Warning);
        info!(request_id, "Prediction sequence cancelled");
    }

    /// Show the explanation chart for another class.
    pub fn select_result_tab(&mut self, class_name: &str) {
        self.ui.prediction.active_tab = Some(class_name.to_string());
    }

    /// Returns true once when a scheduled scroll to the results is due.
    pub fn take_due_scroll(&mut self, now: Instant) -> bool {
        match self.ui.prediction.scroll_due {
            Some(due) if now >= due => {
                self.ui.prediction.scroll_due = None;
                true
            }
            _ => false,
        }
    }

    pub(super) fn handle_sequence_event(&mut self, request_id: u64, event: SequenceEvent) {
        if self.ui.prediction.phase.running_request() != Some(request_id) {
            if event.is_terminal() && self.jobs.settle_cancelled(request_id) {
                debug!(request_id, "Cancelled prediction run finished");
            } else {
                debug!(request_id, "Discarding result from a stale prediction run");
            }
            return;
        }
        match event {
            SequenceEvent::Predicted(result) => {
                self.ui.prediction.result = Some(result);
            }
            SequenceEvent::LocalExplained(local) => {
                self.ui.prediction.active_tab = self
                    .ui
                    .prediction
                    .result
                    .as_ref()
                    .map(|result| result.prediction_label.clone());
                self.ui.prediction.local = Some(local);
            }
            SequenceEvent::ActionableExplained(advice) => {
                self.ui.prediction.actionable = Some(advice);
            }
            SequenceEvent::Completed => {
                self.jobs.clear_prediction();
                self.ui.prediction.phase = PredictionPhase::Succeeded;
                self.ui.prediction.scroll_due = Some(Instant::now() + SCROLL_DELAY);
                let label = self
                    .ui
                    .prediction
                    .result
                    .as_ref()
                    .map(|result| result.prediction_label.clone())
                    .unwrap_or_default();
                self.set_status(format!("Prediction: {label}"), StatusTone::Info);
                info!(request_id, label = %label, "Prediction sequence finished");
            }
            SequenceEvent::Failed { step, error } => {
                self.jobs.clear_prediction();
                self.ui.prediction.phase = PredictionPhase::Failed { step };
                self.report_step_failure(step, &error);
            }
            SequenceEvent::Cancelled => {
                self.jobs.clear_prediction();
                self.ui.prediction.phase = PredictionPhase::Cancelled;
                self.set_status("Prediction cancelled", StatusTone::Warning);
            }
        }
    }

    fn report_step_failure(&mut self, step: SequenceStep, error: &ApiError) {
        warn!(step = step.label(), %error, "Prediction failed");
        self.push_notice(
            format!("Error during {}", step.label()),
            format!("Failed to get prediction: {}", error.user_message()),
        );
        self.set_status(
            format!("Failed to get {}", step.label()),
            StatusTone::Error,
        );
    }
}
