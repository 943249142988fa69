//! The predict → local explanation → actionable explanation sequence.
//!
//! Runs on a worker thread and reports each step through a callback so the
//! UI can show partial results as they land.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::api::{
    ActionTargets, ActionableExplanation, ApiError, LocalExplanation, PredictionApi,
    PredictionResult,
};
use crate::form::StudentPayload;

/// Backend call within the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceStep {
    Predict,
    LocalExplanation,
    ActionableExplanation,
}

impl SequenceStep {
    pub fn label(self) -> &'static str {
        match self {
            Self::Predict => "prediction",
            Self::LocalExplanation => "local explanation",
            Self::ActionableExplanation => "actionable explanation",
        }
    }
}

/// Progress reported by [`run_sequence`].
///
/// Exactly one of `Completed`, `Failed` or `Cancelled` ends every run.
#[derive(Clone, Debug, PartialEq)]
pub enum SequenceEvent {
    Predicted(PredictionResult),
    LocalExplained(LocalExplanation),
    ActionableExplained(ActionableExplanation),
    Completed,
    Failed { step: SequenceStep, error: ApiError },
    Cancelled,
}

impl SequenceEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Completed | Self::Failed { .. } | Self::Cancelled
        )
    }
}

/// Issue the three calls in order against one payload.
///
/// A failing step ends the run; later steps are not attempted. `cancel` is
/// checked before each call.
pub fn run_sequence(
    api: &dyn PredictionApi,
    payload: &StudentPayload,
    targets: &ActionTargets,
    cancel: &AtomicBool,
    mut emit: impl FnMut(SequenceEvent),
) {
    let cancelled = || cancel.load(Ordering::Relaxed);
    let fail = |step: SequenceStep, error: ApiError| {
        tracing::warn!(step = step.label(), %error, "Prediction sequence failed");
        SequenceEvent::Failed { step, error }
    };

    if cancelled() {
        return emit(SequenceEvent::Cancelled);
    }
    match api.predict(payload) {
        Ok(result) => emit(SequenceEvent::Predicted(result)),
        Err(error) => return emit(fail(SequenceStep::Predict, error)),
    }

    if cancelled() {
        return emit(SequenceEvent::Cancelled);
    }
    match api.local_explanation(payload) {
        Ok(local) => emit(SequenceEvent::LocalExplained(local)),
        Err(error) => return emit(fail(SequenceStep::LocalExplanation, error)),
    }

    if cancelled() {
        return emit(SequenceEvent::Cancelled);
    }
    match api.actionable_explanation(payload, targets) {
        Ok(advice) => emit(SequenceEvent::ActionableExplained(advice)),
        Err(error) => return emit(fail(SequenceStep::ActionableExplanation, error)),
    }
    emit(SequenceEvent::Completed);
}
