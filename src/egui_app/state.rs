//! State owned by the controller and read by the renderer.

use std::time::Instant;

use crate::api::{
    ActionableExplanation, GlobalImportance, LocalExplanation, ModelInfo, PredictionResult,
};
use crate::form::FormRecord;
use crate::predict_flow::SequenceStep;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub form: FormRecord,
    pub prediction: PredictionState,
    pub global: GlobalState,
    pub notices: NoticeQueue,
    pub status: StatusBarState,
    /// Whether the static model explanation panel is expanded.
    pub show_model_details: bool,
}

/// Lifecycle of the prediction sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PredictionPhase {
    #[default]
    Idle,
    Running {
        request_id: u64,
    },
    Succeeded,
    Failed {
        step: SequenceStep,
    },
    Cancelled,
}

impl PredictionPhase {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }

    /// Id of the in-flight request, if any.
    pub fn running_request(&self) -> Option<u64> {
        match self {
            Self::Running { request_id } => Some(*request_id),
            _ => None,
        }
    }
}

/// Results derived from the most recent submission.
///
/// `result`, `local` and `actionable` are cleared together when a new run
/// starts, so nothing shown here can belong to an older payload.
#[derive(Clone, Debug, Default)]
pub struct PredictionState {
    pub phase: PredictionPhase,
    pub result: Option<PredictionResult>,
    pub local: Option<LocalExplanation>,
    pub actionable: Option<ActionableExplanation>,
    /// Class whose explanation chart is showing.
    pub active_tab: Option<String>,
    /// When the results section should be scrolled into view.
    pub scroll_due: Option<Instant>,
}

impl PredictionState {
    pub(crate) fn clear_results(&mut self) {
        self.result = None;
        self.local = None;
        self.actionable = None;
        self.scroll_due = None;
    }
}

/// Outcome of a one-shot background load.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
    /// The load failed; the reason is logged, the view keeps its placeholder.
    Failed,
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Backend self-description loaded once at startup.
#[derive(Clone, Debug, Default)]
pub struct GlobalState {
    pub model_info: LoadState<ModelInfo>,
    pub importance: LoadState<GlobalImportance>,
    /// Set once the connectivity notice has been raised, so a second
    /// failing load does not raise another.
    pub connectivity_notice_raised: bool,
}

/// A blocking message the user has to acknowledge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

/// Pending notices, shown one at a time in arrival order.
#[derive(Clone, Debug, Default)]
pub struct NoticeQueue {
    items: Vec<Notice>,
}

impl NoticeQueue {
    pub fn push(&mut self, notice: Notice) {
        self.items.push(notice);
    }

    pub fn current(&self) -> Option<&Notice> {
        self.items.first()
    }

    pub fn dismiss(&mut self) -> Option<Notice> {
        (!self.items.is_empty()).then(|| self.items.remove(0))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Severity of the footer status message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusTone {
    #[default]
    Idle,
    Busy,
    Info,
    Warning,
    Error,
}

/// Text and tone shown in the footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusBarState {
    pub text: String,
    pub tone: StatusTone,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self {
            text: "Enter student details and press Predict".to_string(),
            tone: StatusTone::Idle,
        }
    }
}
