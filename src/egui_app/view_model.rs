//! Pure mapping from controller state to render-ready view structs.
//!
//! Nothing here touches egui, so every rule about what is shown can be
//! tested without a window.

use crate::api::{
    ActionableExplanation, FeatureImpact, GlobalImportance, LocalExplanation, ModelInfo,
    PredictionResult,
};
use crate::egui_app::state::{LoadState, UiState};
use crate::tooltips;

const MODEL_INFO_PLACEHOLDER: &str = "Loading model info...";
const PERFORMANCE_PLACEHOLDER: &str = "Loading performance...";
const IMPORTANCE_PLACEHOLDER: &str = "Loading feature importance...";

/// Icon shown in the outcome banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutcomeIcon {
    Success,
    Failure,
    Neutral,
}

impl OutcomeIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Failure => "❌",
            Self::Neutral => "ℹ",
        }
    }
}

/// Icon for a predicted label: success for "Graduate", failure for "Dropout".
pub fn outcome_icon(label: &str) -> OutcomeIcon {
    match label {
        "Graduate" => OutcomeIcon::Success,
        "Dropout" => OutcomeIcon::Failure,
        _ => OutcomeIcon::Neutral,
    }
}

/// One row of the probability breakdown.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityBar {
    pub label: String,
    /// `probability * 100`, unclamped.
    pub width_percent: f64,
    pub percent_text: String,
}

impl ProbabilityBar {
    /// Fill fraction for a progress widget, clamped to `0..=1`.
    pub fn fill(&self) -> f32 {
        if self.width_percent.is_finite() {
            (self.width_percent / 100.0).clamp(0.0, 1.0) as f32
        } else {
            0.0
        }
    }
}

pub fn probability_bars(result: &PredictionResult) -> Vec<ProbabilityBar> {
    result
        .class_probabilities
        .iter()
        .map(|(label, prob)| ProbabilityBar {
            label: label.to_string(),
            width_percent: prob * 100.0,
            percent_text: format!("{:.1}%", prob * 100.0),
        })
        .collect()
}

/// Direction a feature pushes the class probability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImpactSign {
    Positive,
    Negative,
}

impl ImpactSign {
    pub fn of(impact: f64) -> Self {
        if impact > 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub fn legend(self) -> &'static str {
        match self {
            Self::Positive => "Increases Likelihood",
            Self::Negative => "Decreases Likelihood",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImpactBar {
    pub feature: String,
    pub impact: f64,
    /// Share of the widest bar, `0..=100`.
    pub width_percent: f64,
    pub sign: ImpactSign,
    pub value_text: String,
    pub hover_text: String,
}

/// Scale impacts against the largest absolute impact in the set.
///
/// When that maximum is zero (or not finite) every bar is 0% wide.
pub fn impact_bars(data: &[FeatureImpact]) -> Vec<ImpactBar> {
    let max_abs = data
        .iter()
        .map(|item| item.impact.abs())
        .fold(0.0_f64, f64::max);
    let scale = max_abs.is_finite() && max_abs > 0.0;
    data.iter()
        .map(|item| ImpactBar {
            feature: item.feature.clone(),
            impact: item.impact,
            width_percent: if scale {
                item.impact.abs() / max_abs * 100.0
            } else {
                0.0
            },
            sign: ImpactSign::of(item.impact),
            value_text: format!("{:.3}", item.impact),
            hover_text: format!("Impact: {:.4}", item.impact),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImpactChartView {
    pub title: String,
    pub note: String,
    pub bars: Vec<ImpactBar>,
}

/// Chart for one class; `None` when there is nothing to draw.
pub fn impact_chart(class_name: &str, data: Option<&[FeatureImpact]>) -> Option<ImpactChartView> {
    let data = data.filter(|data| !data.is_empty())?;
    let direction = if class_name == "Graduate" { "UP" } else { "DOWN" };
    Some(ImpactChartView {
        title: format!("Top Factors for \"{class_name}\""),
        note: format!("These features pushed the probability {direction}."),
        bars: impact_bars(data),
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplanationTab {
    pub class_name: String,
    pub label: String,
    pub active: bool,
}

/// One tab per class: "WHY" for the predicted class, "WHY NOT" for the rest.
pub fn explanation_tabs(
    local: &LocalExplanation,
    predicted_label: &str,
    active: Option<&str>,
) -> Vec<ExplanationTab> {
    local
        .class_names
        .iter()
        .map(|class_name| {
            let prefix = if class_name == predicted_label {
                "WHY"
            } else {
                "WHY NOT"
            };
            ExplanationTab {
                class_name: class_name.clone(),
                label: format!("{prefix} \"{class_name}\"?"),
                active: active == Some(class_name.as_str()),
            }
        })
        .collect()
}

/// A card that shows a placeholder until its data arrives.
#[derive(Clone, Debug, PartialEq)]
pub enum Section<T> {
    Placeholder(&'static str),
    Ready(T),
}

impl<T> Section<T> {
    fn from_load<S>(
        state: &LoadState<S>,
        placeholder: &'static str,
        build: impl FnOnce(&S) -> T,
    ) -> Self {
        // A failed load keeps its placeholder; the failure is reported as a notice.
        match state.ready() {
            Some(value) => Self::Ready(build(value)),
            None => Self::Placeholder(placeholder),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportView {
    pub input: String,
    pub output: String,
    pub how: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PerformanceView {
    pub accuracy: String,
    pub accuracy_help: Option<String>,
    pub f1_weighted: String,
    pub f1_help: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImportanceRow {
    pub rank: usize,
    pub feature: String,
    pub importance_text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OutcomeView {
    pub label: String,
    pub icon: OutcomeIcon,
    pub headline: String,
    pub bars: Vec<ProbabilityBar>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AdviceView {
    pub heading: String,
    pub message: String,
    pub suggestions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExplanationView {
    pub tabs: Vec<ExplanationTab>,
    /// Chart for the active tab, if it has data.
    pub chart: Option<ImpactChartView>,
}

/// Everything the results column shows, in display order.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub report: Section<ReportView>,
    pub performance: Section<PerformanceView>,
    pub importance: Section<Vec<ImportanceRow>>,
    pub running: bool,
    pub outcome: Option<OutcomeView>,
    pub advice: Option<AdviceView>,
    pub explanation: Option<ExplanationView>,
    pub show_what_if: bool,
}

/// Compose the results column from current state.
pub fn compose(state: &UiState) -> ResultView {
    let prediction = &state.prediction;
    let global = &state.global;
    ResultView {
        report: Section::from_load(&global.model_info, MODEL_INFO_PLACEHOLDER, report_view),
        performance: Section::from_load(
            &global.model_info,
            PERFORMANCE_PLACEHOLDER,
            performance_view,
        ),
        importance: Section::from_load(&global.importance, IMPORTANCE_PLACEHOLDER, importance_rows),
        running: prediction.phase.is_running(),
        outcome: prediction.result.as_ref().map(outcome_view),
        advice: prediction.actionable.as_ref().map(advice_view),
        explanation: prediction
            .result
            .as_ref()
            .zip(prediction.local.as_ref())
            .map(|(result, local)| {
                explanation_view(local, &result.prediction_label, prediction.active_tab.as_deref())
            }),
        show_what_if: prediction.result.is_some(),
    }
}

fn report_view(info: &ModelInfo) -> ReportView {
    let report = &info.global_explanation_report;
    ReportView {
        input: report.input.clone(),
        output: report.output.clone(),
        how: report.how.clone(),
    }
}

fn performance_view(info: &ModelInfo) -> PerformanceView {
    let perf = &info.metadata.model_performance;
    PerformanceView {
        accuracy: perf.test_accuracy.to_string(),
        accuracy_help: perf.notes.clone(),
        f1_weighted: perf.f1_score_weighted.to_string(),
        f1_help: tooltips::F1_HELP,
    }
}

fn importance_rows(importance: &GlobalImportance) -> Vec<ImportanceRow> {
    importance
        .top_features
        .iter()
        .enumerate()
        .map(|(index, item)| ImportanceRow {
            rank: index + 1,
            feature: item.feature.clone(),
            importance_text: format!("{:.3}", item.importance),
        })
        .collect()
}

fn outcome_view(result: &PredictionResult) -> OutcomeView {
    OutcomeView {
        label: result.prediction_label.clone(),
        icon: outcome_icon(&result.prediction_label),
        headline: format!("This student is likely to {}", result.prediction_label),
        bars: probability_bars(result),
    }
}

fn advice_view(advice: &ActionableExplanation) -> AdviceView {
    AdviceView {
        heading: format!("Actionable Advice ({})", advice.recommendation_type),
        message: advice.message.clone(),
        suggestions: advice.suggestions.clone(),
    }
}

fn explanation_view(
    local: &LocalExplanation,
    predicted_label: &str,
    active: Option<&str>,
) -> ExplanationView {
    let tabs = explanation_tabs(local, predicted_label, active);
    let chart = tabs.iter().find(|tab| tab.active).and_then(|tab| {
        let data = local
            .for_class(&tab.class_name)
            .map(|explanation| explanation.top_5_features.as_slice());
        impact_chart(&tab.class_name, data)
    });
    ExplanationView { tabs, chart }
}
