use super::*;
use crate::api::{
    ActionableExplanation, ApiError, ClassExplanation, ClassProbabilities, ExplanationReport,
    FeatureImpact, FeatureImportance, GlobalImportance, LocalExplanation, MetricValue, ModelInfo,
    ModelMetadata, ModelPerformance, PredictionResult,
};
use crate::form::StudentPayload;
use crate::predict_flow::SequenceStep;
use std::sync::Mutex;
use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};

/// Scripted backend. Predicts "Graduate" unless the 2nd-semester grade is
/// below 10, in which case it predicts "Dropout".
#[derive(Default)]
pub(super) struct StubApi {
    pub(super) fail_at: Option<SequenceStep>,
    pub(super) fail_model_info: bool,
    pub(super) fail_importance: bool,
    pub(super) gate: Option<Mutex<Receiver<()>>>,
    /// Signalled as soon as predict is entered, before waiting on `gate`.
    pub(super) entered: Option<Mutex<Sender<()>>>,
    pub(super) calls: Mutex<Vec<&'static str>>,
}

impl StubApi {
    /// A stub whose predict call waits for one message on the returned sender.
    pub(super) fn gated() -> (Self, Sender<()>) {
        let (tx, rx) = std::sync::mpsc::channel();
        let api = Self {
            gate: Some(Mutex::new(rx)),
            ..Self::default()
        };
        (api, tx)
    }

    /// Also report each predict call on the returned receiver as it starts.
    pub(super) fn signal_entry(self) -> (Self, Receiver<()>) {
        let (tx, rx) = std::sync::mpsc::channel();
        let api = Self {
            entered: Some(Mutex::new(tx)),
            ..self
        };
        (api, rx)
    }

    pub(super) fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn step(&self, name: &'static str, step: SequenceStep) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(name);
        if self.fail_at == Some(step) {
            return Err(ApiError::Status {
                code: 422,
                detail: Some(format!("{name} rejected")),
            });
        }
        Ok(())
    }
}

impl PredictionApi for StubApi {
    fn model_info(&self) -> Result<ModelInfo, ApiError> {
        if self.fail_model_info {
            return Err(ApiError::Transport("connection refused".into()));
        }
        Ok(sample_model_info())
    }

    fn global_explanation(&self) -> Result<GlobalImportance, ApiError> {
        if self.fail_importance {
            return Err(ApiError::Transport("connection refused".into()));
        }
        Ok(GlobalImportance {
            top_features: vec![FeatureImportance {
                feature: "Curricular units 2nd sem (approved)".into(),
                importance: 0.41234,
            }],
        })
    }

    fn predict(&self, payload: &StudentPayload) -> Result<PredictionResult, ApiError> {
        if let Some(entered) = &self.entered {
            let _ = entered.lock().unwrap().send(());
        }
        if let Some(gate) = &self.gate {
            let _ = gate.lock().unwrap().recv_timeout(Duration::from_secs(5));
        }
        self.step("predict", SequenceStep::Predict)?;
        let label = if payload.get(FieldId::SecondSemGrade) < 10.0 {
            "Dropout"
        } else {
            "Graduate"
        };
        Ok(PredictionResult {
            prediction_label: label.into(),
            class_probabilities: ClassProbabilities(vec![
                ("Graduate".into(), 0.8),
                ("Dropout".into(), 0.2),
            ]),
        })
    }

    fn local_explanation(&self, _payload: &StudentPayload) -> Result<LocalExplanation, ApiError> {
        self.step("local", SequenceStep::LocalExplanation)?;
        let class = |name: &str, impact: f64| ClassExplanation {
            class_name: name.into(),
            top_5_features: vec![FeatureImpact {
                feature: "Admission grade".into(),
                impact,
            }],
        };
        Ok(LocalExplanation {
            class_names: vec!["Dropout".into(), "Graduate".into()],
            explanations: vec![class("Dropout", -0.2), class("Graduate", 0.3)],
        })
    }

    fn actionable_explanation(
        &self,
        _payload: &StudentPayload,
        _targets: &ActionTargets,
    ) -> Result<ActionableExplanation, ApiError> {
        self.step("actionable", SequenceStep::ActionableExplanation)?;
        Ok(ActionableExplanation {
            recommendation_type: "HOW TO STILL BE".into(),
            message: "Keep the current pace.".into(),
            suggestions: vec!["Maintain approved units".into()],
        })
    }
}

pub(super) fn sample_model_info() -> ModelInfo {
    ModelInfo {
        global_explanation_report: ExplanationReport {
            input: "Academic and economic indicators".into(),
            output: "Graduate, Dropout or Enrolled".into(),
            how: "Gradient boosted trees".into(),
        },
        metadata: ModelMetadata {
            model_performance: ModelPerformance {
                test_accuracy: MetricValue::Number(0.77),
                f1_score_weighted: MetricValue::Number(0.76),
                notes: None,
            },
        },
    }
}

pub(super) fn controller_with(api: StubApi) -> (EguiController, Arc<StubApi>) {
    let api = Arc::new(api);
    let controller = EguiController::new(api.clone(), ActionTargets::default());
    (controller, api)
}

/// Poll until `done` holds, failing the test after a few seconds.
pub(super) fn pump_until(controller: &mut EguiController, done: impl Fn(&EguiController) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        controller.poll_background_jobs();
        if done(controller) {
            return;
        }
        assert!(Instant::now() < deadline, "timed out waiting on background jobs");
        std::thread::sleep(Duration::from_millis(5));
    }
}
