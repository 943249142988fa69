//! Client for the remote prediction and explanation service.

mod client;
mod error;
mod types;

pub use client::HttpPredictionApi;
pub use error::{ApiError, GENERIC_ERROR_MESSAGE, extract_detail};
pub use types::{
    ActionTargets, ActionableExplanation, ClassExplanation, ClassProbabilities, ExplanationReport,
    FeatureImpact, FeatureImportance, GlobalImportance, LocalExplanation, MetricValue,
    ModelInfo, ModelMetadata, ModelPerformance, PredictionResult,
};

use crate::form::StudentPayload;

/// Backend operations the UI depends on.
///
/// Calls block the calling thread; the controller runs them on workers.
pub trait PredictionApi: Send + Sync {
    /// `GET /model_info`
    fn model_info(&self) -> Result<ModelInfo, ApiError>;

    /// `GET /global_explanation`
    fn global_explanation(&self) -> Result<GlobalImportance, ApiError>;

    /// `POST /predict`, returning the first element of the response array.
    fn predict(&self, payload: &StudentPayload) -> Result<PredictionResult, ApiError>;

    /// `POST /local_explanation`
    fn local_explanation(&self, payload: &StudentPayload) -> Result<LocalExplanation, ApiError>;

    /// `POST /actionable_explanations?target_class=..&undesirable_class=..`
    fn actionable_explanation(
        &self,
        payload: &StudentPayload,
        targets: &ActionTargets,
    ) -> Result<ActionableExplanation, ApiError>;
}
