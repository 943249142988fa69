use serde::de::DeserializeOwned;

use crate::config::ApiSettings;
use crate::form::StudentPayload;
use crate::http_client;

use super::error::ApiError;
use super::types::{
    ActionTargets, ActionableExplanation, GlobalImportance, LocalExplanation, ModelInfo,
    PredictionResult,
};
use super::PredictionApi;

const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;

/// Blocking HTTP implementation of [`PredictionApi`].
#[derive(Clone)]
pub struct HttpPredictionApi {
    base_url: String,
    agent: ureq::Agent,
    max_response_bytes: usize,
}

impl HttpPredictionApi {
    /// Build a client for an already validated base URL.
    pub fn new(settings: &ApiSettings) -> Self {
        let base_url = settings.base_url.trim_end_matches('/').to_string();
        tracing::info!(base_url = %base_url, "Prediction API client ready");
        Self {
            base_url,
            agent: http_client::agent(settings),
            max_response_bytes: settings.max_response_bytes,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .agent
            .get(&self.endpoint(path))
            .set("Accept", "application/json");
        self.finish(path, request.call())
    }

    fn post_json<T: DeserializeOwned>(
        &self,
        request: ureq::Request,
        path: &str,
        payload: &StudentPayload,
    ) -> Result<T, ApiError> {
        let request = request
            .set("Accept", "application/json")
            .set("Content-Type", "application/json");
        self.finish(path, request.send_json(payload))
    }

    fn finish<T: DeserializeOwned>(
        &self,
        path: &str,
        outcome: Result<ureq::Response, ureq::Error>,
    ) -> Result<T, ApiError> {
        let response = match outcome {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let body = http_client::read_response_text(response, MAX_ERROR_BODY_BYTES)
                    .unwrap_or_default();
                tracing::warn!(endpoint = path, code, "Backend returned an error status");
                return Err(ApiError::from_status(code, &body));
            }
            Err(ureq::Error::Transport(err)) => {
                tracing::warn!(endpoint = path, error = %err, "Backend unreachable");
                return Err(ApiError::Transport(err.to_string()));
            }
        };
        let bytes = http_client::read_response_bytes(response, self.max_response_bytes)
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode(format!("{path}: {err}")))
    }
}

impl PredictionApi for HttpPredictionApi {
    fn model_info(&self) -> Result<ModelInfo, ApiError> {
        self.get_json("model_info")
    }

    fn global_explanation(&self) -> Result<GlobalImportance, ApiError> {
        self.get_json("global_explanation")
    }

    fn predict(&self, payload: &StudentPayload) -> Result<PredictionResult, ApiError> {
        let request = self.agent.post(&self.endpoint("predict"));
        let results: Vec<PredictionResult> = self.post_json(request, "predict", payload)?;
        results
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::Decode("predict: empty result array".to_string()))
    }

    fn local_explanation(&self, payload: &StudentPayload) -> Result<LocalExplanation, ApiError> {
        let request = self.agent.post(&self.endpoint("local_explanation"));
        self.post_json(request, "local_explanation", payload)
    }

    fn actionable_explanation(
        &self,
        payload: &StudentPayload,
        targets: &ActionTargets,
    ) -> Result<ActionableExplanation, ApiError> {
        let request = self
            .agent
            .post(&self.endpoint("actionable_explanations"))
            .query("target_class", &targets.target_class)
            .query("undesirable_class", &targets.undesirable_class);
        self.post_json(request, "actionable_explanations", payload)
    }
}
