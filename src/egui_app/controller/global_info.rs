use super::*;
use crate::api::{ApiError, GlobalImportance, ModelInfo};
use tracing::{info, warn};

pub(crate) const CONNECTIVITY_MESSAGE: &str =
    "Failed to connect to the model API. Is the backend server running?";

impl EguiController {
    /// Kick off the startup loads of model info and global importance.
    ///
    /// Only the first call has any effect.
    pub fn load_global_info(&mut self) {
        if self.jobs.begin_global_load(self.api.clone()) {
            info!("Loading model info and global importance");
        }
    }

    pub(super) fn handle_model_info_loaded(&mut self, result: Result<ModelInfo, ApiError>) {
        self.ui.global.model_info = self.settle_global_load("model info", result);
    }

    pub(super) fn handle_global_importance_loaded(
        &mut self,
        result: Result<GlobalImportance, ApiError>,
    ) {
        self.ui.global.importance = self.settle_global_load("global importance", result);
    }

    fn settle_global_load<T>(&mut self, what: &str, result: Result<T, ApiError>) -> LoadState<T> {
        match result {
            Ok(value) => {
                info!(load = what, "Startup load finished");
                LoadState::Ready(value)
            }
            Err(error) => {
                warn!(load = what, %error, "Startup load failed");
                self.raise_connectivity_notice();
                LoadState::Failed
            }
        }
    }

    fn raise_connectivity_notice(&mut self) {
        if self.ui.global.connectivity_notice_raised {
            return;
        }
        self.ui.global.connectivity_notice_raised = true;
        self.push_notice("Connection error", CONNECTIVITY_MESSAGE);
        self.set_status("Model API unreachable", StatusTone::Error);
    }
}
