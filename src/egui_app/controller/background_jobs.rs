use super::jobs::JobMessage;
use super::*;

impl EguiController {
    /// Apply every finished worker result. Called once per frame.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => break,
            };
            match message {
                JobMessage::Prediction { request_id, event } => {
                    self.handle_sequence_event(request_id, event);
                }
                JobMessage::ModelInfoLoaded(result) => self.handle_model_info_loaded(result),
                JobMessage::GlobalImportanceLoaded(result) => {
                    self.handle_global_importance_loaded(result);
                }
            }
        }
    }
}
