use crate::api::{
    ActionTargets, ApiError, GlobalImportance, ModelInfo, PredictionApi,
};
use crate::form::StudentPayload;
use crate::predict_flow::{self, SequenceEvent};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::{Receiver, Sender, TryRecvError},
    },
    thread,
};

/// Results sent from worker threads back to the UI thread.
#[derive(Debug)]
pub(crate) enum JobMessage {
    Prediction {
        request_id: u64,
        event: SequenceEvent,
    },
    ModelInfoLoaded(Result<ModelInfo, ApiError>),
    GlobalImportanceLoaded(Result<GlobalImportance, ApiError>),
}

#[derive(Debug)]
pub(crate) struct PredictionJob {
    pub(crate) payload: StudentPayload,
    pub(crate) targets: ActionTargets,
}

pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    next_request_id: u64,
    prediction_cancel: Option<Arc<AtomicBool>>,
    /// Cancelled run whose worker has not sent its terminal event yet.
    winding_down: Option<u64>,
    global_load_started: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            next_request_id: 1,
            prediction_cancel: None,
            winding_down: None,
            global_load_started: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    /// Spawn the prediction sequence and return the id tagging its messages.
    pub(super) fn begin_prediction(&mut self, api: Arc<dyn PredictionApi>, job: PredictionJob) -> u64 {
        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1).max(1);
        let cancel = Arc::new(AtomicBool::new(false));
        self.prediction_cancel = Some(cancel.clone());
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            predict_flow::run_sequence(
                api.as_ref(),
                &job.payload,
                &job.targets,
                &cancel,
                |event| {
                    let _ = tx.send(JobMessage::Prediction { request_id, event });
                },
            );
        });
        request_id
    }

    /// Ask the running sequence to stop before its next call.
    ///
    /// The worker may still be inside a request; it counts as winding down
    /// until its terminal event arrives.
    pub(super) fn cancel_prediction(&mut self, request_id: u64) {
        if let Some(cancel) = self.prediction_cancel.take() {
            cancel.store(true, Ordering::Relaxed);
        }
        self.winding_down = Some(request_id);
    }

    pub(super) fn winding_down(&self) -> Option<u64> {
        self.winding_down
    }

    /// Forget the cancelled run once its worker has finished.
    pub(super) fn settle_cancelled(&mut self, request_id: u64) -> bool {
        if self.winding_down == Some(request_id) {
            self.winding_down = None;
            return true;
        }
        false
    }

    pub(super) fn clear_prediction(&mut self) {
        self.prediction_cancel = None;
    }

    /// Start both startup loads on their own workers. Only the first call does anything.
    pub(super) fn begin_global_load(&mut self, api: Arc<dyn PredictionApi>) -> bool {
        if self.global_load_started {
            return false;
        }
        self.global_load_started = true;

        let tx = self.message_tx.clone();
        let info_api = api.clone();
        thread::spawn(move || {
            let _ = tx.send(JobMessage::ModelInfoLoaded(info_api.model_info()));
        });

        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let _ = tx.send(JobMessage::GlobalImportanceLoaded(api.global_explanation()));
        });
        true
    }
}
