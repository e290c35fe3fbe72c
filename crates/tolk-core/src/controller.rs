use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use tolk_config::ui::UiConfig;
use tolk_io::clipboard::ClipboardWriter;
use tolk_translator::{TranslateError, TranslationBackend, translate};
use tolk_types::{
    CLIPBOARD_FAILED, COPY_CONFIRMATION, TRANSLATION_FAILED, TranslationRequest,
    TranslationResult, UiEvent, UiState, ViewModel,
};

use crate::events::ControllerEvent;

/// Request currently awaiting its completion
#[derive(Debug)]
struct InFlight {
    id: u64,
    target_language: String,
}

/// Owns one translate/copy cycle at a time and the view that reflects it.
///
/// All mutation happens through `&mut self` on the task driving the
/// controller. User actions and the results of spawned network/clipboard
/// work arrive on the same queue, so a completion is never handled
/// concurrently with a user action.
pub struct TranslationController {
    backend: Arc<dyn TranslationBackend>,
    clipboard: Arc<dyn ClipboardWriter>,
    languages: Vec<String>,
    copy_feedback: Duration,
    resting_copy_label: String,

    events_tx: AsyncSender<ControllerEvent>,
    events_rx: AsyncReceiver<ControllerEvent>,

    state: UiState,
    view: ViewModel,
    in_flight: Option<InFlight>,
    next_request_id: u64,
    copy_generation: u64,
    confirmed_generation: u64,
}

impl TranslationController {
    pub fn new(
        backend: Arc<dyn TranslationBackend>,
        clipboard: Arc<dyn ClipboardWriter>,
        config: &UiConfig,
    ) -> Self {
        let (events_tx, events_rx) = kanal::bounded_async(64);

        Self {
            backend,
            clipboard,
            languages: config.languages.clone(),
            copy_feedback: Duration::from_millis(config.copy_feedback_ms),
            resting_copy_label: config.copy_label.clone(),
            events_tx,
            events_rx,
            state: UiState::Idle,
            view: ViewModel::new(config.copy_label.clone()),
            in_flight: None,
            next_request_id: 1,
            copy_generation: 0,
            confirmed_generation: 0,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    /// Sender for feeding user actions into the queue
    pub fn sender(&self) -> AsyncSender<ControllerEvent> {
        self.events_tx.clone()
    }

    pub fn receiver(&self) -> AsyncReceiver<ControllerEvent> {
        self.events_rx.clone()
    }

    /// Wait for the next queued event
    pub async fn next_event(&self) -> Option<ControllerEvent> {
        self.events_rx.recv().await.ok()
    }

    pub fn handle_event(&mut self, event: ControllerEvent) {
        match event {
            ControllerEvent::Ui(UiEvent::Translate { text, language }) => {
                self.submit_translation(&text, &language)
            }
            ControllerEvent::Ui(UiEvent::Copy) => self.copy_last_translation(),
            ControllerEvent::Ui(UiEvent::Close) => {}
            ControllerEvent::TranslationFinished {
                request_id,
                outcome,
            } => self.finish_translation(request_id, outcome),
            ControllerEvent::CopyFinished { generation, outcome } => match outcome {
                Ok(()) => self.confirm_copy(generation),
                Err(e) => {
                    tracing::error!("Failed to copy text: {e}");
                    self.view.show_error(CLIPBOARD_FAILED);
                }
            },
            ControllerEvent::CopyFeedbackExpired { generation } => {
                if generation == self.confirmed_generation
                    && self.view.copy_label == COPY_CONFIRMATION
                {
                    self.view.copy_label = self.resting_copy_label.clone();
                }
            }
        }
    }

    /// Validate the form and start one request.
    ///
    /// Validation failures only touch the error banner. While a request is
    /// in flight the submit control is disabled and further submits are
    /// dropped.
    pub fn submit_translation(&mut self, input_text: &str, target_language: &str) {
        if let Some(flight) = &self.in_flight {
            tracing::debug!("Request #{} still in flight, ignoring submit", flight.id);
            return;
        }

        let request =
            match TranslationRequest::with_languages(input_text, target_language, &self.languages)
            {
                Ok(request) => request,
                Err(e) => {
                    tracing::debug!("Rejected input: {e:?}");
                    self.view.show_error(e.to_string());
                    return;
                }
            };

        let request_id = self.next_request_id;
        self.next_request_id += 1;

        self.view.hide_error();
        self.view.set_loading(true);
        self.view.clear_output();
        self.state = UiState::Loading;
        self.in_flight = Some(InFlight {
            id: request_id,
            target_language: request.target_language.clone(),
        });

        tracing::info!(
            "Translating request #{request_id} into {}",
            request.target_language
        );

        let backend = Arc::clone(&self.backend);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            // Inner task so a panicking backend still produces a completion
            let call = tokio::spawn(async move { translate(backend.as_ref(), &request).await });
            let outcome = match call.await {
                Ok(outcome) => outcome,
                Err(e) => Err(TranslateError::TaskFailed(e.to_string())),
            };

            if let Err(e) = tx
                .send(ControllerEvent::TranslationFinished {
                    request_id,
                    outcome,
                })
                .await
            {
                tracing::warn!("Dropping completion of request #{request_id}: {e}");
            }
        });
    }

    fn finish_translation(
        &mut self,
        request_id: u64,
        outcome: Result<TranslationResult, TranslateError>,
    ) {
        let Some(flight) = self.in_flight.take_if(|f| f.id == request_id) else {
            tracing::warn!("Ignoring stale completion of request #{request_id}");
            return;
        };

        match outcome {
            Ok(result) => {
                tracing::info!("Request #{request_id} translated");
                self.view
                    .show_output(&flight.target_language, &result.translation);
                self.state = UiState::Success {
                    result,
                    target_language: flight.target_language,
                };
            }
            Err(e) => {
                tracing::error!("Translation error: {e}");
                self.view.show_error(TRANSLATION_FAILED);
                self.view.clear_output();
                self.state = UiState::Error(TRANSLATION_FAILED.to_string());
            }
        }

        self.view.set_loading(false);
    }

    /// Put the rendered translation on the clipboard, no-op when nothing is shown
    pub fn copy_last_translation(&mut self) {
        if self.view.output_text.is_empty() {
            return;
        }

        self.copy_generation += 1;
        let generation = self.copy_generation;
        let text = self.view.output_text.clone();
        let clipboard = Arc::clone(&self.clipboard);
        let tx = self.events_tx.clone();

        tokio::spawn(async move {
            let outcome = clipboard.write_text(&text).await;
            if let Err(e) = tx
                .send(ControllerEvent::CopyFinished { generation, outcome })
                .await
            {
                tracing::warn!("Dropping copy completion: {e}");
            }
        });
    }

    fn confirm_copy(&mut self, generation: u64) {
        self.confirmed_generation = generation;
        self.view.copy_label = COPY_CONFIRMATION.to_string();

        let delay = self.copy_feedback;
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = tx
                .send(ControllerEvent::CopyFeedbackExpired { generation })
                .await
            {
                tracing::warn!("Dropping copy feedback expiry: {e}");
            }
        });
    }
}
