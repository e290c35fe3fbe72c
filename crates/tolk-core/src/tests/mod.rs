
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tolk_config::ui::UiConfig;
use tolk_io::clipboard::{ClipboardError, ClipboardWriter};
use tolk_translator::{ProviderMetadata, TranslateError, TranslationBackend};
use tolk_types::TranslationRequest;

use crate::TranslationController;

pub(crate) enum Reply {
    Payload(&'static str),
    Reject,
    Panic,
}

/// Backend answering from a script, one reply per call
pub(crate) struct ScriptedBackend {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<TranslationRequest>>,
    calls: AtomicUsize,
}

impl ScriptedBackend {
    pub(crate) fn new(replies: impl IntoIterator<Item = Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn requests(&self) -> Vec<TranslationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TranslationBackend for ScriptedBackend {
    async fn generate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Reply::Payload(payload)) => Ok(payload.to_string()),
            Some(Reply::Reject) | None => Err(TranslateError::ApiError("HTTP 503".to_string())),
            Some(Reply::Panic) => panic!("backend blew up"),
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "scripted".to_string(),
            model: "test".to_string(),
        }
    }
}

/// Clipboard that remembers what was written
#[derive(Default)]
pub(crate) struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingClipboard {
    pub(crate) fn working() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn denied() -> Arc<Self> {
        Arc::new(Self {
            writes: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub(crate) fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ClipboardWriter for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::WriteFailed("permission denied".to_string()));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

pub(crate) fn controller(
    backend: Arc<ScriptedBackend>,
    clipboard: Arc<RecordingClipboard>,
) -> TranslationController {
    TranslationController::new(backend, clipboard, &UiConfig::default())
}

/// Wait for the next queued event and apply it
pub(crate) async fn settle(controller: &mut TranslationController) {
    let event = controller.next_event().await.expect("event queue closed");
    controller.handle_event(event);
}
