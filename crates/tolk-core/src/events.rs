use tolk_io::clipboard::ClipboardError;
use tolk_translator::TranslateError;
use tolk_types::{TranslationResult, UiEvent};

/// Everything the controller reacts to, in arrival order
#[derive(Debug)]
pub enum ControllerEvent {
    /// Forwarded user action
    Ui(UiEvent),
    TranslationFinished {
        request_id: u64,
        outcome: Result<TranslationResult, TranslateError>,
    },
    CopyFinished {
        generation: u64,
        outcome: Result<(), ClipboardError>,
    },
    CopyFeedbackExpired {
        generation: u64,
    },
}
