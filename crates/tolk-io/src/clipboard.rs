use arboard::Clipboard;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),

    #[error("Clipboard task failed: {0}")]
    TaskFailed(String),
}

/// Destination for copied text
#[async_trait::async_trait]
pub trait ClipboardWriter: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard.
///
/// A fresh `arboard::Clipboard` is opened for every write on the blocking
/// pool, the handle is not `Send` on every platform.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_string();

        tokio::task::spawn_blocking(move || {
            let mut clipboard =
                Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
            tracing::debug!("[CLIPBOARD] text written");
            Ok(())
        })
        .await
        .map_err(|e| ClipboardError::TaskFailed(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_describe_their_cause() {
        let err = ClipboardError::Unavailable("no display".to_string());
        assert_eq!(err.to_string(), "Clipboard unavailable: no display");

        let err = ClipboardError::WriteFailed("denied".to_string());
        assert_eq!(err.to_string(), "Clipboard write failed: denied");
    }
}
