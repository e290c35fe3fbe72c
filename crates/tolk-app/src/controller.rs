use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::runtime::Handle;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tolk_config::Config;
use tolk_core::{TranslationController, event_loop};
use tolk_io::clipboard::ClipboardWriter;
use tolk_translator::TranslationBackend;
use tolk_types::{AppEvent, UiEvent};

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(64), // render snapshots
            ui_to_app: kanal::bounded_async(64), // UI interactions
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    config: Config,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(config: Config) -> Self {
        Self {
            channels: ChannelSet::new(),
            config,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn spawn_tasks(
        &self,
        runtime: &Handle,
        backend: Arc<dyn TranslationBackend>,
        clipboard: Arc<dyn ClipboardWriter>,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        let metadata = backend.metadata();
        tracing::info!("Using {} ({})", metadata.name, metadata.model);

        // Translation controller
        let controller = TranslationController::new(backend, clipboard, &self.config.ui);
        tasks.spawn_on(
            event_loop(
                controller,
                self.channels.ui_to_app.1.clone(),
                self.channels.app_to_ui.0.clone(),
                self.cancel_token.child_token(),
            ),
            runtime,
        );

        // Ctrl+C closes the window like the close button
        let app_to_ui_tx = self.channels.app_to_ui.0.clone();
        let cancel = self.cancel_token.clone();
        tasks.spawn_on(
            async move {
                tokio::select! {
                    result = tokio::signal::ctrl_c() => {
                        result?;
                        tracing::info!("Shutdown requested");
                        let _ = app_to_ui_tx.send(AppEvent::UiEvent(UiEvent::Close)).await;
                        cancel.cancel();
                    }
                    _ = cancel.cancelled() => {}
                }
                Ok::<(), anyhow::Error>(())
            },
            runtime,
        );

        tasks
    }

    /// Channel ends owned by the UI thread
    pub fn ui_channels(&self) -> (AsyncReceiver<AppEvent>, AsyncSender<AppEvent>) {
        (
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
        )
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::timeout;
    use tolk_io::clipboard::ClipboardError;
    use tolk_translator::{ProviderMetadata, TranslateError};
    use tolk_types::TranslationRequest;

    use super::*;

    struct EchoBackend;

    #[async_trait::async_trait]
    impl TranslationBackend for EchoBackend {
        async fn generate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
            Ok(format!(
                r#"{{"translation": "[{}] {}"}}"#,
                request.target_language, request.source_text
            ))
        }

        fn metadata(&self) -> ProviderMetadata {
            ProviderMetadata {
                name: "echo".to_string(),
                model: "none".to_string(),
            }
        }
    }

    struct NullClipboard;

    #[async_trait::async_trait]
    impl ClipboardWriter for NullClipboard {
        async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn wired_tasks_translate_and_shut_down() {
        let app = AppController::new(Config::default());
        let mut tasks = app.spawn_tasks(
            &Handle::current(),
            Arc::new(EchoBackend),
            Arc::new(NullClipboard),
        );
        let (app_to_ui_rx, ui_to_app_tx) = app.ui_channels();

        ui_to_app_tx
            .send(AppEvent::UiEvent(UiEvent::Translate {
                text: "hello".to_string(),
                language: "German".to_string(),
            }))
            .await
            .unwrap();

        let rendered = timeout(Duration::from_secs(2), async {
            loop {
                match app_to_ui_rx.recv().await {
                    Ok(AppEvent::Render(view)) if view.output_visible => return view,
                    Ok(_) => continue,
                    Err(e) => panic!("Channel error: {}", e),
                }
            }
        })
        .await
        .expect("Timeout waiting for translation");

        assert_eq!(rendered.output_text, "[German] hello");

        app.shutdown();
        let drained = timeout(Duration::from_secs(2), async {
            while let Some(result) = tasks.join_next().await {
                result.unwrap().unwrap();
            }
        })
        .await;
        assert!(drained.is_ok(), "tasks did not stop after shutdown");
    }
}
