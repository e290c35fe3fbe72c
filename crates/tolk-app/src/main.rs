use std::sync::Arc;
use std::time::Duration;

use tolk_config::Config;
use tolk_io::clipboard::SystemClipboard;
use tolk_translator::GeminiBackend;

mod controller;
mod logging;

use self::controller::AppController;

fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    logging::init();

    match dotenv {
        Ok(path) => tracing::info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => tracing::warn!("Failed to load .env: {e}"),
    }

    let config = Config::new();
    if config.translator.api_key.is_empty() {
        tracing::warn!("API_KEY is not set, translation requests will fail");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let backend = GeminiBackend::new(
        config.translator.api_key.clone(),
        config.translator.api_base.clone(),
        config.translator.model.clone(),
        config.translator.request_timeout_secs.map(Duration::from_secs),
    )?;

    let app = AppController::new(config);
    let mut tasks = app.spawn_tasks(
        runtime.handle(),
        Arc::new(backend),
        Arc::new(SystemClipboard::new()),
    );

    // Slint owns the main thread until the window closes
    let (app_to_ui_rx, ui_to_app_tx) = app.ui_channels();
    let ui_result = tolk_ui::ui_loop(&app.config().ui.languages, app_to_ui_rx, ui_to_app_tx);
    if let Err(e) = &ui_result {
        tracing::error!("UI exited with error: {e}");
    }

    app.shutdown();
    runtime.block_on(async {
        while let Some(result) = tasks.join_next().await {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::error!("task exited with error: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    });

    tracing::info!("Bye");
    ui_result
}
