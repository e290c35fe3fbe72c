use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use tolk_types::{AppEvent, UiEvent};

use crate::controller::TranslationController;
use crate::events::ControllerEvent;

/// Drive the controller until the UI closes or `cancel` fires.
///
/// User actions from `ui_to_app_rx` are forwarded into the controller's own
/// queue next to the background completions. Every change to the view is
/// pushed to the UI as a `Render` snapshot.
pub async fn event_loop(
    mut controller: TranslationController,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let forwarder = tokio::spawn(forward_ui_events(
        ui_to_app_rx,
        controller.sender(),
        cancel.child_token(),
    ));
    let events = controller.receiver();

    app_to_ui_tx
        .send(AppEvent::Render(controller.view().clone()))
        .await?;
    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = events.recv() => event?,
        };

        if matches!(event, ControllerEvent::Ui(UiEvent::Close)) {
            tracing::info!("[EVENT_LOOP] Close requested");
            break;
        }

        tracing::debug!("[EVENT_LOOP] {event:?}");
        let before = controller.view().clone();
        controller.handle_event(event);

        if controller.view() != &before {
            app_to_ui_tx
                .send(AppEvent::Render(controller.view().clone()))
                .await?;
        }
    }

    forwarder.abort();
    Ok(())
}

/// Move user actions from the UI channel onto the controller queue
async fn forward_ui_events(
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    controller_tx: AsyncSender<ControllerEvent>,
    cancel: CancellationToken,
) {
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_to_app_rx.recv() => event,
        };

        match event {
            Ok(AppEvent::UiEvent(ui_event)) => {
                if controller_tx.send(ControllerEvent::Ui(ui_event)).await.is_err() {
                    break;
                }
            }
            Ok(AppEvent::Render(_) | AppEvent::BackendReady) => {
                // Backend to UI only
            }
            Err(_) => {
                // UI is gone, treat it like a close
                tracing::info!("[EVENT_LOOP] UI channel closed");
                let _ = controller_tx.send(ControllerEvent::Ui(UiEvent::Close)).await;
                break;
            }
        }
    }
}
