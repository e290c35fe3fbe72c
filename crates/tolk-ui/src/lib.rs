use std::rc::Rc;

use kanal::{AsyncReceiver, AsyncSender};
use slint::{ComponentHandle, SharedString, VecModel};
use tolk_types::{AppEvent, UiEvent};

pub mod events;

slint::include_modules!();

/// Build the window and run the slint event loop on the calling thread.
///
/// Returns once the window is closed.
pub fn ui_loop(
    languages: &[String],
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let window = TranslatorWindow::new()?;
    let window_weak = window.as_weak();

    let languages: Vec<SharedString> = languages
        .iter()
        .map(|l| SharedString::from(l.as_str()))
        .collect();
    window.set_languages(Rc::new(VecModel::from(languages)).into());

    {
        let tx = ui_to_app_tx.clone();
        window.on_translate(move |text, language| {
            send_to_backend(
                &tx,
                UiEvent::Translate {
                    text: text.to_string(),
                    language: language.to_string(),
                },
            );
        });
    }

    {
        let tx = ui_to_app_tx.clone();
        window.on_copy(move || send_to_backend(&tx, UiEvent::Copy));
    }

    {
        // The event loop stops right after this, so no await here
        let tx = ui_to_app_tx.clone();
        window.window().on_close_requested(move || {
            let _ = tx.try_send(AppEvent::UiEvent(UiEvent::Close));
            slint::CloseRequestResponse::HideWindow
        });
    }

    // Render whatever the backend sends
    slint::spawn_local(async move {
        while let Ok(event) = app_to_ui_rx.recv().await {
            if !events::handle_events(event, &window_weak) {
                break;
            }
        }
        tracing::debug!("[SLINT] Backend channel closed");
    })?;

    window.run()?;

    Ok(())
}

fn send_to_backend(tx: &AsyncSender<AppEvent>, event: UiEvent) {
    let tx = tx.clone();
    let spawned = slint::spawn_local(async move {
        if let Err(e) = tx.send(AppEvent::UiEvent(event)).await {
            tracing::error!("[SLINT] Failed to send UI event: {}", e);
        }
    });

    if let Err(e) = spawned {
        tracing::error!("[SLINT] Failed to schedule UI event: {}", e);
    }
}
