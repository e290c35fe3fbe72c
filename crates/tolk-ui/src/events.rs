use slint::{ComponentHandle, Weak};
use tolk_types::{AppEvent, UiEvent, ViewModel};

use crate::TranslatorWindow;

/// Apply one backend event, `false` once the window should stop listening
pub fn handle_events(event: AppEvent, window_weak: &Weak<TranslatorWindow>) -> bool {
    let Some(w) = window_weak.upgrade() else {
        return false;
    };

    match event {
        AppEvent::Render(view) => {
            tracing::debug!(
                "[SLINT] Render (loading: {}, output: {})",
                view.loader_visible,
                view.output_visible
            );
            apply_view(&w, &view);
        }
        AppEvent::BackendReady => {
            tracing::debug!("[SLINT] Backend ready");
            w.set_ready(true);
        }
        AppEvent::UiEvent(UiEvent::Close) => {
            let _ = w.hide();
            slint::quit_event_loop().ok();
            return false;
        }
        AppEvent::UiEvent(_) => {}
    }

    true
}

fn apply_view(w: &TranslatorWindow, view: &ViewModel) {
    w.set_submit_enabled(view.submit_enabled);
    w.set_loading(view.loader_visible);

    w.set_error_visible(view.error_visible);
    w.set_error_message(view.error_message.as_str().into());

    w.set_output_visible(view.output_visible);
    w.set_output_language(view.output_language.as_str().into());
    w.set_output_text(view.output_text.as_str().into());

    w.set_copy_label(view.copy_label.as_str().into());
}
