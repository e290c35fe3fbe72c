pub const DEFAULT_COPY_LABEL: &str = "Copy";
pub const COPY_CONFIRMATION: &str = "Copied!";
pub const TRANSLATION_FAILED: &str =
    "Sorry, an error occurred during translation. Please try again.";
pub const CLIPBOARD_FAILED: &str = "Could not copy text to clipboard.";

/// Everything the window renders.
///
/// The controller owns one of these and the UI only ever receives clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub submit_enabled: bool,
    pub loader_visible: bool,
    pub error_visible: bool,
    pub error_message: String,
    pub output_visible: bool,
    pub output_language: String,
    pub output_text: String,
    pub copy_label: String,
}

impl ViewModel {
    pub fn new(copy_label: impl Into<String>) -> Self {
        Self {
            submit_enabled: true,
            loader_visible: false,
            error_visible: false,
            error_message: String::new(),
            output_visible: false,
            output_language: String::new(),
            output_text: String::new(),
            copy_label: copy_label.into(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loader_visible
    }

    /// Loading disables submit and swaps the button text for the spinner
    pub fn set_loading(&mut self, loading: bool) {
        self.submit_enabled = !loading;
        self.loader_visible = loading;
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_message = message.into();
        self.error_visible = true;
    }

    pub fn hide_error(&mut self) {
        self.error_visible = false;
    }

    pub fn clear_output(&mut self) {
        self.output_text.clear();
        self.output_language.clear();
        self.output_visible = false;
    }

    pub fn show_output(&mut self, language: &str, text: &str) {
        self.output_language = language.to_string();
        self.output_text = text.to_string();
        self.output_visible = true;
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new(DEFAULT_COPY_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_view_is_idle() {
        let view = ViewModel::default();
        assert!(view.submit_enabled);
        assert!(!view.is_loading());
        assert!(!view.error_visible);
        assert!(!view.output_visible);
        assert_eq!(view.copy_label, DEFAULT_COPY_LABEL);
    }

    #[test]
    fn loading_toggles_submit_and_loader_together() {
        let mut view = ViewModel::default();

        view.set_loading(true);
        assert!(!view.submit_enabled);
        assert!(view.loader_visible);

        view.set_loading(false);
        assert!(view.submit_enabled);
        assert!(!view.loader_visible);
    }

    #[test]
    fn clear_output_hides_panel_and_empties_text() {
        let mut view = ViewModel::default();
        view.show_output("German", "Hallo");
        assert!(view.output_visible);

        view.clear_output();
        assert!(!view.output_visible);
        assert!(view.output_text.is_empty());
        assert!(view.output_language.is_empty());
    }

    #[test]
    fn hiding_error_keeps_last_message() {
        let mut view = ViewModel::default();
        view.show_error("boom");
        view.hide_error();
        assert!(!view.error_visible);
        assert_eq!(view.error_message, "boom");
    }
}
