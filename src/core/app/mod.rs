use crate::core::session::Session;
use crate::ui::theme::Theme;

pub mod actions;
pub mod ui_state;

pub use actions::{apply_action, apply_actions, AppAction, AppActionDispatcher, AppCommand};
pub use ui_state::{UiFocus, UiState};

/// Parameters for building an [`App`].
pub struct AppInitConfig {
    pub api_base_url: String,
    pub provider: Option<String>,
    pub model: Option<String>,
}

/// Everything the event loop mutates: conversation state, UI state, and the
/// shared HTTP client used for every submission.
pub struct App {
    pub session: Session,
    pub ui: UiState,
    pub client: reqwest::Client,
    pub api_base_url: String,
}

impl App {
    /// Start a fresh session, then apply any requested provider/model the same
    /// way the selectors would.
    pub fn new(init: AppInitConfig, theme: Theme) -> Self {
        let mut session = Session::new();
        if let Some(provider) = init.provider.as_deref() {
            session.select_provider(provider);
        }
        if let Some(model) = init.model {
            session.select_model(model);
        }

        let mut ui = UiState::new(theme);
        ui.configure_textarea();

        App {
            session,
            ui,
            client: reqwest::Client::new(),
            api_base_url: init.api_base_url,
        }
    }

    /// Copy the input widget's text into the session draft.
    pub fn sync_draft_from_input(&mut self) {
        let text = self.ui.get_input_text();
        self.session.update_draft(text);
    }

    /// Whether the input field accepts edits right now.
    pub fn input_enabled(&self) -> bool {
        !self.session.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_applies_cli_selection_through_session_rules() {
        let app = App::new(
            AppInitConfig {
                api_base_url: "http://localhost:8000".into(),
                provider: Some("anthropic".into()),
                model: None,
            },
            Theme::dark_default(),
        );
        assert_eq!(app.session.selected_provider_id(), "anthropic");
        assert_eq!(app.session.selected_model(), "claude-3-opus-20240229");
    }

    #[test]
    fn new_app_accepts_any_model_override() {
        let app = App::new(
            AppInitConfig {
                api_base_url: "http://localhost:8000".into(),
                provider: Some("gemini".into()),
                model: Some("gemini-ultra".into()),
            },
            Theme::dark_default(),
        );
        assert_eq!(app.session.selected_provider_id(), "gemini");
        assert_eq!(app.session.selected_model(), "gemini-ultra");
    }

    #[test]
    fn sync_draft_copies_input_text() {
        let mut app = crate::utils::test_utils::create_test_app();
        app.ui.set_input_text("Hello\nworld");
        app.sync_draft_from_input();
        assert_eq!(app.session.pending_input(), "Hello\nworld");
    }
}
