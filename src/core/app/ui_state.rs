use tui_textarea::TextArea;

use crate::ui::theme::Theme;

/// Which control receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiFocus {
    /// Provider selector; arrows change the provider.
    Provider,

    /// Model selector; arrows change the model within the provider.
    Model,

    /// Message input field.
    Input,
}

impl UiFocus {
    pub fn next(self) -> Self {
        match self {
            UiFocus::Provider => UiFocus::Model,
            UiFocus::Model => UiFocus::Input,
            UiFocus::Input => UiFocus::Provider,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            UiFocus::Provider => UiFocus::Input,
            UiFocus::Model => UiFocus::Provider,
            UiFocus::Input => UiFocus::Model,
        }
    }
}

pub struct UiState {
    pub focus: UiFocus,
    pub theme: Theme,
    pub exit_requested: bool,
    textarea: TextArea<'static>,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            focus: UiFocus::Input,
            theme,
            exit_requested: false,
            textarea: TextArea::default(),
        }
    }

    pub(crate) fn configure_textarea(&mut self) {
        let textarea_style = self
            .theme
            .input_text_style
            .patch(ratatui::style::Style::default().bg(self.theme.background_color));
        self.textarea.set_style(textarea_style);
        self.textarea
            .set_cursor_style(self.theme.input_cursor_style);
        self.textarea
            .set_cursor_line_style(self.theme.input_cursor_line_style);
        self.textarea.set_placeholder_text("Type your message...");
        self.textarea
            .set_placeholder_style(self.theme.placeholder_style);
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn get_input_text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn set_input_text(&mut self, text: &str) {
        self.textarea = TextArea::from(text.split('\n').map(str::to_string));
        self.configure_textarea();
        self.textarea.move_cursor(tui_textarea::CursorMove::Bottom);
        self.textarea.move_cursor(tui_textarea::CursorMove::End);
    }

    pub fn clear_input(&mut self) {
        self.textarea = TextArea::default();
        self.configure_textarea();
    }

    /// Run an edit against the textarea. Returns whether the text changed.
    pub fn apply_textarea_edit<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut TextArea<'static>) -> bool,
    {
        f(&mut self.textarea)
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn focus_input(&mut self) {
        self.focus = UiFocus::Input;
    }

    pub fn is_input_focused(&self) -> bool {
        self.focus == UiFocus::Input
    }
}
