use crate::core::app::{App, UiFocus};
use crate::core::builtin_providers::{builtin_providers, provider_index};
use crate::core::message::Role;
use crate::core::session::Session;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LOADING_TEXT: &str = "Thinking...";
const SEND_LABEL: &str = "[ Send ]";
const MAX_INPUT_LINES: u16 = 5;

pub fn ui(f: &mut Frame, app: &App) {
    let theme = &app.ui.theme;
    let input_area_height = input_line_count(app).clamp(1, MAX_INPUT_LINES);

    f.render_widget(
        Block::default().style(Style::default().bg(theme.background_color)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(input_area_height + 2), // +2 for borders
        ])
        .split(f.area());

    render_provider_selector(f, app, chunks[0]);
    render_model_selector(f, app, chunks[1]);
    render_transcript(f, app, chunks[2]);
    render_input_row(f, app, chunks[3]);
}

fn selector_block<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let border_style = if focused {
        theme.focused_border_style
    } else {
        theme.border_style
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(title, theme.title_style))
}

fn render_provider_selector(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let titles: Vec<Line> = builtin_providers()
        .iter()
        .map(|p| Line::from(p.display_name.as_str()))
        .collect();

    let mut tabs = Tabs::new(titles)
        .block(selector_block(
            "Provider",
            app.ui.focus == UiFocus::Provider,
            theme,
        ))
        .style(theme.selector_style)
        .highlight_style(theme.selector_highlight_style);
    if let Some(index) = provider_index(app.session.selected_provider_id()) {
        tabs = tabs.select(index);
    }

    f.render_widget(tabs, area);
}

/// Titles for the model selector and the index to highlight.
///
/// A model picked outside the provider's list is appended so the current
/// selection is always visible.
pub fn model_selector_entries(session: &Session) -> (Vec<String>, Option<usize>) {
    let mut models: Vec<String> = session
        .selected_provider()
        .map(|p| p.models.clone())
        .unwrap_or_default();

    let selected = session.selected_model();
    let index = match models.iter().position(|m| m == selected) {
        Some(index) => Some(index),
        None if !selected.is_empty() => {
            models.push(selected.to_string());
            Some(models.len() - 1)
        }
        None => None,
    };
    (models, index)
}

fn render_model_selector(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let (models, selected) = model_selector_entries(&app.session);

    let mut tabs = Tabs::new(models)
        .block(selector_block("Model", app.ui.focus == UiFocus::Model, theme))
        .style(theme.selector_style)
        .highlight_style(theme.selector_highlight_style);
    if let Some(index) = selected {
        tabs = tabs.select(index);
    }

    f.render_widget(tabs, area);
}

const USER_PREFIX: &str = "You: ";
const USER_INDENT: &str = "     ";

/// Transcript lines followed by the transient loading and error lines,
/// already wrapped to `width` columns so one line is one screen row.
pub fn build_display_lines(session: &Session, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width.max(1));
    let user_width = width.saturating_sub(USER_PREFIX.width()).max(1);
    let mut lines = Vec::new();

    for msg in session.messages() {
        match msg.role {
            Role::User => {
                let rows = msg
                    .content
                    .split('\n')
                    .flat_map(|line| wrap_text(line, user_width));
                for (i, row) in rows.enumerate() {
                    let lead = if i == 0 {
                        Span::styled(USER_PREFIX, theme.user_prefix_style)
                    } else {
                        Span::raw(USER_INDENT)
                    };
                    lines.push(Line::from(vec![
                        lead,
                        Span::styled(row, theme.user_text_style),
                    ]));
                }
            }
            Role::Assistant => {
                for content_line in msg.content.split('\n') {
                    for row in wrap_text(content_line, width) {
                        lines.push(Line::from(Span::styled(row, theme.assistant_text_style)));
                    }
                }
            }
        }
        lines.push(Line::from(""));
    }

    if session.is_loading() {
        lines.push(Line::from(Span::styled(LOADING_TEXT, theme.loading_style)));
    }
    if let Some(error) = session.last_error() {
        for row in wrap_text(&format!("Error: {error}"), width) {
            lines.push(Line::from(Span::styled(row, theme.error_style)));
        }
    }

    lines
}

/// Greedy word wrap of a single line into rows at most `width` columns wide.
///
/// Leading indentation is kept on the first row and runs of inner whitespace
/// collapse to one space. A word wider than a row is split between
/// characters. Empty input still yields one empty row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    let body = text.trim_start();
    let indent = &text[..text.len() - body.len()];
    let mut current = String::new();
    let mut current_width = 0;
    if indent.width() < width {
        current.push_str(indent);
        current_width = indent.width();
    }
    let mut row_has_word = false;

    for word in body.split_whitespace() {
        let word_width = word.width();
        if row_has_word {
            if current_width + 1 + word_width <= width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
                continue;
            }
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        row_has_word = true;
        if current_width + word_width <= width {
            current.push_str(word);
            current_width += word_width;
            continue;
        }
        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if current_width > 0 && current_width + ch_width > width {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

fn render_transcript(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let lines = build_display_lines(&app.session, theme, area.width);

    let title = format!(
        "palaver v{} - {} ({}) • {}",
        env!("CARGO_PKG_VERSION"),
        app.session
            .selected_provider()
            .map(|p| p.display_name.as_str())
            .unwrap_or_else(|| app.session.selected_provider_id()),
        app.session.selected_model(),
        app.api_base_url
    );

    // Keep the newest lines in view
    let available_height = area.height.saturating_sub(1); // Account for title
    let total_lines = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let scroll_offset = total_lines.saturating_sub(available_height);

    let messages = Paragraph::new(lines)
        .block(Block::default().title(Span::styled(title, theme.title_style)))
        .scroll((scroll_offset, 0));

    f.render_widget(messages, area);
}

fn render_input_row(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let loading = app.session.is_loading();
    let focused = app.ui.is_input_focused();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(SEND_LABEL.len() as u16 + 2),
        ])
        .split(area);

    let input_title = if loading {
        "Waiting for reply (Tab to switch, Ctrl+C to quit)"
    } else {
        "Message (Enter to send, Alt+Enter for new line, Tab to switch, Ctrl+C to quit)"
    };
    let border_style = if loading {
        theme.disabled_style
    } else if focused {
        theme.focused_border_style
    } else {
        theme.border_style
    };

    let mut input = app.ui.textarea().clone();
    input.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(input_title, theme.title_style)),
    );
    if loading {
        input.set_style(theme.disabled_style);
    }
    if loading || !focused {
        input.set_cursor_style(Style::default());
    }
    f.render_widget(&input, columns[0]);

    let button_style = if loading {
        theme.disabled_style
    } else {
        theme.send_button_style
    };
    let button = Paragraph::new(Span::styled(SEND_LABEL, button_style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    f.render_widget(button, columns[1]);
}

fn input_line_count(app: &App) -> u16 {
    u16::try_from(app.ui.textarea().lines().len()).unwrap_or(MAX_INPUT_LINES)
}
