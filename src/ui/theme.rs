use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    // Overall background color to paint the full frame
    pub background_color: Color,
    // Chat message styles
    pub user_prefix_style: Style,
    pub user_text_style: Style,
    pub assistant_text_style: Style,

    // Transient status lines
    pub loading_style: Style,
    pub error_style: Style,

    // Chrome
    pub title_style: Style,
    pub border_style: Style,
    pub focused_border_style: Style,
    pub selector_style: Style,
    pub selector_highlight_style: Style,
    pub disabled_style: Style,

    // Input area
    pub input_text_style: Style,
    pub input_cursor_style: Style,
    pub input_cursor_line_style: Style,
    pub placeholder_style: Style,
    pub send_button_style: Style,
}

impl Theme {
    pub fn dark_default() -> Self {
        Theme {
            background_color: Color::Black,
            user_prefix_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Cyan),
            assistant_text_style: Style::default().fg(Color::White),

            loading_style: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
            error_style: Style::default().fg(Color::LightRed),

            title_style: Style::default().fg(Color::Gray),
            border_style: Style::default().fg(Color::DarkGray),
            focused_border_style: Style::default().fg(Color::Cyan),
            selector_style: Style::default().fg(Color::Gray),
            selector_highlight_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            disabled_style: Style::default().fg(Color::DarkGray),

            input_text_style: Style::default().fg(Color::White),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
            input_cursor_line_style: Style::default(),
            placeholder_style: Style::default().fg(Color::DarkGray),
            send_button_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn light() -> Self {
        Theme {
            background_color: Color::White,
            user_prefix_style: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Blue),
            assistant_text_style: Style::default().fg(Color::Black),

            loading_style: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            error_style: Style::default().fg(Color::Red),

            title_style: Style::default().fg(Color::DarkGray),
            border_style: Style::default().fg(Color::Gray),
            focused_border_style: Style::default().fg(Color::Blue),
            selector_style: Style::default().fg(Color::DarkGray),
            selector_highlight_style: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            disabled_style: Style::default().fg(Color::Gray),

            input_text_style: Style::default().fg(Color::Black),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
            input_cursor_line_style: Style::default(),
            placeholder_style: Style::default().fg(Color::Gray),
            send_button_style: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// No colors at all; roles are told apart by prefix and weight only.
    pub fn monochrome() -> Self {
        let plain = Style::default();
        Theme {
            background_color: Color::Reset,
            user_prefix_style: plain.add_modifier(Modifier::BOLD),
            user_text_style: plain,
            assistant_text_style: plain,

            loading_style: plain.add_modifier(Modifier::ITALIC),
            error_style: plain.add_modifier(Modifier::BOLD),

            title_style: plain,
            border_style: plain,
            focused_border_style: plain.add_modifier(Modifier::BOLD),
            selector_style: plain,
            selector_highlight_style: plain.add_modifier(Modifier::REVERSED),
            disabled_style: plain.add_modifier(Modifier::DIM),

            input_text_style: plain,
            input_cursor_style: plain.add_modifier(Modifier::REVERSED),
            input_cursor_line_style: plain,
            placeholder_style: plain.add_modifier(Modifier::DIM),
            send_button_style: plain.add_modifier(Modifier::BOLD),
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "dark" | "default" | "default-dark" => Self::dark_default(),
            "light" => Self::light(),
            "monochrome" | "mono" => Self::monochrome(),
            // Fallback
            _ => Self::dark_default(),
        }
    }
}
