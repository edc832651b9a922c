use ratatui::style::{Color, Modifier, Style};

/// Colours for every widget, built once at startup and handed to the renderer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) title: Style,
    pub(crate) border: Style,
    pub(crate) item_title: Style,
    pub(crate) item_description: Style,
    pub(crate) selected: Style,
    pub(crate) status: Style,
    pub(crate) filter: Style,
    pub(crate) muted: Style,
    pub(crate) label: Style,
    pub(crate) modal: Style,
    pub(crate) warning: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Rgb(0xFF, 0xFD, 0xF5))
                .bg(Color::Rgb(0x25, 0xA0, 0x65))
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
            item_title: Style::default().fg(Color::White),
            item_description: Style::default().fg(Color::Gray),
            selected: Style::default()
                .fg(Color::Rgb(0xEE, 0x6F, 0xF8))
                .add_modifier(Modifier::BOLD),
            status: Style::default().fg(Color::Rgb(0x04, 0xB5, 0x75)),
            filter: Style::default().fg(Color::Yellow),
            muted: Style::default().fg(Color::DarkGray),
            label: Style::default().add_modifier(Modifier::BOLD),
            modal: Style::default().fg(Color::Yellow),
            warning: Style::default().fg(Color::Red),
        }
    }
}
