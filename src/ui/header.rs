use crate::ui::app::App;
use crate::ui::theme::{
    BRAND_GREEN, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_BUSY, STATUS_ERROR,
    STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let status_color = if !app.is_credential_configured() {
            STATUS_ERROR
        } else if app.is_busy() {
            STATUS_BUSY
        } else {
            STATUS_OK
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "FridgeChef",
                Style::default().fg(BRAND_GREEN).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("● ", Style::default().fg(status_color)),
            Span::styled(app.status_line(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Diet: {}", app.pantry().dietary.label()), text_style),
        ];
        if let Some(error) = app.last_error() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(error.to_string(), Style::default().fg(STATUS_ERROR)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
