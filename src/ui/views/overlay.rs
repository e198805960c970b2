use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{BRAND_GREEN, MUTED_TEXT, POPUP_BORDER};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Blocking overlay shown while a gateway call is outstanding.
pub fn render(frame: &mut Frame<'_>, area: Rect, tick: usize) {
    let lines = vec![
        Line::from(Span::styled(
            format!("{} Analyzing your Fridge...", SPINNER[tick % SPINNER.len()]),
            Style::default().fg(BRAND_GREEN).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Identifying ingredients and crafting recipes",
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    let popup = centered_rect_by_size(area, 50, 4);
    frame.render_widget(Clear, popup);
    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER)),
    );
    frame.render_widget(widget, popup);
}
