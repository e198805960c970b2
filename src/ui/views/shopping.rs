use crate::ui::app::App;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BRAND_GREEN, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let shopping = app.shopping();
    let mut lines = vec![
        Line::from(Span::styled(
            shopping.summary(),
            Style::default().fg(BRAND_GREEN).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if shopping.is_empty() {
        lines.push(Line::from(Span::styled(
            "Your list is empty. Add missing ingredients from a recipe.",
            Style::default().fg(MUTED_TEXT),
        )));
    }

    for (idx, item) in shopping.items.iter().enumerate() {
        let mut line = Line::from(vec![
            Span::styled(" ☐ ", Style::default().fg(MUTED_TEXT)),
            Span::styled(item.name.clone(), Style::default().fg(HEADER_TEXT)),
            Span::styled(format!("  {}", item.quantity), Style::default().fg(MUTED_TEXT)),
        ]);
        if idx == shopping.focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Shopping List ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);
}
