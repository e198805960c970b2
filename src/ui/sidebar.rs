use crate::domain::DietaryRestriction;
use crate::ui::app::{App, Tab};
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BRAND_GREEN, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Tab switcher and dietary filter.
pub struct Sidebar;

impl Sidebar {
    pub fn widget(app: &App) -> Paragraph<'static> {
        let mut lines = Vec::new();
        lines.push(Line::from(Span::styled(
            " Navigate",
            Style::default().fg(MUTED_TEXT),
        )));
        for (idx, tab) in Tab::ALL.iter().enumerate() {
            let mut label = format!(" {} {}", idx + 1, tab.label());
            if *tab == Tab::Shopping && !app.shopping().is_empty() {
                label.push_str(&format!(" ({})", app.shopping().len()));
            }
            lines.push(selectable_line(label, *tab == app.tab()));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Dietary  [ ]",
            Style::default().fg(MUTED_TEXT),
        )));
        for restriction in DietaryRestriction::ALL {
            let selected = restriction == app.pantry().dietary;
            let marker = if selected { "◉" } else { "○" };
            lines.push(selectable_line(
                format!(" {} {}", marker, restriction.label()),
                selected,
            ));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn selectable_line(text: String, selected: bool) -> Line<'static> {
    if selected {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(BRAND_GREEN)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(text, Style::default().fg(HEADER_TEXT)))
    }
}
