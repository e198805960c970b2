use crate::ui::app::{App, Tab};
use crate::ui::cooking::{CookingState, CookingView};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App, area: Rect) -> Paragraph<'static> {
        let hints = hints_for(app);
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn hints_for(app: &App) -> &'static str {
    if app.is_busy() {
        return " Analyzing... │ Ctrl+Q: Quit";
    }
    if app.path_input().is_some() {
        return " Type or drop an image path │ Enter: Analyze │ Esc: Cancel";
    }
    match app.cooking() {
        CookingState::Open {
            view: CookingView::Checklist,
            ..
        } => " ↑↓: Move │ A: Add to list │ Enter: Start Cooking │ Tab: Steps │ Esc: Close",
        CookingState::Open {
            view: CookingView::Steps,
            ..
        } => " ←→: Step │ R: Read aloud │ F: Finish │ Tab: Checklist │ Esc: Close",
        CookingState::Closed => match app.tab() {
            Tab::Fridge => {
                " O: Open image │ Ctrl+V: Paste image │ X: Clear │ [ ]: Diet │ 1-3: Tabs │ Q: Quit"
            }
            Tab::Recipes => " ↑↓: Move │ Enter: Cook │ F: Go to Fridge │ [ ]: Diet │ 1-3: Tabs │ Q: Quit",
            Tab::Shopping => " ↑↓: Move │ D: Remove │ C: Clear all │ 1-3: Tabs │ Q: Quit",
        },
    }
}
