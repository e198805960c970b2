use crate::ui::app::App;
use crate::ui::theme::{BRAND_GREEN, CHIP_BG, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let mut lines = vec![
        Line::from(Span::styled(
            "What's in your fridge?",
            Style::default().fg(BRAND_GREEN).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Press O to type an image path, drop a photo onto the terminal, or Ctrl+V to paste one.",
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
    ];

    let ingredients = &app.pantry().ingredients;
    if ingredients.is_empty() {
        lines.push(Line::from(Span::styled(
            "No ingredients detected yet.",
            Style::default().fg(MUTED_TEXT),
        )));
    } else {
        lines.push(Line::from(vec![
            Span::styled(
                format!("Detected Ingredients ({})", ingredients.len()),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("   X: Clear all", Style::default().fg(MUTED_TEXT)),
        ]));
        lines.push(chip_line(ingredients));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" My Fridge ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);

    if let Some(input) = app.path_input() {
        render_prompt(frame, area, input);
    }
}

fn chip_line(ingredients: &[String]) -> Line<'static> {
    let chip_style = Style::default().fg(HEADER_TEXT).bg(CHIP_BG);
    let spans: Vec<Span<'static>> = ingredients
        .iter()
        .flat_map(|item| {
            [
                Span::styled(format!(" {} ", item), chip_style),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn render_prompt(frame: &mut Frame<'_>, area: Rect, input: &str) {
    let height = 3.min(area.height);
    let prompt_area = Rect {
        x: area.x + 1,
        y: area.y + area.height.saturating_sub(height + 1),
        width: area.width.saturating_sub(2),
        height,
    };
    frame.render_widget(Clear, prompt_area);
    let widget = Paragraph::new(Line::from(vec![
        Span::styled(input.to_string(), Style::default().fg(HEADER_TEXT)),
        Span::styled("█", Style::default().fg(BRAND_GREEN)),
    ]))
    .block(
        Block::default()
            .title(" Image path ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER)),
    );
    frame.render_widget(widget, prompt_area);
}
