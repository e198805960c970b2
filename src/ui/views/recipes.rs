use crate::domain::{Difficulty, Recipe};
use crate::ui::app::App;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_GREEN, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_BUSY,
    STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let pantry = app.pantry();
    let lines = if pantry.recipes.is_empty() {
        empty_state()
    } else {
        pantry
            .recipes
            .iter()
            .enumerate()
            .flat_map(|(idx, recipe)| card_lines(recipe, idx == pantry.recipe_cursor))
            .collect()
    };

    let title = format!(" Recipes · {} ", pantry.dietary.label());
    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);
}

fn empty_state() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "No recipes yet",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Upload a photo of your fridge to get started.",
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[F] Go to Fridge",
            Style::default().fg(BRAND_GREEN),
        )),
    ]
}

fn card_lines(recipe: &Recipe, highlighted: bool) -> Vec<Line<'static>> {
    let mut title_spans = vec![
        Span::styled(
            if highlighted { "▶ " } else { "  " },
            Style::default().fg(BRAND_GREEN),
        ),
        Span::styled(
            recipe.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", recipe.difficulty),
            Style::default().fg(difficulty_color(recipe.difficulty)),
        ),
    ];
    for initial in recipe.tag_initials() {
        title_spans.push(Span::raw(" "));
        title_spans.push(Span::styled(
            format!("({})", initial),
            Style::default().fg(BRAND_GREEN),
        ));
    }

    let mut lines = vec![
        Line::from(title_spans),
        Line::from(Span::styled(
            format!("    {}", recipe.description),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(Span::styled(
            format!(
                "    ⏱ {} min   🔥 {} kcal   {} steps",
                recipe.prep_time,
                recipe.calories,
                recipe.step_count()
            ),
            Style::default().fg(HEADER_TEXT),
        )),
    ];
    if highlighted {
        let highlight = Style::default().bg(ACTIVE_HIGHLIGHT);
        lines = lines.into_iter().map(|line| line.style(highlight)).collect();
    }
    lines.push(Line::from(""));
    lines
}

fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => STATUS_OK,
        Difficulty::Medium => STATUS_BUSY,
        Difficulty::Hard => STATUS_ERROR,
    }
}
