use crate::domain::Recipe;
use crate::ui::cooking::{CookingState, CookingView};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_GREEN, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_BUSY,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render(frame: &mut Frame<'_>, area: Rect, cooking: &CookingState) {
    let CookingState::Open {
        recipe,
        view,
        step,
        checklist_cursor,
        reading,
    } = cooking
    else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            recipe.title.clone(),
            Style::default().fg(BRAND_GREEN).add_modifier(Modifier::BOLD),
        )),
        tab_line(*view),
        Line::from(""),
    ];
    match view {
        CookingView::Checklist => lines.extend(checklist_lines(recipe, *checklist_cursor)),
        CookingView::Steps => lines.extend(step_lines(recipe, *step, *reading)),
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Cooking Mode ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);
}

fn tab_line(view: CookingView) -> Line<'static> {
    let active = Style::default()
        .fg(BRAND_GREEN)
        .bg(ACTIVE_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(MUTED_TEXT);
    let (checklist, steps) = match view {
        CookingView::Checklist => (active, inactive),
        CookingView::Steps => (inactive, active),
    };
    Line::from(vec![
        Span::styled(" Checklist ", checklist),
        Span::raw(" "),
        Span::styled(" Cooking ", steps),
    ])
}

fn checklist_lines(recipe: &Recipe, cursor: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "Ingredients",
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    ))];
    for (idx, ingredient) in recipe.ingredients.iter().enumerate() {
        let mut line = Line::from(vec![
            Span::styled(" • ", Style::default().fg(BRAND_GREEN)),
            Span::styled(ingredient.name.clone(), Style::default().fg(HEADER_TEXT)),
            Span::styled(
                format!("  {}", ingredient.quantity),
                Style::default().fg(MUTED_TEXT),
            ),
        ]);
        if idx == cursor {
            line.spans
                .push(Span::styled("   [A] + list", Style::default().fg(BRAND_GREEN)));
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Let's Start Cooking",
        Style::default().fg(BRAND_GREEN).add_modifier(Modifier::BOLD),
    )));
    lines
}

fn step_lines(recipe: &Recipe, step: usize, reading: bool) -> Vec<Line<'static>> {
    let total = recipe.steps.len();
    let text = recipe.steps.get(step).cloned().unwrap_or_default();
    let narrate = if reading {
        Span::styled("🔊 Reading...", Style::default().fg(STATUS_BUSY))
    } else {
        Span::styled("[R] Read aloud", Style::default().fg(BRAND_GREEN))
    };

    let mut controls = Vec::new();
    if step > 0 {
        controls.push(Span::styled("[←] Previous  ", Style::default().fg(HEADER_TEXT)));
    }
    if step + 1 < total {
        controls.push(Span::styled("[→] Next Step", Style::default().fg(HEADER_TEXT)));
    } else {
        controls.push(Span::styled(
            "[F] Finish Cooking",
            Style::default().fg(BRAND_GREEN).add_modifier(Modifier::BOLD),
        ));
    }

    vec![
        Line::from(vec![
            Span::styled(
                format!("Step {} of {}", step + 1, total),
                Style::default().fg(MUTED_TEXT),
            ),
            Span::raw("   "),
            narrate,
        ]),
        Line::from(""),
        Line::from(Span::styled(
            text,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(controls),
    ]
}
