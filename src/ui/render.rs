use crate::ui::app::{App, Tab};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_columns, layout_regions};
use crate::ui::sidebar::Sidebar;
use crate::ui::views::{cooking, fridge, overlay, recipes, shopping};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);

    let (sidebar, main) = body_columns(body);
    frame.render_widget(Sidebar::widget(app), sidebar);

    if app.cooking().is_open() {
        cooking::render(frame, main, app.cooking());
    } else {
        match app.tab() {
            Tab::Fridge => fridge::render(frame, main, app),
            Tab::Recipes => recipes::render(frame, main, app),
            Tab::Shopping => shopping::render(frame, main, app),
        }
    }

    frame.render_widget(Footer::new().widget(app, footer), footer);

    if app.is_busy() {
        overlay::render(frame, body, app.ticks());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Difficulty, Ingredient, Recipe};
    use crate::ui::cooking::CookingIntent;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_string(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn recipe() -> Recipe {
        Recipe {
            id: "r1".to_string(),
            title: "Spinach Omelette".to_string(),
            description: "Quick".to_string(),
            difficulty: Difficulty::Easy,
            prep_time: 10,
            calories: 320,
            ingredients: vec![Ingredient {
                name: "eggs".to_string(),
                quantity: "3".to_string(),
            }],
            steps: vec!["Whisk the eggs".to_string(), "Cook".to_string()],
            dietary_tags: vec!["vegetarian".to_string()],
        }
    }

    #[test]
    fn empty_recipes_offer_fridge_link() {
        let mut app = App::new(true);
        app.set_tab(Tab::Recipes);
        let screen = render_to_string(&app);
        assert!(screen.contains("No recipes yet"));
        assert!(screen.contains("Go to Fridge"));
        assert!(screen.contains("AI Kitchen Ready"));
    }

    #[test]
    fn shopping_summary_is_rendered() {
        let mut app = App::new(true);
        app.add_shopping_item("milk", "1 l");
        app.set_tab(Tab::Shopping);
        let screen = render_to_string(&app);
        assert!(screen.contains("1 Item Ready to buy"));
        assert!(screen.contains("milk"));
    }

    #[test]
    fn cooking_steps_show_progress() {
        let mut app = App::new(true);
        app.select_recipe(recipe());
        let checklist = render_to_string(&app);
        assert!(checklist.contains("Let's Start Cooking"));

        app.dispatch_cooking(CookingIntent::ShowSteps);
        let steps = render_to_string(&app);
        assert!(steps.contains("Step 1 of 2"));
        assert!(steps.contains("Whisk the eggs"));
    }

    #[test]
    fn missing_key_is_visible_in_header() {
        let app = App::new(false);
        assert!(render_to_string(&app).contains("API key missing"));
    }

    #[test]
    fn busy_app_shows_analyzing_overlay() {
        let (tx, _rx) = tokio::sync::mpsc::channel(4);
        let mut app = App::new(true);
        assert!(!render_to_string(&app).contains("Analyzing your Fridge..."));

        app.set_command_sender(tx);
        app.capture_image(crate::capture::ImagePayload {
            mime_type: "image/jpeg".to_string(),
            data: "AAAA".to_string(),
        });
        assert!(app.is_busy());
        let screen = render_to_string(&app);
        assert!(screen.contains("Analyzing your Fridge..."));
        assert!(screen.contains("Analyzing..."));
    }

    #[test]
    fn finish_button_only_on_last_step() {
        let mut app = App::new(true);
        app.select_recipe(recipe());
        app.dispatch_cooking(CookingIntent::ShowSteps);
        let first = render_to_string(&app);
        assert!(!first.contains("Finish Cooking"));
        assert!(first.contains("Next Step"));

        app.dispatch_cooking(CookingIntent::NextStep);
        let last = render_to_string(&app);
        assert!(last.contains("Step 2 of 2"));
        assert!(last.contains("[F] Finish Cooking"));
    }
}
