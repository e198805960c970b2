use crate::ui::app::{App, Tab};
use crate::ui::cooking::{CookingIntent, CookingState, CookingView};
use crate::ui::shopping::ShoppingIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action to take after processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Request image paste from clipboard.
    ImagePaste,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }

    // Busy overlay: everything but quit is swallowed
    if app.is_busy() {
        if matches!(key.code, KeyCode::Char('q')) && app.path_input().is_none() {
            app.request_quit();
        }
        return InputAction::None;
    }

    // Ctrl+V or Ctrl+Shift+V: the terminal can't paste image content as
    // text, so the clipboard is read directly.
    if is_ctrl_char(key, 'v') || is_ctrl_shift_char(key, 'v') {
        return InputAction::ImagePaste;
    }

    if app.path_input().is_some() {
        handle_path_prompt(app, key);
        return InputAction::None;
    }

    if app.cooking().is_open() {
        handle_cooking(app, key);
        return InputAction::None;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('1') => app.set_tab(Tab::Fridge),
        KeyCode::Char('2') => app.set_tab(Tab::Recipes),
        KeyCode::Char('3') => app.set_tab(Tab::Shopping),
        KeyCode::Tab => app.set_tab(app.tab().next()),
        KeyCode::Char(']') => app.cycle_dietary(true),
        KeyCode::Char('[') => app.cycle_dietary(false),
        _ => match app.tab() {
            Tab::Fridge => handle_fridge(app, key),
            Tab::Recipes => handle_recipes(app, key),
            Tab::Shopping => handle_shopping(app, key),
        },
    }
    InputAction::None
}

/// Bracketed paste. Dropping a file onto the terminal pastes its path.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.is_busy() {
        return;
    }
    app.on_paste(text);
}

fn handle_path_prompt(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_path_prompt(),
        KeyCode::Enter => app.submit_path_prompt(),
        KeyCode::Backspace => app.pop_path_char(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_path_char(ch)
        }
        _ => {}
    }
}

fn handle_fridge(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('o') | KeyCode::Enter => app.open_path_prompt(),
        KeyCode::Char('x') => app.clear_ingredients(),
        _ => {}
    }
}

fn handle_recipes(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Left | KeyCode::Char('h') => {
            app.move_recipe_cursor(-1)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Right | KeyCode::Char('l') => {
            app.move_recipe_cursor(1)
        }
        KeyCode::Enter => app.select_highlighted_recipe(),
        KeyCode::Char('f') => app.set_tab(Tab::Fridge),
        _ => {}
    }
}

fn handle_shopping(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.dispatch_shopping(ShoppingIntent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch_shopping(ShoppingIntent::MoveDown),
        KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => {
            app.remove_focused_shopping_item()
        }
        KeyCode::Char('c') => app.clear_shopping(),
        _ => {}
    }
}

fn handle_cooking(app: &mut App, key: KeyEvent) {
    let view = match app.cooking() {
        CookingState::Open { view, .. } => *view,
        CookingState::Closed => return,
    };

    match key.code {
        KeyCode::Esc => return app.close_cooking(),
        KeyCode::Char('q') => return app.request_quit(),
        KeyCode::Char('c') => return app.dispatch_cooking(CookingIntent::ShowChecklist),
        KeyCode::Char('s') => return app.dispatch_cooking(CookingIntent::ShowSteps),
        KeyCode::Tab => {
            let intent = match view {
                CookingView::Checklist => CookingIntent::ShowSteps,
                CookingView::Steps => CookingIntent::ShowChecklist,
            };
            return app.dispatch_cooking(intent);
        }
        _ => {}
    }

    match view {
        CookingView::Checklist => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.dispatch_cooking(CookingIntent::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => app.dispatch_cooking(CookingIntent::MoveDown),
            KeyCode::Char('a') => {
                app.add_checklist_item_to_shopping();
            }
            // "Let's Start Cooking"
            KeyCode::Enter => app.dispatch_cooking(CookingIntent::ShowSteps),
            _ => {}
        },
        CookingView::Steps => match key.code {
            KeyCode::Left | KeyCode::Char('h') => app.dispatch_cooking(CookingIntent::PrevStep),
            KeyCode::Right | KeyCode::Char('l') => app.dispatch_cooking(CookingIntent::NextStep),
            KeyCode::Char('r') => app.narrate_current_step(),
            KeyCode::Char('f') | KeyCode::Enter => app.dispatch_cooking(CookingIntent::Finish),
            _ => {}
        },
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

fn is_ctrl_shift_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::ImagePayload;
    use crossterm::event::KeyEventState;
    use tokio::sync::mpsc;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn busy_app() -> (App, mpsc::Receiver<crate::ui::app::UiCommand>) {
        let (tx, rx) = mpsc::channel(4);
        let mut app = App::new(true);
        app.set_command_sender(tx);
        app.capture_image(ImagePayload {
            mime_type: "image/png".to_string(),
            data: "AAAA".to_string(),
        });
        (app, rx)
    }

    #[test]
    fn number_keys_switch_tabs() {
        let mut app = App::new(true);
        handle_key(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.tab(), Tab::Shopping);
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.tab(), Tab::Fridge);
    }

    #[test]
    fn busy_overlay_swallows_keys() {
        let (mut app, _rx) = busy_app();
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.tab(), Tab::Fridge);
        assert_eq!(handle_key(&mut app, ctrl('v')), InputAction::None);
        assert!(!app.should_quit());
    }

    #[test]
    fn quit_works_while_busy() {
        let (mut app, _rx) = busy_app();
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_v_requests_clipboard_image() {
        let mut app = App::new(true);
        assert_eq!(handle_key(&mut app, ctrl('v')), InputAction::ImagePaste);
    }

    #[test]
    fn brackets_cycle_dietary_filter() {
        let mut app = App::new(true);
        handle_key(&mut app, press(KeyCode::Char(']')));
        assert_eq!(
            app.pantry().dietary,
            crate::domain::DietaryRestriction::Vegetarian
        );
        handle_key(&mut app, press(KeyCode::Char('[')));
        handle_key(&mut app, press(KeyCode::Char('[')));
        assert_eq!(
            app.pantry().dietary,
            crate::domain::DietaryRestriction::GlutenFree
        );
    }

    #[test]
    fn prompt_captures_typed_characters() {
        let mut app = App::new(true);
        handle_key(&mut app, press(KeyCode::Char('o')));
        handle_key(&mut app, press(KeyCode::Char('q')));
        handle_key(&mut app, press(KeyCode::Char('1')));
        assert_eq!(app.path_input(), Some("q1"));
        assert!(!app.should_quit());
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.path_input(), None);
    }

    #[test]
    fn paste_is_ignored_while_busy() {
        let (mut app, _rx) = busy_app();
        app.set_tab(Tab::Fridge);
        handle_paste(&mut app, "data:image/png;base64,AAAA");
        assert_eq!(app.pantry().in_flight, 1);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new(true);
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.should_quit());
    }
}
