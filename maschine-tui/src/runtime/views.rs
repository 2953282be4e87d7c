use crate::app::App;
use crate::search::Effect;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Translate a key press into app mutations, returning the effect the search
/// controller asked for, if any.
pub(super) fn handle_search_key(key: KeyEvent, app: &mut App) -> Option<Effect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => {
            app.quit();
            None
        }
        KeyCode::Char('c') if ctrl => {
            app.quit();
            None
        }
        KeyCode::Char('u') if ctrl => app.search_input_clear(),
        KeyCode::Char(c) if !ctrl => app.search_input_char(c),
        KeyCode::Backspace => app.search_input_backspace(),
        KeyCode::Left => {
            app.search_move_cursor(true);
            None
        }
        KeyCode::Right => {
            app.search_move_cursor(false);
            None
        }
        KeyCode::Home => {
            app.search_cursor_home_end(true);
            None
        }
        KeyCode::End => {
            app.search_cursor_home_end(false);
            None
        }
        KeyCode::Up => {
            app.select_previous();
            None
        }
        KeyCode::Down | KeyCode::Tab => {
            app.select_next();
            None
        }
        KeyCode::Enter => app.activate_selected(),
        _ => None,
    }
}
