use crate::app::input::helpers::{edit_text, scroll_lines};
use crate::app::state::App;
use crate::app::Navigation;
use crossterm::event::KeyCode;

pub fn handle_filter_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            app.navigate(Navigation::ToHome).ok();
        }
        KeyCode::Enter => app.show_items(),
        _ => {
            if edit_text(&mut app.filter_query, key) {
                // a new query starts its results from the top
                app.filter_scroll = 0;
            } else {
                let lines = app.filter_line_count();
                scroll_lines(&mut app.filter_scroll, lines, key);
            }
        }
    }
}
