use crate::app::input::helpers::scroll_lines;
use crate::app::state::App;
use crate::app::Navigation;
use crossterm::event::KeyCode;

pub fn handle_home_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('m' | 'M') => {
            app.navigate(Navigation::ToManage).ok();
        }
        KeyCode::Char('f' | 'F') => {
            app.navigate(Navigation::ToFilter).ok();
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        _ => {
            let lines = app.home_line_count();
            scroll_lines(&mut app.home_scroll, lines, key);
        }
    }
}
