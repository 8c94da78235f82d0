use crate::app::state::App;
use crossterm::event::KeyCode;

/// Swallows every key while a notice is up. Enter or Esc dismisses it.
pub fn handle_notice_input(app: &mut App, key: KeyCode) -> bool {
    if app.notice.is_none() {
        return false;
    }

    if matches!(key, KeyCode::Enter | KeyCode::Esc) {
        app.dismiss_notice();
    }
    true
}
