use crate::app::state::App;
use crate::app::Screen;
use crossterm::event::KeyCode;

mod filter;
mod help;
mod home;
mod manage;
mod notice;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if notice::handle_notice_input(app, key) {
        return;
    }

    if help::handle_help_toggle(app, key) {
        return;
    }

    match app.screen {
        Screen::Home => home::handle_home_input(app, key),
        Screen::Manage => manage::handle_manage_input(app, key),
        Screen::Filter => filter::handle_filter_input(app, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ManageFocus;

    fn press_all(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            dispatch_input(app, *key);
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            dispatch_input(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn add_and_remove_through_keys() {
        let mut app = App::new();
        dispatch_input(&mut app, KeyCode::Char('m'));
        assert_eq!(app.screen, Screen::Manage);

        type_text(&mut app, "Soup");
        dispatch_input(&mut app, KeyCode::Tab);
        type_text(&mut app, "25.50");
        dispatch_input(&mut app, KeyCode::Tab);
        type_text(&mut app, "Starter");
        dispatch_input(&mut app, KeyCode::Enter);

        assert_eq!(app.store.len(), 1);
        assert!(app.notice.is_some());

        // the notice swallows everything but Enter/Esc
        press_all(&mut app, &[KeyCode::Char('x'), KeyCode::Tab]);
        assert_eq!(app.draft.name, "");
        assert_eq!(app.manage_focus, ManageFocus::Name);

        dispatch_input(&mut app, KeyCode::Enter);
        assert!(app.notice.is_none());

        press_all(&mut app, &[KeyCode::BackTab, KeyCode::Enter]);
        assert_eq!(app.manage_focus, ManageFocus::ItemList);
        assert!(app.store.is_empty());
        assert!(app.notice.is_none());

        dispatch_input(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn blank_submit_raises_error_notice() {
        let mut app = App::new();
        press_all(&mut app, &[KeyCode::Char('m'), KeyCode::Enter]);
        assert!(app.store.is_empty());
        assert_eq!(
            app.notice.as_ref().map(|n| n.kind),
            Some(crate::app::NoticeKind::Error)
        );

        dispatch_input(&mut app, KeyCode::Esc);
        assert!(app.notice.is_none());
        assert_eq!(app.screen, Screen::Manage);
    }

    #[test]
    fn filter_screen_is_reactive() {
        let mut app = App::new();
        app.store.add_item("Cola", "15", "drink").ok();

        dispatch_input(&mut app, KeyCode::Char('f'));
        assert_eq!(app.screen, Screen::Filter);
        type_text(&mut app, "Drink");
        assert_eq!(app.store.items_by_category(&app.filter_query).len(), 1);

        dispatch_input(&mut app, KeyCode::Enter);
        assert_eq!(app.filter_query, "Drink");

        dispatch_input(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Home);
        // the query survives navigation
        assert_eq!(app.filter_query, "Drink");
    }

    #[test]
    fn editing_the_query_resets_filter_scroll() {
        let mut app = App::new();
        for n in 0..20 {
            app.store.add_item(&format!("Tea{n}"), "8", "drink").ok();
        }
        dispatch_input(&mut app, KeyCode::Char('f'));
        type_text(&mut app, "drink");

        press_all(&mut app, &[KeyCode::PageDown, KeyCode::Down]);
        assert_eq!(app.filter_scroll, 11);
        assert_eq!(app.filter_query, "drink");

        dispatch_input(&mut app, KeyCode::Backspace);
        assert_eq!(app.filter_scroll, 0);
        assert_eq!(app.filter_query, "drin");
    }

    #[test]
    fn help_blocks_screen_input() {
        let mut app = App::new();
        dispatch_input(&mut app, KeyCode::F(1));
        assert!(app.show_help);

        dispatch_input(&mut app, KeyCode::Char('m'));
        assert_eq!(app.screen, Screen::Home);

        dispatch_input(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn quit_only_from_home() {
        let mut app = App::new();
        press_all(&mut app, &[KeyCode::Char('f'), KeyCode::Char('q')]);
        assert!(app.running);
        assert_eq!(app.filter_query, "q");

        press_all(&mut app, &[KeyCode::Esc, KeyCode::Char('q')]);
        assert!(!app.running);
    }
}
