use crate::app::input::helpers::{edit_text, step_down, step_up};
use crate::app::state::{App, ManageFocus};
use crate::app::Navigation;
use crossterm::event::KeyCode;

pub fn handle_manage_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            app.navigate(Navigation::ToHome).ok();
        }
        KeyCode::Tab => {
            app.manage_focus = app.manage_focus.next();
        }
        KeyCode::BackTab => {
            app.manage_focus = app.manage_focus.prev();
        }
        _ => match app.manage_focus {
            ManageFocus::Name | ManageFocus::Price | ManageFocus::Category => {
                handle_field_input(app, key);
            }
            ManageFocus::AddButton => handle_button_input(app, key),
            ManageFocus::ItemList => handle_list_input(app, key),
        },
    }
}

fn handle_field_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => {
            app.submit_draft();
        }
        KeyCode::Up => {
            app.manage_focus = app.manage_focus.prev();
        }
        KeyCode::Down => {
            app.manage_focus = app.manage_focus.next();
        }
        _ => {
            if let Some(buffer) = app.focused_draft_mut() {
                edit_text(buffer, key);
            }
        }
    }
}

fn handle_button_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_draft();
        }
        KeyCode::Up => {
            app.manage_focus = app.manage_focus.prev();
        }
        KeyCode::Down => {
            app.manage_focus = app.manage_focus.next();
        }
        _ => {}
    }
}

fn handle_list_input(app: &mut App, key: KeyCode) {
    let len = app.store.len();
    match key {
        KeyCode::Up => {
            if app.selected_item_index == 0 {
                app.manage_focus = app.manage_focus.prev();
            } else {
                app.selected_item_index = step_up(app.selected_item_index);
            }
        }
        KeyCode::Down => {
            app.selected_item_index = step_down(app.selected_item_index, len);
        }
        KeyCode::PageUp => {
            app.selected_item_index = app.selected_item_index.saturating_sub(5);
        }
        KeyCode::PageDown => {
            app.selected_item_index = step_down(app.selected_item_index + 4, len);
        }
        KeyCode::Home => {
            app.selected_item_index = 0;
        }
        KeyCode::End => {
            app.selected_item_index = len.saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Delete => {
            if len > 0 {
                app.remove_selected_item();
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_items(count: usize) -> App {
        let mut app = App::new();
        for n in 0..count {
            app.store.add_item(&format!("Item {n}"), "10", "main").ok();
        }
        app.screen = crate::app::Screen::Manage;
        app.manage_focus = ManageFocus::ItemList;
        app
    }

    #[test]
    fn list_navigation_is_bounded() {
        let mut app = app_with_items(3);
        for _ in 0..5 {
            handle_manage_input(&mut app, KeyCode::Down);
        }
        assert_eq!(app.selected_item_index, 2);

        handle_manage_input(&mut app, KeyCode::Home);
        assert_eq!(app.selected_item_index, 0);

        handle_manage_input(&mut app, KeyCode::End);
        assert_eq!(app.selected_item_index, 2);
    }

    #[test]
    fn up_from_first_row_returns_to_button() {
        let mut app = app_with_items(2);
        handle_manage_input(&mut app, KeyCode::Up);
        assert_eq!(app.manage_focus, ManageFocus::AddButton);
    }

    #[test]
    fn enter_removes_the_selected_row() {
        let mut app = app_with_items(3);
        app.selected_item_index = 1;
        handle_manage_input(&mut app, KeyCode::Enter);

        let names: Vec<_> = app.store.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Item 0", "Item 2"]);
        assert_eq!(app.selected_item_index, 1);

        handle_manage_input(&mut app, KeyCode::Delete);
        assert_eq!(app.selected_item_index, 0);
        assert_eq!(app.store.len(), 1);
    }

    #[test]
    fn enter_on_empty_list_does_nothing() {
        let mut app = app_with_items(0);
        handle_manage_input(&mut app, KeyCode::Enter);
        assert!(app.store.is_empty());
        assert!(app.notice.is_none());
    }

    #[test]
    fn backspace_edits_focused_field() {
        let mut app = app_with_items(0);
        app.manage_focus = ManageFocus::Category;
        app.draft.category = "Mains".to_string();
        handle_manage_input(&mut app, KeyCode::Backspace);
        assert_eq!(app.draft.category, "Main");
        assert!(app.draft.name.is_empty());
    }
}
