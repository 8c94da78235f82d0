// UI module for menu_tui
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::{App, Screen};
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    match app.screen {
        Screen::Home => screens::home::render_home(app, f),
        Screen::Manage => screens::manage::render_manage(app, f),
        Screen::Filter => screens::filter::render_filter(app, f),
    }

    if app.show_help {
        screens::help::render_help(app, f);
    }

    if let Some(notice) = &app.notice {
        widgets::popup::render_notice(notice, f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_input, ManageFocus, Notice};
    use crossterm::event::KeyCode;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Cell;
    use ratatui::Terminal;
    use std::error::Error;

    fn render(app: &App) -> Result<String, Box<dyn Error>> {
        let mut terminal = Terminal::new(TestBackend::new(80, 30))?;
        terminal.draw(|f| ui(app, f))?;

        let buffer = terminal.backend().buffer();
        let width = usize::from(buffer.area.width);
        let rows: Vec<String> = buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(Cell::symbol).collect())
            .collect();
        Ok(rows.join("\n"))
    }

    fn scenario_app() -> App {
        let mut app = App::new();
        app.store.add_item("Soup", "25.50", "Starter").ok();
        app.store.add_item("Cola", "15.00", "Drink").ok();
        app.store.add_item("Salad", "20.00", "starter").ok();
        app
    }

    #[test]
    fn empty_home_shows_only_the_notice() -> Result<(), Box<dyn Error>> {
        let screen = render(&App::new())?;
        assert!(screen.contains("No menu items yet."));
        assert!(!screen.contains("Average Price"));
        Ok(())
    }

    #[test]
    fn home_groups_by_fixed_categories() -> Result<(), Box<dyn Error>> {
        let mut app = scenario_app();
        app.store.add_item("Chips", "9", "side").ok();
        let screen = render(&app)?;

        assert!(screen.contains("Starter - Average Price: R22.75"));
        assert!(screen.contains("Soup - R25.50"));
        assert!(screen.contains("Salad - R20.00"));
        assert!(screen.contains("Drink - Average Price: R15.00"));
        assert!(!screen.contains("Main - Average"));
        assert!(!screen.contains("Dessert"));
        assert!(!screen.contains("Chips"));
        assert!(!screen.contains("No menu items yet."));

        let starter = screen.find("Starter - Average");
        let drink = screen.find("Drink - Average");
        assert!(starter < drink);
        Ok(())
    }

    #[test]
    fn manage_lists_every_item_with_category() -> Result<(), Box<dyn Error>> {
        let mut app = scenario_app();
        app.screen = Screen::Manage;
        app.manage_focus = ManageFocus::ItemList;
        app.selected_item_index = 2;
        let screen = render(&app)?;

        assert!(screen.contains("Soup - R25.50 (starter)"));
        assert!(screen.contains("Cola - R15.00 (drink)"));
        assert!(screen.contains("> Salad - R20.00 (starter)"));
        assert!(screen.contains("Remove Item from Menu (3)"));
        assert!(screen.contains("Enter food or drink name"));
        Ok(())
    }

    #[test]
    fn filter_with_empty_query_shows_nothing() -> Result<(), Box<dyn Error>> {
        let mut app = scenario_app();
        app.screen = Screen::Filter;
        let screen = render(&app)?;
        assert!(screen.contains("No items in this category."));
        Ok(())
    }

    #[test]
    fn filter_matches_case_insensitively() -> Result<(), Box<dyn Error>> {
        let mut app = scenario_app();
        app.screen = Screen::Filter;
        app.filter_query = "STARTER".to_string();
        let screen = render(&app)?;

        assert!(screen.contains("Soup - R25.50"));
        assert!(screen.contains("Salad - R20.00"));
        assert!(!screen.contains("Cola"));
        assert!(!screen.contains("No items in this category."));
        Ok(())
    }

    fn long_menu() -> App {
        let mut app = App::new();
        for n in 0..36 {
            app.store.add_item(&format!("Dish{n}"), "10", "main").ok();
        }
        app
    }

    #[test]
    fn home_scrolls_to_the_last_item() -> Result<(), Box<dyn Error>> {
        let mut app = long_menu();
        let screen = render(&app)?;
        assert!(screen.contains("Dish0 - R10.00"));
        assert!(!screen.contains("Dish35 - R10.00"));

        handle_input(&mut app, KeyCode::Down);
        for _ in 0..4 {
            handle_input(&mut app, KeyCode::PageDown);
        }
        let screen = render(&app)?;
        assert!(screen.contains("Dish35 - R10.00"));
        assert!(!screen.contains("Dish0 - R10.00"));

        handle_input(&mut app, KeyCode::Home);
        assert!(render(&app)?.contains("Main - Average Price: R10.00"));
        Ok(())
    }

    #[test]
    fn filter_results_scroll_to_the_last_item() -> Result<(), Box<dyn Error>> {
        let mut app = long_menu();
        handle_input(&mut app, KeyCode::Char('f'));
        for c in "main".chars() {
            handle_input(&mut app, KeyCode::Char(c));
        }
        assert!(!render(&app)?.contains("Dish35 - R10.00"));

        handle_input(&mut app, KeyCode::End);
        let screen = render(&app)?;
        assert!(screen.contains("Dish35 - R10.00"));
        assert!(!screen.contains("Dish0 - R10.00"));
        assert!(screen.contains("Items (36)"));
        Ok(())
    }

    #[test]
    fn notice_is_drawn_on_top() -> Result<(), Box<dyn Error>> {
        let mut app = App::new();
        app.screen = Screen::Manage;
        app.notice = Some(Notice::info("Item added!"));
        let screen = render(&app)?;
        assert!(screen.contains("Item added!"));
        assert!(screen.contains("Press Enter to continue"));
        Ok(())
    }

    #[test]
    fn help_lists_screen_bindings() -> Result<(), Box<dyn Error>> {
        let mut app = App::new();
        app.show_help = true;
        let screen = render(&app)?;
        assert!(screen.contains("Help: Home"));
        assert!(screen.contains("Open the manage screen"));
        Ok(())
    }
}
