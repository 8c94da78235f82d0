use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;
use tracing::{debug, info};

use crate::app::{handle_input, App, Screen};
use crate::domain::format_price;
use crate::store::MenuSummary;
use crate::ui;

/// Configure event poll timeout (ms)
const EVENT_POLL_TIMEOUT: u64 = 250;

/// Print the grouped menu and exit (no UI)
pub fn run_headless(app: &App, json: bool) -> Result<()> {
    let summary = app.store.summary();
    info!(items = summary.total_items, json, "headless run");

    if json {
        println!("{}", render_headless_json(&summary)?);
    } else {
        print!("{}", render_headless_text(&summary));
    }

    Ok(())
}

pub fn render_headless_text(summary: &MenuSummary) -> String {
    let title = Screen::Home.title();
    let mut out = format!("\n{title}\n{}\n", "=".repeat(title.chars().count()));

    if summary.total_items == 0 {
        out.push_str("No menu items yet.\n");
        return out;
    }

    for block in &summary.categories {
        out.push_str(&format!(
            "\n{} - Average Price: {}\n",
            block.label,
            format_price(block.average_price)
        ));
        for item in &block.items {
            out.push_str(&format!("- {} - {}\n", item.name, format_price(item.price)));
        }
    }

    out
}

pub fn render_headless_json(summary: &MenuSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Run the main application event loop
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                debug!(code = ?key.code, screen = %app.screen, "key");
                handle_input(app, key.code);
            }
            // the next iteration redraws at the new size
            Event::Resize(width, height) => {
                debug!(width, height, "resize");
            }
            _ => {}
        }
    }

    info!("event loop finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_summary() -> MenuSummary {
        let mut app = App::new();
        app.store.add_item("Soup", "25.50", "Starter").ok();
        app.store.add_item("Cola", "15.00", "Drink").ok();
        app.store.add_item("Salad", "20.00", "starter").ok();
        app.store.summary()
    }

    #[test]
    fn headless_text_groups_items() {
        let text = render_headless_text(&scenario_summary());
        assert!(text.contains("Starter - Average Price: R22.75\n- Soup - R25.50\n- Salad - R20.00\n"));
        assert!(text.contains("Drink - Average Price: R15.00\n- Cola - R15.00\n"));
        assert!(!text.contains("No menu items yet."));
    }

    #[test]
    fn headless_text_for_empty_menu() {
        let text = render_headless_text(&App::new().store.summary());
        assert!(text.ends_with("No menu items yet.\n"));
    }

    #[test]
    fn headless_json_shape() -> Result<()> {
        let json = render_headless_json(&scenario_summary())?;
        let value: serde_json::Value = serde_json::from_str(&json)?;

        assert_eq!(value["total_items"], 3);
        assert_eq!(value["categories"][0]["category"], "starter");
        assert_eq!(value["categories"][0]["label"], "Starter");
        assert_eq!(value["categories"][0]["average_price"], 22.75);
        assert_eq!(value["categories"][0]["items"][1]["name"], "Salad");
        assert_eq!(value["categories"][1]["category"], "drink");
        Ok(())
    }
}
