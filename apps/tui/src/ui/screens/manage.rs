use crate::app::{App, ManageFocus, Screen};
use crate::domain::format_price;
use crate::ui::widgets::chrome::{render_key_hints, render_title};
use crate::ui::widgets::tables::scroll_offset;
use crate::ui::widgets::text_field::{render_button, render_text_field};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_manage(app: &App, f: &mut Frame<'_>) {
    let [title_area, name_area, price_area, category_area, button_area, list_area, hints_area] =
        Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .areas(f.area());

    render_title(f, title_area, Screen::Manage.title());

    let focus = app.manage_focus;
    render_text_field(
        f,
        name_area,
        "Name",
        &app.draft.name,
        "Enter food or drink name",
        focus == ManageFocus::Name,
    );
    render_text_field(
        f,
        price_area,
        "Price",
        &app.draft.price,
        "Enter price (e.g. 25.99)",
        focus == ManageFocus::Price,
    );
    render_text_field(
        f,
        category_area,
        "Category",
        &app.draft.category,
        "Enter category (e.g. Starter, Main, Drink, Dessert)",
        focus == ManageFocus::Category,
    );
    render_button(f, button_area, "Add Item", focus == ManageFocus::AddButton);

    render_item_list(app, f, list_area);

    let hints: &[(&str, &str)] = if focus.is_text_field() {
        &[("Tab", "Next field"), ("Enter", "Add item"), ("Esc", "Back to home")]
    } else if focus == ManageFocus::ItemList {
        &[("↑/↓", "Select"), ("Enter", "Remove item"), ("Tab", "Next"), ("Esc", "Back to home")]
    } else {
        &[("Enter", "Add item"), ("Tab", "Next"), ("Esc", "Back to home")]
    };
    render_key_hints(f, hints_area, hints);
}

fn render_item_list(app: &App, f: &mut Frame<'_>, area: Rect) {
    let list_focused = app.manage_focus == ManageFocus::ItemList;
    let block = Block::default()
        .title(format!(" Remove Item from Menu ({}) ", app.store.len()))
        .borders(Borders::ALL)
        .border_style(if list_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Red)
        });

    if app.store.is_empty() {
        let paragraph = Paragraph::new(Span::styled(
            "No menu items yet.",
            Style::default().fg(Color::Gray),
        ))
        .block(block)
        .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let max_visible_rows = usize::from(area.height.saturating_sub(2));
    let offset = scroll_offset(app.store.len(), max_visible_rows, app.selected_item_index);

    let lines: Vec<TextLine<'_>> = app
        .store
        .items()
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, item)| {
            let is_selected = list_focused && index == app.selected_item_index;
            let style = if is_selected {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let prefix = if is_selected { ">" } else { " " };

            TextLine::from(Span::styled(
                format!(
                    "{prefix} {} - {} ({})",
                    item.name,
                    format_price(item.price),
                    item.category
                ),
                style,
            ))
        })
        .collect();

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}
