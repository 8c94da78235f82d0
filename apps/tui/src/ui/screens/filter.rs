use crate::app::{App, Screen};
use crate::domain::format_price;
use crate::ui::widgets::chrome::{render_key_hints, render_title};
use crate::ui::widgets::tables::clamp_scroll;
use crate::ui::widgets::text_field::{render_button, render_text_field};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_filter(app: &App, f: &mut Frame<'_>) {
    let [title_area, query_area, button_area, results_area, hints_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(f.area());

    render_title(f, title_area, Screen::Filter.title());
    render_text_field(
        f,
        query_area,
        "Category",
        &app.filter_query,
        "Enter category to view (e.g. Starter, Main)",
        true,
    );
    render_button(f, button_area, "Show Items", false);

    // recomputed from the live query on every draw
    let matching = app.store.items_by_category(&app.filter_query);
    let block = Block::default()
        .title(format!(" Items ({}) ", matching.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    if matching.is_empty() {
        let paragraph = Paragraph::new(Span::styled(
            "No items in this category.",
            Style::default().fg(Color::Gray),
        ))
        .block(block)
        .alignment(Alignment::Center);
        f.render_widget(paragraph, results_area);
    } else {
        let lines: Vec<TextLine<'_>> = matching
            .iter()
            .map(|item| TextLine::from(format!("{} - {}", item.name, format_price(item.price))))
            .collect();
        let visible = usize::from(results_area.height.saturating_sub(2));
        let offset = clamp_scroll(lines.len(), visible, app.filter_scroll);
        f.render_widget(
            Paragraph::new(Text::from(lines))
                .block(block)
                .scroll((offset, 0)),
            results_area,
        );
    }

    render_key_hints(
        f,
        hints_area,
        &[
            ("Enter", "Show items"),
            ("↑/↓", "Scroll"),
            ("F1", "Help"),
            ("Esc", "Back to home"),
        ],
    );
}
