use crate::app::{App, Screen};
use crate::domain::format_price;
use crate::ui::widgets::chrome::{render_key_hints, render_title};
use crate::ui::widgets::tables::clamp_scroll;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_home(app: &App, f: &mut Frame<'_>) {
    let [title_area, body_area, hints_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(f.area());

    render_title(f, title_area, Screen::Home.title());

    let block = Block::default()
        .title(" Menu ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    if app.store.is_empty() {
        let paragraph = Paragraph::new(Span::styled(
            "No menu items yet.",
            Style::default().fg(Color::Gray),
        ))
        .block(block)
        .alignment(Alignment::Center);
        f.render_widget(paragraph, body_area);
    } else {
        let lines = menu_lines(app);
        let visible = usize::from(body_area.height.saturating_sub(2));
        let offset = clamp_scroll(lines.height(), visible, app.home_scroll);
        f.render_widget(
            Paragraph::new(lines).block(block).scroll((offset, 0)),
            body_area,
        );
    }

    render_key_hints(
        f,
        hints_area,
        &[
            ("m", "Manage menu"),
            ("f", "Filter page"),
            ("↑/↓", "Scroll"),
            ("F1", "Help"),
            ("q", "Quit"),
        ],
    );
}

/// One header per populated category followed by its items.
fn menu_lines(app: &App) -> Text<'static> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for block in app.store.summary().categories {
        if !lines.is_empty() {
            lines.push(TextLine::from(""));
        }
        lines.push(TextLine::from(Span::styled(
            format!(
                "{} - Average Price: {}",
                block.label,
                format_price(block.average_price)
            ),
            header_style,
        )));
        for item in block.items {
            lines.push(TextLine::from(format!(
                "  {} - {}",
                item.name,
                format_price(item.price)
            )));
        }
    }

    Text::from(lines)
}
