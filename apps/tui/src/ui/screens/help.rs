use crate::app::{App, Screen};
use crate::ui::widgets::chrome::key_style;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

fn bindings(screen: Screen) -> &'static [(&'static str, &'static str)] {
    match screen {
        Screen::Home => &[
            ("m", "Open the manage screen"),
            ("f", "Open the filter screen"),
            ("↑/↓ PgUp/PgDn", "Scroll the menu"),
            ("q", "Quit"),
        ],
        Screen::Manage => &[
            ("Tab / Shift-Tab", "Move between fields, button and list"),
            ("Enter (field)", "Add the item"),
            ("↑/↓ (list)", "Select an item"),
            ("Enter / Del (list)", "Remove the selected item"),
            ("Esc", "Back to home"),
        ],
        Screen::Filter => &[
            ("type", "Category to show"),
            ("Enter", "Show items"),
            ("↑/↓ PgUp/PgDn", "Scroll the results"),
            ("Esc", "Back to home"),
        ],
    }
}

pub fn render_help(app: &App, f: &mut Frame<'_>) {
    let area = centered_rect(70, 60, f.area());
    f.render_widget(ClearWidget, area);

    let mut lines: Vec<TextLine<'_>> = bindings(app.screen)
        .iter()
        .map(|(key, action)| {
            TextLine::from(vec![
                Span::styled(format!("{key:<20}"), key_style()),
                Span::raw(*action),
            ])
        })
        .collect();
    lines.push(TextLine::from(""));
    lines.push(TextLine::from(vec![
        Span::styled(format!("{:<20}", "F1 / Esc"), key_style()),
        Span::raw("Close help"),
    ]));

    let block = Block::default()
        .title(format!(" Help: {} ", app.screen))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}
