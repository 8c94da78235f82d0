use crate::app::{Notice, NoticeKind};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::prelude::Buffer;
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};
use ratatui::Frame;

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);

    center
}

pub struct ClearWidget;

impl Widget for ClearWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        ratatui::widgets::Clear.render(area, buf);
    }
}

/// Draws a pending notice over whatever screen is active.
pub fn render_notice(notice: &Notice, f: &mut Frame<'_>) {
    let area = centered_rect(50, 30, f.area());
    f.render_widget(ClearWidget, area);

    let (title, color) = match notice.kind {
        NoticeKind::Info => (" Notice ", Color::Green),
        NoticeKind::Error => (" Error ", Color::Red),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let text = Text::from(vec![
        TextLine::from(Span::styled(
            notice.message.clone(),
            Style::default().fg(color),
        )),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::Gray),
        )),
    ]);

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
