use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Horizontal scroll and cursor column for `value` in a box `inner_width`
/// cells wide. The tail of the text stays visible with room for the cursor.
pub fn field_window(value: &str, inner_width: u16) -> (u16, u16) {
    let typed = u16::try_from(value.width()).unwrap_or(u16::MAX);
    let scroll = typed.saturating_sub(inner_width.saturating_sub(1));
    (scroll, typed - scroll)
}

/// Single-line input box. Shows `placeholder` in gray while `value` is empty
/// and places the terminal cursor at the end of the text when focused.
pub fn render_text_field(
    f: &mut Frame<'_>,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
) {
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(focused));

    let content = if value.is_empty() {
        Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(value.to_string(), Style::default().fg(Color::White))
    };

    let (scroll, cursor) = field_window(value, area.width.saturating_sub(2));
    f.render_widget(
        Paragraph::new(content).block(block).scroll((0, scroll)),
        area,
    );

    if focused && area.width > 2 && area.height > 2 {
        let max_x = area.x + area.width - 2;
        let x = (area.x + 1).saturating_add(cursor).min(max_x);
        f.set_cursor_position((x, area.y + 1));
    }
}

/// Bordered, centered label acting as a button.
pub fn render_button(f: &mut Frame<'_>, area: Rect, label: &str, focused: bool) {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused));
    let button = Paragraph::new(Span::styled(label.to_string(), style))
        .block(block)
        .alignment(Alignment::Center);

    f.render_widget(button, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Cell;
    use ratatui::layout::Position;
    use ratatui::Terminal;
    use std::error::Error;

    #[test]
    fn cursor_counts_display_cells() {
        assert_eq!(field_window("", 20), (0, 0));
        assert_eq!(field_window("Soup", 20), (0, 4));
        // each CJK character takes two cells
        assert_eq!(field_window("拉面", 20), (0, 4));
        assert_eq!(field_window("Café", 20), (0, 4));
    }

    #[test]
    fn long_text_scrolls_to_keep_the_cursor_inside() {
        assert_eq!(field_window("abcdefghij", 10), (1, 9));
        assert_eq!(field_window("abcdefghijkl", 10), (3, 9));
        assert_eq!(field_window("拉面拉面拉面", 10), (3, 9));
    }

    #[test]
    fn long_draft_shows_its_tail() -> Result<(), Box<dyn Error>> {
        let mut terminal = Terminal::new(TestBackend::new(12, 3))?;
        terminal.draw(|f| {
            render_text_field(f, f.area(), "Name", "abcdefghijkl", "", true);
        })?;

        let buffer = terminal.backend().buffer();
        let inner: String = buffer.content()[12..24].iter().map(Cell::symbol).collect();
        assert!(inner.contains("efghijkl"));
        assert!(!inner.contains('a'));
        assert_eq!(terminal.get_cursor_position()?, Position::new(10, 1));
        Ok(())
    }
}
