pub const fn step_down(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index + 1 >= len {
        len - 1
    } else {
        index + 1
    }
}

pub const fn step_up(index: usize) -> usize {
    index.saturating_sub(1)
}

const SCROLL_PAGE: usize = 10;

/// Moves the first visible line of a read-only view holding `len` lines.
/// Returns `false` for keys that do not scroll.
pub fn scroll_lines(offset: &mut usize, len: usize, key: crossterm::event::KeyCode) -> bool {
    use crossterm::event::KeyCode;

    *offset = match key {
        KeyCode::Up => step_up(*offset),
        KeyCode::Down => step_down(*offset, len),
        KeyCode::PageUp => offset.saturating_sub(SCROLL_PAGE),
        KeyCode::PageDown => step_down(*offset + SCROLL_PAGE - 1, len),
        KeyCode::Home => 0,
        KeyCode::End => len.saturating_sub(1),
        _ => return false,
    };
    true
}

/// Applies a plain text-editing key to a buffer. Returns `false` for keys
/// that are not text edits.
pub fn edit_text(buffer: &mut String, key: crossterm::event::KeyCode) -> bool {
    match key {
        crossterm::event::KeyCode::Char(c) => {
            buffer.push(c);
            true
        }
        crossterm::event::KeyCode::Backspace => {
            buffer.pop();
            true
        }
        _ => false,
    }
}
