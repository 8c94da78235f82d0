/// First row to draw so that `selected_index` stays visible.
pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows || max_visible_rows == 0 {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index + 1 - max_visible_rows;
    }

    0
}

/// Caps a free scroll offset so the last page stays full.
pub fn clamp_scroll(total_rows: usize, max_visible_rows: usize, offset: usize) -> u16 {
    let offset = offset.min(total_rows.saturating_sub(max_visible_rows));
    u16::try_from(offset).unwrap_or(u16::MAX)
}
