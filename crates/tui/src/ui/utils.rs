//! UI utilities shared by the navbar and the host layout: hit testing and
//! width-aware label truncation.

use ratatui::layout::{Position, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Finds which of `areas` contains the point `(x, y)`.
///
/// Returns `None` when the point lies outside `container` or between areas.
pub fn find_target_index_by_mouse_position(container: &Rect, areas: &[Rect], x: u16, y: u16) -> Option<usize> {
    let position = Position::new(x, y);
    if !container.contains(position) {
        return None;
    }
    areas.iter().position(|area| area.contains(position))
}

/// Truncates `text` to at most `max_width` display columns, ending with `…`
/// when anything was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0);
        if used + width > budget {
            break;
        }
        used += width;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_testing_respects_container_and_rows() {
        let container = Rect::new(0, 0, 20, 10);
        let rows = vec![Rect::new(1, 2, 18, 1), Rect::new(1, 3, 18, 1)];
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 5, 2), Some(0));
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 5, 3), Some(1));
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 5, 7), None);
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 25, 2), None);
    }

    #[test]
    fn truncation_is_width_aware() {
        assert_eq!(truncate_to_width("Home", 10), "Home");
        assert_eq!(truncate_to_width("Documentation", 6), "Docum…");
        assert_eq!(truncate_to_width("日本語ラベル", 5), "日本…");
        assert_eq!(truncate_to_width("Home", 0), "");
    }
}
