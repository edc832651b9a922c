use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::ListState;

use crate::ui::theme::Theme;

/// One `label: value` row. `active` rows carry a `>` marker; the value is
/// cut to `max_value_width` columns.
pub(crate) fn field_line(
    theme: &Theme,
    label: &str,
    value: &str,
    active: bool,
    label_width: usize,
    max_value_width: usize,
) -> Line<'static> {
    let (marker, marker_style) = if active {
        ("> ", theme.selected)
    } else {
        ("  ", Style::default())
    };
    Line::from(vec![
        Span::styled(marker, marker_style),
        Span::styled(format!("{label:<label_width$}: "), theme.label),
        Span::raw(truncate_text(value, max_value_width)),
    ])
}

/// Cuts `value` to `max_width` characters, ending in `...` when there is
/// room for it.
pub(crate) fn truncate_text(value: &str, max_width: usize) -> String {
    match value.char_indices().nth(max_width) {
        None => value.to_string(),
        Some(_) if max_width <= 3 => value.chars().take(max_width).collect(),
        Some(_) => {
            let keep: String = value.chars().take(max_width - 3).collect();
            format!("{keep}...")
        }
    }
}

pub(crate) fn padded_rect(area: Rect, pad_x: u16, pad_y: u16) -> Rect {
    let pad_x = pad_x.min(area.width / 2);
    let pad_y = pad_y.min(area.height / 2);
    Rect::new(
        area.x + pad_x,
        area.y + pad_y,
        area.width - pad_x * 2,
        area.height - pad_y * 2,
    )
}

pub(crate) fn list_state(selected: usize, len: usize) -> ListState {
    let selected = len.checked_sub(1).map(|last| selected.min(last));
    ListState::default().with_selected(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_text_marks_cut_host_names() {
        assert_eq!(truncate_text("db-primary.internal", 10), "db-prim...");
        assert_eq!(truncate_text("web", 3), "web");
        assert_eq!(truncate_text("web-01", 2), "we");
        assert_eq!(truncate_text("web-01", 0), "");
        assert_eq!(truncate_text("héllo wörld", 8), "héllo...");
    }

    #[test]
    fn list_state_selects_within_window() {
        assert_eq!(list_state(0, 0).selected(), None);
        assert_eq!(list_state(1, 4).selected(), Some(1));
        assert_eq!(list_state(9, 4).selected(), Some(3));
    }

    #[test]
    fn padded_rect_shrinks_symmetrically() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(padded_rect(area, 2, 1), Rect::new(2, 1, 16, 8));
        let tiny = Rect::new(2, 1, 3, 1);
        let inner = padded_rect(tiny, 2, 1);
        assert_eq!(inner.width, 1);
        assert_eq!(inner.height, 1);
    }

    #[test]
    fn field_line_marks_active_field() {
        let theme = Theme::default();
        let line = field_line(&theme, "Host", "box1", true, 4, 20);
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, "> Host: box1");
        let line = field_line(&theme, "User", "alice", false, 6, 3);
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, "  User  : ali");
    }
}
