//! Plain-text rendering of control strips.

use super::controls::ControlItem;

/// "Page X of Y" label shown when page numbers are hidden.
pub fn page_label(page: usize, total_pages: usize) -> String {
    format!("Page {} of {}", page.max(1), total_pages.max(1))
}

/// Render a control strip as a single line, e.g. `« Prev 1 … 8 [9] 10 … 20 Next »`.
///
/// Disabled previous/next controls are wrapped in parentheses.
pub fn render_controls(items: &[ControlItem]) -> String {
    items
        .iter()
        .map(|item| match *item {
            ControlItem::Previous { disabled: true, .. } => "(« Prev)".to_owned(),
            ControlItem::Previous { .. } => "« Prev".to_owned(),
            ControlItem::Next { disabled: true, .. } => "(Next »)".to_owned(),
            ControlItem::Next { .. } => "Next »".to_owned(),
            ControlItem::Page {
                number,
                current: true,
            } => format!("[{number}]"),
            ControlItem::Page { number, .. } => number.to_string(),
            ControlItem::Ellipsis => "…".to_owned(),
            ControlItem::Label { page, total_pages } => page_label(page, total_pages),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
