//! Helper functions and constants for UI rendering

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use super::theme::Palette;
use crate::views::StarRenderPlan;

/// Spinner frames for the loading indicator
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const STAR_FULL: &str = "★";
pub const STAR_HALF: &str = "⯪";
pub const STAR_EMPTY: &str = "☆";

/// Spinner frame for a tick count.
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[((tick / 6) % SPINNER_FRAMES.len() as u64) as usize]
}

/// A rect of `width` x `height` centered in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Truncate `text` to at most `max_width` display columns, adding `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Star spans for a render plan: filled, half, then empty slots.
pub fn star_spans(plan: StarRenderPlan, palette: &Palette) -> Vec<Span<'static>> {
    let filled = Style::default().fg(palette.star);
    let empty = Style::default().fg(palette.dim);

    let mut spans = Vec::with_capacity(usize::from(plan.total()));
    spans.extend((0..plan.full).map(|_| Span::styled(STAR_FULL, filled)));
    spans.extend((0..plan.half).map(|_| Span::styled(STAR_HALF, filled)));
    spans.extend((0..plan.empty).map(|_| Span::styled(STAR_EMPTY, empty)));
    spans
}

/// Pagination dots for the image carousel, e.g. `○ ● ○`.
pub fn pagination_dots(count: usize, active: usize) -> String {
    (0..count)
        .map(|i| if i == active { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}
