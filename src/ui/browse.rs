//! Browse screen: the catalog as three collapsible isle sections.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use super::helpers::{spinner_frame, star_spans, truncate_to_width};
use super::theme::Palette;
use super::EMPTY_BOSSES;
use crate::app::{App, BrowseRow};
use crate::models::{Boss, Isle};
use crate::views::{group_by_isle, star_render_plan};

pub fn render_browse(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .title(" Isles ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !app.bosses_loaded && app.bosses.is_empty() {
        let text = if app.bosses_loading() {
            format!("{} Loading bosses…", spinner_frame(app.tick_count))
        } else {
            EMPTY_BOSSES.to_string()
        };
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(palette.dim)),
            inner,
        );
        return;
    }

    let groups = group_by_isle(&app.bosses);
    let name_width = usize::from(inner.width.saturating_sub(14)).max(4);

    let mut items = Vec::new();
    let mut selected = None;
    for (row_index, row) in app.browse_rows().into_iter().enumerate() {
        if row_index == app.browse_cursor {
            selected = Some(items.len());
        }
        match row {
            BrowseRow::Isle(isle) => {
                let expanded = app.expanded_isle == Some(isle);
                let count = groups.bucket(isle).len();
                items.push(isle_item(isle, count, expanded, palette));
                if expanded && count == 0 {
                    items.push(ListItem::new(Line::from(Span::styled(
                        format!("    {}", EMPTY_BOSSES),
                        Style::default().fg(palette.dim),
                    ))));
                }
            }
            BrowseRow::Boss(id) => {
                if let Some(boss) = app.bosses.iter().find(|b| b.id == id) {
                    items.push(boss_item(
                        boss,
                        app.preferences.is_favorite(id),
                        name_width,
                        palette,
                    ));
                }
            }
        }
    }

    let list = List::new(items).highlight_style(
        Style::default()
            .bg(palette.surface)
            .add_modifier(Modifier::BOLD),
    );
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, inner, &mut state);
}

fn isle_item(isle: Isle, count: usize, expanded: bool, palette: &Palette) -> ListItem<'static> {
    let arrow = if expanded { "▾" } else { "▸" };
    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{} {}", arrow, isle.title()),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  ({})", count), Style::default().fg(palette.dim)),
    ]))
}

/// A boss row: favorite marker, name, difficulty stars.
pub(super) fn boss_item(
    boss: &Boss,
    favorite: bool,
    name_width: usize,
    palette: &Palette,
) -> ListItem<'static> {
    let marker = if favorite { "♥ " } else { "  " };
    let name = truncate_to_width(&boss.name, name_width);
    let padding = name_width.saturating_sub(unicode_width::UnicodeWidthStr::width(name.as_str()));

    let mut spans = vec![
        Span::raw("  "),
        Span::styled(marker, Style::default().fg(palette.star)),
        Span::styled(name, Style::default().fg(palette.text)),
        Span::raw(" ".repeat(padding + 1)),
    ];
    spans.extend(star_spans(star_render_plan(boss.difficulty), palette));
    ListItem::new(Line::from(spans))
}
