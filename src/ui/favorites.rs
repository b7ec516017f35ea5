//! Favorites screen.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListState, Paragraph};
use ratatui::Frame;

use super::browse::boss_item;
use super::helpers::spinner_frame;
use super::theme::Palette;
use super::EMPTY_FAVORITES;
use crate::app::App;

pub fn render_favorites(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let favorites = app.favorite_list();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .title(format!(" Favorites ({}) ", favorites.len()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if favorites.is_empty() {
        let text = if app.bosses_loading() && !app.bosses_loaded {
            format!("{} Loading bosses…", spinner_frame(app.tick_count))
        } else {
            EMPTY_FAVORITES.to_string()
        };
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(palette.dim)),
            inner,
        );
        return;
    }

    let name_width = usize::from(inner.width.saturating_sub(12)).max(4);
    let items: Vec<_> = favorites
        .iter()
        .map(|boss| boss_item(boss, true, name_width, palette))
        .collect();

    let list = List::new(items).highlight_style(
        Style::default()
            .bg(palette.surface)
            .add_modifier(Modifier::BOLD),
    );
    let mut state = ListState::default().with_selected(Some(app.favorites_cursor));
    frame.render_stateful_widget(list, inner, &mut state);
}
