//! Search screen: text box, difficulty and isle pickers, and results.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListState, Paragraph};
use ratatui::Frame;

use super::browse::boss_item;
use super::helpers::{spinner_frame, star_spans};
use super::theme::Palette;
use super::EMPTY_BOSSES;
use crate::app::{App, SearchFocus};
use crate::models::{Difficulty, Isle};
use crate::views::star_render_plan;

pub fn render_search(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let [input_area, filters_area, results_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);

    render_input(frame, input_area, app, palette);

    let [difficulty_area, isle_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(filters_area);
    render_difficulty_picker(frame, difficulty_area, app, palette);
    render_isle_picker(frame, isle_area, app, palette);

    render_results(frame, results_area, app, palette);
}

fn focused_block(title: &str, focused: bool, palette: &Palette) -> Block<'static> {
    let border = if focused {
        Style::default().fg(palette.text).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.dim)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {} ", title))
}

fn render_input(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let focused = app.search_focus == SearchFocus::Text;
    let text = &app.criteria.search_text;

    let line = if text.is_empty() && !focused {
        Line::from(Span::styled("Search Bosses...", Style::default().fg(palette.dim)))
    } else {
        let mut spans = vec![Span::raw(text.clone())];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(palette.accent)));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(line).block(focused_block("Name", focused, palette)),
        area,
    );
}

fn render_difficulty_picker(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let focused = app.search_focus == SearchFocus::Difficulty;
    let selected = app.criteria.difficulty.unwrap_or(Difficulty::ZERO);

    let mut spans = star_spans(star_render_plan(selected), palette);
    let label = match app.criteria.difficulty {
        Some(d) => format!("  {}", d),
        None => "  any".to_string(),
    };
    spans.push(Span::styled(label, Style::default().fg(palette.dim)));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(focused_block("Difficulty", focused, palette)),
        area,
    );
}

fn render_isle_picker(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let focused = app.search_focus == SearchFocus::Isle;

    let mut spans = Vec::new();
    for isle in Isle::ALL {
        let style = if app.criteria.isle == Some(isle) {
            Style::default()
                .bg(palette.text)
                .fg(palette.background)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };
        spans.push(Span::styled(format!(" {} ", isle.numeral()), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(focused_block("Isle", focused, palette)),
        area,
    );
}

fn render_results(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let focused = app.search_focus == SearchFocus::Results;
    let results = app.search_results();
    let block = focused_block(&format!("Results ({})", results.len()), focused, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if results.is_empty() {
        let text = if app.bosses_loading() && !app.bosses_loaded {
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

    let name_width = usize::from(inner.width.saturating_sub(12)).max(4);
    let items: Vec<_> = results
        .iter()
        .map(|boss| boss_item(boss, app.preferences.is_favorite(boss.id), name_width, palette))
        .collect();

    let highlight = if focused {
        Style::default()
            .bg(palette.surface)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let list = List::new(items).highlight_style(highlight);
    let mut state = ListState::default().with_selected(Some(app.search_cursor));
    frame.render_stateful_widget(list, inner, &mut state);
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::loaded_app;
    use crate::app::Screen;
    use crate::ui::test_support::{buffer_text, draw};
    use crate::ui::EMPTY_BOSSES;

    #[test]
    fn test_all_bosses_without_criteria() {
        let (mut app, _) = loaded_app();
        app.screen = Screen::Search;
        let text = buffer_text(&draw(&app, 90, 24));
        assert!(text.contains("Results (4)"));
        assert!(text.contains("any"));
        assert!(text.contains(" I "));
        assert!(text.contains(" III "));
    }

    #[test]
    fn test_no_matches_shows_empty_state() {
        let (mut app, _) = loaded_app();
        app.screen = Screen::Search;
        app.set_search_text("devil");
        let text = buffer_text(&draw(&app, 90, 24));
        assert!(text.contains("Results (0)"));
        assert!(text.contains(EMPTY_BOSSES));
    }

    #[test]
    fn test_difficulty_label() {
        let (mut app, _) = loaded_app();
        app.screen = Screen::Search;
        app.step_difficulty_filter(true);
        app.step_difficulty_filter(true);
        app.step_difficulty_filter(true);
        let text = buffer_text(&draw(&app, 90, 24));
        assert!(text.contains("1.5"));
    }
}
