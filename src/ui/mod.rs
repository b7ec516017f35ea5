//! UI rendering for bossdex
//!
//! Every frame is a header bar, the active screen, and a status line:
//!
//! - Browse: isle sections, one expanded at a time
//! - Details: carousel, health bar, difficulty stars, recommended weapons
//! - Favorites: favorited bosses in catalog order
//! - Search: text box, difficulty and isle pickers, results
//!
//! The status line shows key hints, or the preference-write notice when the
//! last save failed.

mod browse;
mod details;
mod favorites;
mod helpers;
mod search;
mod theme;

pub use helpers::{centered_rect, pagination_dots, star_spans, truncate_to_width};
pub use theme::{palette, weapon_color, Palette};

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::app::{App, Screen};
use helpers::spinner_frame;

/// Shown when a boss list (search results, isle section) is empty.
pub const EMPTY_BOSSES: &str = "No bosses found";

/// Shown on the favorites screen when nothing is favorited.
pub const EMPTY_FAVORITES: &str = "You have no favorite bosses yet!";

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &App) {
    let palette = palette(app.preferences.current_theme());
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let [header, body, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header, app, &palette);

    match app.screen {
        Screen::Browse => browse::render_browse(frame, body, app, &palette),
        Screen::Details => details::render_details(frame, body, app, &palette),
        Screen::Favorites => favorites::render_favorites(frame, body, app, &palette),
        Screen::Search => search::render_search(frame, body, app, &palette),
    }

    render_status_line(frame, status, app, &palette);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut spans = vec![
        Span::styled(
            " BOSSDEX ",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("› {}", header_title(app)),
            Style::default().fg(palette.accent),
        ),
    ];

    if app.is_loading() {
        spans.push(Span::styled(
            format!("  {} loading", spinner_frame(app.tick_count)),
            Style::default().fg(palette.dim),
        ));
    }

    let theme = format!("theme: {} ", app.preferences.current_theme());
    let [left, right] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(theme.len() as u16),
    ])
    .areas(area);

    let style = Style::default().bg(palette.surface);
    frame.render_widget(Paragraph::new(Line::from(spans)).style(style), left);
    frame.render_widget(
        Paragraph::new(Span::styled(theme, Style::default().fg(palette.dim))).style(style),
        right,
    );
}

fn header_title(app: &App) -> String {
    match (&app.screen, &app.details) {
        (Screen::Details, Some(details)) => details.boss.name.clone(),
        (screen, _) => screen.title().to_string(),
    }
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let line = match app.preferences.notice() {
        Some(notice) => Line::from(Span::styled(
            format!(" ! {}", notice),
            Style::default().fg(palette.star).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            format!(" {}", key_hints(app)),
            Style::default().fg(palette.dim),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn key_hints(app: &App) -> &'static str {
    match app.screen {
        Screen::Browse => "↑↓ move · enter open · f favorites · / search · t theme · r reload · q quit",
        Screen::Details => match app.details.as_ref().and_then(|d| d.selected_weapon) {
            Some(_) => "enter/esc close",
            None => "←→ images · ↑↓ weapons · enter stats · f favorite · esc back",
        },
        Screen::Favorites => "↑↓ move · enter open · f remove · esc back",
        Screen::Search => "tab next field · ←→ / 0-5 difficulty · 0-3 isle · enter open · esc back",
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::app::test_support::loaded_app;
    use crate::models::ThemeId;

    #[test]
    fn test_render_shows_header_and_hints() {
        let (app, _) = loaded_app();
        let text = buffer_text(&draw(&app, 100, 24));
        assert!(text.contains("BOSSDEX"));
        assert!(text.contains("theme: default"));
        assert!(text.contains("q quit"));
    }

    #[test]
    fn test_header_follows_theme() {
        let (mut app, _) = loaded_app();
        app.advance_theme();
        let buffer = draw(&app, 100, 24);
        assert!(buffer_text(&buffer).contains("theme: cuphead"));
        assert_eq!(buffer[(0, 5)].bg, palette(ThemeId::Cuphead).background);
    }

    #[test]
    fn test_notice_replaces_hints() {
        let prefs = crate::adapters::mock::InMemoryPreferences::new();
        prefs.fail_saves(true);
        let mut app = crate::app::test_support::app_with(
            &crate::adapters::mock::MockHttpClient::new(),
            &prefs,
        );
        app.toggle_favorite(crate::models::BossId(1));

        let text = buffer_text(&draw(&app, 100, 24));
        assert!(text.contains("Preferences could not be saved"));
        assert!(!text.contains("q quit"));
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let (mut app, _) = loaded_app();
        for screen in [Screen::Browse, Screen::Favorites, Screen::Search] {
            app.screen = screen;
            draw(&app, 10, 3);
        }
    }
}
