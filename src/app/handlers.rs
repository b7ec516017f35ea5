//! Message and key handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{error, info};

use super::{App, AppMessage, BrowseRow, Screen, SearchFocus};
use crate::models::{Difficulty, Isle};
use crate::views::WeaponIndex;

impl App {
    /// Handle an incoming async message
    /// All message handlers mark the app as dirty since they update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::BossesLoaded(bosses) => {
                info!(count = bosses.len(), "Boss list applied");
                self.bosses = bosses;
                self.bosses_in_flight = self.bosses_in_flight.saturating_sub(1);
                self.bosses_loaded = true;
                self.clamp_cursors();
            }
            AppMessage::BossesLoadFailed { error } => {
                // Keep whatever list we already had
                error!(kept = self.bosses.len(), "Boss fetch failed: {}", error);
                self.bosses_in_flight = self.bosses_in_flight.saturating_sub(1);
            }
            AppMessage::WeaponsLoaded(weapons) => {
                info!(count = weapons.len(), "Weapon list applied");
                self.weapons = WeaponIndex::new(weapons);
                self.weapons_in_flight = self.weapons_in_flight.saturating_sub(1);
            }
            AppMessage::WeaponsLoadFailed { error } => {
                error!(kept = self.weapons.len(), "Weapon fetch failed: {}", error);
                self.weapons_in_flight = self.weapons_in_flight.saturating_sub(1);
            }
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // An open weapon popup swallows everything except the keys that close it
        if let Some(details) = &self.details {
            if self.screen == Screen::Details && details.selected_weapon.is_some() {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ')) {
                    self.clear_weapon_selection();
                }
                return;
            }
        }

        if key.code == KeyCode::Esc {
            self.go_back();
            return;
        }

        match self.screen {
            Screen::Browse => self.handle_browse_key(key),
            Screen::Details => self.handle_details_key(key),
            Screen::Favorites => self.handle_favorites_key(key),
            Screen::Search => self.handle_search_key(key),
        }
    }

    /// Handle bracketed paste; only the search box accepts text.
    pub fn handle_paste(&mut self, text: &str) {
        if self.screen == Screen::Search && self.search_focus == SearchFocus::Text {
            let line = text.lines().next().unwrap_or_default();
            let combined = format!("{}{}", self.criteria.search_text, line);
            self.set_search_text(combined);
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        let rows = self.browse_rows();
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('t') => {
                self.advance_theme();
            }
            KeyCode::Char('f') => self.open_favorites(),
            KeyCode::Char('/') | KeyCode::Char('s') => self.open_search(),
            KeyCode::Char('r') => self.spawn_boss_fetch(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.browse_cursor = self.browse_cursor.saturating_sub(1);
                self.mark_dirty();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.browse_cursor + 1 < rows.len() {
                    self.browse_cursor += 1;
                    self.mark_dirty();
                }
            }
            KeyCode::Char(c @ '1'..='3') => {
                if let Some(isle) = c.to_digit(10).and_then(|n| Isle::from_number(n as u8)) {
                    self.toggle_isle_expansion(isle);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match rows.get(self.browse_cursor) {
                Some(BrowseRow::Isle(isle)) => self.toggle_isle_expansion(*isle),
                Some(BrowseRow::Boss(id)) => self.open_details(*id),
                None => {}
            },
            _ => {}
        }
    }

    fn handle_details_key(&mut self, key: KeyEvent) {
        let Some(details) = &self.details else {
            return;
        };
        let boss_id = details.boss.id;
        let highlighted = details
            .boss
            .recommended_weapons
            .get(details.weapon_cursor)
            .copied();

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => self.previous_image(),
            KeyCode::Right | KeyCode::Char('l') => self.next_image(),
            KeyCode::Up | KeyCode::Char('k') => self.move_weapon_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_weapon_cursor(1),
            KeyCode::Char('f') => self.toggle_favorite(boss_id),
            KeyCode::Enter | KeyCode::Char(' ') => {
                // Only weapons present in the index have stats to show
                if let Some(id) = highlighted.filter(|id| self.weapons.get(*id).is_some()) {
                    self.select_weapon(id);
                }
            }
            _ => {}
        }
    }

    fn handle_favorites_key(&mut self, key: KeyEvent) {
        let favorites: Vec<_> = self.favorite_list().iter().map(|b| b.id).collect();
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.favorites_cursor = self.favorites_cursor.saturating_sub(1);
                self.mark_dirty();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.favorites_cursor + 1 < favorites.len() {
                    self.favorites_cursor += 1;
                    self.mark_dirty();
                }
            }
            KeyCode::Char('f') | KeyCode::Delete => {
                if let Some(id) = favorites.get(self.favorites_cursor) {
                    self.toggle_favorite(*id);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(id) = favorites.get(self.favorites_cursor) {
                    self.open_details(*id);
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => {
                self.search_focus = self.search_focus.next();
                self.mark_dirty();
                return;
            }
            KeyCode::BackTab => {
                self.search_focus = self.search_focus.previous();
                self.mark_dirty();
                return;
            }
            _ => {}
        }

        match self.search_focus {
            SearchFocus::Text => match key.code {
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
                {
                    let mut text = self.criteria.search_text.clone();
                    text.push(c);
                    self.set_search_text(text);
                }
                KeyCode::Backspace => {
                    let mut text = self.criteria.search_text.clone();
                    if text.pop().is_some() {
                        self.set_search_text(text);
                    }
                }
                KeyCode::Down | KeyCode::Enter => {
                    self.search_focus = SearchFocus::Results;
                    self.mark_dirty();
                }
                _ => {}
            },
            SearchFocus::Difficulty => match key.code {
                KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => {
                    self.step_difficulty_filter(false)
                }
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => {
                    self.step_difficulty_filter(true)
                }
                KeyCode::Char(c @ '0'..='5') => {
                    let stars = c.to_digit(10).unwrap_or(0) as u8;
                    if let Some(d) = Difficulty::from_whole_stars(stars) {
                        self.set_difficulty_filter(d);
                    }
                }
                _ => {}
            },
            SearchFocus::Isle => match key.code {
                KeyCode::Char(c @ '0'..='3') => self.set_isle_filter(c.to_digit(10).unwrap_or(0) as u8),
                _ => {}
            },
            SearchFocus::Results => {
                let results: Vec<_> = self.search_results().iter().map(|b| b.id).collect();
                match key.code {
                    KeyCode::Char('q') => self.should_quit = true,
                    KeyCode::Up | KeyCode::Char('k') => {
                        if self.search_cursor == 0 {
                            self.search_focus = SearchFocus::Text;
                        }
                        self.search_cursor = self.search_cursor.saturating_sub(1);
                        self.mark_dirty();
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        if self.search_cursor + 1 < results.len() {
                            self.search_cursor += 1;
                            self.mark_dirty();
                        }
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        if let Some(id) = results.get(self.search_cursor) {
                            self.open_details(*id);
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}
