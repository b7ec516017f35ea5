//! Navigation methods for the App.
//!
//! Screens form a stack rooted at browse. Pushing a screen counts as
//! entering it and fires that screen's fetch; returning with back does not.

use tracing::debug;

use super::{App, DetailsState, Screen, SearchFocus};
use crate::models::BossId;
use crate::views::FilterCriteria;

impl App {
    fn push_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            self.screen_stack.push(self.screen);
        }
        debug!(from = ?self.screen, to = ?screen, "Navigate");
        self.screen = screen;
        self.mark_dirty();
    }

    /// Open the details screen for a loaded boss. Unknown ids are ignored.
    pub fn open_details(&mut self, boss_id: BossId) {
        let Some(boss) = self.bosses.iter().find(|b| b.id == boss_id).cloned() else {
            debug!(boss_id = %boss_id, "open_details for unknown boss ignored");
            return;
        };

        self.details = Some(DetailsState::new(boss));
        self.push_screen(Screen::Details);
        self.spawn_weapon_fetch();
    }

    /// Open the favorites screen.
    pub fn open_favorites(&mut self) {
        self.favorites_cursor = 0;
        self.push_screen(Screen::Favorites);
        self.spawn_boss_fetch();
    }

    /// Open the search screen with fresh criteria.
    pub fn open_search(&mut self) {
        self.criteria = FilterCriteria::default();
        self.search_focus = SearchFocus::default();
        self.search_cursor = 0;
        self.push_screen(Screen::Search);
        self.spawn_boss_fetch();
    }

    /// Return to the previous screen. Does nothing on the root screen.
    pub fn go_back(&mut self) {
        let Some(previous) = self.screen_stack.pop() else {
            return;
        };

        if self.screen == Screen::Details {
            self.details = None;
        }
        debug!(from = ?self.screen, to = ?previous, "Back");
        self.screen = previous;
        self.clamp_cursors();
        self.mark_dirty();
    }

    /// Keep every list cursor inside its list after the data changed.
    pub fn clamp_cursors(&mut self) {
        let browse_len = self.browse_rows().len();
        let favorites_len = self.favorite_list().len();
        let results_len = self.search_results().len();

        self.browse_cursor = clamp_index(self.browse_cursor, browse_len);
        self.favorites_cursor = clamp_index(self.favorites_cursor, favorites_len);
        self.search_cursor = clamp_index(self.search_cursor, results_len);
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}
