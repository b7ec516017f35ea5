//! User intents: synchronous state changes dispatched from key handling.

use tracing::debug;

use super::{App, BrowseRow};
use crate::models::{BossId, Difficulty, Isle, ThemeId, WeaponId};

impl App {
    /// Add or remove a favorite; written through to the preference backend.
    pub fn toggle_favorite(&mut self, boss_id: BossId) {
        self.preferences.toggle_favorite(boss_id);
        self.clamp_cursors();
        self.mark_dirty();
    }

    /// Move to the next theme in the cycle.
    pub fn advance_theme(&mut self) -> ThemeId {
        let theme = self.preferences.advance_theme();
        self.mark_dirty();
        theme
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.criteria.set_search_text(text);
        self.search_cursor = 0;
        self.mark_dirty();
    }

    /// Choose a difficulty on the picker. Choosing the current rating (or
    /// zero) clears the filter.
    pub fn set_difficulty_filter(&mut self, difficulty: Difficulty) {
        self.criteria.choose_difficulty(difficulty);
        debug!(difficulty = ?self.criteria.difficulty, "Difficulty filter");
        self.search_cursor = 0;
        self.mark_dirty();
    }

    /// Step the difficulty filter by half a star, without the toggle-off
    /// behaviour of [`App::set_difficulty_filter`].
    pub fn step_difficulty_filter(&mut self, up: bool) {
        let current = self.criteria.difficulty.unwrap_or(Difficulty::ZERO);
        let next = if up {
            current.step_up()
        } else {
            current.step_down()
        };
        self.criteria.set_difficulty(next);
        self.search_cursor = 0;
        self.mark_dirty();
    }

    /// Choose an isle by its number. Zero clears the filter; choosing the
    /// selected isle clears it as well.
    pub fn set_isle_filter(&mut self, number: u8) {
        match Isle::from_number(number) {
            Some(isle) => self.criteria.choose_isle(isle),
            None => self.criteria.set_isle_number(0),
        }
        debug!(isle = ?self.criteria.isle, "Isle filter");
        self.search_cursor = 0;
        self.mark_dirty();
    }

    /// Expand `isle`, or collapse it if it is the expanded one. At most one
    /// isle is expanded at a time.
    pub fn toggle_isle_expansion(&mut self, isle: Isle) {
        self.expanded_isle = if self.expanded_isle == Some(isle) {
            None
        } else {
            Some(isle)
        };
        // Keep the cursor on the header that was toggled
        self.browse_cursor = self
            .browse_rows()
            .iter()
            .position(|row| *row == BrowseRow::Isle(isle))
            .unwrap_or(0);
        self.mark_dirty();
    }

    /// Open the stats popup for a weapon on the details screen.
    pub fn select_weapon(&mut self, weapon_id: WeaponId) {
        if let Some(details) = self.details.as_mut() {
            details.selected_weapon = Some(weapon_id);
            self.mark_dirty();
        }
    }

    pub fn clear_weapon_selection(&mut self) {
        if let Some(details) = self.details.as_mut() {
            details.selected_weapon = None;
            self.mark_dirty();
        }
    }

    /// Show the next carousel image, stopping at the last.
    pub fn next_image(&mut self) {
        if let Some(details) = self.details.as_mut() {
            let last = details.boss.images.len().saturating_sub(1);
            details.image_index = (details.image_index + 1).min(last);
            self.mark_dirty();
        }
    }

    /// Show the previous carousel image, stopping at the first.
    pub fn previous_image(&mut self) {
        if let Some(details) = self.details.as_mut() {
            details.image_index = details.image_index.saturating_sub(1);
            self.mark_dirty();
        }
    }

    /// Move the recommended-weapon cursor by `delta`, clamped to the list.
    pub fn move_weapon_cursor(&mut self, delta: isize) {
        if let Some(details) = self.details.as_mut() {
            let len = details.boss.recommended_weapons.len();
            if len == 0 {
                return;
            }
            let target = details.weapon_cursor.saturating_add_signed(delta);
            details.weapon_cursor = target.min(len - 1);
            self.mark_dirty();
        }
    }
}
