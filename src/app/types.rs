//! Type definitions for the application state.
//!
//! - [`Screen`] - Which screen is currently displayed
//! - [`SearchFocus`] - Which control of the search screen takes input
//! - [`BrowseRow`] - One selectable row of the browse screen
//! - [`DetailsState`] - The boss being shown and its carousel/weapon cursors

use crate::models::{Boss, BossId, Isle, WeaponId};

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Browse,
    Details,
    Favorites,
    Search,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Browse => "Bosses",
            Screen::Details => "Details",
            Screen::Favorites => "Favorites",
            Screen::Search => "Search",
        }
    }
}

/// Which search control receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchFocus {
    #[default]
    Text,
    Difficulty,
    Isle,
    Results,
}

impl SearchFocus {
    /// Tab order: Text → Difficulty → Isle → Results → Text
    pub fn next(self) -> Self {
        match self {
            SearchFocus::Text => SearchFocus::Difficulty,
            SearchFocus::Difficulty => SearchFocus::Isle,
            SearchFocus::Isle => SearchFocus::Results,
            SearchFocus::Results => SearchFocus::Text,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            SearchFocus::Text => SearchFocus::Results,
            SearchFocus::Difficulty => SearchFocus::Text,
            SearchFocus::Isle => SearchFocus::Difficulty,
            SearchFocus::Results => SearchFocus::Isle,
        }
    }
}

/// A selectable row on the browse screen: an isle header or a boss under
/// the expanded isle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseRow {
    Isle(Isle),
    Boss(BossId),
}

/// State of the details screen for one boss.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsState {
    /// The boss as it was when the screen was opened
    pub boss: Boss,
    /// Active carousel image
    pub image_index: usize,
    /// Highlighted row in the recommended weapons list
    pub weapon_cursor: usize,
    /// Weapon whose stats popup is open
    pub selected_weapon: Option<WeaponId>,
}

impl DetailsState {
    pub fn new(boss: Boss) -> Self {
        Self {
            boss,
            image_index: 0,
            weapon_cursor: 0,
            selected_weapon: None,
        }
    }
}
