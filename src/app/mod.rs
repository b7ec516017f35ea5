//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`SearchFocus`] - Which search control has focus
//! - [`AppMessage`] - Messages for async communication
//!
//! Behaviour is split across files as `impl App` blocks: navigation,
//! user intents, background fetches and key/message handling.

mod fetch;
mod handlers;
mod intents;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{BrowseRow, DetailsState, Screen, SearchFocus};

use tokio::sync::mpsc;

use crate::catalog::CatalogClient;
use crate::models::{Boss, Isle};
use crate::preferences::PreferenceStore;
use crate::views::{favorite_bosses, filter_bosses, FilterCriteria, WeaponIndex};

/// Main application state
pub struct App {
    /// Favorites and theme, written through on every change
    pub preferences: PreferenceStore,
    /// Catalog client (cloned into each fetch task)
    pub catalog: CatalogClient,
    /// Last successfully fetched boss list, source order
    pub bosses: Vec<Boss>,
    /// Boss fetches spawned but not yet reported back
    pub bosses_in_flight: usize,
    /// True once any boss fetch has completed successfully
    pub bosses_loaded: bool,
    /// Weapons by id from the last successful fetch
    pub weapons: WeaponIndex,
    /// Weapon fetches spawned but not yet reported back
    pub weapons_in_flight: usize,
    /// Current screen being displayed
    pub screen: Screen,
    /// Screens to return to on back, innermost last
    pub screen_stack: Vec<Screen>,
    /// The single expanded isle section on the browse screen
    pub expanded_isle: Option<Isle>,
    /// Selected row on the browse screen
    pub browse_cursor: usize,
    /// Selected row on the favorites screen
    pub favorites_cursor: usize,
    /// Search criteria for the current visit to the search screen
    pub criteria: FilterCriteria,
    /// Focused search control
    pub search_focus: SearchFocus,
    /// Selected row in the search results
    pub search_cursor: usize,
    /// Details screen state (Some while the details screen is on the stack)
    pub details: Option<DetailsState>,
    /// Receiver for async messages (catalog fetch results)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: when true, the UI needs to be redrawn.
    /// Set to true on state mutations, cleared after each draw.
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
}

impl App {
    /// Create a new App around an injected catalog client and preference store.
    ///
    /// No fetch is started until [`App::start`].
    pub fn new(catalog: CatalogClient, preferences: PreferenceStore) -> Self {
        // Create the message channel for async communication
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            preferences,
            catalog,
            bosses: Vec::new(),
            bosses_in_flight: 0,
            bosses_loaded: false,
            weapons: WeaponIndex::default(),
            weapons_in_flight: 0,
            screen: Screen::default(),
            screen_stack: Vec::new(),
            expanded_isle: None,
            browse_cursor: 0,
            favorites_cursor: 0,
            criteria: FilterCriteria::default(),
            search_focus: SearchFocus::default(),
            search_cursor: 0,
            details: None,
            message_rx: Some(message_rx),
            message_tx,
            should_quit: false,
            needs_redraw: true, // Start with redraw needed
            tick_count: 0,
        }
    }

    /// Enter the browse screen, which fetches the boss list.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        self.spawn_boss_fetch();
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation tick; only redraws while something is loading.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_loading() && self.tick_count % 6 == 0 {
            self.mark_dirty();
        }
    }

    /// True while any boss fetch is outstanding.
    pub fn bosses_loading(&self) -> bool {
        self.bosses_in_flight > 0
    }

    pub fn weapons_loading(&self) -> bool {
        self.weapons_in_flight > 0
    }

    /// True while the current screen is waiting for its fetch.
    pub fn is_loading(&self) -> bool {
        match self.screen {
            Screen::Details => self.weapons_loading(),
            _ => self.bosses_loading(),
        }
    }

    /// Rows of the browse screen: three isle headers, with the bosses of the
    /// expanded isle listed under its header.
    pub fn browse_rows(&self) -> Vec<BrowseRow> {
        let mut rows = Vec::with_capacity(3 + self.bosses.len());
        for isle in Isle::ALL {
            rows.push(BrowseRow::Isle(isle));
            if self.expanded_isle == Some(isle) {
                rows.extend(
                    self.bosses
                        .iter()
                        .filter(|boss| boss.isle == isle)
                        .map(|boss| BrowseRow::Boss(boss.id)),
                );
            }
        }
        rows
    }

    /// Bosses shown on the search screen.
    pub fn search_results(&self) -> Vec<&Boss> {
        filter_bosses(&self.bosses, &self.criteria)
    }

    /// Bosses shown on the favorites screen.
    pub fn favorite_list(&self) -> Vec<&Boss> {
        favorite_bosses(&self.bosses, &self.preferences)
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("screen_stack", &self.screen_stack)
            .field("bosses", &self.bosses.len())
            .field("bosses_in_flight", &self.bosses_in_flight)
            .field("weapons", &self.weapons.len())
            .field("criteria", &self.criteria)
            .field("preferences", &self.preferences)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use super::App;
    use crate::adapters::mock::{InMemoryPreferences, MockHttpClient};
    use crate::catalog::CatalogClient;
    use crate::models::{Boss, Difficulty, Isle};
    use crate::preferences::PreferenceStore;

    pub const BASE: &str = "http://catalog.test";

    pub fn sample_bosses() -> Vec<Boss> {
        vec![
            Boss::new(1, "The Root Pack", Difficulty::from_half_steps(2).unwrap(), Isle::One)
                .with_images(["root_1", "root_2", "root_3"]),
            Boss::new(2, "Cagney Carnation", Difficulty::from_half_steps(6).unwrap(), Isle::One),
            Boss::new(3, "Cala Maria", Difficulty::from_half_steps(7).unwrap(), Isle::Two)
                .with_health(1800)
                .with_recommended_weapons([1, 4]),
            Boss::new(4, "King Dice", Difficulty::from_half_steps(10).unwrap(), Isle::Three),
        ]
    }

    pub fn app_with(http: &MockHttpClient, prefs: &InMemoryPreferences) -> App {
        let catalog = CatalogClient::new(Arc::new(http.clone()), BASE);
        App::new(catalog, PreferenceStore::load(Box::new(prefs.clone())))
    }

    /// An app whose boss list is already loaded, without any fetch.
    pub fn loaded_app() -> (App, InMemoryPreferences) {
        let prefs = InMemoryPreferences::new();
        let mut app = app_with(&MockHttpClient::new(), &prefs);
        app.bosses = sample_bosses();
        app.bosses_loaded = true;
        (app, prefs)
    }
}
