//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{sample_bosses_json, TestAppBuilder};
//!
//! let (app, prefs) = TestAppBuilder::new().with_bosses(sample_bosses()).build();
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;

use bossdex::app::App;
use bossdex::catalog::CatalogClient;
use bossdex::models::{Boss, Difficulty, Isle, Weapon};
use bossdex::preferences::{PreferenceStore, PreferencesSnapshot};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Base URL the mock catalog answers on.
pub const TEST_API: &str = "http://catalog.test";

/// Boss list body as the catalog source would send it.
///
/// Includes one entry off the half-star grid that must be skipped.
pub fn sample_bosses_json() -> &'static str {
    r#"[
        {"id": "1", "name": "The Root Pack", "difficulty": 1, "isle": 1,
         "images": ["root_1", "root_2"], "health": 1300, "recommendedWeapons": [1, 2]},
        {"id": 2, "name": "Cagney Carnation", "difficulty": 3, "isle": 1},
        {"id": 3, "name": "Cala Maria", "difficulty": 3.5, "isle": 2, "health": 1800,
         "recommendedWeapons": ["1", 4]},
        {"id": 4, "name": "Broken Entry", "difficulty": 2.3, "isle": 2},
        {"id": 5, "name": "King Dice", "difficulty": 5, "isle": 3}
    ]"#
}

pub fn sample_weapons_json() -> &'static str {
    r##"[
        {"id": 1, "name": "Peashooter", "url": "peashooter", "damage": 4, "exDamage": 8.34, "dps": 26, "color": "#1e88e5"},
        {"id": "2", "name": "Spread", "url": "spread", "damage": 1.24, "exDamage": 8.5, "dps": 41.2, "color": "red"}
    ]"##
}

pub fn sample_bosses() -> Vec<Boss> {
    vec![
        Boss::new(1, "The Root Pack", Difficulty::from_half_steps(2).unwrap(), Isle::One),
        Boss::new(2, "Cagney Carnation", Difficulty::from_half_steps(6).unwrap(), Isle::One),
        Boss::new(3, "Cala Maria", Difficulty::from_half_steps(7).unwrap(), Isle::Two)
            .with_health(1800)
            .with_recommended_weapons([1, 4]),
        Boss::new(5, "King Dice", Difficulty::from_half_steps(10).unwrap(), Isle::Three),
    ]
}

pub fn sample_weapons() -> Vec<Weapon> {
    vec![
        Weapon::new(1, "Peashooter").with_stats(4.0, 8.34, 26.0).with_color("#1e88e5"),
        Weapon::new(2, "Spread").with_stats(1.24, 8.5, 41.2).with_color("red"),
    ]
}

/// Builder for creating test App instances over mock adapters.
pub struct TestAppBuilder {
    http: MockHttpClient,
    prefs: InMemoryPreferences,
    bosses: Option<Vec<Boss>>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            http: MockHttpClient::new(),
            prefs: InMemoryPreferences::new(),
            bosses: None,
        }
    }

    pub fn with_http(mut self, http: MockHttpClient) -> Self {
        self.http = http;
        self
    }

    pub fn with_snapshot(mut self, snapshot: PreferencesSnapshot) -> Self {
        self.prefs = InMemoryPreferences::with_snapshot(snapshot);
        self
    }

    /// Pretend a boss fetch already completed.
    pub fn with_bosses(mut self, bosses: Vec<Boss>) -> Self {
        self.bosses = Some(bosses);
        self
    }

    pub fn build(self) -> (App, InMemoryPreferences) {
        let catalog = CatalogClient::new(Arc::new(self.http), TEST_API);
        let store = PreferenceStore::load(Box::new(self.prefs.clone()));
        let mut app = App::new(catalog, store);
        if let Some(bosses) = self.bosses {
            app.bosses = bosses;
            app.bosses_loaded = true;
        }
        (app, self.prefs)
    }
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `app` at `width` x `height` and return the screen as text.
pub fn render_to_text(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| bossdex::ui::render(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Receive and apply the next fetch result.
pub async fn apply_next_message(app: &mut App) {
    let msg = app
        .message_rx
        .as_mut()
        .expect("receiver taken")
        .recv()
        .await
        .expect("channel closed");
    app.handle_message(msg);
}
