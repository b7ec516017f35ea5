//! End-to-end flows through the app state machine with mock adapters.

mod common;

use bossdex::app::{AppMessage, Screen, SearchFocus};
use bossdex::models::{BossId, Difficulty, Isle, ThemeId};
use bossdex::preferences::PreferencesSnapshot;
use common::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn bosses_url() -> String {
    format!("{}/bosses", TEST_API)
}

fn weapons_url() -> String {
    format!("{}/weapons", TEST_API)
}

#[tokio::test]
async fn test_startup_fetch_fills_catalog() {
    let http = MockCatalogConfig::new().with_samples().build();
    let (mut app, _) = TestAppBuilder::new().with_http(http.clone()).build();

    app.start();
    assert!(app.is_loading());
    apply_next_message(&mut app).await;

    assert!(!app.bosses_loading());
    assert!(app.bosses_loaded);
    assert_eq!(app.bosses.len(), 4);
    assert_eq!(http.request_count(&bosses_url()), 1);
}

#[tokio::test]
async fn test_failed_fetch_keeps_previous_list() {
    let http = MockCatalogConfig::new().with_bosses_unreachable().build();
    let (mut app, _) = TestAppBuilder::new()
        .with_http(http)
        .with_bosses(sample_bosses())
        .build();

    app.start();
    apply_next_message(&mut app).await;

    assert!(!app.bosses_loading());
    assert_eq!(app.bosses.len(), 4);
}

#[tokio::test]
async fn test_each_screen_entry_fetches_once() {
    let http = MockCatalogConfig::new().with_samples().build();
    let (mut app, _) = TestAppBuilder::new()
        .with_http(http.clone())
        .with_bosses(sample_bosses())
        .build();

    app.handle_key(key(KeyCode::Char('f')));
    assert_eq!(app.screen, Screen::Favorites);
    apply_next_message(&mut app).await;
    assert_eq!(http.request_count(&bosses_url()), 1);

    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.screen, Screen::Browse);

    app.handle_key(key(KeyCode::Char('/')));
    assert_eq!(app.screen, Screen::Search);
    apply_next_message(&mut app).await;
    assert_eq!(http.request_count(&bosses_url()), 2);

    app.handle_key(key(KeyCode::Esc));
    assert_eq!(http.request_count(&bosses_url()), 2);
}

#[tokio::test]
async fn test_back_to_back_entries_stay_loading_until_both_finish() {
    let http = MockCatalogConfig::new().with_samples().build();
    let (mut app, _) = TestAppBuilder::new()
        .with_http(http.clone())
        .with_bosses(sample_bosses())
        .build();

    app.open_favorites();
    app.go_back();
    app.open_search();
    assert_eq!(app.bosses_in_flight, 2);

    apply_next_message(&mut app).await;
    assert!(app.is_loading());

    apply_next_message(&mut app).await;
    assert!(!app.is_loading());
    assert_eq!(http.request_count(&bosses_url()), 2);
}

#[tokio::test]
async fn test_open_details_fetches_weapons() {
    let http = MockCatalogConfig::new().with_samples().build();
    let (mut app, _) = TestAppBuilder::new()
        .with_http(http.clone())
        .with_bosses(sample_bosses())
        .build();

    app.open_details(BossId(3));
    assert_eq!(app.screen, Screen::Details);
    assert!(app.weapons_loading());
    apply_next_message(&mut app).await;

    assert!(!app.weapons_loading());
    assert_eq!(app.weapons.len(), 2);
    assert_eq!(http.request_count(&weapons_url()), 1);

    app.go_back();
    assert_eq!(app.screen, Screen::Browse);
    assert!(app.details.is_none());
}

#[tokio::test]
async fn test_search_reentry_resets_criteria() {
    let http = MockCatalogConfig::new().with_samples().build();
    let (mut app, _) = TestAppBuilder::new()
        .with_http(http)
        .with_bosses(sample_bosses())
        .build();

    app.open_search();
    for c in "cala".chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
    app.set_isle_filter(2);
    assert_eq!(app.search_results().len(), 1);

    app.go_back();
    app.open_search();

    assert!(app.criteria.is_empty());
    assert_eq!(app.search_focus, SearchFocus::Text);
    assert_eq!(app.search_results().len(), 4);
}

#[test]
fn test_search_filters_combine() {
    let (mut app, _) = TestAppBuilder::new().with_bosses(sample_bosses()).build();
    app.screen = Screen::Search;

    app.set_search_text("ca");
    assert_eq!(app.search_results().len(), 2);

    app.set_difficulty_filter(Difficulty::from_half_steps(7).unwrap());
    let names: Vec<_> = app.search_results().iter().map(|b| b.name.clone()).collect();
    assert_eq!(names, vec!["Cala Maria"]);

    // Choosing the active value again goes back to "any"
    app.set_difficulty_filter(Difficulty::from_half_steps(7).unwrap());
    assert_eq!(app.criteria.difficulty, None);

    app.set_isle_filter(1);
    assert_eq!(app.criteria.isle, Some(Isle::One));
    let names: Vec<_> = app.search_results().iter().map(|b| b.name.clone()).collect();
    assert_eq!(names, vec!["Cagney Carnation"]);
}

#[test]
fn test_favorite_toggle_writes_through() {
    let (mut app, prefs) = TestAppBuilder::new().with_bosses(sample_bosses()).build();

    app.toggle_favorite(BossId(5));
    app.toggle_favorite(BossId(1));
    assert_eq!(
        prefs.stored().unwrap().favorites,
        vec![BossId(1), BossId(5)]
    );

    let names: Vec<_> = app.favorite_list().iter().map(|b| b.name.clone()).collect();
    assert_eq!(names, vec!["The Root Pack", "King Dice"]);
}

#[test]
fn test_restored_preferences_apply() {
    let (app, _) = TestAppBuilder::new()
        .with_snapshot(PreferencesSnapshot {
            favorites: vec![BossId(2)],
            theme: ThemeId::Mugman,
        })
        .with_bosses(sample_bosses())
        .build();

    assert_eq!(app.preferences.current_theme(), ThemeId::Mugman);
    assert_eq!(app.favorite_list().len(), 1);
}

#[test]
fn test_failed_save_keeps_memory_state() {
    let (mut app, prefs) = TestAppBuilder::new().with_bosses(sample_bosses()).build();
    prefs.fail_saves(true);

    app.toggle_favorite(BossId(2));
    assert!(app.preferences.is_favorite(BossId(2)));
    assert!(app.preferences.notice().is_some());
    assert_eq!(prefs.save_count(), 0);
}

#[test]
fn test_theme_cycles_through_all() {
    let (mut app, _) = TestAppBuilder::new().build();
    app.handle_key(key(KeyCode::Char('t')));
    app.handle_key(key(KeyCode::Char('t')));
    assert_eq!(app.preferences.current_theme(), ThemeId::Mugman);
    app.handle_key(key(KeyCode::Char('t')));
    assert_eq!(app.preferences.current_theme(), ThemeId::Default);
}

#[test]
fn test_stale_weapons_message_is_harmless() {
    let (mut app, _) = TestAppBuilder::new().with_bosses(sample_bosses()).build();
    app.handle_message(AppMessage::WeaponsLoaded(sample_weapons()));
    assert_eq!(app.screen, Screen::Browse);
    assert_eq!(app.weapons.len(), 2);
}

#[test]
fn test_quit_key() {
    let (mut app, _) = TestAppBuilder::new().build();
    app.handle_key(key(KeyCode::Char('q')));
    assert!(app.should_quit);
}
