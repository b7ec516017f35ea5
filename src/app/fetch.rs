//! Background catalog fetches.
//!
//! Each screen entry spawns exactly one fetch. Fetches are never retried,
//! cancelled or de-duplicated; whichever result arrives is applied when its
//! message is handled.

use tracing::{debug, warn};

use super::{App, AppMessage};
use crate::error::BossdexError;

impl App {
    /// Fetch the boss list in the background.
    pub fn spawn_boss_fetch(&mut self) {
        self.bosses_in_flight += 1;
        self.mark_dirty();

        let catalog = self.catalog.clone();
        let tx = self.message_tx.clone();
        debug!(screen = ?self.screen, "Spawning boss fetch");

        tokio::spawn(async move {
            let msg = match catalog.fetch_bosses().await {
                Ok(bosses) => AppMessage::BossesLoaded(bosses),
                Err(e) => AppMessage::BossesLoadFailed {
                    error: describe_failure(&e),
                },
            };
            // Receiver gone means the app is shutting down
            let _ = tx.send(msg);
        });
    }

    /// Fetch the weapon list in the background.
    pub fn spawn_weapon_fetch(&mut self) {
        self.weapons_in_flight += 1;
        self.mark_dirty();

        let catalog = self.catalog.clone();
        let tx = self.message_tx.clone();
        debug!("Spawning weapon fetch");

        tokio::spawn(async move {
            let msg = match catalog.fetch_weapons().await {
                Ok(weapons) => AppMessage::WeaponsLoaded(weapons),
                Err(e) => AppMessage::WeaponsLoadFailed {
                    error: describe_failure(&e),
                },
            };
            let _ = tx.send(msg);
        });
    }
}

/// Log a failed fetch with its code and category, and return the message
/// carried to the UI task.
fn describe_failure(err: &BossdexError) -> String {
    warn!(
        code = err.error_code(),
        category = %err.category(),
        hint = err.recovery_hint(),
        "Catalog fetch failed: {}",
        err
    );
    err.user_message()
}
