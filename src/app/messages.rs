//! AppMessage enum for async communication within the application.

use crate::models::{Boss, Weapon};

/// Results of background catalog fetches, applied on the UI task
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The boss list was fetched and validated
    BossesLoaded(Vec<Boss>),
    /// The boss fetch failed; the previous list stays
    BossesLoadFailed { error: String },
    /// The weapon list was fetched and validated
    WeaponsLoaded(Vec<Weapon>),
    /// The weapon fetch failed; the previous index stays
    WeaponsLoadFailed { error: String },
}
