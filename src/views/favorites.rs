use crate::models::Boss;
use crate::preferences::PreferenceStore;

/// Bosses currently favorited, in source order.
pub fn favorite_bosses<'a>(bosses: &'a [Boss], store: &PreferenceStore) -> Vec<&'a Boss> {
    bosses.iter().filter(|b| store.is_favorite(b.id)).collect()
}
