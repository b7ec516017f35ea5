/// Health value that fills the whole bar.
pub const MAX_HEALTH: u32 = 2500;

/// Fraction of the health bar to fill, clamped to `[0, 1]`.
///
/// `None` when the boss has no health value; no bar is drawn then.
pub fn health_ratio(health: Option<u32>, max: u32) -> Option<f64> {
    let health = health?;
    if max == 0 {
        return Some(1.0);
    }
    Some((f64::from(health) / f64::from(max)).clamp(0.0, 1.0))
}
