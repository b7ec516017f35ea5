//! Derived views: pure functions over the fetched catalog, the preference
//! store and the search criteria. Nothing here owns state.

mod favorites;
mod filter;
mod health;
mod isles;
mod stars;
mod weapons;

pub use favorites::favorite_bosses;
pub use filter::{filter_bosses, FilterCriteria};
pub use health::{health_ratio, MAX_HEALTH};
pub use isles::{group_by_isle, IsleGroups};
pub use stars::{star_render_plan, StarRenderPlan, STAR_SLOTS};
pub use weapons::{weapon_lookup, WeaponIndex};
