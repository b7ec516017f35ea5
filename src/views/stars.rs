use crate::models::Difficulty;

/// Number of star glyphs a difficulty rating is drawn with.
pub const STAR_SLOTS: u8 = 5;

/// How many full, half and empty stars to draw. Always sums to five.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRenderPlan {
    pub full: u8,
    pub half: u8,
    pub empty: u8,
}

impl StarRenderPlan {
    pub fn total(&self) -> u8 {
        self.full + self.half + self.empty
    }
}

pub fn star_render_plan(difficulty: Difficulty) -> StarRenderPlan {
    let half_steps = difficulty.half_steps();
    let full = half_steps / 2;
    let half = half_steps % 2;
    StarRenderPlan {
        full,
        half,
        empty: STAR_SLOTS - full - half,
    }
}
