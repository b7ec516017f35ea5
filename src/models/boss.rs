use std::fmt;

use super::{BossId, WeaponId};

/// Difficulty rating of a boss, 0 to 5 stars in half-star steps.
///
/// Stored as a count of half stars so equality is exact and the star
/// renderer never has to reason about floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Difficulty(u8);

impl Difficulty {
    /// Zero stars. In filter criteria this means "any difficulty".
    pub const ZERO: Difficulty = Difficulty(0);

    /// Five stars.
    pub const MAX: Difficulty = Difficulty(Self::MAX_HALF_STEPS);

    /// Number of half-star steps in a full rating.
    pub const MAX_HALF_STEPS: u8 = 10;

    /// Build from a half-step count, `None` above ten.
    pub fn from_half_steps(half_steps: u8) -> Option<Self> {
        (half_steps <= Self::MAX_HALF_STEPS).then_some(Self(half_steps))
    }

    /// Build from a star value such as `3.5`.
    ///
    /// Returns `None` for values outside `[0, 5]` or off the half-star grid.
    pub fn from_stars(stars: f64) -> Option<Self> {
        if !stars.is_finite() {
            return None;
        }
        let doubled = stars * 2.0;
        if doubled.fract() != 0.0 || doubled < 0.0 || doubled > f64::from(Self::MAX_HALF_STEPS) {
            return None;
        }
        Some(Self(doubled as u8))
    }

    /// Build from whole stars (1 through 5).
    pub fn from_whole_stars(stars: u8) -> Option<Self> {
        stars.checked_mul(2).and_then(Self::from_half_steps)
    }

    pub fn half_steps(self) -> u8 {
        self.0
    }

    pub fn as_stars(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// True when the rating has no half star.
    pub fn is_whole(self) -> bool {
        self.0 % 2 == 0
    }

    /// Half a star more, saturating at five stars.
    pub fn step_up(self) -> Self {
        Self((self.0 + 1).min(Self::MAX_HALF_STEPS))
    }

    /// Half a star less, saturating at zero.
    pub fn step_down(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{}.5", self.0 / 2)
        }
    }
}

/// The three isles the catalog is partitioned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Isle {
    One,
    Two,
    Three,
}

impl Isle {
    /// All isles in display order.
    pub const ALL: [Isle; 3] = [Isle::One, Isle::Two, Isle::Three];

    /// Wire value (1, 2 or 3).
    pub fn number(self) -> u8 {
        match self {
            Isle::One => 1,
            Isle::Two => 2,
            Isle::Three => 3,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Isle::One),
            2 => Some(Isle::Two),
            3 => Some(Isle::Three),
            _ => None,
        }
    }

    /// Zero-based position, used to index per-isle buckets.
    pub fn index(self) -> usize {
        usize::from(self.number() - 1)
    }

    /// Section title shown on the browse screen.
    pub fn title(self) -> String {
        format!("ISLE {}", self.number())
    }

    /// Roman numeral used on the isle filter buttons.
    pub fn numeral(self) -> &'static str {
        match self {
            Isle::One => "I",
            Isle::Two => "II",
            Isle::Three => "III",
        }
    }
}

impl fmt::Display for Isle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A boss record, validated at the fetch boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Boss {
    pub id: BossId,
    pub name: String,
    pub description: String,
    pub appearance: Option<String>,
    pub personality: Option<String>,
    /// Asset key of the cover image shown in lists
    pub cover_image: Option<String>,
    pub gif: Option<String>,
    pub difficulty: Difficulty,
    pub isle: Isle,
    /// Asset keys for the detail carousel, in display order
    pub images: Vec<String>,
    pub health: Option<u32>,
    /// Empty when the source sent no recommendations
    pub recommended_weapons: Vec<WeaponId>,
}

impl Boss {
    /// Create a boss with the required fields; everything else empty.
    pub fn new(id: u32, name: impl Into<String>, difficulty: Difficulty, isle: Isle) -> Self {
        Self {
            id: BossId(id),
            name: name.into(),
            description: String::new(),
            appearance: None,
            personality: None,
            cover_image: None,
            gif: None,
            difficulty,
            isle,
            images: Vec::new(),
            health: None,
            recommended_weapons: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_health(mut self, health: u32) -> Self {
        self.health = Some(health);
        self
    }

    pub fn with_recommended_weapons<I>(mut self, weapons: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        self.recommended_weapons = weapons.into_iter().map(WeaponId).collect();
        self
    }
}
