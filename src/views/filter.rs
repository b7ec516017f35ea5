use crate::models::{Boss, Difficulty, Isle};

/// Ephemeral search criteria for one visit to the search screen.
///
/// `None` is "any": a zero difficulty or isle on the picker maps to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_text: String,
    pub difficulty: Option<Difficulty>,
    pub isle: Option<Isle>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every boss matches.
    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty() && self.difficulty.is_none() && self.isle.is_none()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Set the difficulty filter from a picker value; zero means any.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = (!difficulty.is_zero()).then_some(difficulty);
    }

    /// Picker behaviour: choosing the selected rating clears the filter.
    pub fn choose_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulty == Some(difficulty) {
            self.difficulty = None;
        } else {
            self.set_difficulty(difficulty);
        }
    }

    /// Set the isle filter from its wire number; zero (or anything out of range) means any.
    pub fn set_isle_number(&mut self, number: u8) {
        self.isle = Isle::from_number(number);
    }

    /// Picker behaviour: choosing the selected isle clears the filter.
    pub fn choose_isle(&mut self, isle: Isle) {
        self.isle = if self.isle == Some(isle) { None } else { Some(isle) };
    }

    /// Whether `boss` passes all three criteria.
    pub fn matches(&self, boss: &Boss) -> bool {
        self.matches_with_needle(boss, &self.search_text.to_lowercase())
    }

    fn matches_with_needle(&self, boss: &Boss, lowered_needle: &str) -> bool {
        (lowered_needle.is_empty() || boss.name.to_lowercase().contains(lowered_needle))
            && self.difficulty.map_or(true, |d| boss.difficulty == d)
            && self.isle.map_or(true, |i| boss.isle == i)
    }
}

/// Bosses matching `criteria`, in source order.
pub fn filter_bosses<'a>(bosses: &'a [Boss], criteria: &FilterCriteria) -> Vec<&'a Boss> {
    let needle = criteria.search_text.to_lowercase();
    bosses
        .iter()
        .filter(|boss| criteria.matches_with_needle(boss, &needle))
        .collect()
}
