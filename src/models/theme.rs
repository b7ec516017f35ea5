use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual theme selected by the user.
///
/// The wire tags (`default`, `cuphead`, `mugman`) are what gets persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Default,
    Cuphead,
    Mugman,
}

impl ThemeId {
    /// All themes in cycle order.
    pub const ALL: [ThemeId; 3] = [ThemeId::Default, ThemeId::Cuphead, ThemeId::Mugman];

    /// Next theme in the cycle: Default → Cuphead → Mugman → Default
    pub fn next(self) -> Self {
        match self {
            ThemeId::Default => ThemeId::Cuphead,
            ThemeId::Cuphead => ThemeId::Mugman,
            ThemeId::Mugman => ThemeId::Default,
        }
    }

    /// Persisted tag for this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeId::Default => "default",
            ThemeId::Cuphead => "cuphead",
            ThemeId::Mugman => "mugman",
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
