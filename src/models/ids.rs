use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a boss in the catalog.
///
/// Serialized as a bare integer so the favorites file stays a plain list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BossId(pub u32);

/// Identifier of a weapon, referenced from a boss's recommended list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeaponId(pub u32);

impl fmt::Display for BossId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for WeaponId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for BossId {
    fn from(id: u32) -> Self {
        BossId(id)
    }
}

impl From<u32> for WeaponId {
    fn from(id: u32) -> Self {
        WeaponId(id)
    }
}
