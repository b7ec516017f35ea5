//! Wire records for the catalog endpoints.
//!
//! Records mirror the JSON the source sends (camelCase keys, loose id types)
//! and are validated into [`Boss`] and [`Weapon`] before anything else sees
//! them.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::{deserialize_nullable_string, deserialize_wire_id};
use crate::models::{Boss, BossId, Difficulty, Isle, Weapon, WeaponId};

/// An identifier inside a list, string or integer on the wire.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(transparent)]
pub struct WireId(#[serde(deserialize_with = "deserialize_wire_id")] pub u32);

/// Boss as sent by `GET /bosses`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BossRecord {
    #[serde(deserialize_with = "deserialize_wire_id")]
    pub id: u32,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub description: String,
    #[serde(default)]
    pub appearance: Option<String>,
    #[serde(default)]
    pub personality: Option<String>,
    #[serde(default, deserialize_with = "deserialize_asset_key")]
    pub cover_image: Option<String>,
    #[serde(default, deserialize_with = "deserialize_asset_key")]
    pub gif: Option<String>,
    pub difficulty: f64,
    pub isle: i64,
    #[serde(default, deserialize_with = "deserialize_asset_keys")]
    pub images: Vec<String>,
    #[serde(default)]
    pub health: Option<f64>,
    #[serde(default)]
    pub recommended_weapons: Option<Vec<WireId>>,
}

impl BossRecord {
    /// Validate into a [`Boss`], or explain why the record is unusable.
    pub fn into_boss(self) -> Result<Boss, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(format!("boss {} has an empty name", self.id));
        }

        let difficulty = Difficulty::from_stars(self.difficulty).ok_or_else(|| {
            format!(
                "difficulty {} is not between 0 and 5 in half steps",
                self.difficulty
            )
        })?;

        let isle = u8::try_from(self.isle)
            .ok()
            .and_then(Isle::from_number)
            .ok_or_else(|| format!("isle {} is not 1, 2 or 3", self.isle))?;

        let health = match self.health {
            None => None,
            Some(h) if h.is_finite() && h >= 0.0 && h <= f64::from(u32::MAX) => Some(h.round() as u32),
            Some(h) => return Err(format!("health {} is not a non-negative number", h)),
        };

        Ok(Boss {
            id: BossId(self.id),
            name: name.to_string(),
            description: self.description,
            appearance: self.appearance,
            personality: self.personality,
            cover_image: self.cover_image,
            gif: self.gif,
            difficulty,
            isle,
            images: self.images,
            health,
            recommended_weapons: self
                .recommended_weapons
                .unwrap_or_default()
                .into_iter()
                .map(|id| WeaponId(id.0))
                .collect(),
        })
    }
}

/// Weapon as sent by `GET /weapons`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponRecord {
    #[serde(deserialize_with = "deserialize_wire_id")]
    pub id: u32,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub url: String,
    pub damage: f64,
    pub ex_damage: f64,
    pub dps: f64,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub color: String,
}

impl WeaponRecord {
    pub fn into_weapon(self) -> Result<Weapon, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(format!("weapon {} has an empty name", self.id));
        }
        for (label, value) in [
            ("damage", self.damage),
            ("exDamage", self.ex_damage),
            ("dps", self.dps),
        ] {
            if !value.is_finite() {
                return Err(format!("{} is not a finite number", label));
            }
        }

        Ok(Weapon {
            id: WeaponId(self.id),
            name: name.to_string(),
            url: self.url,
            damage: self.damage,
            ex_damage: self.ex_damage,
            dps: self.dps,
            color: self.color,
        })
    }
}

/// Accept an asset key string; anything else (bundled image handles, null) is dropped.
fn deserialize_asset_key<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

/// Keep the string elements of an image list; a non-list becomes empty.
fn deserialize_asset_keys<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|value| match value {
                Value::String(s) if !s.is_empty() => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}
