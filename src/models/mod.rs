mod boss;
mod ids;
mod theme;
mod weapon;

pub use boss::{Boss, Difficulty, Isle};
pub use ids::{BossId, WeaponId};
pub use theme::ThemeId;
pub use weapon::Weapon;

use serde::{Deserialize, Deserializer};

/// Helper to deserialize an identifier sent as either a string or an integer.
///
/// The catalog source is loose about id types (`"3"` and `3` both appear),
/// so both forms are accepted as long as they denote a non-negative integer.
pub(crate) fn deserialize_wire_id<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = u32;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer identifier")
        }

        fn visit_str<E>(self, value: &str) -> Result<u32, E>
        where
            E: de::Error,
        {
            value
                .trim()
                .parse::<u32>()
                .map_err(|_| E::custom(format!("identifier '{}' is not an integer", value)))
        }

        fn visit_i64<E>(self, value: i64) -> Result<u32, E>
        where
            E: de::Error,
        {
            u32::try_from(value).map_err(|_| E::custom(format!("identifier {} out of range", value)))
        }

        fn visit_u64<E>(self, value: u64) -> Result<u32, E>
        where
            E: de::Error,
        {
            u32::try_from(value).map_err(|_| E::custom(format!("identifier {} out of range", value)))
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// Helper to deserialize nullable strings as empty string
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "deserialize_wire_id")]
        id: u32,
        #[serde(default, deserialize_with = "deserialize_nullable_string")]
        label: String,
    }

    #[test]
    fn test_wire_id_accepts_string_and_integer() {
        let from_str: Probe = serde_json::from_str(r#"{"id":"12"}"#).unwrap();
        let from_int: Probe = serde_json::from_str(r#"{"id":12}"#).unwrap();
        assert_eq!(from_str.id, 12);
        assert_eq!(from_int.id, 12);
    }

    #[test]
    fn test_wire_id_rejects_garbage() {
        assert!(serde_json::from_str::<Probe>(r#"{"id":"abc"}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"id":-4}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"id":1.5}"#).is_err());
    }

    #[test]
    fn test_nullable_string_defaults() {
        let probe: Probe = serde_json::from_str(r#"{"id":1,"label":null}"#).unwrap();
        assert_eq!(probe.label, "");
        let probe: Probe = serde_json::from_str(r#"{"id":1}"#).unwrap();
        assert_eq!(probe.label, "");
    }
}
