use super::WeaponId;

/// A weapon record from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Weapon {
    pub id: WeaponId,
    pub name: String,
    /// Asset key or URL of the weapon icon
    pub url: String,
    pub damage: f64,
    /// Damage of the EX (charged) shot
    pub ex_damage: f64,
    pub dps: f64,
    /// Display color, `#rrggbb` or a color name
    pub color: String,
}

impl Weapon {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: WeaponId(id),
            name: name.into(),
            url: String::new(),
            damage: 0.0,
            ex_damage: 0.0,
            dps: 0.0,
            color: String::new(),
        }
    }

    pub fn with_stats(mut self, damage: f64, ex_damage: f64, dps: f64) -> Self {
        self.damage = damage;
        self.ex_damage = ex_damage;
        self.dps = dps;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}
