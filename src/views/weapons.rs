use std::collections::HashMap;

use crate::models::{Weapon, WeaponId};

/// Weapons keyed by id, built once per fetched weapon list.
#[derive(Debug, Clone, Default)]
pub struct WeaponIndex {
    by_id: HashMap<WeaponId, Weapon>,
}

impl WeaponIndex {
    pub fn new(weapons: Vec<Weapon>) -> Self {
        Self {
            by_id: weapons.into_iter().map(|w| (w.id, w)).collect(),
        }
    }

    pub fn get(&self, id: WeaponId) -> Option<&Weapon> {
        self.by_id.get(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// One slot per requested id, `None` where the index has no such weapon.
pub fn weapon_lookup<'a>(index: &'a WeaponIndex, ids: &[WeaponId]) -> Vec<Option<&'a Weapon>> {
    ids.iter().map(|id| index.get(*id)).collect()
}
