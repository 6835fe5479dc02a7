//! Picks the most desirable weapon for the current target

use super::{Weapon, WeaponConfig};
use crate::config::{ConfigError, EngineConstants};
use crate::error::FuzzyResult;

/// The weapons a bot carries and the one it has in hand
#[derive(Debug, Clone)]
pub struct WeaponSystem {
    weapons: Vec<Weapon>,
    current: usize,
}

impl WeaponSystem {
    /// Holds `weapons` in order, with the first one in hand
    pub fn new(weapons: Vec<Weapon>) -> Self {
        WeaponSystem { weapons, current: 0 }
    }

    pub fn from_configs(configs: &[WeaponConfig], constants: &EngineConstants) -> Result<Self, ConfigError> {
        let weapons = configs
            .iter()
            .map(|config| Weapon::from_config(config, constants))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(weapons))
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn weapon(&self, id: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.id() == id)
    }

    pub fn weapon_mut(&mut self, id: &str) -> Option<&mut Weapon> {
        self.weapons.iter_mut().find(|w| w.id() == id)
    }

    pub fn current(&self) -> Option<&Weapon> {
        self.weapons.get(self.current)
    }

    pub fn current_mut(&mut self) -> Option<&mut Weapon> {
        self.weapons.get_mut(self.current)
    }

    /// Score every weapon against a target `distance` away, in carry order
    pub fn scores(&mut self, distance: f64) -> FuzzyResult<Vec<(String, f64)>> {
        self.weapons
            .iter_mut()
            .map(|weapon| Ok((weapon.id().to_string(), weapon.desirability(distance)?)))
            .collect()
    }

    /// Switch to the highest scoring weapon
    ///
    /// Ties go to the weapon carried first. With nothing scoring above 0 the
    /// weapon in hand is kept.
    pub fn select_weapon(&mut self, distance: f64) -> FuzzyResult<Option<&Weapon>> {
        let mut best: Option<(usize, f64)> = None;
        for (index, weapon) in self.weapons.iter_mut().enumerate() {
            let score = weapon.desirability(distance)?;
            if score > best.map_or(0.0, |(_, s)| s) {
                best = Some((index, score));
            }
        }

        if let Some((index, score)) = best {
            if index != self.current {
                tracing::debug!(
                    from = self.weapons.get(self.current).map(Weapon::id),
                    to = self.weapons[index].id(),
                    distance,
                    score,
                    "Switched weapon"
                );
                self.current = index;
            }
        }

        Ok(self.current())
    }

    /// Fire the weapon in hand
    pub fn shoot_at(&mut self, now: f64) -> bool {
        self.current_mut().is_some_and(|weapon| weapon.shoot_at(now))
    }
}
