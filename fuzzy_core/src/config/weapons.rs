//! Weapon configuration loading

use super::ConfigError;
use crate::weapon::WeaponConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for weapon configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponsConfig {
    #[serde(rename = "weapons")]
    pub weapons: Vec<WeaponConfig>,
}

/// Load weapon configurations from a TOML file
pub fn load_weapon_configs(path: &Path) -> Result<Vec<WeaponConfig>, ConfigError> {
    let config: WeaponsConfig = super::load_toml(path)?;
    check_unique_ids(&config.weapons)?;
    Ok(config.weapons)
}

/// Load weapon configurations from a TOML string
pub fn parse_weapon_configs(content: &str) -> Result<Vec<WeaponConfig>, ConfigError> {
    let config: WeaponsConfig = super::parse_toml(content)?;
    check_unique_ids(&config.weapons)?;
    Ok(config.weapons)
}

/// The bundled weapon set
pub fn default_weapons() -> Result<Vec<WeaponConfig>, ConfigError> {
    let toml = include_str!("../../config/weapons.toml");
    parse_weapon_configs(toml)
}

fn check_unique_ids(weapons: &[WeaponConfig]) -> Result<(), ConfigError> {
    for (i, weapon) in weapons.iter().enumerate() {
        if weapons[..i].iter().any(|w| w.id == weapon.id) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate weapon id '{}'",
                weapon.id
            )));
        }
    }
    Ok(())
}
