//! Weapon configuration types

use super::rocket_launcher::{AMMO_VARIABLE, DESIRABILITY_VARIABLE, DISTANCE_VARIABLE};
use crate::config::RuleBaseConfig;
use crate::types::DefuzzifyMethod;
use serde::{Deserialize, Serialize};

/// Names of the variables a weapon feeds and reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesirabilityInputs {
    /// Input fuzzified with the distance to the target
    #[serde(default = "default_distance_variable")]
    pub distance: String,
    /// Input fuzzified with the rounds left, if the rule base uses ammo
    #[serde(default)]
    pub ammo: Option<String>,
    /// Output variable holding the desirability
    #[serde(default = "default_output_variable")]
    pub output: String,
}

impl Default for DesirabilityInputs {
    fn default() -> Self {
        DesirabilityInputs {
            distance: default_distance_variable(),
            ammo: Some(AMMO_VARIABLE.to_string()),
            output: default_output_variable(),
        }
    }
}

fn default_distance_variable() -> String {
    DISTANCE_VARIABLE.to_string()
}

fn default_output_variable() -> String {
    DESIRABILITY_VARIABLE.to_string()
}

/// Configuration for a weapon type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponConfig {
    /// Unique identifier (e.g., "rocket_launcher")
    pub id: String,
    /// Display name
    pub name: String,
    /// Rounds the weapon is picked up with
    #[serde(default)]
    pub default_rounds: u32,
    /// Most rounds that can be carried
    pub max_rounds: u32,
    /// Never runs dry and ignores round counts
    #[serde(default)]
    pub infinite_ammo: bool,
    /// Shots per second
    pub firing_freq: f64,
    /// Distance at which the weapon is most effective
    pub ideal_range: f64,
    /// Speed of the fired projectile
    #[serde(default)]
    pub projectile_speed: f64,
    /// Defuzzification method, engine default when absent
    #[serde(default)]
    pub method: Option<DefuzzifyMethod>,
    #[serde(default)]
    pub inputs: DesirabilityInputs,
    pub rule_base: RuleBaseConfig,
}
