//! Weapons scored by a fuzzy desirability module

mod rocket_launcher;
mod system;
mod types;

pub use rocket_launcher::{
    rocket_launcher_module, AMMO_VARIABLE, DESIRABILITY_VARIABLE, DISTANCE_VARIABLE,
    ROCKET_LAUNCHER_RULES,
};
pub use system::WeaponSystem;
pub use types::{DesirabilityInputs, WeaponConfig};

use crate::config::{ConfigError, EngineConstants};
use crate::error::FuzzyResult;
use crate::inference::FuzzyModule;
use crate::types::DefuzzifyMethod;

/// A weapon carried by a bot
///
/// Owns its own fuzzy module, so scoring one weapon never disturbs another.
#[derive(Debug, Clone)]
pub struct Weapon {
    id: String,
    name: String,
    rounds_left: u32,
    max_rounds: u32,
    infinite_ammo: bool,
    /// Shots per second
    firing_freq: f64,
    ideal_range: f64,
    projectile_speed: f64,
    /// Earliest time the next shot may be fired
    next_available: f64,
    last_desirability: f64,
    method: DefuzzifyMethod,
    inputs: DesirabilityInputs,
    module: FuzzyModule,
}

impl Weapon {
    /// The rocket launcher with its hand-built rule base
    pub fn rocket_launcher() -> FuzzyResult<Self> {
        Ok(Weapon {
            id: "rocket_launcher".to_string(),
            name: "Rocket Launcher".to_string(),
            rounds_left: 15,
            max_rounds: 50,
            infinite_ammo: false,
            firing_freq: 1.5,
            ideal_range: 150.0,
            projectile_speed: 10.0,
            next_available: 0.0,
            last_desirability: 0.0,
            method: DefuzzifyMethod::MeanOfMaxima,
            inputs: DesirabilityInputs::default(),
            module: rocket_launcher_module()?,
        })
    }

    /// Build a weapon and its rule base from configuration
    pub fn from_config(config: &WeaponConfig, constants: &EngineConstants) -> Result<Self, ConfigError> {
        if !config.firing_freq.is_finite() || config.firing_freq <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "weapon '{}' needs a positive firing_freq, got {}",
                config.id, config.firing_freq
            )));
        }

        let module = config.rule_base.build(constants)?;
        let inputs = &config.inputs;
        let required = [Some(&inputs.distance), inputs.ammo.as_ref(), Some(&inputs.output)];
        for name in required.into_iter().flatten() {
            if module.variable(name).is_none() {
                return Err(ConfigError::ValidationError(format!(
                    "weapon '{}' reads variable '{}' which its rule base does not define",
                    config.id, name
                )));
            }
        }

        Ok(Weapon {
            id: config.id.clone(),
            name: config.name.clone(),
            rounds_left: config.default_rounds.min(config.max_rounds),
            max_rounds: config.max_rounds,
            infinite_ammo: config.infinite_ammo,
            firing_freq: config.firing_freq,
            ideal_range: config.ideal_range,
            projectile_speed: config.projectile_speed,
            next_available: 0.0,
            last_desirability: 0.0,
            method: config.method.unwrap_or(constants.defuzzify.method),
            inputs: config.inputs.clone(),
            module,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rounds_left(&self) -> u32 {
        self.rounds_left
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    pub fn has_infinite_ammo(&self) -> bool {
        self.infinite_ammo
    }

    pub fn has_ammo(&self) -> bool {
        self.infinite_ammo || self.rounds_left > 0
    }

    pub fn ideal_range(&self) -> f64 {
        self.ideal_range
    }

    pub fn projectile_speed(&self) -> f64 {
        self.projectile_speed
    }

    pub fn method(&self) -> DefuzzifyMethod {
        self.method
    }

    pub fn set_method(&mut self, method: DefuzzifyMethod) {
        self.method = method;
    }

    /// Score of the last [`Weapon::desirability`] call
    pub fn last_desirability(&self) -> f64 {
        self.last_desirability
    }

    pub fn module(&self) -> &FuzzyModule {
        &self.module
    }

    pub fn inputs(&self) -> &DesirabilityInputs {
        &self.inputs
    }

    /// Add picked-up rounds, never exceeding the carry limit
    pub fn add_rounds(&mut self, rounds: u32) {
        self.rounds_left = self.rounds_left.saturating_add(rounds).min(self.max_rounds);
    }

    /// Overwrite the round count, clamped to the carry limit
    pub fn set_rounds(&mut self, rounds: u32) {
        self.rounds_left = rounds.min(self.max_rounds);
    }

    /// Whether the cooldown since the last shot has elapsed at `now`
    pub fn is_ready(&self, now: f64) -> bool {
        now >= self.next_available
    }

    /// Seconds between shots
    pub fn shot_interval(&self) -> f64 {
        1.0 / self.firing_freq
    }

    /// Fire if loaded and off cooldown, returning whether a shot was fired
    pub fn shoot_at(&mut self, now: f64) -> bool {
        if !self.has_ammo() || !self.is_ready(now) {
            return false;
        }

        if !self.infinite_ammo {
            self.rounds_left -= 1;
        }
        self.next_available = now + self.shot_interval();
        tracing::trace!(weapon = %self.id, rounds_left = self.rounds_left, now, "Shot fired");
        true
    }

    /// Desirability of using this weapon against a target `distance` away
    ///
    /// An empty weapon scores 0 without consulting the rule base.
    pub fn desirability(&mut self, distance: f64) -> FuzzyResult<f64> {
        self.last_desirability = if !self.has_ammo() {
            0.0
        } else {
            self.module.fuzzify(&self.inputs.distance, distance)?;
            if let Some(ammo) = &self.inputs.ammo {
                self.module.fuzzify(ammo, f64::from(self.rounds_left))?;
            }
            self.module.defuzzify(&self.inputs.output, self.method)?
        };

        tracing::debug!(
            weapon = %self.id,
            distance,
            rounds_left = self.rounds_left,
            score = self.last_desirability,
            "Scored weapon"
        );
        Ok(self.last_desirability)
    }
}
