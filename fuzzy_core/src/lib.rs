//! fuzzy_core - Fuzzy inference engine for weapon desirability scoring
//!
//! This library provides:
//! - FuzzyModule: Linguistic variables, rules and a full inference cycle
//! - Membership shapes: Left shoulder, triangle and right shoulder sets
//! - Defuzzification: Sampled centroid and mean of maxima
//! - Weapon: Ammo, firing cadence and desirability from a rule base
//! - Config: Rule bases and weapons loaded from TOML

pub mod config;
pub mod error;
pub mod inference;
pub mod membership;
pub mod prelude;
pub mod rule;
pub mod types;
pub mod variable;
pub mod weapon;

// Re-export core types for convenience
pub use error::{FuzzyError, FuzzyResult};
pub use inference::{FuzzyModule, ModuleSnapshot, SetSnapshot, VariableSnapshot, DEFAULT_CENTROID_SAMPLES};
pub use membership::{FuzzySet, Shape, ShapeKind};
pub use rule::{Antecedent, Rule};
pub use types::{DefuzzifyMethod, SetRef, VariableId};
pub use variable::LinguisticVariable;
pub use weapon::{rocket_launcher_module, DesirabilityInputs, Weapon, WeaponConfig, WeaponSystem};
pub use config::{default_weapons, ConfigError, EngineConstants};
