//! Prelude module for convenient imports
//!
//! ```rust
//! use fuzzy_core::prelude::*;
//! ```

// Engine
pub use crate::inference::FuzzyModule;
pub use crate::membership::{Shape, ShapeKind};
pub use crate::rule::Antecedent;
pub use crate::types::{DefuzzifyMethod, SetRef};
pub use crate::error::{FuzzyError, FuzzyResult};

// Weapons
pub use crate::weapon::{Weapon, WeaponSystem};

// Config
pub use crate::config::{default_weapons, EngineConstants};
