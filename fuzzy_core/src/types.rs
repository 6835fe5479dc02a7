//! Handle types shared across the engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a linguistic variable inside its owning module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VariableId(pub usize);

/// Handle to one fuzzy set: the owning variable plus the set's position in it
///
/// Handles are plain indices. They stay valid for the lifetime of the module
/// that issued them, since variables and sets are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SetRef {
    pub variable: VariableId,
    pub set: usize,
}

impl SetRef {
    pub fn new(variable: VariableId, set: usize) -> Self {
        SetRef { variable, set }
    }
}

impl fmt::Display for SetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.variable.0, self.set)
    }
}

/// Defuzzification method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefuzzifyMethod {
    /// Sampled center of gravity of the aggregated output set
    #[default]
    Centroid,
    /// Average of each set's plateau mid-point, weighted by its firing strength
    MeanOfMaxima,
}

impl DefuzzifyMethod {
    pub fn all() -> &'static [DefuzzifyMethod] {
        &[DefuzzifyMethod::Centroid, DefuzzifyMethod::MeanOfMaxima]
    }

    pub fn name(&self) -> &'static str {
        match self {
            DefuzzifyMethod::Centroid => "Centroid",
            DefuzzifyMethod::MeanOfMaxima => "Mean of maxima",
        }
    }
}
