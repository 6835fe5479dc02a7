//! FuzzySet - a named shape plus its per-cycle scratch state

use super::shape::Shape;
use crate::error::{FuzzyError, FuzzyResult};
use serde::{Deserialize, Serialize};

/// A named membership function owned by a linguistic variable
///
/// Two pieces of mutable state ride along with the shape:
/// - `degree`: written by [`FuzzySet::fuzzify`], read when rules fire
/// - `firing_strength`: the height this set is clipped to as a consequent,
///   reset to 0 at the start of every inference cycle and raised by rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuzzySet {
    name: String,
    shape: Shape,
    degree: f64,
    firing_strength: f64,
}

impl FuzzySet {
    /// Create a set, rejecting decreasing or non-finite control points
    pub fn new(name: impl Into<String>, shape: Shape) -> FuzzyResult<Self> {
        let name = name.into();
        if !shape.is_valid() {
            return Err(FuzzyError::InvalidShape {
                set: name,
                a: shape.left,
                b: shape.peak,
                c: shape.right,
            });
        }

        Ok(FuzzySet {
            name,
            shape,
            degree: 0.0,
            firing_strength: 0.0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Pure evaluation, no state is touched
    pub fn degree_of_membership(&self, x: f64) -> f64 {
        self.shape.degree_of_membership(x)
    }

    /// Evaluate `x` and record the result as this set's degree
    pub fn fuzzify(&mut self, x: f64) -> f64 {
        self.degree = self.shape.degree_of_membership(x);
        self.degree
    }

    /// Degree recorded by the last [`FuzzySet::fuzzify`]
    pub fn degree(&self) -> f64 {
        self.degree
    }

    /// Overwrite the recorded degree, clamped to `[0, 1]`
    pub fn set_degree(&mut self, degree: f64) {
        self.degree = degree.clamp(0.0, 1.0);
    }

    pub fn clear_degree(&mut self) {
        self.degree = 0.0;
    }

    pub fn firing_strength(&self) -> f64 {
        self.firing_strength
    }

    /// Fuzzy OR a rule's truth into this consequent
    pub fn or_with(&mut self, truth: f64) {
        self.firing_strength = self.firing_strength.max(truth.clamp(0.0, 1.0));
    }

    pub fn reset_firing_strength(&mut self) {
        self.firing_strength = 0.0;
    }

    /// Membership of `x` in this set clipped to its firing strength
    pub fn clipped_membership(&self, x: f64) -> f64 {
        self.firing_strength.min(self.shape.degree_of_membership(x))
    }

    pub fn representative_value(&self) -> f64 {
        self.shape.representative_value()
    }
}
