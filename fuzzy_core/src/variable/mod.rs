//! LinguisticVariable - a named domain partitioned into fuzzy sets

mod defuzzify;

use crate::error::{FuzzyError, FuzzyResult};
use crate::membership::{FuzzySet, Shape};
use crate::types::{SetRef, VariableId};

/// A named collection of fuzzy sets sharing one domain
///
/// Sets keep their insertion order; that order is what handles index into
/// and what every iteration (fuzzification, sampling, snapshots) follows.
#[derive(Debug, Clone)]
pub struct LinguisticVariable {
    id: VariableId,
    name: String,
    sets: Vec<FuzzySet>,
    /// Smallest and largest control point over all sets
    range: Option<(f64, f64)>,
}

impl LinguisticVariable {
    pub(crate) fn new(id: VariableId, name: impl Into<String>) -> Self {
        LinguisticVariable {
            id,
            name: name.into(),
            sets: Vec::new(),
            range: None,
        }
    }

    pub fn id(&self) -> VariableId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a set with an arbitrary shape
    pub fn add_set(&mut self, name: impl Into<String>, shape: Shape) -> FuzzyResult<SetRef> {
        let name = name.into();
        if self.set_index(&name).is_some() {
            return Err(FuzzyError::DuplicateSetName {
                variable: self.name.clone(),
                set: name,
            });
        }

        let set = FuzzySet::new(name, shape)?;
        let (low, high) = shape.bounds();
        self.range = Some(match self.range {
            Some((min, max)) => (min.min(low), max.max(high)),
            None => (low, high),
        });

        tracing::debug!(
            variable = %self.name,
            set = set.name(),
            kind = shape.kind.name(),
            left = shape.left,
            peak = shape.peak,
            right = shape.right,
            "Added fuzzy set"
        );

        self.sets.push(set);
        Ok(SetRef::new(self.id, self.sets.len() - 1))
    }

    pub fn add_left_shoulder_set(
        &mut self,
        name: impl Into<String>,
        min: f64,
        peak: f64,
        max: f64,
    ) -> FuzzyResult<SetRef> {
        self.add_set(name, Shape::left_shoulder(min, peak, max))
    }

    pub fn add_triangular_set(
        &mut self,
        name: impl Into<String>,
        min: f64,
        peak: f64,
        max: f64,
    ) -> FuzzyResult<SetRef> {
        self.add_set(name, Shape::triangular(min, peak, max))
    }

    pub fn add_right_shoulder_set(
        &mut self,
        name: impl Into<String>,
        min: f64,
        peak: f64,
        max: f64,
    ) -> FuzzyResult<SetRef> {
        self.add_set(name, Shape::right_shoulder(min, peak, max))
    }

    /// Record the degree of membership of `value` in every set
    pub fn fuzzify(&mut self, value: f64) {
        for set in &mut self.sets {
            set.fuzzify(value);
        }
    }

    pub fn sets(&self) -> &[FuzzySet] {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn set(&self, name: &str) -> Option<&FuzzySet> {
        self.sets.iter().find(|s| s.name() == name)
    }

    pub fn set_index(&self, name: &str) -> Option<usize> {
        self.sets.iter().position(|s| s.name() == name)
    }

    /// Handle for the set called `name`
    pub fn set_ref(&self, name: &str) -> FuzzyResult<SetRef> {
        self.set_index(name)
            .map(|index| SetRef::new(self.id, index))
            .ok_or_else(|| FuzzyError::UnknownSet {
                variable: self.name.clone(),
                set: name.to_string(),
            })
    }

    pub fn set_at(&self, index: usize) -> Option<&FuzzySet> {
        self.sets.get(index)
    }

    pub fn set_at_mut(&mut self, index: usize) -> Option<&mut FuzzySet> {
        self.sets.get_mut(index)
    }

    /// Domain spanned by all sets, `None` while the variable has no sets
    pub fn range(&self) -> Option<(f64, f64)> {
        self.range
    }

    /// Recorded degree for each set, in set order
    pub fn degrees(&self) -> Vec<(&str, f64)> {
        self.sets.iter().map(|s| (s.name(), s.degree())).collect()
    }

    /// The set `value` belongs to most, first set wins ties
    pub fn dominant_set(&self, value: f64) -> Option<&FuzzySet> {
        let mut best: Option<(&FuzzySet, f64)> = None;
        for set in &self.sets {
            let degree = set.degree_of_membership(value);
            match best {
                Some((_, best_degree)) if degree <= best_degree => {}
                _ => best = Some((set, degree)),
            }
        }
        best.map(|(set, _)| set)
    }

    /// Clear every set's firing strength
    pub fn reset_firing_strengths(&mut self) {
        for set in &mut self.sets {
            set.reset_firing_strength();
        }
    }

    /// Clear every set's recorded degree
    pub fn clear_degrees(&mut self) {
        for set in &mut self.sets {
            set.clear_degree();
        }
    }

    /// Membership of `x` in the union of all clipped consequents
    pub fn aggregated_membership(&self, x: f64) -> f64 {
        self.sets
            .iter()
            .map(|s| s.clipped_membership(x))
            .fold(0.0, f64::max)
    }
}
