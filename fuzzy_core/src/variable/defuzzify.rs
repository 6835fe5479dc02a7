//! Defuzzification of an output variable's clipped sets

use super::LinguisticVariable;
use crate::types::DefuzzifyMethod;

/// Below this total membership nothing is considered to have fired
const MIN_TOTAL_MEMBERSHIP: f64 = 1e-12;

impl LinguisticVariable {
    /// Crisp value of this variable using `method`
    ///
    /// `samples` is only used by the centroid method.
    pub fn defuzzify(&self, method: DefuzzifyMethod, samples: usize) -> f64 {
        match method {
            DefuzzifyMethod::Centroid => self.defuzzify_centroid(samples),
            DefuzzifyMethod::MeanOfMaxima => self.defuzzify_mean_of_maxima(),
        }
    }

    /// Sampled center of gravity of the aggregated output set
    ///
    /// The variable's range is split into `samples` equal steps and every step
    /// boundary (both ends included) contributes `x * μ(x)`, where `μ` is the
    /// maximum over all sets of their membership clipped to their firing
    /// strength. Returns 0 when no set fired.
    pub fn defuzzify_centroid(&self, samples: usize) -> f64 {
        let Some((min, max)) = self.range else {
            return 0.0;
        };
        let samples = samples.max(1);
        let step = (max - min) / samples as f64;

        let mut weighted_sum = 0.0;
        let mut total_membership = 0.0;
        for i in 0..=samples {
            let x = min + step * i as f64;
            let membership = self.aggregated_membership(x);
            weighted_sum += x * membership;
            total_membership += membership;
        }

        if total_membership < MIN_TOTAL_MEMBERSHIP {
            0.0
        } else {
            weighted_sum / total_membership
        }
    }

    /// Average of each set's representative value weighted by firing strength
    ///
    /// Returns 0 when no set fired.
    pub fn defuzzify_mean_of_maxima(&self) -> f64 {
        let (weighted_sum, total_strength) =
            self.sets.iter().fold((0.0, 0.0), |(sum, total), set| {
                let strength = set.firing_strength();
                (sum + set.representative_value() * strength, total + strength)
            });

        if total_strength < MIN_TOTAL_MEMBERSHIP {
            0.0
        } else {
            weighted_sum / total_strength
        }
    }
}
