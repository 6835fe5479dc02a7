//! Engine tuning constants

use crate::inference::DEFAULT_CENTROID_SAMPLES;
use crate::types::DefuzzifyMethod;
use serde::{Deserialize, Serialize};

/// Tunable engine constants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConstants {
    #[serde(default)]
    pub defuzzify: DefuzzifyConstants,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefuzzifyConstants {
    /// Steps across an output variable's range for the centroid method
    #[serde(default = "default_centroid_samples")]
    pub centroid_samples: usize,
    /// Method used when a weapon does not name one
    #[serde(default)]
    pub method: DefuzzifyMethod,
}

impl Default for DefuzzifyConstants {
    fn default() -> Self {
        DefuzzifyConstants {
            centroid_samples: DEFAULT_CENTROID_SAMPLES,
            method: DefuzzifyMethod::Centroid,
        }
    }
}

fn default_centroid_samples() -> usize {
    DEFAULT_CENTROID_SAMPLES
}
