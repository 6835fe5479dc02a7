//! Serializable dump of a module's scratch state

use super::FuzzyModule;
use crate::membership::Shape;
use serde::{Deserialize, Serialize};

/// State of one set at the time of the snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetSnapshot {
    pub name: String,
    pub shape: Shape,
    pub degree: f64,
    pub firing_strength: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableSnapshot {
    pub name: String,
    pub sets: Vec<SetSnapshot>,
}

/// Every variable with its sets' degrees and firing strengths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleSnapshot {
    pub variables: Vec<VariableSnapshot>,
    pub rules: Vec<String>,
}

impl ModuleSnapshot {
    pub fn variable(&self, name: &str) -> Option<&VariableSnapshot> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl FuzzyModule {
    /// Capture the current degrees and firing strengths
    pub fn snapshot(&self) -> ModuleSnapshot {
        let variables = self
            .variables()
            .iter()
            .map(|variable| VariableSnapshot {
                name: variable.name().to_string(),
                sets: variable
                    .sets()
                    .iter()
                    .map(|set| SetSnapshot {
                        name: set.name().to_string(),
                        shape: *set.shape(),
                        degree: set.degree(),
                        firing_strength: set.firing_strength(),
                    })
                    .collect(),
            })
            .collect();

        let rules = self
            .rules()
            .iter()
            .map(|rule| self.describe_rule(rule))
            .collect();

        ModuleSnapshot { variables, rules }
    }
}
