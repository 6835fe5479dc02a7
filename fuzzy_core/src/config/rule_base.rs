//! Rule base configuration: variables, sets and rules as plain data

use super::{ConfigError, EngineConstants};
use crate::error::FuzzyResult;
use crate::inference::FuzzyModule;
use crate::membership::{Shape, ShapeKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A whole rule base
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleBaseConfig {
    pub variables: Vec<VariableConfig>,
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// A linguistic variable and its sets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableConfig {
    pub name: String,
    #[serde(default)]
    pub sets: Vec<SetConfig>,
}

/// A fuzzy set: shape kind plus `[left, peak, right]`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetConfig {
    pub name: String,
    pub shape: ShapeKind,
    pub points: [f64; 3],
}

impl SetConfig {
    pub fn to_shape(&self) -> Shape {
        let [left, peak, right] = self.points;
        Shape::new(self.shape, left, peak, right)
    }
}

/// `["Variable", "Set"]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermConfig(pub String, pub String);

/// `IF every term in when THEN then`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub when: Vec<TermConfig>,
    pub then: TermConfig,
}

impl RuleBaseConfig {
    /// Build a module, failing on the first duplicate or dangling name
    pub fn build(&self, constants: &EngineConstants) -> FuzzyResult<FuzzyModule> {
        let mut module =
            FuzzyModule::new().with_centroid_samples(constants.defuzzify.centroid_samples);

        for variable in &self.variables {
            let target = module.create_variable(&variable.name)?;
            for set in &variable.sets {
                target.add_set(set.name.as_str(), set.to_shape())?;
            }
        }

        for rule in &self.rules {
            let when: Vec<(&str, &str)> = rule
                .when
                .iter()
                .map(|TermConfig(variable, set)| (variable.as_str(), set.as_str()))
                .collect();
            module.add_rule(&when, (rule.then.0.as_str(), rule.then.1.as_str()))?;
        }

        tracing::debug!(
            variables = self.variables.len(),
            rules = self.rules.len(),
            "Built rule base from config"
        );
        Ok(module)
    }
}

/// Load a rule base from a TOML file and build it
pub fn load_rule_base(path: &Path, constants: &EngineConstants) -> Result<FuzzyModule, ConfigError> {
    let config: RuleBaseConfig = super::load_toml(path)?;
    Ok(config.build(constants)?)
}

/// Load a rule base from a TOML string and build it
pub fn parse_rule_base(content: &str, constants: &EngineConstants) -> Result<FuzzyModule, ConfigError> {
    let config: RuleBaseConfig = super::parse_toml(content)?;
    Ok(config.build(constants)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FuzzyError;
    use crate::types::DefuzzifyMethod;

    const THREAT: &str = r#"
rules = [
    { when = [["Health", "Low"], ["Enemies", "Many"]], then = ["Flee", "Yes"] },
    { when = [["Health", "High"]], then = ["Flee", "No"] },
]

[[variables]]
name = "Health"
sets = [
    { name = "Low", shape = "left_shoulder", points = [0.0, 20.0, 50.0] },
    { name = "High", shape = "right_shoulder", points = [20.0, 50.0, 100.0] },
]

[[variables]]
name = "Enemies"
sets = [
    { name = "Few", shape = "left_shoulder", points = [0, 1, 4] },
    { name = "Many", shape = "right_shoulder", points = [1, 4, 10] },
]

[[variables]]
name = "Flee"
sets = [
    { name = "No", shape = "left_shoulder", points = [0.0, 10.0, 50.0] },
    { name = "Yes", shape = "right_shoulder", points = [50.0, 90.0, 100.0] },
]
"#;

    #[test]
    fn test_parse_rule_base() {
        let mut module = parse_rule_base(THREAT, &EngineConstants::default()).unwrap();
        assert_eq!(module.variables().len(), 3);
        assert_eq!(module.rules().len(), 2);

        module.fuzzify("Health", 10.0).unwrap();
        module.fuzzify("Enemies", 6.0).unwrap();
        let flee = module.defuzzify("Flee", DefuzzifyMethod::Centroid).unwrap();
        assert!(flee > 50.0);

        module.fuzzify("Health", 90.0).unwrap();
        let stay = module.defuzzify("Flee", DefuzzifyMethod::Centroid).unwrap();
        assert!(stay < 50.0);
    }

    #[test]
    fn test_constants_reach_the_module() {
        let mut constants = EngineConstants::default();
        constants.defuzzify.centroid_samples = 64;
        let module = parse_rule_base(THREAT, &constants).unwrap();
        assert_eq!(module.centroid_samples(), 64);
    }

    #[test]
    fn test_dangling_rule_reference() {
        let toml = r#"
rules = [{ when = [["Health", "Critical"]], then = ["Flee", "Yes"] }]

[[variables]]
name = "Health"
sets = [{ name = "Low", shape = "left_shoulder", points = [0.0, 20.0, 50.0] }]

[[variables]]
name = "Flee"
sets = [{ name = "Yes", shape = "right_shoulder", points = [50.0, 90.0, 100.0] }]
"#;
        let err = parse_rule_base(toml, &EngineConstants::default()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Fuzzy(FuzzyError::UnknownSet { ref set, .. }) if set == "Critical"
        ));
    }

    #[test]
    fn test_duplicate_names_abort_setup() {
        let toml = r#"
[[variables]]
name = "Health"

[[variables]]
name = "Health"
"#;
        let err = parse_rule_base(toml, &EngineConstants::default()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Fuzzy(FuzzyError::DuplicateVariableName(_))
        ));

        let toml = r#"
[[variables]]
name = "Health"
sets = [
    { name = "Low", shape = "left_shoulder", points = [0.0, 20.0, 50.0] },
    { name = "Low", shape = "triangular", points = [0.0, 20.0, 50.0] },
]
"#;
        let err = parse_rule_base(toml, &EngineConstants::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Fuzzy(FuzzyError::DuplicateSetName { .. })));
    }

    #[test]
    fn test_bad_shape_kind_is_a_parse_error() {
        let toml = r#"
[[variables]]
name = "Health"
sets = [{ name = "Low", shape = "trapezoid", points = [0.0, 20.0, 50.0] }]
"#;
        let err = parse_rule_base(toml, &EngineConstants::default()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_rule_base(Path::new("does/not/exist.toml"), &EngineConstants::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
