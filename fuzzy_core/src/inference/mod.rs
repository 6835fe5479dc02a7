//! FuzzyModule - owns variables and rules, runs a full inference cycle

mod snapshot;

pub use snapshot::{ModuleSnapshot, SetSnapshot, VariableSnapshot};

use crate::error::{FuzzyError, FuzzyResult};
use crate::rule::{Antecedent, Rule};
use crate::types::{DefuzzifyMethod, SetRef, VariableId};
use crate::variable::LinguisticVariable;
use std::collections::HashMap;

/// Default number of steps the centroid method samples
pub const DEFAULT_CENTROID_SAMPLES: usize = 1000;

/// A self-contained fuzzy inference module
///
/// Typical scoring cycle:
///
/// ```
/// use fuzzy_core::{DefuzzifyMethod, FuzzyModule};
///
/// let mut module = FuzzyModule::new();
/// let dist = module.create_variable("Distance").unwrap();
/// dist.add_left_shoulder_set("Close", 0.0, 10.0, 100.0).unwrap();
/// dist.add_right_shoulder_set("Far", 10.0, 100.0, 200.0).unwrap();
/// let score = module.create_variable("Score").unwrap();
/// score.add_left_shoulder_set("Low", 0.0, 10.0, 50.0).unwrap();
/// score.add_right_shoulder_set("High", 50.0, 90.0, 100.0).unwrap();
///
/// module.add_rule(&[("Distance", "Close")], ("Score", "High")).unwrap();
/// module.add_rule(&[("Distance", "Far")], ("Score", "Low")).unwrap();
///
/// module.fuzzify("Distance", 5.0).unwrap();
/// let value = module.defuzzify("Score", DefuzzifyMethod::Centroid).unwrap();
/// assert!(value > 50.0);
/// ```
///
/// The recorded degrees make a module stateful between `fuzzify` and
/// `defuzzify`; give each decision maker its own instance.
#[derive(Debug, Clone)]
pub struct FuzzyModule {
    variables: Vec<LinguisticVariable>,
    index: HashMap<String, VariableId>,
    rules: Vec<Rule>,
    centroid_samples: usize,
}

impl Default for FuzzyModule {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyModule {
    pub fn new() -> Self {
        FuzzyModule {
            variables: Vec::new(),
            index: HashMap::new(),
            rules: Vec::new(),
            centroid_samples: DEFAULT_CENTROID_SAMPLES,
        }
    }

    /// Set the number of centroid sampling steps (at least 1)
    pub fn with_centroid_samples(mut self, samples: usize) -> Self {
        self.centroid_samples = samples.max(1);
        self
    }

    pub fn centroid_samples(&self) -> usize {
        self.centroid_samples
    }

    /// Register a new, empty linguistic variable
    pub fn create_variable(&mut self, name: &str) -> FuzzyResult<&mut LinguisticVariable> {
        if self.index.contains_key(name) {
            return Err(FuzzyError::DuplicateVariableName(name.to_string()));
        }

        let id = VariableId(self.variables.len());
        self.index.insert(name.to_string(), id);
        self.variables.push(LinguisticVariable::new(id, name));
        tracing::debug!(variable = name, id = id.0, "Created fuzzy variable");

        let last = self.variables.len() - 1;
        Ok(&mut self.variables[last])
    }

    pub fn variable(&self, name: &str) -> Option<&LinguisticVariable> {
        self.index.get(name).map(|id| &self.variables[id.0])
    }

    pub fn variable_mut(&mut self, name: &str) -> Option<&mut LinguisticVariable> {
        match self.index.get(name) {
            Some(id) => self.variables.get_mut(id.0),
            None => None,
        }
    }

    pub fn variable_by_id(&self, id: VariableId) -> Option<&LinguisticVariable> {
        self.variables.get(id.0)
    }

    /// Variables in creation order
    pub fn variables(&self) -> &[LinguisticVariable] {
        &self.variables
    }

    /// Handle for `set` on `variable`
    pub fn set_ref(&self, variable: &str, set: &str) -> FuzzyResult<SetRef> {
        self.variable(variable)
            .ok_or_else(|| FuzzyError::UnknownVariable(variable.to_string()))?
            .set_ref(set)
    }

    /// `(variable, set)` names behind a handle
    pub fn set_names(&self, handle: SetRef) -> Option<(&str, &str)> {
        let variable = self.variables.get(handle.variable.0)?;
        let set = variable.set_at(handle.set)?;
        Some((variable.name(), set.name()))
    }

    /// Record the degrees of `value` in every set of `variable`
    ///
    /// NaN and infinite inputs are rejected and leave the degrees untouched.
    pub fn fuzzify(&mut self, variable: &str, value: f64) -> FuzzyResult<()> {
        let var = self
            .variable_mut(variable)
            .ok_or_else(|| FuzzyError::UnknownVariable(variable.to_string()))?;
        if !value.is_finite() {
            return Err(FuzzyError::InvalidInput {
                variable: variable.to_string(),
                value,
            });
        }
        var.fuzzify(value);
        tracing::trace!(variable, value, "Fuzzified input");
        Ok(())
    }

    /// Add `IF t1 AND t2 AND ... THEN consequent` using names
    pub fn add_rule(&mut self, antecedent: &[(&str, &str)], consequent: (&str, &str)) -> FuzzyResult<()> {
        if antecedent.is_empty() {
            return Err(FuzzyError::EmptyAntecedent);
        }

        let terms = antecedent
            .iter()
            .map(|(variable, set)| self.set_ref(variable, set))
            .collect::<FuzzyResult<Vec<_>>>()?;
        let consequent = self.set_ref(consequent.0, consequent.1)?;

        self.add_rule_with(Antecedent::all(terms), consequent)
    }

    /// Add a rule from handles and an arbitrary antecedent expression
    pub fn add_rule_with(&mut self, antecedent: impl Into<Antecedent>, consequent: SetRef) -> FuzzyResult<()> {
        let antecedent = antecedent.into();
        if antecedent.has_empty_operator() {
            return Err(FuzzyError::EmptyAntecedent);
        }
        for handle in antecedent.set_refs().into_iter().chain(Some(consequent)) {
            if self.set_names(handle).is_none() {
                return Err(FuzzyError::InvalidHandle(handle.to_string()));
            }
        }

        let rule = Rule::new(antecedent, consequent);
        tracing::debug!(rule = %self.describe_rule(&rule), "Added fuzzy rule");
        self.rules.push(rule);
        Ok(())
    }

    /// Rules in insertion order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Zero the firing strength of every set
    pub fn reset_firing_strengths(&mut self) {
        for variable in &mut self.variables {
            variable.reset_firing_strengths();
        }
    }

    /// Zero the recorded degree of every set
    pub fn clear_degrees(&mut self) {
        for variable in &mut self.variables {
            variable.clear_degrees();
        }
    }

    /// Reset firing strengths and fire every rule once
    pub fn fire_rules(&mut self) {
        self.reset_firing_strengths();
        for rule in &self.rules {
            let truth = rule.fire(&mut self.variables);
            tracing::trace!(consequent = %rule.consequent(), truth, "Fired rule");
        }
    }

    /// Run the rule base and turn `variable` into a crisp value
    ///
    /// Inputs that were never fuzzified keep whatever degrees they last held.
    /// Returns 0 when no rule fired.
    pub fn defuzzify(&mut self, variable: &str, method: DefuzzifyMethod) -> FuzzyResult<f64> {
        let id = *self
            .index
            .get(variable)
            .ok_or_else(|| FuzzyError::UnknownVariable(variable.to_string()))?;

        self.fire_rules();
        let value = self.variables[id.0].defuzzify(method, self.centroid_samples);
        tracing::debug!(variable, ?method, value, "Defuzzified output");
        Ok(value)
    }

    /// Human readable form of a rule, e.g. `IF Dist IS Close AND Ammo IS Low THEN Score IS Bad`
    pub fn describe_rule(&self, rule: &Rule) -> String {
        format!(
            "IF {} THEN {}",
            self.describe_antecedent(rule.antecedent(), false),
            self.describe_set(rule.consequent())
        )
    }

    fn describe_set(&self, handle: SetRef) -> String {
        match self.set_names(handle) {
            Some((variable, set)) => format!("{} IS {}", variable, set),
            None => handle.to_string(),
        }
    }

    fn describe_antecedent(&self, antecedent: &Antecedent, nested: bool) -> String {
        let join = |terms: &[Antecedent], op: &str| {
            let parts: Vec<String> = terms
                .iter()
                .map(|t| self.describe_antecedent(t, true))
                .collect();
            if nested && parts.len() > 1 {
                format!("({})", parts.join(op))
            } else {
                parts.join(op)
            }
        };

        match antecedent {
            Antecedent::Set(handle) => self.describe_set(*handle),
            Antecedent::And(terms) => join(terms, " AND "),
            Antecedent::Or(terms) => join(terms, " OR "),
            Antecedent::Very(term) => format!("VERY {}", self.describe_antecedent(term, true)),
            Antecedent::Fairly(term) => format!("FAIRLY {}", self.describe_antecedent(term, true)),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::weapon::{rocket_launcher_module, ROCKET_LAUNCHER_RULES};
    use proptest::prelude::*;

    fn ammo_module() -> FuzzyModule {
        let mut module = FuzzyModule::new();

        let distance = module.create_variable("DistToTarget").unwrap();
        distance.add_triangular_set("Target_Medium", 0.0, 150.0, 300.0).unwrap();

        let ammo = module.create_variable("AmmoStatus").unwrap();
        ammo.add_left_shoulder_set("Ammo_Low", 0.0, 10.0, 40.0).unwrap();
        ammo.add_right_shoulder_set("Ammo_Loads", 10.0, 40.0, 100.0).unwrap();

        let score = module.create_variable("Desirability").unwrap();
        score.add_left_shoulder_set("Undesirable", 0.0, 20.0, 50.0).unwrap();
        score.add_right_shoulder_set("VeryDesirable", 50.0, 80.0, 100.0).unwrap();

        module
            .add_rule(
                &[("DistToTarget", "Target_Medium"), ("AmmoStatus", "Ammo_Low")],
                ("Desirability", "Undesirable"),
            )
            .unwrap();
        module
            .add_rule(
                &[("DistToTarget", "Target_Medium"), ("AmmoStatus", "Ammo_Loads")],
                ("Desirability", "VeryDesirable"),
            )
            .unwrap();
        module
    }

    fn score(module: &mut FuzzyModule, distance: f64, ammo: f64, method: DefuzzifyMethod) -> f64 {
        module.fuzzify("DistToTarget", distance).unwrap();
        module.fuzzify("AmmoStatus", ammo).unwrap();
        module.defuzzify("Desirability", method).unwrap()
    }

    /// Rocket launcher rule base with its rules added in `order`
    fn rocket_launcher_in_order(order: &[usize]) -> FuzzyModule {
        let mut module = rocket_launcher_module().unwrap();
        module.rules.clear();
        for &i in order {
            let (distance, ammo, desirability) = ROCKET_LAUNCHER_RULES[i];
            module
                .add_rule(
                    &[("DistToTarget", distance), ("AmmoStatus", ammo)],
                    ("Desirability", desirability),
                )
                .unwrap();
        }
        module
    }

    #[test]
    fn test_duplicate_variable_name() {
        let mut module = FuzzyModule::new();
        module.create_variable("DistToTarget").unwrap();
        let err = module.create_variable("DistToTarget").unwrap_err();
        assert_eq!(err, FuzzyError::DuplicateVariableName("DistToTarget".to_string()));
        assert_eq!(module.variables().len(), 1);
    }

    #[test]
    fn test_fuzzify_unknown_variable() {
        let mut module = ammo_module();
        let err = module.fuzzify("Health", 10.0).unwrap_err();
        assert_eq!(err, FuzzyError::UnknownVariable("Health".to_string()));
        // Same answer every time
        assert_eq!(module.fuzzify("Health", 10.0).unwrap_err(), err);
    }

    #[test]
    fn test_fuzzify_rejects_non_finite_input() {
        let mut module = rocket_launcher_module().unwrap();
        module.fuzzify("DistToTarget", 150.0).unwrap();

        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = module.fuzzify("DistToTarget", value).unwrap_err();
            assert!(matches!(
                err,
                FuzzyError::InvalidInput { ref variable, .. } if variable == "DistToTarget"
            ));
        }

        // Degrees from the last good input survive
        let distance = module.variable("DistToTarget").unwrap();
        assert!(distance.sets().iter().all(|s| (0.0..=1.0).contains(&s.degree())));
        assert!((distance.set("Target_Medium").unwrap().degree() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_defuzzify_unknown_variable() {
        let mut module = ammo_module();
        assert!(matches!(
            module.defuzzify("Score", DefuzzifyMethod::Centroid),
            Err(FuzzyError::UnknownVariable(_))
        ));
    }

    #[test]
    fn test_add_rule_validates_references() {
        let mut module = ammo_module();
        let before = module.rules().len();

        let err = module
            .add_rule(&[("Health", "Low")], ("Desirability", "Undesirable"))
            .unwrap_err();
        assert_eq!(err, FuzzyError::UnknownVariable("Health".to_string()));

        let err = module
            .add_rule(&[("AmmoStatus", "Ammo_Okay")], ("Desirability", "Undesirable"))
            .unwrap_err();
        assert_eq!(
            err,
            FuzzyError::UnknownSet {
                variable: "AmmoStatus".to_string(),
                set: "Ammo_Okay".to_string(),
            }
        );

        let err = module
            .add_rule(&[("AmmoStatus", "Ammo_Low")], ("Desirability", "Meh"))
            .unwrap_err();
        assert!(matches!(err, FuzzyError::UnknownSet { .. }));

        assert_eq!(module.add_rule(&[], ("Desirability", "Meh")), Err(FuzzyError::EmptyAntecedent));
        assert_eq!(module.rules().len(), before);
    }

    #[test]
    fn test_add_rule_with_foreign_handle() {
        let mut module = ammo_module();
        let stray = SetRef::new(VariableId(9), 0);
        let target = module.set_ref("Desirability", "Undesirable").unwrap();
        assert!(matches!(
            module.add_rule_with(stray, target),
            Err(FuzzyError::InvalidHandle(_))
        ));
        assert_eq!(
            module.add_rule_with(Antecedent::Or(vec![]), target),
            Err(FuzzyError::EmptyAntecedent)
        );
    }

    #[test]
    fn test_no_rule_fired_scores_zero() {
        let mut module = ammo_module();
        // Outside Target_Medium's support: every antecedent is 0
        for method in DefuzzifyMethod::all() {
            assert!(score(&mut module, 500.0, 50.0, *method).abs() < f64::EPSILON);
        }

        let mut empty = FuzzyModule::new();
        empty
            .create_variable("Out")
            .unwrap()
            .add_triangular_set("Mid", 0.0, 5.0, 10.0)
            .unwrap();
        assert!(empty.defuzzify("Out", DefuzzifyMethod::Centroid).unwrap().abs() < f64::EPSILON);
    }

    #[test]
    fn test_firing_strengths_reset_each_cycle() {
        let mut module = ammo_module();
        let high = score(&mut module, 150.0, 100.0, DefuzzifyMethod::Centroid);
        let low = score(&mut module, 150.0, 0.0, DefuzzifyMethod::Centroid);
        assert!(high > 50.0);
        assert!(low < 50.0);

        let snapshot = module.snapshot();
        let output = snapshot.variable("Desirability").unwrap();
        assert!((output.sets[0].firing_strength - 1.0).abs() < f64::EPSILON);
        // The previous cycle's VeryDesirable did not leak through
        assert!(output.sets[1].firing_strength.abs() < f64::EPSILON);
    }

    #[test]
    fn test_stale_inputs_are_reused() {
        let mut module = ammo_module();
        let first = score(&mut module, 150.0, 100.0, DefuzzifyMethod::MeanOfMaxima);

        // Only distance is refreshed: ammo keeps its previous degrees
        module.fuzzify("DistToTarget", 150.0).unwrap();
        let second = module.defuzzify("Desirability", DefuzzifyMethod::MeanOfMaxima).unwrap();
        assert!((first - second).abs() < f64::EPSILON);

        module.clear_degrees();
        let cleared = module.defuzzify("Desirability", DefuzzifyMethod::MeanOfMaxima).unwrap();
        assert!(cleared.abs() < f64::EPSILON);
    }

    #[test]
    fn test_or_across_rules_sharing_consequent() {
        let mut module = FuzzyModule::new();
        let input = module.create_variable("In").unwrap();
        let a = input.add_left_shoulder_set("A", 0.0, 0.0, 10.0).unwrap();
        let b = input.add_right_shoulder_set("B", 0.0, 10.0, 10.0).unwrap();
        let output = module.create_variable("Out").unwrap();
        let mid = output.add_triangular_set("Mid", 0.0, 50.0, 100.0).unwrap();

        module.add_rule_with(a, mid).unwrap();
        module.add_rule_with(b, mid).unwrap();
        module.fuzzify("In", 3.0).unwrap();
        module.fire_rules();

        // max(0.7, 0.3), not the last rule's 0.3
        let strength = module.variable("Out").unwrap().sets()[0].firing_strength();
        assert!((strength - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_composite_antecedent() {
        let mut module = ammo_module();
        let medium = module.set_ref("DistToTarget", "Target_Medium").unwrap();
        let loads = module.set_ref("AmmoStatus", "Ammo_Loads").unwrap();
        let good = module.set_ref("Desirability", "VeryDesirable").unwrap();
        module
            .add_rule_with(Antecedent::from(medium).very().or(loads), good)
            .unwrap();

        let description = module.describe_rule(&module.rules()[2]);
        assert_eq!(
            description,
            "IF VERY DistToTarget IS Target_Medium OR AmmoStatus IS Ammo_Loads THEN Desirability IS VeryDesirable"
        );
    }

    #[test]
    fn test_describe_rule() {
        let module = ammo_module();
        assert_eq!(
            module.describe_rule(&module.rules()[0]),
            "IF DistToTarget IS Target_Medium AND AmmoStatus IS Ammo_Low THEN Desirability IS Undesirable"
        );
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut module = ammo_module();
        score(&mut module, 150.0, 25.0, DefuzzifyMethod::Centroid);
        let snapshot = module.snapshot();
        assert_eq!(snapshot.variables.len(), 3);
        assert_eq!(snapshot.rules.len(), 2);

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"Ammo_Loads\""));
        let restored: ModuleSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_reverse_rule_order_matches() {
        let forward: Vec<usize> = (0..ROCKET_LAUNCHER_RULES.len()).collect();
        let backward: Vec<usize> = forward.iter().rev().copied().collect();
        let mut a = rocket_launcher_in_order(&forward);
        let mut b = rocket_launcher_in_order(&backward);

        for (distance, ammo) in [(0.0, 0.0), (120.0, 20.0), (260.0, 65.0), (700.0, 5.0)] {
            for method in DefuzzifyMethod::all() {
                let x = score(&mut a, distance, ammo, *method);
                let y = score(&mut b, distance, ammo, *method);
                assert!((x - y).abs() < 1e-9, "{distance}/{ammo}: {x} vs {y}");
            }
        }
    }

    proptest! {
        #[test]
        fn prop_rule_order_does_not_matter(
            order in Just((0..ROCKET_LAUNCHER_RULES.len()).collect::<Vec<usize>>()).prop_shuffle(),
            distance in 0.0f64..1000.0,
            ammo in 0.0f64..100.0,
        ) {
            let canonical: Vec<usize> = (0..ROCKET_LAUNCHER_RULES.len()).collect();
            let mut reference = rocket_launcher_in_order(&canonical);
            let mut shuffled = rocket_launcher_in_order(&order);

            for method in DefuzzifyMethod::all() {
                let expected = score(&mut reference, distance, ammo, *method);
                let actual = score(&mut shuffled, distance, ammo, *method);
                prop_assert!((expected - actual).abs() < 1e-9);
            }
        }

        #[test]
        fn prop_more_ammo_never_scores_lower(
            distance in 0.0f64..300.0,
            ammo in 0.0f64..100.0,
            extra in 0.0f64..50.0,
        ) {
            let mut module = ammo_module();
            let less = score(&mut module, distance, ammo, DefuzzifyMethod::Centroid);
            let more = score(&mut module, distance, ammo + extra, DefuzzifyMethod::Centroid);
            prop_assert!(more >= less - 1e-9, "{} then {}", less, more);
        }
    }
}
