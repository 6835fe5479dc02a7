//! Rules: an antecedent expression and the consequent set it drives

mod antecedent;

pub use antecedent::Antecedent;

use crate::types::SetRef;
use crate::variable::LinguisticVariable;

/// A fuzzy rule `IF antecedent THEN consequent`
///
/// Rules only hold handles; the sets belong to the module's variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    antecedent: Antecedent,
    consequent: SetRef,
}

impl Rule {
    pub fn new(antecedent: impl Into<Antecedent>, consequent: SetRef) -> Self {
        Rule {
            antecedent: antecedent.into(),
            consequent,
        }
    }

    pub fn antecedent(&self) -> &Antecedent {
        &self.antecedent
    }

    pub fn consequent(&self) -> SetRef {
        self.consequent
    }

    /// Truth of the antecedent against the recorded degrees
    pub fn truth(&self, variables: &[LinguisticVariable]) -> f64 {
        self.antecedent.truth(variables)
    }

    /// OR the antecedent's truth into the consequent's firing strength
    ///
    /// Returns the truth that was applied.
    pub fn fire(&self, variables: &mut [LinguisticVariable]) -> f64 {
        let truth = self.truth(variables);
        if let Some(set) = variables
            .get_mut(self.consequent.variable.0)
            .and_then(|v| v.set_at_mut(self.consequent.set))
        {
            set.or_with(truth);
        }
        truth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VariableId;

    #[test]
    fn test_fire_raises_consequent() {
        let mut input = LinguisticVariable::new(VariableId(0), "Input");
        let low = input.add_left_shoulder_set("Low", 0.0, 0.0, 10.0).unwrap();
        let high = input.add_right_shoulder_set("High", 0.0, 10.0, 10.0).unwrap();
        input.fuzzify(7.5);

        let mut output = LinguisticVariable::new(VariableId(1), "Output");
        let bad = output.add_left_shoulder_set("Bad", 0.0, 0.0, 50.0).unwrap();

        let mut vars = vec![input, output];
        let weak = Rule::new(low, bad);
        let strong = Rule::new(high, bad);

        assert!((weak.fire(&mut vars) - 0.25).abs() < 1e-9);
        assert!((strong.fire(&mut vars) - 0.75).abs() < 1e-9);
        // Firing the weaker rule again cannot lower the consequent
        weak.fire(&mut vars);

        let strength = vars[1].set_at(0).unwrap().firing_strength();
        assert!((strength - 0.75).abs() < 1e-9);
    }
}
