//! Antecedent expressions: fuzzy AND / OR over set references, plus hedges

use crate::types::SetRef;
use crate::variable::LinguisticVariable;

/// The condition side of a rule
#[derive(Debug, Clone, PartialEq)]
pub enum Antecedent {
    /// Recorded degree of one set
    Set(SetRef),
    /// Minimum of the operands
    And(Vec<Antecedent>),
    /// Maximum of the operands
    Or(Vec<Antecedent>),
    /// Concentration hedge, squares the operand
    Very(Box<Antecedent>),
    /// Dilation hedge, square root of the operand
    Fairly(Box<Antecedent>),
}

impl Antecedent {
    /// Conjunction of every set in `sets`
    pub fn all(sets: impl IntoIterator<Item = SetRef>) -> Self {
        Antecedent::And(sets.into_iter().map(Antecedent::Set).collect())
    }

    /// Disjunction of every set in `sets`
    pub fn any(sets: impl IntoIterator<Item = SetRef>) -> Self {
        Antecedent::Or(sets.into_iter().map(Antecedent::Set).collect())
    }

    pub fn and(self, rhs: impl Into<Antecedent>) -> Self {
        match self {
            Antecedent::And(mut terms) => {
                terms.push(rhs.into());
                Antecedent::And(terms)
            }
            lhs => Antecedent::And(vec![lhs, rhs.into()]),
        }
    }

    pub fn or(self, rhs: impl Into<Antecedent>) -> Self {
        match self {
            Antecedent::Or(mut terms) => {
                terms.push(rhs.into());
                Antecedent::Or(terms)
            }
            lhs => Antecedent::Or(vec![lhs, rhs.into()]),
        }
    }

    pub fn very(self) -> Self {
        Antecedent::Very(Box::new(self))
    }

    pub fn fairly(self) -> Self {
        Antecedent::Fairly(Box::new(self))
    }

    /// Truth degree from the degrees currently recorded in `variables`
    ///
    /// Handles that point nowhere read as 0; the module validates every
    /// handle before a rule is stored.
    pub fn truth(&self, variables: &[LinguisticVariable]) -> f64 {
        match self {
            Antecedent::Set(handle) => variables
                .get(handle.variable.0)
                .and_then(|v| v.set_at(handle.set))
                .map_or(0.0, |s| s.degree()),
            Antecedent::And(terms) => terms
                .iter()
                .map(|t| t.truth(variables))
                .fold(1.0, f64::min),
            Antecedent::Or(terms) => terms
                .iter()
                .map(|t| t.truth(variables))
                .fold(0.0, f64::max),
            Antecedent::Very(term) => term.truth(variables).powi(2),
            Antecedent::Fairly(term) => term.truth(variables).sqrt(),
        }
    }

    /// Every set handle the expression reads, in order of appearance
    pub fn set_refs(&self) -> Vec<SetRef> {
        fn collect(expr: &Antecedent, out: &mut Vec<SetRef>) {
            match expr {
                Antecedent::Set(handle) => out.push(*handle),
                Antecedent::And(terms) | Antecedent::Or(terms) => {
                    for term in terms {
                        collect(term, out);
                    }
                }
                Antecedent::Very(term) | Antecedent::Fairly(term) => collect(term, out),
            }
        }

        let mut refs = Vec::new();
        collect(self, &mut refs);
        refs
    }

    /// Whether some `And`/`Or` in the expression has no operands
    pub fn has_empty_operator(&self) -> bool {
        match self {
            Antecedent::Set(_) => false,
            Antecedent::And(terms) | Antecedent::Or(terms) => {
                terms.is_empty() || terms.iter().any(|t| t.has_empty_operator())
            }
            Antecedent::Very(term) | Antecedent::Fairly(term) => term.has_empty_operator(),
        }
    }
}

impl From<SetRef> for Antecedent {
    fn from(handle: SetRef) -> Self {
        Antecedent::Set(handle)
    }
}
