//! Membership functions and the fuzzy sets built from them

mod set;
mod shape;

pub use set::FuzzySet;
pub use shape::{Shape, ShapeKind};
