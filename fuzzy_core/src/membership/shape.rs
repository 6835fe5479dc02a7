//! Piecewise-linear membership shapes

use serde::{Deserialize, Serialize};

/// The fixed family of membership shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Plateau at 1 up to the peak, then a linear fall
    LeftShoulder,
    /// Linear rise to the peak, then a linear fall
    Triangular,
    /// Linear rise to the peak, then a plateau at 1
    RightShoulder,
}

impl ShapeKind {
    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::LeftShoulder,
            ShapeKind::Triangular,
            ShapeKind::RightShoulder,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::LeftShoulder => "left shoulder",
            ShapeKind::Triangular => "triangular",
            ShapeKind::RightShoulder => "right shoulder",
        }
    }
}

/// A membership shape with its three control points
///
/// For every kind `left <= peak <= right`:
/// - LeftShoulder: 1 for `x <= peak`, falls to 0 at `right`
/// - Triangular: 0 at `left`, 1 at `peak`, 0 at `right`
/// - RightShoulder: 0 at `left`, 1 from `peak` onward
///
/// `left` of a left shoulder and `right` of a right shoulder only bound the
/// plateau used for the representative value and the variable's range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub left: f64,
    pub peak: f64,
    pub right: f64,
}

impl Shape {
    pub fn new(kind: ShapeKind, left: f64, peak: f64, right: f64) -> Self {
        Shape {
            kind,
            left,
            peak,
            right,
        }
    }

    pub fn left_shoulder(left: f64, peak: f64, right: f64) -> Self {
        Self::new(ShapeKind::LeftShoulder, left, peak, right)
    }

    pub fn triangular(left: f64, peak: f64, right: f64) -> Self {
        Self::new(ShapeKind::Triangular, left, peak, right)
    }

    pub fn right_shoulder(left: f64, peak: f64, right: f64) -> Self {
        Self::new(ShapeKind::RightShoulder, left, peak, right)
    }

    /// Whether the control points are finite and non-decreasing
    pub fn is_valid(&self) -> bool {
        self.left.is_finite()
            && self.peak.is_finite()
            && self.right.is_finite()
            && self.left <= self.peak
            && self.peak <= self.right
    }

    /// Degree of membership of `x`, always in `[0, 1]`
    ///
    /// Zero-width ramps behave as steps, so the peak itself is always a full
    /// member even when it coincides with an edge. NaN belongs to nothing.
    pub fn degree_of_membership(&self, x: f64) -> f64 {
        if x.is_nan() {
            return 0.0;
        }
        match self.kind {
            ShapeKind::LeftShoulder => {
                if x <= self.peak {
                    1.0
                } else if x >= self.right {
                    0.0
                } else {
                    (self.right - x) / (self.right - self.peak)
                }
            }
            ShapeKind::Triangular => {
                if x == self.peak {
                    1.0
                } else if x <= self.left || x >= self.right {
                    0.0
                } else if x < self.peak {
                    (x - self.left) / (self.peak - self.left)
                } else {
                    (self.right - x) / (self.right - self.peak)
                }
            }
            ShapeKind::RightShoulder => {
                if x >= self.peak {
                    1.0
                } else if x <= self.left {
                    0.0
                } else {
                    (x - self.left) / (self.peak - self.left)
                }
            }
        }
    }

    /// Mid-point of the region where the shape is fully true
    pub fn representative_value(&self) -> f64 {
        match self.kind {
            ShapeKind::LeftShoulder => (self.left + self.peak) / 2.0,
            ShapeKind::Triangular => self.peak,
            ShapeKind::RightShoulder => (self.peak + self.right) / 2.0,
        }
    }

    /// The interval spanned by the control points
    pub fn bounds(&self) -> (f64, f64) {
        (self.left, self.right)
    }
}
