//! `Cost`: a finite, non-negative rule or path cost.
//!
//! Costs are real numbers, so the frontier needs a total order over floats.
//! [`OrderedFloat`] supplies it; construction through [`Cost::new`] keeps NaN,
//! infinities and negatives out, and folds `-0.0` into `0.0` so equal costs
//! hash identically.
//!
//! Canonical forms render a cost with [`fmt::Display`], the shortest decimal
//! that round-trips (`1`, `0.5`, `2.75`), never scientific notation.

use std::fmt;
use std::iter::Sum;

use ordered_float::OrderedFloat;

/// Finite, non-negative cost with a total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cost(OrderedFloat<f64>);

impl Cost {
    /// The cost of the empty path.
    pub const ZERO: Cost = Cost(OrderedFloat(0.0));

    /// Wrap `value` if it is finite and non-negative.
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() && value >= 0.0 {
            Some(Self(OrderedFloat(value + 0.0)))
        } else {
            None
        }
    }

    /// The raw value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0 .0
    }

    /// Whether this is the zero cost.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Sum, clamped to `f64::MAX` instead of reaching infinity.
    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        Self(OrderedFloat((self.value() + other.value()).min(f64::MAX)))
    }
}

impl From<u32> for Cost {
    fn from(value: u32) -> Self {
        Self(OrderedFloat(f64::from(value)))
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}
