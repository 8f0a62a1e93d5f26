//! Search policy types.

use std::time::Duration;

use crate::error::SearchError;

/// Budget configuration for one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicyV1 {
    /// Wall-clock budget. Checked once per loop iteration, between
    /// expansions; an expansion in progress always completes.
    pub time_budget: Duration,
}

impl SearchPolicyV1 {
    /// Default budget: 30 seconds.
    pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(30);

    /// Policy with the given budget.
    #[must_use]
    pub fn with_budget(time_budget: Duration) -> Self {
        Self { time_budget }
    }

    /// Policy from a budget in (possibly fractional) seconds.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidBudget`] if `seconds` is negative, NaN
    /// or too large to represent.
    pub fn from_secs_f64(seconds: f64) -> Result<Self, SearchError> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(SearchError::InvalidBudget { seconds });
        }
        Duration::try_from_secs_f64(seconds)
            .map(Self::with_budget)
            .map_err(|_| SearchError::InvalidBudget { seconds })
    }
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self::with_budget(Self::DEFAULT_TIME_BUDGET)
    }
}
