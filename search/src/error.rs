//! Typed search errors.
//!
//! [`SearchError`] covers pre-flight validation only. Runtime terminations
//! without a plan are [`SearchFailure`] values and always carry statistics.

use crate::search::SearchStatsV1;

/// Pre-flight validation failure. No search step has run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// Budget was negative, NaN or infinite.
    #[error("invalid time budget {seconds}: must be a finite, non-negative number of seconds")]
    InvalidBudget { seconds: f64 },
}

/// Why a search ended without a plan.
///
/// Both variants are ordinary outcomes, not defects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchFailure {
    /// The wall-clock budget elapsed before a goal state was popped.
    #[error("time budget exceeded after {} expansions", .stats.expansions)]
    TimeoutExceeded { stats: SearchStatsV1 },
    /// Every admissible reachable state was expanded without reaching a goal.
    #[error("frontier exhausted after {} expansions: goal unreachable", .stats.expansions)]
    FrontierExhausted { stats: SearchStatsV1 },
}

impl SearchFailure {
    /// Statistics collected up to termination.
    #[must_use]
    pub fn stats(&self) -> &SearchStatsV1 {
        match self {
            Self::TimeoutExceeded { stats } | Self::FrontierExhausted { stats } => stats,
        }
    }

    /// Stable lowercase tag, used in logs and JSON reports.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TimeoutExceeded { .. } => "timeout_exceeded",
            Self::FrontierExhausted { .. } => "frontier_exhausted",
        }
    }
}
