//! craftplan search: time-bounded uniform-cost search over inventory states.
//!
//! This crate depends only on `craftplan_kernel`. It does NOT depend on
//! `craftplan_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! craftplan_kernel  ←  craftplan_search  ←  craftplan_harness
//! (states, rules)      (frontier, search)    (loader, runner, CLI)
//! ```
//!
//! # Key types
//!
//! - [`contract::TransitionGraph`] -- successor enumeration seam
//! - [`contract::GoalPredicate`] / [`contract::Admissibility`] -- goal test and pruning filter
//! - [`prune::CapPolicyV1`] -- declarative count caps
//! - [`policy::SearchPolicyV1`] -- wall-clock budget
//! - [`search::search`] -- the engine
//! - [`plan::PlanV1`] -- reconstructed start-to-goal plan

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod plan;
pub mod policy;
pub mod prune;
pub mod search;
