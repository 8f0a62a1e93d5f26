//! Operators module: rule costs, rule compilation, the rule catalogue, and
//! successor enumeration.
//!
//! Depends on `carrier`. The catalogue digest uses `proof`.

pub mod apply;
pub mod catalogue;
pub mod cost;
pub mod rule;
