//! Carrier module: item vocabulary, inventory states, goals, and the
//! compilation boundary from name-keyed mappings to index form.
//!
//! This is the foundational layer. Only `error` and `proof::hash` are
//! imported here.

pub mod compile;
pub mod goal;
pub mod inventory;
pub mod vocabulary;
