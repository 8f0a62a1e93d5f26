//! craftplan kernel: the deterministic core of the crafting planner.
//!
//! # API Surface
//!
//! - [`carrier::vocabulary::ItemVocabularyV1`] -- fixes item indices once, at load time
//! - [`carrier::compile`] -- compile inventories and goals from name-keyed mappings
//! - [`operators::catalogue::RuleCatalogueV1`] -- compile rules and enumerate successors
//! - [`operators::cost::Cost`] -- totally ordered, finite rule and path costs
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 digests
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators` ← `proof`
//!
//! `operators` depends on `carrier`. `proof` is self-contained; `carrier`
//! uses it only for inventory fingerprints and otherwise depends on nothing
//! internal except [`error`].

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod error;
pub mod operators;
pub mod proof;
