//! Proof module: canonical JSON and domain-separated content hashing.
//!
//! Used to fingerprint inventories and to produce digests for catalogues and
//! plans, so repeated runs can be compared byte for byte.

pub mod canon;
pub mod hash;
