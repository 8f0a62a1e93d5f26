//! Configuration errors raised while compiling vocabularies, rules and goals.
//!
//! Every variant is detected once, before search begins. Nothing in the
//! per-state hot path can produce a `ConfigError`.

use thiserror::Error;

/// Fatal configuration failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An identifier outside the fixed vocabulary was referenced.
    #[error("unknown item `{item}` referenced by {context}")]
    UnknownItem { item: String, context: String },

    /// The vocabulary lists the same identifier twice.
    #[error("item `{item}` appears more than once in the vocabulary")]
    DuplicateItem { item: String },

    /// The vocabulary contains an empty identifier.
    #[error("empty item identifier at vocabulary position {position}")]
    EmptyItem { position: usize },

    /// The vocabulary has more entries than `ItemId` can address.
    #[error("vocabulary has {len} items; at most {max} are supported")]
    VocabularyTooLarge { len: usize, max: usize },

    /// Two rules share a name.
    #[error("rule `{name}` is defined more than once")]
    DuplicateRule { name: String },

    /// A rule cost is zero, negative, NaN or infinite.
    #[error("rule `{name}` has cost {value}; costs must be positive and finite")]
    InvalidCost { name: String, value: String },

    /// A state was built with the wrong number of counts for its vocabulary.
    #[error("inventory has {actual} counts, vocabulary has {expected} items")]
    InventoryLength { expected: usize, actual: usize },
}
