//! JSON problem loader.
//!
//! Schema (keys are case-sensitive):
//!
//! ```json
//! {
//!   "Items":   ["wood", "plank"],
//!   "Initial": {"wood": 1},
//!   "Goal":    {"plank": 4},
//!   "Recipes": {
//!     "make_plank": {"Consumes": {"wood": 1}, "Produces": {"plank": 4}, "Time": 1}
//!   }
//! }
//! ```
//!
//! `Requires` may be a list of item names or a map of item to bool. Every
//! key of the map counts as required, whatever its value. `Time` is any
//! positive number. Recipe order in the document is the catalogue order.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use craftplan_kernel::carrier::compile::{compile_goal, compile_inventory};
use craftplan_kernel::carrier::goal::GoalV1;
use craftplan_kernel::carrier::inventory::InventoryStateV1;
use craftplan_kernel::carrier::vocabulary::ItemVocabularyV1;
use craftplan_kernel::error::ConfigError;
use craftplan_kernel::operators::catalogue::RuleCatalogueV1;
use craftplan_kernel::operators::rule::RuleDefinition;

use crate::error::{HarnessError, Result};

/// A crafting problem as written on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CraftingProblemV1 {
    #[serde(rename = "Items")]
    pub items: Vec<String>,
    #[serde(rename = "Initial", default)]
    pub initial: IndexMap<String, u32>,
    #[serde(rename = "Goal", default)]
    pub goal: IndexMap<String, u32>,
    #[serde(rename = "Recipes", default)]
    pub recipes: IndexMap<String, RecipeSpec>,
}

/// One recipe entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSpec {
    #[serde(rename = "Requires", default)]
    pub requires: Requirements,
    #[serde(rename = "Consumes", default)]
    pub consumes: IndexMap<String, u32>,
    #[serde(rename = "Produces", default)]
    pub produces: IndexMap<String, u32>,
    #[serde(rename = "Time")]
    pub time: f64,
}

/// `Requires` in either of its two accepted shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Requirements {
    List(Vec<String>),
    Map(IndexMap<String, bool>),
}

impl Default for Requirements {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl Requirements {
    /// Required item names, in document order.
    pub fn items(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            Self::List(items) => Box::new(items.iter().map(String::as_str)),
            Self::Map(items) => Box::new(items.keys().map(String::as_str)),
        }
    }
}

/// Everything the search needs, resolved against one vocabulary.
#[derive(Debug, Clone)]
pub struct CompiledProblem {
    pub catalogue: RuleCatalogueV1,
    pub start: InventoryStateV1,
    pub goal: GoalV1,
}

impl CompiledProblem {
    /// The problem's vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &ItemVocabularyV1 {
        self.catalogue.vocabulary()
    }
}

impl CraftingProblemV1 {
    /// Read and parse a problem file.
    ///
    /// # Errors
    ///
    /// [`HarnessError::Io`] if the file cannot be read,
    /// [`HarnessError::Json`] if it does not match the schema.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| HarnessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Parse a problem from JSON text.
    ///
    /// # Errors
    ///
    /// [`HarnessError::Json`] if `text` does not match the schema.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Rule definitions in document order.
    #[must_use]
    pub fn rule_definitions(&self) -> Vec<RuleDefinition> {
        self.recipes
            .iter()
            .map(|(name, spec)| {
                let mut def = RuleDefinition::new(name.clone(), spec.time);
                for item in spec.requires.items() {
                    def = def.requires(item);
                }
                for (item, &amount) in &spec.consumes {
                    def = def.consumes(item.clone(), amount);
                }
                for (item, &amount) in &spec.produces {
                    def = def.produces(item.clone(), amount);
                }
                def
            })
            .collect()
    }

    /// Resolve every name against `Items` and compile the rules.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`]: duplicate or empty items, unknown item references
    /// in `Initial`, `Goal` or a recipe, duplicate recipe names, costs that
    /// are not positive.
    pub fn compile(&self) -> std::result::Result<CompiledProblem, ConfigError> {
        let vocab = ItemVocabularyV1::new(self.items.iter().cloned())?;
        let catalogue = RuleCatalogueV1::compile(&vocab, &self.rule_definitions())?;
        let start = compile_inventory(
            &vocab,
            self.initial.iter().map(|(k, &v)| (k.as_str(), v)),
        )?;
        let goal = compile_goal(&vocab, self.goal.iter().map(|(k, &v)| (k.as_str(), v)))?;
        debug!(
            items = vocab.len(),
            rules = catalogue.len(),
            "problem compiled"
        );
        Ok(CompiledProblem {
            catalogue,
            start,
            goal,
        })
    }
}
