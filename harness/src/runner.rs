//! Harness runner: compiled problem in, report out.
//!
//! The runner does not search by itself. It picks the admissibility filter,
//! calls [`craftplan_search::search::search`], and binds the result to the
//! catalogue digest so two reports can be compared.

use std::fmt::Write as _;

use serde_json::{json, Value};
use tracing::info;

use craftplan_kernel::carrier::vocabulary::ItemVocabularyV1;
use craftplan_kernel::proof::hash::ContentHash;
use craftplan_search::contract::Admissibility;
use craftplan_search::error::SearchFailure;
use craftplan_search::plan::PlanV1;
use craftplan_search::policy::SearchPolicyV1;
use craftplan_search::prune::AdmitAll;
use craftplan_search::search::{search, SearchStatsV1};

use crate::caps::crafting_caps;
use crate::error::Result;
use crate::problem::CompiledProblem;

/// Knobs for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub policy: SearchPolicyV1,
    /// Apply the crafting cap preset.
    pub prune: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            policy: SearchPolicyV1::default(),
            prune: true,
        }
    }
}

/// A plan together with its digest and the counters that found it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedPlan {
    pub plan: PlanV1,
    pub digest: ContentHash,
    pub stats: SearchStatsV1,
}

/// Result of [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub catalogue_digest: ContentHash,
    pub outcome: std::result::Result<SolvedPlan, SearchFailure>,
}

impl RunReport {
    /// Counters, whether or not a plan was found.
    #[must_use]
    pub fn stats(&self) -> &SearchStatsV1 {
        match &self.outcome {
            Ok(solved) => &solved.stats,
            Err(failure) => failure.stats(),
        }
    }

    /// The plan, if one was found.
    #[must_use]
    pub fn plan(&self) -> Option<&PlanV1> {
        self.outcome.as_ref().ok().map(|s| &s.plan)
    }

    /// Human-readable rendering: one line per step, then cost and length.
    #[must_use]
    pub fn render_text(&self, vocab: &ItemVocabularyV1) -> String {
        let mut out = String::new();
        match &self.outcome {
            Ok(solved) => {
                for (i, step) in solved.plan.steps().iter().enumerate() {
                    let state = step.state.display(vocab);
                    match step.action.as_deref() {
                        None => {
                            let _ = writeln!(out, "{i:>4}  {state}");
                        }
                        Some(action) => {
                            let _ = writeln!(out, "{i:>4}  {action} -> {state}");
                        }
                    }
                }
                let _ = writeln!(out, "cost: {}", solved.plan.total_cost());
                let _ = writeln!(out, "length: {}", solved.plan.len());
                let _ = writeln!(out, "plan: {}", solved.digest);
            }
            Err(failure) => {
                let _ = writeln!(out, "no plan found: {failure}");
                let _ = writeln!(
                    out,
                    "elapsed: {:.3}s, states discovered: {}",
                    failure.stats().elapsed.as_secs_f64(),
                    failure.stats().discovered
                );
            }
        }
        out
    }

    /// Machine-readable rendering.
    #[must_use]
    pub fn to_json_value(&self, vocab: &ItemVocabularyV1) -> Value {
        let stats = stats_json(self.stats());
        match &self.outcome {
            Ok(solved) => json!({
                "status": "solved",
                "catalogue_digest": self.catalogue_digest.as_str(),
                "plan": solved.plan.to_json_value(vocab),
                "plan_digest": solved.digest.as_str(),
                "stats": stats,
            }),
            Err(failure) => json!({
                "status": failure.kind(),
                "catalogue_digest": self.catalogue_digest.as_str(),
                "stats": stats,
            }),
        }
    }
}

fn stats_json(stats: &SearchStatsV1) -> Value {
    json!({
        "expansions": stats.expansions,
        "generated": stats.generated,
        "pruned": stats.pruned,
        "relaxations": stats.relaxations,
        "stale_pops": stats.stale_pops,
        "discovered": stats.discovered,
        "frontier_high_water": stats.frontier_high_water,
        "elapsed_ms": u64::try_from(stats.elapsed.as_millis()).unwrap_or(u64::MAX),
    })
}

/// Search `problem` under `config`.
///
/// # Errors
///
/// [`crate::error::HarnessError::Config`] if the cap preset cannot be
/// compiled, [`crate::error::HarnessError::Canon`] if a digest cannot be
/// computed. A search that finds no plan is not an error.
pub fn run(problem: &CompiledProblem, config: &RunConfig) -> Result<RunReport> {
    let vocab = problem.vocabulary();
    let catalogue_digest = problem.catalogue.digest()?;

    let caps;
    let admissibility: &dyn Admissibility = if config.prune {
        caps = crafting_caps(vocab)?;
        &caps
    } else {
        &AdmitAll
    };

    let outcome = match search(
        &problem.catalogue,
        problem.start.clone(),
        &problem.goal,
        &config.policy,
        admissibility,
    ) {
        Ok(found) => {
            let digest = found.plan.digest(vocab)?;
            info!(
                cost = %found.plan.total_cost(),
                steps = found.plan.len(),
                expansions = found.stats.expansions,
                %digest,
                "plan found"
            );
            Ok(SolvedPlan {
                plan: found.plan,
                digest,
                stats: found.stats,
            })
        }
        Err(failure) => {
            info!(
                reason = failure.kind(),
                expansions = failure.stats().expansions,
                "no plan found"
            );
            Err(failure)
        }
    };

    Ok(RunReport {
        catalogue_digest,
        outcome,
    })
}
