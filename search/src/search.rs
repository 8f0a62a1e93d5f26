//! Search entry point and expansion loop.
//!
//! Uniform-cost search with lazy deletion. Each distinct state owns one
//! record in a node arena; a `HashMap` maps states to arena indices. The
//! frontier holds `(cost, creation_order)` keys pointing into the arena, and
//! a popped key whose cost no longer matches its node's best cost is stale.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use craftplan_kernel::carrier::inventory::InventoryStateV1;
use craftplan_kernel::operators::cost::Cost;
use tracing::{debug, trace};

use crate::contract::{Admissibility, GoalPredicate, TransitionGraph};
use crate::error::SearchFailure;
use crate::frontier::BestFirstFrontier;
use crate::node::SearchNodeV1;
use crate::plan::{PlanStepV1, PlanV1};
use crate::policy::SearchPolicyV1;

/// Counters collected during one search call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatsV1 {
    /// Nodes popped with their final cost and expanded (goal pop excluded).
    pub expansions: u64,
    /// Transitions yielded by the graph.
    pub generated: u64,
    /// Transitions rejected by the admissibility filter.
    pub pruned: u64,
    /// Frontier pushes after the start node: discoveries plus improvements.
    pub relaxations: u64,
    /// Popped entries discarded because a cheaper path had superseded them.
    pub stale_pops: u64,
    /// Distinct states recorded, the start included.
    pub discovered: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
    /// Wall-clock time spent in the call.
    pub elapsed: Duration,
}

/// Successful search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Minimum-cost plan (among admissible paths).
    pub plan: PlanV1,
    /// Counters up to the goal pop.
    pub stats: SearchStatsV1,
}

impl SearchOutcome {
    /// Shorthand for `plan.total_cost()`.
    #[must_use]
    pub fn total_cost(&self) -> Cost {
        self.plan.total_cost()
    }
}

/// Run time-bounded uniform-cost search from `start`.
///
/// The budget is checked once per iteration, before popping; an expansion in
/// progress always completes. Because the check comes first, a zero budget
/// yields [`SearchFailure::TimeoutExceeded`] even when `start` is a goal.
///
/// Successors rejected by `admissibility` never enter the frontier. Without
/// pruning the returned plan has minimum total cost; with pruning it is
/// minimal among admissible paths only.
///
/// # Errors
///
/// [`SearchFailure::TimeoutExceeded`] when the budget elapses first,
/// [`SearchFailure::FrontierExhausted`] when no admissible path reaches a
/// goal state.
pub fn search<G, P, A>(
    graph: &G,
    start: InventoryStateV1,
    goal: &P,
    policy: &SearchPolicyV1,
    admissibility: &A,
) -> Result<SearchOutcome, SearchFailure>
where
    G: TransitionGraph + ?Sized,
    P: GoalPredicate + ?Sized,
    A: Admissibility + ?Sized,
{
    let started = Instant::now();
    debug!(
        rules = graph.rule_count(),
        budget_ms = policy.time_budget.as_millis(),
        "search started"
    );

    let mut nodes: Vec<SearchNodeV1> = vec![SearchNodeV1::root(start.clone())];
    let mut index: HashMap<InventoryStateV1, usize> = HashMap::from([(start, 0)]);
    let mut frontier = BestFirstFrontier::new();
    let mut stats = SearchStatsV1::default();
    frontier.push(Cost::ZERO, 0);

    loop {
        if started.elapsed() >= policy.time_budget {
            let stats = finish(stats, &frontier, &nodes, started);
            debug!(
                expansions = stats.expansions,
                discovered = stats.discovered,
                "search timed out"
            );
            return Err(SearchFailure::TimeoutExceeded { stats });
        }

        let Some((key, node_id)) = frontier.pop() else {
            let stats = finish(stats, &frontier, &nodes, started);
            debug!(
                expansions = stats.expansions,
                discovered = stats.discovered,
                "frontier exhausted"
            );
            return Err(SearchFailure::FrontierExhausted { stats });
        };

        let node = &mut nodes[node_id];
        if node.expanded || key.g_cost > node.g_cost {
            stats.stale_pops += 1;
            continue;
        }
        node.expanded = true;
        let g_cost = node.g_cost;

        if goal.is_goal(&node.state) {
            let plan = reconstruct(&nodes, node_id);
            let stats = finish(stats, &frontier, &nodes, started);
            debug!(
                total_cost = %plan.total_cost(),
                steps = plan.len(),
                expansions = stats.expansions,
                elapsed_ms = stats.elapsed.as_millis(),
                "goal reached"
            );
            return Ok(SearchOutcome { plan, stats });
        }

        stats.expansions += 1;
        // Owned copy: the arena grows while successors are consumed.
        let source = node.state.clone();
        trace!(node_id, %g_cost, "expanding");

        for transition in graph.successors(&source) {
            stats.generated += 1;
            if !admissibility.admissible(&transition.state, &source) {
                stats.pruned += 1;
                continue;
            }
            let tentative = g_cost.saturating_add(transition.cost);

            if let Some(&succ_id) = index.get(&transition.state) {
                let succ = &mut nodes[succ_id];
                if tentative < succ.g_cost {
                    succ.g_cost = tentative;
                    succ.parent_id = Some(node_id);
                    succ.producing_action = Some(transition.action);
                    frontier.push(tentative, succ_id);
                    stats.relaxations += 1;
                }
            } else {
                let succ_id = nodes.len();
                index.insert(transition.state.clone(), succ_id);
                nodes.push(SearchNodeV1 {
                    node_id: succ_id,
                    parent_id: Some(node_id),
                    state: transition.state,
                    g_cost: tentative,
                    producing_action: Some(transition.action),
                    expanded: false,
                });
                frontier.push(tentative, succ_id);
                stats.relaxations += 1;
            }
        }
    }
}

fn finish(
    mut stats: SearchStatsV1,
    frontier: &BestFirstFrontier,
    nodes: &[SearchNodeV1],
    started: Instant,
) -> SearchStatsV1 {
    stats.discovered = nodes.len() as u64;
    stats.frontier_high_water = frontier.high_water();
    stats.elapsed = started.elapsed();
    stats
}

/// Walk parent links from `goal_id` back to the start and reverse.
fn reconstruct(nodes: &[SearchNodeV1], goal_id: usize) -> PlanV1 {
    let mut steps = Vec::new();
    let mut cursor = Some(goal_id);
    while let Some(id) = cursor {
        let node = &nodes[id];
        steps.push(PlanStepV1 {
            state: node.state.clone(),
            action: node.producing_action.clone(),
        });
        cursor = node.parent_id;
    }
    steps.reverse();
    PlanV1::new(steps, nodes[goal_id].g_cost)
}
