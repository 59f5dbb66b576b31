//! Uniform cost search

use crate::algorithm::best_first;
use crate::traits::{NullHeuristic, SearchProblem};

/// Uniform cost search: expand the node with the cheapest path first.
///
/// The priority of each node is the problem's cost for the entire path
/// to that node. With non-negative step costs, the first goal reached
/// is reached by a cheapest path.
pub fn uniform_cost_search<P>(problem: &P) -> Vec<P::Action>
where
    P: SearchProblem + ?Sized,
{
    let _span = tracing::debug_span!("ucs").entered();
    best_first(problem, &NullHeuristic)
}
