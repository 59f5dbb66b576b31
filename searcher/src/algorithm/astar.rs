//! A* search

use crate::algorithm::best_first;
use crate::traits::{SearchHeuristic, SearchProblem};

/// A* search: expand the node with the lowest path cost plus estimate.
///
/// Pass [NullHeuristic](crate::NullHeuristic) when no estimate is
/// available, which makes this identical to uniform cost search. The
/// plan is only guaranteed to be cheapest if the heuristic is admissible,
/// which is not checked.
pub fn a_star_search<P, H>(problem: &P, heuristic: &H) -> Vec<P::Action>
where
    P: SearchProblem + ?Sized,
    H: SearchHeuristic<P> + ?Sized,
{
    let _span = tracing::debug_span!("astar").entered();
    best_first(problem, heuristic)
}
