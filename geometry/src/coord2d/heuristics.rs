//! Distance estimates for the problems in [super::problems].
//!
//! All of these are admissible for unit step costs. A cost function set
//! with [PositionProblem::with_cost] that charges less than 1 for some
//! squares can make them overestimate.

use super::map::Map;
use super::problems::{CornersProblem, CornersState, PositionProblem};
use super::Point;

/// Grid distance to the goal, ignoring walls.
pub fn manhattan_heuristic<M>(state: &Point, problem: &PositionProblem<'_, M>) -> usize
where
    M: Map,
{
    state.manhattan_distance(problem.goal()) as usize
}

/// Straight line distance to the goal, rounded down.
pub fn euclidean_heuristic<M>(state: &Point, problem: &PositionProblem<'_, M>) -> usize
where
    M: Map,
{
    state.euclidean_distance(problem.goal()).floor() as usize
}

/// Grid distance to the furthest corner not yet visited.
pub fn corners_heuristic<M>(state: &CornersState, problem: &CornersProblem<'_, M>) -> usize
where
    M: Map,
{
    problem
        .corners()
        .iter()
        .zip(state.visited.iter())
        .filter(|(_, visited)| !**visited)
        .map(|(corner, _)| state.position.manhattan_distance(*corner) as usize)
        .max()
        .unwrap_or(0)
}
