//! Pathfinding in two dimensions using A*
use searcher::astar;

use super::heuristics::manhattan_heuristic;
use super::map::Map;
use super::problems::PositionProblem;
use super::{Direction, Point};

/// Implements pathfinding for a map.
#[derive(Debug, Clone)]
pub struct Pathfinder<'m, M> {
    map: &'m M,
}

impl<'m, M> Pathfinder<'m, M>
where
    M: Map,
{
    /// Construct a new pathfinder.
    pub(crate) fn new(map: &'m M) -> Self {
        Self { map }
    }

    /// Find the shortest walk between the origin and destination given.
    ///
    /// When either end is blocked, or no path exists and the search is
    /// exhausted, return None.
    pub fn find_path(&self, origin: Point, destination: Point) -> Option<Vec<Direction>> {
        if !self.map.is_traversable(origin) || !self.map.is_traversable(destination) {
            return None;
        }
        if origin == destination {
            return Some(Vec::new());
        }

        let problem = PositionProblem::new(self.map, origin, destination);
        let plan = astar(&problem, &manhattan_heuristic::<M>);
        if plan.is_empty() {
            None
        } else {
            Some(plan)
        }
    }
}
