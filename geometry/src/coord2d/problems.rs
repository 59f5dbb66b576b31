//! Search problems posed on a map.

use std::cell::Cell;
use std::fmt;

use searcher::{SearchProblem, Transition, TransitionOf};

use super::map::Map;
use super::{Direction, Point};

/// Cost of an action sequence which walks into a wall.
pub const ILLEGAL_COST: usize = 999_999;

fn unit_cost(_: Point) -> usize {
    1
}

/// Walk from one point to another.
///
/// Each step costs whatever the cost function charges for the square
/// being stepped onto, which is 1 unless set with [PositionProblem::with_cost].
pub struct PositionProblem<'m, M> {
    map: &'m M,
    start: Point,
    goal: Point,
    cost: Box<dyn Fn(Point) -> usize + 'm>,
    expanded: Cell<usize>,
}

impl<'m, M> fmt::Debug for PositionProblem<'m, M>
where
    M: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionProblem")
            .field("map", self.map)
            .field("start", &self.start)
            .field("goal", &self.goal)
            .field("expanded", &self.expanded.get())
            .finish()
    }
}

impl<'m, M> PositionProblem<'m, M>
where
    M: Map,
{
    pub fn new(map: &'m M, start: Point, goal: Point) -> Self {
        Self {
            map,
            start,
            goal,
            cost: Box::new(unit_cost),
            expanded: Cell::new(0),
        }
    }

    /// Charge each step by the square it lands on.
    pub fn with_cost<F>(mut self, cost: F) -> Self
    where
        F: Fn(Point) -> usize + 'm,
    {
        self.cost = Box::new(cost);
        self
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Number of states expanded so far.
    pub fn expanded(&self) -> usize {
        self.expanded.get()
    }
}

impl<'m, M> SearchProblem for PositionProblem<'m, M>
where
    M: Map,
{
    type State = Point;
    type Action = Direction;
    type Cost = usize;

    fn start_state(&self) -> Self::State {
        self.start
    }

    fn is_goal_state(&self, state: &Self::State) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Self::State) -> Vec<TransitionOf<Self>> {
        self.expanded.set(self.expanded.get() + 1);
        Direction::all()
            .map(|d| (d, state.step(d)))
            .filter(|(_, next)| self.map.is_traversable(*next))
            .map(|(d, next)| Transition::new(next, d, (self.cost)(next)))
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Self::Action]) -> Self::Cost {
        let mut location = self.start;
        let mut total = 0;
        for direction in actions {
            location = location.step(*direction);
            if !self.map.is_traversable(location) {
                return ILLEGAL_COST;
            }
            total += (self.cost)(location);
        }
        total
    }
}

/// Position on the map, along with which corners have been reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CornersState {
    pub position: Point,
    pub visited: [bool; 4],
}

/// Visit all four corners of a map.
#[derive(Debug)]
pub struct CornersProblem<'m, M> {
    map: &'m M,
    start: Point,
    corners: [Point; 4],
    expanded: Cell<usize>,
}

impl<'m, M> CornersProblem<'m, M>
where
    M: Map,
{
    pub fn new(map: &'m M, start: Point, corners: [Point; 4]) -> Self {
        Self {
            map,
            start,
            corners,
            expanded: Cell::new(0),
        }
    }

    pub fn corners(&self) -> &[Point; 4] {
        &self.corners
    }

    /// Number of states expanded so far.
    pub fn expanded(&self) -> usize {
        self.expanded.get()
    }

    fn arrive(&self, position: Point, visited: [bool; 4]) -> CornersState {
        let mut visited = visited;
        for (flag, corner) in visited.iter_mut().zip(self.corners.iter()) {
            *flag |= *corner == position;
        }
        CornersState { position, visited }
    }
}

impl<'m, M> SearchProblem for CornersProblem<'m, M>
where
    M: Map,
{
    type State = CornersState;
    type Action = Direction;
    type Cost = usize;

    fn start_state(&self) -> Self::State {
        self.arrive(self.start, [false; 4])
    }

    fn is_goal_state(&self, state: &Self::State) -> bool {
        state.visited.iter().all(|v| *v)
    }

    fn successors(&self, state: &Self::State) -> Vec<TransitionOf<Self>> {
        self.expanded.set(self.expanded.get() + 1);
        Direction::all()
            .map(|d| (d, state.position.step(d)))
            .filter(|(_, next)| self.map.is_traversable(*next))
            .map(|(d, next)| Transition::new(self.arrive(next, state.visited), d, 1))
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Self::Action]) -> Self::Cost {
        let mut location = self.start;
        for direction in actions {
            location = location.step(*direction);
            if !self.map.is_traversable(location) {
                return ILLEGAL_COST;
            }
        }
        actions.len()
    }
}
