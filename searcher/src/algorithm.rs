//! Provides the building blocks for search algorithms

use std::default::Default;

use tracing::{debug, trace};

use self::cache::Visited;
use crate::frontier::{Frontier, PriorityQueue};
use crate::traits::{SearchHeuristic, SearchProblem};

pub(crate) mod astar;
pub(crate) mod basic;
pub(crate) mod cache;
pub(crate) mod ucs;

/// A frontier entry: a state, and the actions which reached it.
///
/// Each node carries its own copy of the path from the start state.
/// Nodes compare equal when their states are equal, which is how the
/// priority queue recognizes a better route to an already queued state.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A, C> {
    state: S,
    actions: Vec<A>,
    cost: C,
}

impl<S, A, C> SearchNode<S, A, C> {
    /// The node for the start of a search, with no actions and zero cost.
    pub fn start(state: S) -> Self
    where
        C: Default,
    {
        SearchNode {
            state,
            actions: Vec::new(),
            cost: C::default(),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn actions(&self) -> &[A] {
        &self.actions
    }

    /// Total cost of the path to this node.
    pub fn cost(&self) -> &C {
        &self.cost
    }

    pub fn into_actions(self) -> Vec<A> {
        self.actions
    }

    /// Extend this node's path by one action.
    fn child(&self, state: S, action: A, cost: C) -> Self
    where
        A: Clone,
    {
        let mut actions = Vec::with_capacity(self.actions.len() + 1);
        actions.extend_from_slice(&self.actions);
        actions.push(action);
        SearchNode {
            state,
            actions,
            cost,
        }
    }
}

impl<S, A, C> PartialEq for SearchNode<S, A, C>
where
    S: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

/// Counts expansions, reporting progress on long searches.
#[derive(Debug, Default)]
struct Progress {
    expanded: usize,
}

impl Progress {
    fn expand(&mut self, frontier: usize) {
        self.expanded += 1;
        if self.expanded % 10_000 == 0 {
            debug!(expanded = self.expanded, frontier, "still searching");
        }
    }
}

type UnitNode<P> = SearchNode<<P as SearchProblem>::State, <P as SearchProblem>::Action, ()>;

/// Graph search which ignores costs, in the order set by the frontier.
pub(crate) fn explore<P, F>(problem: &P, mut frontier: F) -> Vec<P::Action>
where
    P: SearchProblem + ?Sized,
    F: Frontier<Item = UnitNode<P>>,
{
    let mut visited = Visited::default();
    let mut progress = Progress::default();

    frontier.push(SearchNode::start(problem.start_state()));

    while let Some(node) = frontier.pop() {
        if problem.is_goal_state(node.state()) {
            debug!(
                expanded = progress.expanded,
                depth = node.actions.len(),
                "goal reached"
            );
            return node.into_actions();
        }

        if visited.check(node.state()) {
            trace!(state = ?node.state(), depth = node.actions.len(), "expanding");
            for transition in problem.successors(node.state()) {
                frontier.push(node.child(transition.state, transition.action, ()));
            }
            progress.expand(frontier.len());
        }
    }

    debug!(
        expanded = progress.expanded,
        visited = visited.len(),
        "frontier exhausted without reaching a goal"
    );
    Vec::new()
}

/// Best-first graph search ordered by path cost plus heuristic estimate.
///
/// Path cost is always taken from [SearchProblem::cost_of_actions] on the
/// whole path, never accumulated from step costs.
pub(crate) fn best_first<P, H>(problem: &P, heuristic: &H) -> Vec<P::Action>
where
    P: SearchProblem + ?Sized,
    H: SearchHeuristic<P> + ?Sized,
{
    let mut visited = Visited::default();
    let mut progress = Progress::default();
    let mut frontier = PriorityQueue::new();

    frontier.push(
        SearchNode::start(problem.start_state()),
        P::Cost::default(),
    );

    while let Some((node, priority)) = frontier.pop_with_priority() {
        if problem.is_goal_state(node.state()) {
            debug!(
                expanded = progress.expanded,
                depth = node.actions.len(),
                cost = ?node.cost(),
                "goal reached"
            );
            return node.into_actions();
        }

        if visited.check(node.state()) {
            trace!(state = ?node.state(), cost = ?node.cost(), ?priority, "expanding");
            for transition in problem.successors(node.state()) {
                let mut child =
                    node.child(transition.state, transition.action, P::Cost::default());
                child.cost = problem.cost_of_actions(child.actions());
                let estimate = child.cost + heuristic.estimate(child.state(), problem);
                frontier.update(child, estimate);
            }
            progress.expand(frontier.len());
        }
    }

    debug!(
        expanded = progress.expanded,
        visited = visited.len(),
        "frontier exhausted without reaching a goal"
    );
    Vec::new()
}

/// Follow a sequence of actions from the start state of a problem.
///
/// Each action is matched against the transitions the problem offers
/// from the current state. Returns the final state, or `None` if an
/// action is not legal where it is taken.
pub fn replay<P>(problem: &P, actions: &[P::Action]) -> Option<P::State>
where
    P: SearchProblem + ?Sized,
    P::Action: PartialEq,
{
    let mut state = problem.start_state();
    for action in actions {
        state = problem
            .successors(&state)
            .into_iter()
            .find(|t| &t.action == action)?
            .state;
    }
    Some(state)
}

#[cfg(test)]
pub(crate) mod helpers {
    use std::cell::RefCell;
    use std::collections::HashSet;

    use crate::traits::{SearchProblem, Transition, TransitionOf};

    pub(crate) type Edge = (&'static str, &'static str, &'static str, usize);

    /// A problem over an explicit directed graph.
    ///
    /// Edges are (from, action, to, cost), and successors are offered in
    /// the order the edges were given.
    #[derive(Debug)]
    pub(crate) struct GraphProblem {
        start: &'static str,
        goals: HashSet<&'static str>,
        edges: Vec<Edge>,
        pub(crate) expanded: RefCell<Vec<&'static str>>,
    }

    impl GraphProblem {
        pub(crate) fn new(start: &'static str, goals: &[&'static str], edges: &[Edge]) -> Self {
            Self {
                start,
                goals: goals.iter().cloned().collect(),
                edges: edges.to_vec(),
                expanded: RefCell::new(Vec::new()),
            }
        }

        /// States {A, B, C, D}, where the short route is the expensive one.
        pub(crate) fn diamond() -> Self {
            Self::new(
                "A",
                &["D"],
                &[
                    ("A", "right", "B", 1),
                    ("B", "right", "D", 10),
                    ("A", "down", "C", 5),
                    ("C", "right", "D", 1),
                ],
            )
        }

        pub(crate) fn expansions(&self) -> usize {
            self.expanded.borrow().len()
        }
    }

    impl SearchProblem for GraphProblem {
        type State = &'static str;
        type Action = &'static str;
        type Cost = usize;

        fn start_state(&self) -> Self::State {
            self.start
        }

        fn is_goal_state(&self, state: &Self::State) -> bool {
            self.goals.contains(state)
        }

        fn successors(&self, state: &Self::State) -> Vec<TransitionOf<Self>> {
            self.expanded.borrow_mut().push(*state);
            self.edges
                .iter()
                .filter(|(from, _, _, _)| from == state)
                .map(|&(_, action, to, cost)| Transition::new(to, action, cost))
                .collect()
        }

        fn cost_of_actions(&self, actions: &[Self::Action]) -> Self::Cost {
            let mut state = self.start;
            let mut total = 0;
            for action in actions {
                let edge = self
                    .edges
                    .iter()
                    .find(|(from, a, _, _)| *from == state && a == action)
                    .expect("illegal action");
                state = edge.2;
                total += edge.3;
            }
            total
        }
    }
}

#[cfg(test)]
mod test {
    use super::helpers::GraphProblem;
    use super::*;
    use crate::errors::not_implemented;
    use crate::traits::{Transition, TransitionOf};

    #[test]
    fn replay_follows_actions() {
        let problem = GraphProblem::diamond();
        assert_eq!(replay(&problem, &["down", "right"]), Some("D"));
        assert_eq!(replay(&problem, &[]), Some("A"));
    }

    #[test]
    fn replay_rejects_illegal_actions() {
        let problem = GraphProblem::diamond();
        assert_eq!(replay(&problem, &["down", "down"]), None);
    }

    #[test]
    fn child_copies_path() {
        let start: SearchNode<char, char, u32> = SearchNode::start('s');
        let a = start.child('a', 'x', 1);
        let b = a.child('b', 'y', 2);

        assert!(start.actions().is_empty());
        assert_eq!(a.actions(), &['x']);
        assert_eq!(b.actions(), &['x', 'y']);
        assert_eq!(*b.cost(), 2);
    }

    #[test]
    fn nodes_equal_by_state() {
        let a: SearchNode<char, char, u32> = SearchNode::start('s').child('a', 'x', 1);
        let b = SearchNode::start('t').child('a', 'y', 9);
        assert_eq!(a, b);
    }

    struct NoCost;

    impl SearchProblem for NoCost {
        type State = u8;
        type Action = u8;
        type Cost = u32;

        fn start_state(&self) -> Self::State {
            0
        }

        fn is_goal_state(&self, state: &Self::State) -> bool {
            *state == 2
        }

        fn successors(&self, state: &Self::State) -> Vec<TransitionOf<Self>> {
            vec![Transition::new(state + 1, 1, 1)]
        }

        fn cost_of_actions(&self, _actions: &[Self::Action]) -> Self::Cost {
            not_implemented("cost_of_actions")
        }
    }

    #[test]
    fn unit_search_skips_costs() {
        assert_eq!(crate::bfs(&NoCost), vec![1, 1]);
    }

    #[test]
    #[should_panic(expected = "Method not implemented: cost_of_actions")]
    fn missing_method_aborts_search() {
        crate::ucs(&NoCost);
    }
}
