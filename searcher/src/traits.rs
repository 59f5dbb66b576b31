use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

/// Costs accumulated along a search path.
///
/// The default value is treated as zero cost. Costs must be totally
/// ordered so that they can be used as frontier priorities.
pub trait Cost: Copy + Ord + Add<Output = Self> + Default + Debug {}

impl<T> Cost for T where T: Copy + Ord + Add<Output = T> + Default + Debug {}

/// A single legal move out of a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<S, A, C> {
    /// The state reached by taking this transition.
    pub state: S,

    /// The action which produces this transition.
    pub action: A,

    /// The incremental cost of taking this action.
    pub cost: C,
}

impl<S, A, C> Transition<S, A, C> {
    pub fn new(state: S, action: A, cost: C) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }
}

/// Shorthand for the transitions produced by a problem.
pub type TransitionOf<P> = Transition<
    <P as SearchProblem>::State,
    <P as SearchProblem>::Action,
    <P as SearchProblem>::Cost,
>;

/// Describes a search problem to the search algorithms.
///
/// Implementations must provide every method. A problem which cannot
/// support one of them should call [crate::not_implemented] from that
/// method rather than returning a placeholder value.
pub trait SearchProblem {
    /// A configuration in the problem's state space.
    type State: Debug + Clone + Eq + Hash;

    /// A label for a single legal transition.
    type Action: Debug + Clone;

    /// Cost of a transition or a sequence of transitions.
    type Cost: Cost;

    /// The state the search begins from.
    fn start_state(&self) -> Self::State;

    /// Is this state a goal of the search?
    fn is_goal_state(&self, state: &Self::State) -> bool;

    /// All legal one-step transitions out of a state.
    ///
    /// The order of the returned transitions only affects how the
    /// algorithms break ties.
    fn successors(&self, state: &Self::State) -> Vec<TransitionOf<Self>>;

    /// Total cost of taking a sequence of actions from the start state.
    ///
    /// The actions must be legal moves, otherwise the result is up to
    /// the problem.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Self::Cost;
}

/// Estimates the remaining cost from a state to the nearest goal.
///
/// A* is only guaranteed to find the cheapest path when the estimate
/// never exceeds the true remaining cost.
pub trait SearchHeuristic<P>
where
    P: SearchProblem + ?Sized,
{
    fn estimate(&self, state: &P::State, problem: &P) -> P::Cost;
}

impl<P, F> SearchHeuristic<P> for F
where
    P: SearchProblem + ?Sized,
    F: Fn(&P::State, &P) -> P::Cost,
{
    fn estimate(&self, state: &P::State, problem: &P) -> P::Cost {
        self(state, problem)
    }
}

/// The trivial heuristic, which always estimates zero.
///
/// With this heuristic, A* is exactly uniform cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHeuristic;

impl<P> SearchHeuristic<P> for NullHeuristic
where
    P: SearchProblem + ?Sized,
{
    fn estimate(&self, _state: &P::State, _problem: &P) -> P::Cost {
        P::Cost::default()
    }
}
