//! Generalized graph search algorithms.
//!
//! To use these search algorithms, implement [SearchProblem] for your
//! problem, then call one of [dfs], [bfs], [ucs] or [astar]. Each returns
//! the list of actions which leads from the start state to a goal, or an
//! empty list when the start is already a goal or no goal can be reached.

pub mod algorithm;
mod errors;
pub mod frontier;
mod traits;

pub use errors::not_implemented;
pub use errors::ProblemError;
pub use traits::Cost;
pub use traits::NullHeuristic;
pub use traits::SearchHeuristic;
pub use traits::SearchProblem;
pub use traits::Transition;
pub use traits::TransitionOf;

pub use algorithm::astar::a_star_search;
pub use algorithm::basic::breadth_first_search;
pub use algorithm::basic::depth_first_search;
pub use algorithm::replay;
pub use algorithm::ucs::uniform_cost_search;
pub use algorithm::SearchNode;

// Abbreviations
pub use algorithm::astar::a_star_search as astar;
pub use algorithm::basic::breadth_first_search as bfs;
pub use algorithm::basic::depth_first_search as dfs;
pub use algorithm::ucs::uniform_cost_search as ucs;
