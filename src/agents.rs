//! Pick a search algorithm and heuristic by name, and run them on a layout.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use lazy_static::lazy_static;
use tracing::{info, warn};

use geometry::coord2d::heuristics::{corners_heuristic, euclidean_heuristic, manhattan_heuristic};
use geometry::coord2d::layout::Layout;
use geometry::coord2d::map::Map;
use geometry::coord2d::problems::{CornersProblem, PositionProblem};
use geometry::coord2d::{Direction, Point};
use searcher::{NullHeuristic, SearchHeuristic, SearchProblem};

use crate::AppError;

/// One of the graph search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    AStar,
}

/// Heuristics which can be handed to A*.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    Null,
    Manhattan,
    Euclidean,
    Corners,
}

/// The kinds of problem which can be posed on a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemKind {
    /// Reach a single goal square.
    Position,

    /// Visit all four corners.
    Corners,
}

lazy_static! {
    static ref ALGORITHMS: HashMap<&'static str, Algorithm> = {
        let mut a = HashMap::new();
        a.insert("depthFirstSearch", Algorithm::DepthFirst);
        a.insert("dfs", Algorithm::DepthFirst);
        a.insert("breadthFirstSearch", Algorithm::BreadthFirst);
        a.insert("bfs", Algorithm::BreadthFirst);
        a.insert("uniformCostSearch", Algorithm::UniformCost);
        a.insert("ucs", Algorithm::UniformCost);
        a.insert("aStarSearch", Algorithm::AStar);
        a.insert("astar", Algorithm::AStar);
        a
    };
    static ref HEURISTICS: HashMap<&'static str, Heuristic> = {
        let mut h = HashMap::new();
        h.insert("nullHeuristic", Heuristic::Null);
        h.insert("null", Heuristic::Null);
        h.insert("manhattanHeuristic", Heuristic::Manhattan);
        h.insert("manhattan", Heuristic::Manhattan);
        h.insert("euclideanHeuristic", Heuristic::Euclidean);
        h.insert("euclidean", Heuristic::Euclidean);
        h.insert("cornersHeuristic", Heuristic::Corners);
        h.insert("corners", Heuristic::Corners);
        h
    };
}

impl Algorithm {
    /// Run this algorithm. The heuristic is only consulted by A*.
    pub fn run<P, H>(self, problem: &P, heuristic: &H) -> Vec<P::Action>
    where
        P: SearchProblem,
        H: SearchHeuristic<P> + ?Sized,
    {
        match self {
            Algorithm::DepthFirst => searcher::dfs(problem),
            Algorithm::BreadthFirst => searcher::bfs(problem),
            Algorithm::UniformCost => searcher::ucs(problem),
            Algorithm::AStar => searcher::astar(problem, heuristic),
        }
    }
}

impl FromStr for Algorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALGORITHMS
            .get(s)
            .cloned()
            .ok_or_else(|| AppError::UnknownAlgorithm(s.to_string()))
    }
}

impl FromStr for Heuristic {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HEURISTICS
            .get(s)
            .cloned()
            .ok_or_else(|| AppError::UnknownHeuristic(s.to_string()))
    }
}

impl FromStr for ProblemKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "position" => Ok(ProblemKind::Position),
            "corners" => Ok(ProblemKind::Corners),
            _ => Err(AppError::UnknownProblem(s.to_string())),
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProblemKind::Position => write!(f, "position"),
            ProblemKind::Corners => write!(f, "corners"),
        }
    }
}

/// What to search for, and how.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub algorithm: Algorithm,
    pub heuristic: Heuristic,
    pub problem: ProblemKind,

    /// Goal for position problems. Defaults to the only piece of food,
    /// or (1, 1) when there isn't exactly one.
    pub goal: Option<Point>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::DepthFirst,
            heuristic: Heuristic::Null,
            problem: ProblemKind::Position,
            goal: None,
        }
    }
}

/// The outcome of a search.
#[derive(Debug, Clone)]
pub struct Solution {
    pub actions: Vec<Direction>,
    pub cost: usize,
    pub expanded: usize,
    pub elapsed: Duration,

    /// Whether the actions lead to a goal. An empty plan is a solution
    /// only when the search started on a goal.
    pub reached_goal: bool,
}

/// Pose the problem described by `options` on the layout, and search it.
pub fn solve(layout: &Layout, options: &SearchOptions) -> Result<Solution, AppError> {
    if options.algorithm != Algorithm::AStar && options.heuristic != Heuristic::Null {
        warn!(
            heuristic = ?options.heuristic,
            algorithm = ?options.algorithm,
            "Heuristic is only used by A*, ignoring it"
        );
    }

    match options.problem {
        ProblemKind::Position => solve_position(layout, options),
        ProblemKind::Corners => solve_corners(layout, options),
    }
}

fn position_goal(layout: &Layout, options: &SearchOptions) -> Point {
    match (options.goal, layout.food()) {
        (Some(goal), _) => goal,
        (None, [food]) => *food,
        (None, _) => Point::new(1, 1),
    }
}

fn solve_position(layout: &Layout, options: &SearchOptions) -> Result<Solution, AppError> {
    let goal = position_goal(layout, options);
    if !layout.is_traversable(goal) {
        return Err(AppError::GoalNotTraversable(goal));
    }

    let problem = PositionProblem::new(layout, layout.start(), goal);
    let heuristic: Box<dyn SearchHeuristic<PositionProblem<Layout>>> = match options.heuristic {
        Heuristic::Null => Box::new(NullHeuristic),
        Heuristic::Manhattan => Box::new(manhattan_heuristic::<Layout>),
        Heuristic::Euclidean => Box::new(euclidean_heuristic::<Layout>),
        Heuristic::Corners => {
            return Err(AppError::HeuristicNotApplicable(
                options.heuristic,
                options.problem,
            ))
        }
    };

    info!(start = %layout.start(), %goal, "Searching for a position");
    let (actions, elapsed) = timed(|| options.algorithm.run(&problem, heuristic.as_ref()));
    Ok(summarize(&problem, actions, elapsed, problem.expanded()))
}

fn solve_corners(layout: &Layout, options: &SearchOptions) -> Result<Solution, AppError> {
    let problem = CornersProblem::new(layout, layout.start(), layout.corners());
    let heuristic: Box<dyn SearchHeuristic<CornersProblem<Layout>>> = match options.heuristic {
        Heuristic::Null => Box::new(NullHeuristic),
        Heuristic::Corners => Box::new(corners_heuristic::<Layout>),
        Heuristic::Manhattan | Heuristic::Euclidean => {
            return Err(AppError::HeuristicNotApplicable(
                options.heuristic,
                options.problem,
            ))
        }
    };

    info!(start = %layout.start(), "Searching for all four corners");
    let (actions, elapsed) = timed(|| options.algorithm.run(&problem, heuristic.as_ref()));
    Ok(summarize(&problem, actions, elapsed, problem.expanded()))
}

fn timed<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

fn summarize<P>(
    problem: &P,
    actions: Vec<Direction>,
    elapsed: Duration,
    expanded: usize,
) -> Solution
where
    P: SearchProblem<Action = Direction, Cost = usize>,
{
    let reached_goal = searcher::replay(problem, &actions)
        .map(|end| problem.is_goal_state(&end))
        .unwrap_or(false);
    if !reached_goal && !actions.is_empty() {
        warn!(steps = actions.len(), "Plan does not lead to a goal");
    }

    Solution {
        cost: problem.cost_of_actions(&actions),
        actions,
        expanded,
        elapsed,
        reached_goal,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn layout(source: &str) -> Layout {
        source.parse().unwrap()
    }

    fn options(algorithm: Algorithm, heuristic: Heuristic, problem: ProblemKind) -> SearchOptions {
        SearchOptions {
            algorithm,
            heuristic,
            problem,
            goal: None,
        }
    }

    #[test]
    fn names() {
        assert_eq!("dfs".parse::<Algorithm>().unwrap(), Algorithm::DepthFirst);
        assert_eq!(
            "breadthFirstSearch".parse::<Algorithm>().unwrap(),
            Algorithm::BreadthFirst
        );
        assert_eq!("ucs".parse::<Algorithm>().unwrap(), Algorithm::UniformCost);
        assert_eq!("aStarSearch".parse::<Algorithm>().unwrap(), Algorithm::AStar);
        assert_eq!(
            "manhattanHeuristic".parse::<Heuristic>().unwrap(),
            Heuristic::Manhattan
        );
        assert_eq!("corners".parse::<ProblemKind>().unwrap(), ProblemKind::Corners);

        assert!(matches!(
            "greedy".parse::<Algorithm>(),
            Err(AppError::UnknownAlgorithm(_))
        ));
        assert!(matches!(
            "chebyshev".parse::<Heuristic>(),
            Err(AppError::UnknownHeuristic(_))
        ));
    }

    #[test]
    fn every_algorithm_reaches_the_food() {
        let maze = layout(include_str!("../layouts/smallMaze.lay"));
        for algorithm in &[
            Algorithm::DepthFirst,
            Algorithm::BreadthFirst,
            Algorithm::UniformCost,
            Algorithm::AStar,
        ] {
            let solution = solve(
                &maze,
                &options(*algorithm, Heuristic::Null, ProblemKind::Position),
            )
            .unwrap();
            assert!(solution.reached_goal, "{:?} missed the goal", algorithm);
            assert_eq!(solution.cost, solution.actions.len());
            assert!(solution.expanded > 0);
        }
    }

    #[test]
    fn astar_with_manhattan_is_optimal() {
        let maze = layout(include_str!("../layouts/smallMaze.lay"));
        let solution = solve(
            &maze,
            &options(Algorithm::AStar, Heuristic::Manhattan, ProblemKind::Position),
        )
        .unwrap();
        assert_eq!(solution.cost, 16);
    }

    #[test]
    fn corners() {
        let maze = layout(include_str!("../layouts/tinyCorners.lay"));
        let ucs = solve(
            &maze,
            &options(Algorithm::UniformCost, Heuristic::Null, ProblemKind::Corners),
        )
        .unwrap();
        let astar = solve(
            &maze,
            &options(Algorithm::AStar, Heuristic::Corners, ProblemKind::Corners),
        )
        .unwrap();

        assert!(ucs.reached_goal);
        assert!(astar.reached_goal);
        assert_eq!(ucs.cost, astar.cost);
        assert!(astar.expanded <= ucs.expanded);
    }

    #[test]
    fn explicit_goal() {
        let maze = layout(include_str!("../layouts/tinyMaze.lay"));
        let mut opts = options(Algorithm::BreadthFirst, Heuristic::Null, ProblemKind::Position);
        opts.goal = Some(Point::new(1, 1));

        let solution = solve(&maze, &opts).unwrap();
        assert_eq!(solution.actions, vec![Direction::West; 4]);
    }

    #[test]
    fn start_on_goal() {
        let maze = layout("%%%%\n%P %\n%%%%");
        let mut opts = options(Algorithm::UniformCost, Heuristic::Null, ProblemKind::Position);
        opts.goal = Some(Point::new(1, 1));

        let solution = solve(&maze, &opts).unwrap();
        assert!(solution.actions.is_empty());
        assert!(solution.reached_goal);
        assert_eq!(solution.expanded, 0);
    }

    #[test]
    fn no_path() {
        let maze = layout("%%%%%%%\n%P  % %\n%   % %\n%%%%%%%");
        let mut opts = options(Algorithm::AStar, Heuristic::Euclidean, ProblemKind::Position);
        opts.goal = Some(Point::new(5, 2));

        let solution = solve(&maze, &opts).unwrap();
        assert!(solution.actions.is_empty());
        assert!(!solution.reached_goal);
        assert_eq!(solution.expanded, 6);
    }

    #[test]
    fn rejected_options() {
        let maze = layout(include_str!("../layouts/tinyMaze.lay"));

        let mismatched = options(Algorithm::AStar, Heuristic::Corners, ProblemKind::Position);
        assert!(matches!(
            solve(&maze, &mismatched),
            Err(AppError::HeuristicNotApplicable(Heuristic::Corners, ProblemKind::Position))
        ));

        let mismatched = options(Algorithm::AStar, Heuristic::Manhattan, ProblemKind::Corners);
        assert!(matches!(
            solve(&maze, &mismatched),
            Err(AppError::HeuristicNotApplicable(_, ProblemKind::Corners))
        ));

        let mut walled = options(Algorithm::BreadthFirst, Heuristic::Null, ProblemKind::Position);
        walled.goal = Some(Point::new(0, 0));
        assert!(matches!(
            solve(&maze, &walled),
            Err(AppError::GoalNotTraversable(_))
        ));
    }
}
