pub use bfs::breadth_first_search;
pub use dfs::depth_first_search;

mod bfs {
    use crate::algorithm::explore;
    use crate::frontier::Queue;
    use crate::traits::SearchProblem;

    /// Breadth-first search: expand the shallowest nodes first.
    ///
    /// Finds the plan with the fewest actions, regardless of cost.
    /// Returns an empty plan when the start is a goal, or when no goal
    /// can be reached.
    pub fn breadth_first_search<P>(problem: &P) -> Vec<P::Action>
    where
        P: SearchProblem + ?Sized,
    {
        let _span = tracing::debug_span!("bfs").entered();
        explore(problem, Queue::new())
    }
}

mod dfs {
    use crate::algorithm::explore;
    use crate::frontier::Stack;
    use crate::traits::SearchProblem;

    /// Depth-first search: expand the deepest nodes first.
    ///
    /// Finds some plan when one exists in a finite state space, with no
    /// guarantee about its length or cost.
    pub fn depth_first_search<P>(problem: &P) -> Vec<P::Action>
    where
        P: SearchProblem + ?Sized,
    {
        let _span = tracing::debug_span!("dfs").entered();
        explore(problem, Stack::new())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::helpers::GraphProblem;
    use crate::algorithm::replay;

    #[test]
    fn bfs_fewest_actions() {
        let problem = GraphProblem::diamond();
        assert_eq!(breadth_first_search(&problem), vec!["right", "right"]);
    }

    #[test]
    fn dfs_reaches_goal() {
        let problem = GraphProblem::diamond();
        let plan = depth_first_search(&problem);
        assert!(!plan.is_empty());
        assert_eq!(replay(&problem, &plan), Some("D"));
    }

    #[test]
    fn dfs_follows_last_successor() {
        // The stack pops the most recently pushed successor first.
        let problem = GraphProblem::diamond();
        assert_eq!(depth_first_search(&problem), vec!["down", "right"]);
        assert_eq!(*problem.expanded.borrow(), vec!["A", "C"]);
    }

    #[test]
    fn start_is_goal() {
        let problem = GraphProblem::new("A", &["A"], &[("A", "right", "B", 1)]);
        assert!(breadth_first_search(&problem).is_empty());
        assert!(depth_first_search(&problem).is_empty());
        assert_eq!(problem.expansions(), 0);
    }

    #[test]
    fn unreachable_goal() {
        let problem = GraphProblem::new(
            "A",
            &["Z"],
            &[
                ("A", "go", "B", 1),
                ("B", "go", "C", 1),
                ("C", "back", "A", 1),
                ("B", "back", "A", 1),
            ],
        );
        assert!(breadth_first_search(&problem).is_empty());
        assert_eq!(problem.expansions(), 3);

        assert!(depth_first_search(&problem).is_empty());
        assert_eq!(problem.expansions(), 6);
    }

    #[test]
    fn bfs_expands_each_state_once() {
        // B is generated twice before it is expanded, but only expanded once.
        let problem = GraphProblem::new(
            "A",
            &["E"],
            &[
                ("A", "x", "B", 1),
                ("A", "y", "C", 1),
                ("C", "x", "B", 1),
                ("B", "x", "D", 1),
                ("D", "x", "E", 1),
            ],
        );
        let plan = breadth_first_search(&problem);
        assert_eq!(plan, vec!["x", "x", "x"]);
        assert_eq!(*problem.expanded.borrow(), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn bfs_shortest_on_longer_chain() {
        let problem = GraphProblem::new(
            "S",
            &["G"],
            &[
                ("S", "long", "A", 1),
                ("A", "long", "B", 1),
                ("B", "long", "G", 1),
                ("S", "short", "C", 7),
                ("C", "short", "G", 7),
            ],
        );
        assert_eq!(breadth_first_search(&problem), vec!["short", "short"]);
    }
}
