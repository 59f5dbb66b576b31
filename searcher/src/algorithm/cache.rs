//! Bookkeeping for states which have already been expanded.

use std::collections::HashSet;
use std::default::Default;
use std::hash::Hash;

/// Records every state which a search has expanded.
#[derive(Debug)]
pub(crate) struct Visited<S> {
    states: HashSet<S>,
}

impl<S> Default for Visited<S>
where
    S: Eq + Hash,
{
    fn default() -> Self {
        Visited {
            states: HashSet::default(),
        }
    }
}

impl<S> Visited<S>
where
    S: Clone + Eq + Hash,
{
    /// Mark a state as expanded.
    ///
    /// Returns false when the state was already expanded, in which case
    /// the caller should skip it.
    pub(crate) fn check(&mut self, state: &S) -> bool {
        if self.states.contains(state) {
            return false;
        }
        self.states.insert(state.clone())
    }

    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn check_once() {
        let mut visited = Visited::default();
        assert!(visited.check(&"a"));
        assert!(visited.check(&"b"));
        assert!(!visited.check(&"a"));
        assert_eq!(visited.len(), 2);
    }
}
