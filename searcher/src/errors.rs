use thiserror::Error;

/// Contract violations by a [SearchProblem](crate::SearchProblem) implementation.
///
/// These are programmer errors, not search outcomes, so they are raised
/// as panics and never returned from a search.
#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("Method not implemented: {0}")]
    MethodNotImplemented(&'static str),
}

/// Signal that a problem does not provide the named capability.
///
/// Use this as the body of a [SearchProblem](crate::SearchProblem) method
/// which a particular problem cannot support. Invoking it aborts the
/// current search.
pub fn not_implemented(method: &'static str) -> ! {
    panic!("{}", ProblemError::MethodNotImplemented(method))
}
