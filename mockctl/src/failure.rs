/// A test failure detected by a [`Controller`](crate::Controller).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Failure {
    /// A call matched no registered expectation.
    #[error("unexpected call to {method}{args}{}", list_registered(.registered))]
    UnexpectedCall {
        method: &'static str,
        args: String,
        /// Expectations registered on the same method, described for diagnosis.
        registered: Vec<String>,
    },
    /// An expectation was called fewer times than its cardinality requires.
    #[error(
        "missing call(s) to {method}{expected} registered at {location}: expected {times} call(s), got {calls}"
    )]
    UnfulfilledExpectation {
        method: &'static str,
        expected: String,
        times: String,
        calls: usize,
        location: String,
    },
    /// A configured return value does not have the type the double returns.
    #[error(
        "wrong return type for {method} registered at {location}: the double returns `{expected}` but `{configured}` was configured"
    )]
    ShapeMismatch {
        method: &'static str,
        expected: &'static str,
        configured: &'static str,
        location: String,
    },
    /// A value configured with `returns_once` was asked for a second time.
    #[error("{method} registered at {location} returns its value once but was called again")]
    ReturnedOnce {
        method: &'static str,
        location: String,
    },
    /// A behavior called the expectation it is running for on the same thread.
    #[error("{method} registered at {location} was called again from inside its own behavior")]
    ReentrantCall {
        method: &'static str,
        location: String,
    },
    /// An expectation without a return value matched, and its return type has no fallback.
    #[error(
        "{method} registered at {location} has no return value configured and `{output}` has no fallback"
    )]
    NoReturnValue {
        method: &'static str,
        output: &'static str,
        location: String,
    },
    /// A double was used after its controller finished.
    #[error("{method} was used after its controller finished")]
    Finished { method: &'static str },
}

impl Failure {
    pub fn method(&self) -> &'static str {
        match self {
            Failure::UnexpectedCall { method, .. }
            | Failure::UnfulfilledExpectation { method, .. }
            | Failure::ShapeMismatch { method, .. }
            | Failure::ReturnedOnce { method, .. }
            | Failure::ReentrantCall { method, .. }
            | Failure::NoReturnValue { method, .. }
            | Failure::Finished { method } => method,
        }
    }
}

fn list_registered(registered: &[String]) -> String {
    if registered.is_empty() {
        return "\n  no expectations are registered for this method".to_string();
    }
    registered
        .iter()
        .map(|expectation| format!("\n  {expectation}"))
        .collect()
}

/// Formats argument debug output as a parenthesized list.
pub(crate) fn parenthesize(debug: String) -> String {
    if debug.starts_with('(') {
        debug
    } else {
        format!("({debug})")
    }
}
