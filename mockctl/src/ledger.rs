use std::any::Any;
use std::cell::RefCell;
use std::fmt::{self, Debug};
use std::panic::Location;
use std::sync::Arc;

use parking_lot::ReentrantMutex;

use crate::failure::parenthesize;
use crate::rule::{ArgsMatcher, Respond, Unset};
use crate::{Failure, Times};

/// Position of an expectation in registration order, tagged with the ledger it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpectationId {
    ledger: u64,
    index: usize,
}

impl fmt::Display for ExpectationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// Identity of one double created from a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReceiverId(pub(crate) u32);

/// Arguments of a call, as seen by the ledger.
pub trait Args: Any + Debug + Send {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + Debug + Send> Args for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A behavior shared between the ledger and the calls running it.
///
/// The lock is reentrant so that a behavior calling its own expectation again
/// on the same thread finds it borrowed instead of deadlocking.
pub(crate) type SharedRespond = Arc<ReentrantMutex<RefCell<Box<dyn Respond>>>>;

fn shared(behavior: Box<dyn Respond>) -> SharedRespond {
    Arc::new(ReentrantMutex::new(RefCell::new(behavior)))
}

pub(crate) struct Expectation {
    pub(crate) id: ExpectationId,
    receiver: ReceiverId,
    method: &'static str,
    matcher: Box<dyn ArgsMatcher>,
    behavior: SharedRespond,
    times: Times,
    calls: usize,
    prerequisites: Vec<ExpectationId>,
    location: &'static Location<'static>,
    output: &'static str,
}

impl Expectation {
    fn is_exhausted(&self) -> bool {
        self.times.is_exhausted_by(self.calls)
    }

    fn is_satisfied(&self) -> bool {
        self.times.is_satisfied_by(self.calls)
    }

    fn signature(&self) -> String {
        format!("{}{}", self.method, parenthesize(self.matcher.describe()))
    }

    fn describe(&self, reason: &str) -> String {
        format!(
            "{} {} registered at {}, called {} of {} times: {reason}",
            self.id,
            self.signature(),
            self.location,
            self.calls,
            self.times,
        )
    }

    pub(crate) fn unfulfilled(&self) -> Failure {
        Failure::UnfulfilledExpectation {
            method: self.method,
            expected: parenthesize(self.matcher.describe()),
            times: self.times.to_string(),
            calls: self.calls,
            location: self.location.to_string(),
        }
    }
}

/// A single call received by a double.
pub(crate) struct Invocation<'a> {
    pub(crate) receiver: ReceiverId,
    pub(crate) method: &'static str,
    pub(crate) args: &'a dyn Args,
}

pub(crate) struct Matched {
    pub(crate) id: ExpectationId,
    pub(crate) behavior: SharedRespond,
    pub(crate) location: &'static Location<'static>,
    pub(crate) output: &'static str,
}

pub(crate) enum MatchResult {
    Matched(Matched),
    NoMatch(Failure),
}

/// Registered expectations of one controller, in registration order.
#[derive(Default)]
pub(crate) struct Ledger {
    id: u64,
    expectations: Vec<Expectation>,
}

impl Ledger {
    pub(crate) fn new(id: u64) -> Self {
        Self {
            id,
            expectations: Vec::new(),
        }
    }

    pub(crate) fn register(
        &mut self,
        receiver: ReceiverId,
        method: &'static str,
        matcher: Box<dyn ArgsMatcher>,
        output: &'static str,
        location: &'static Location<'static>,
    ) -> ExpectationId {
        let id = ExpectationId {
            ledger: self.id,
            index: self.expectations.len(),
        };
        self.expectations.push(Expectation {
            id,
            receiver,
            method,
            matcher,
            behavior: shared(Box::new(Unset)),
            times: Times::default(),
            calls: 0,
            prerequisites: Vec::new(),
            location,
            output,
        });
        id
    }

    pub(crate) fn get(&self, id: ExpectationId) -> Option<&Expectation> {
        if id.ledger != self.id {
            return None;
        }
        self.expectations.get(id.index)
    }

    fn get_mut(&mut self, id: ExpectationId) -> Option<&mut Expectation> {
        if id.ledger != self.id {
            return None;
        }
        self.expectations.get_mut(id.index)
    }

    /// Whether `id` was handed out by this ledger.
    pub(crate) fn owns(&self, id: ExpectationId) -> bool {
        self.get(id).is_some()
    }

    pub(crate) fn set_behavior(&mut self, id: ExpectationId, behavior: Box<dyn Respond>) {
        if let Some(expectation) = self.get_mut(id) {
            expectation.behavior = shared(behavior);
        }
    }

    pub(crate) fn set_times(&mut self, id: ExpectationId, times: Times) {
        if let Some(expectation) = self.get_mut(id) {
            expectation.times = times;
        }
    }

    pub(crate) fn add_prerequisite(&mut self, id: ExpectationId, prerequisite: ExpectationId) {
        if let Some(expectation) = self.get_mut(id) {
            if !expectation.prerequisites.contains(&prerequisite) {
                expectation.prerequisites.push(prerequisite);
            }
        }
    }

    fn waiting_on(&self, expectation: &Expectation) -> Option<ExpectationId> {
        expectation
            .prerequisites
            .iter()
            .copied()
            .find(|id| !self.get(*id).is_some_and(Expectation::is_satisfied))
    }

    /// Consumes the first eligible expectation accepting the invocation.
    ///
    /// The ledger is left untouched when nothing matches.
    pub(crate) fn find_match(&mut self, invocation: &Invocation<'_>) -> MatchResult {
        let found = self.expectations.iter().position(|expectation| {
            expectation.receiver == invocation.receiver
                && expectation.method == invocation.method
                && !expectation.is_exhausted()
                && self.waiting_on(expectation).is_none()
                && expectation.matcher.matches_any(invocation.args.as_any())
        });
        match found {
            Some(index) => {
                let expectation = &mut self.expectations[index];
                expectation.calls += 1;
                MatchResult::Matched(Matched {
                    id: expectation.id,
                    behavior: expectation.behavior.clone(),
                    location: expectation.location,
                    output: expectation.output,
                })
            }
            None => MatchResult::NoMatch(self.unexpected(invocation)),
        }
    }

    fn unexpected(&self, invocation: &Invocation<'_>) -> Failure {
        let registered = self
            .expectations
            .iter()
            .filter(|expectation| {
                expectation.receiver == invocation.receiver
                    && expectation.method == invocation.method
            })
            .map(|expectation| {
                if expectation.is_exhausted() {
                    expectation.describe("has already been called the maximum number of times")
                } else if let Some(prerequisite) = self.waiting_on(expectation) {
                    expectation.describe(&format!("waits for {prerequisite} to be satisfied"))
                } else {
                    expectation.describe("arguments do not match")
                }
            })
            .collect();
        Failure::UnexpectedCall {
            method: invocation.method,
            args: parenthesize(format!("{:?}", invocation.args)),
            registered,
        }
    }

    /// Expectations called fewer times than their cardinality requires.
    pub(crate) fn outstanding(&self) -> impl Iterator<Item = &Expectation> {
        self.expectations
            .iter()
            .filter(|expectation| !expectation.is_satisfied())
    }

    pub(crate) fn len(&self) -> usize {
        self.expectations.len()
    }
}
