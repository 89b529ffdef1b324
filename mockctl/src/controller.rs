use std::any::type_name;
use std::collections::HashSet;
use std::fmt::Debug;
use std::panic::Location;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::ledger::{Args, ExpectationId, Invocation, Ledger, MatchResult, ReceiverId};
use crate::rule::Output;
use crate::{ControllerConfig, Failure, Fallbacks, Matcher, Mock, PanicReporter, Reporter};

/// Tags the ledger of every controller so ids cannot cross controllers.
static LEDGERS: AtomicU64 = AtomicU64::new(1);

/// Owns the expectations of one test and reports what went wrong.
///
/// Clones share the same ledger. When the last clone is dropped the controller
/// verifies itself, so every double created from it is checked at the end of
/// the test without an explicit [`finish`](Controller::finish). Doubles do not
/// count as clones: a double captured by its own behavior does not keep the
/// controller from verifying.
#[derive(Clone)]
pub struct Controller {
    owner: Arc<Owner>,
}

struct Owner(Arc<Inner>);

impl Drop for Owner {
    fn drop(&mut self) {
        if self.0.config.verify_on_drop && !std::thread::panicking() {
            self.0.finish();
        }
    }
}

/// State shared by a controller and the doubles created from it.
pub(crate) struct Inner {
    ledger: Mutex<Ledger>,
    reporter: Box<dyn Reporter>,
    config: ControllerConfig,
    reported: Mutex<HashSet<ExpectationId>>,
    finished: AtomicBool,
    receivers: AtomicU32,
}

impl Controller {
    pub fn new() -> Self {
        Self::with_reporter(PanicReporter::default())
    }

    pub fn with_reporter(reporter: impl Reporter + 'static) -> Self {
        Self::with_config(ControllerConfig::default(), reporter)
    }

    pub fn with_config(config: ControllerConfig, reporter: impl Reporter + 'static) -> Self {
        let inner = Inner {
            ledger: Mutex::new(Ledger::new(LEDGERS.fetch_add(1, Ordering::Relaxed))),
            reporter: Box::new(reporter),
            config,
            reported: Default::default(),
            finished: AtomicBool::new(false),
            receivers: AtomicU32::new(0),
        };
        Self {
            owner: Arc::new(Owner(Arc::new(inner))),
        }
    }

    fn inner(&self) -> &Arc<Inner> {
        &self.owner.0
    }

    /// Creates the handle a double delegates its calls to.
    pub fn mock(&self, name: &'static str) -> Mock {
        let receiver = ReceiverId(self.inner().receivers.fetch_add(1, Ordering::Relaxed));
        Mock::new(self.inner().clone(), receiver, name)
    }

    /// Makes each expectation wait until the previous one is satisfied.
    ///
    /// # Panics
    ///
    /// When any of `ids` was registered with a different controller.
    pub fn in_order(&self, ids: impl IntoIterator<Item = ExpectationId>) {
        let ids: Vec<_> = ids.into_iter().collect();
        let mut ledger = self.inner().ledger.lock();
        let foreign: Vec<_> = ids
            .iter()
            .filter(|id| !ledger.owns(**id))
            .map(ToString::to_string)
            .collect();
        if !foreign.is_empty() {
            drop(ledger);
            panic!(
                "{} passed to in_order belong to a different controller",
                foreign.join(", ")
            );
        }
        for pair in ids.windows(2) {
            ledger.add_prerequisite(pair[1], pair[0]);
        }
    }

    /// Reports every expectation that has not been called often enough.
    ///
    /// Each unfulfilled expectation reaches the reporter once no matter how
    /// many times this is called.
    pub fn verify(&self) -> Result<(), Vec<Failure>> {
        self.inner().verify()
    }

    /// Whether every expectation has been called often enough.
    pub fn satisfied(&self) -> bool {
        self.inner().ledger.lock().outstanding().next().is_none()
    }

    /// Verifies and hands the collected failures to the reporter.
    ///
    /// Only the first call has any effect. Doubles used afterwards fail fatally.
    pub fn finish(&self) {
        self.inner().finish()
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("expectations", &self.inner().ledger.lock().len())
            .field("finished", &self.inner().finished.load(Ordering::SeqCst))
            .finish()
    }
}

impl Inner {
    #[track_caller]
    fn ensure_open(&self, method: &'static str) {
        if self.finished.load(Ordering::SeqCst) {
            let failure = Failure::Finished { method };
            tracing::error!(method, %failure, "double used after its controller finished");
            self.reporter.fatal(&failure);
        }
    }

    #[track_caller]
    pub(crate) fn register<I, O>(
        &self,
        receiver: ReceiverId,
        method: &'static str,
        matcher: Matcher<I>,
        location: &'static Location<'static>,
    ) -> ExpectationId
    where
        I: Debug + Send + 'static,
        O: 'static,
    {
        self.ensure_open(method);
        let id = self.ledger.lock().register(
            receiver,
            method,
            Box::new(matcher),
            type_name::<O>(),
            location,
        );
        tracing::debug!(method, expectation = %id, %location, "registered expectation");
        id
    }

    pub(crate) fn update(&self, f: impl FnOnce(&mut Ledger)) {
        f(&mut self.ledger.lock())
    }

    /// Matches a call against the ledger and produces its configured result.
    #[track_caller]
    pub(crate) fn call<I, O>(
        &self,
        receiver: ReceiverId,
        method: &'static str,
        args: I,
        fallbacks: Fallbacks<O>,
    ) -> O
    where
        I: Args,
        O: 'static,
    {
        self.ensure_open(method);
        let invocation = Invocation {
            receiver,
            method,
            args: &args,
        };
        // The ledger lock is released before any configured closure runs.
        let result = self.ledger.lock().find_match(&invocation);
        let matched = match result {
            MatchResult::Matched(matched) => matched,
            MatchResult::NoMatch(failure) => {
                tracing::warn!(method, %failure, "unexpected call");
                if self.config.fail_fast {
                    self.reporter.fatal(&failure);
                }
                // Without a value to hand back the call cannot continue.
                return match fallbacks.unexpected(failure.clone()) {
                    Ok(value) => {
                        self.reporter.error(&failure);
                        value
                    }
                    Err(failure) => self.reporter.fatal(&failure),
                };
            }
        };
        tracing::debug!(method, expectation = %matched.id, "matched call");
        let output = {
            let guard = matched.behavior.lock();
            // Only a call made from inside the same behavior finds it borrowed.
            let Ok(mut behavior) = guard.try_borrow_mut() else {
                let failure = Failure::ReentrantCall {
                    method,
                    location: matched.location.to_string(),
                };
                tracing::error!(method, %failure, "behavior called its own expectation");
                self.reporter.fatal(&failure)
            };
            let output = behavior.respond(args.as_any());
            output
        };
        match output {
            Output::Found(value) => match value.downcast::<O>() {
                Ok(value) => *value,
                Err(_) => {
                    let failure = Failure::ShapeMismatch {
                        method,
                        expected: type_name::<O>(),
                        configured: matched.output,
                        location: matched.location.to_string(),
                    };
                    tracing::error!(method, %failure, "configured return value has the wrong type");
                    self.reporter.fatal(&failure)
                }
            },
            Output::Zero => match fallbacks.zero() {
                Some(value) => value,
                None => {
                    let failure = Failure::NoReturnValue {
                        method,
                        output: type_name::<O>(),
                        location: matched.location.to_string(),
                    };
                    tracing::error!(method, %failure, "nothing to return");
                    self.reporter.fatal(&failure)
                }
            },
            Output::ErrorCalledOnce => {
                let failure = Failure::ReturnedOnce {
                    method,
                    location: matched.location.to_string(),
                };
                tracing::error!(method, %failure, "value returned once was asked for again");
                self.reporter.fatal(&failure)
            }
        }
    }

    fn verify(&self) -> Result<(), Vec<Failure>> {
        let outstanding: Vec<_> = self
            .ledger
            .lock()
            .outstanding()
            .map(|expectation| (expectation.id, expectation.unfulfilled()))
            .collect();
        if outstanding.is_empty() {
            return Ok(());
        }
        let mut reported = self.reported.lock();
        for (id, failure) in &outstanding {
            if reported.insert(*id) {
                tracing::warn!(method = failure.method(), %failure, "unfulfilled expectation");
                self.reporter.error(failure);
            }
        }
        Err(outstanding.into_iter().map(|(_, failure)| failure).collect())
    }

    fn finish(&self) {
        if self.finished.swap(true, Ordering::SeqCst) {
            return;
        }
        let _ = self.verify();
        self.reporter.finish();
    }
}
