use std::fmt::Debug;
use std::panic::Location;
use std::sync::Arc;

use crate::controller::Inner;
use crate::ledger::{Args, ReceiverId};
use crate::{Call, Fallback, Fallbacks, Matcher};

/// The handle a double holds: its identity within a [`Controller`](crate::Controller).
///
/// Generated doubles keep one of these and delegate every method to
/// [`call_with`](Mock::call_with); their recorders delegate to [`expect`](Mock::expect).
/// A `Mock` does not keep the controller from verifying when the test drops it.
#[derive(Clone)]
pub struct Mock {
    inner: Arc<Inner>,
    receiver: ReceiverId,
    name: &'static str,
}

impl Mock {
    pub(crate) fn new(inner: Arc<Inner>, receiver: ReceiverId, name: &'static str) -> Self {
        Self {
            inner,
            receiver,
            name,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Registers an expected call of `method` with arguments accepted by `matcher`.
    #[track_caller]
    pub fn expect<I, O, B>(&self, method: &'static str, matcher: impl Into<Matcher<I>>) -> Call<I, O, B>
    where
        I: Debug + Send + 'static,
        O: 'static,
    {
        let id = self.inner.register::<I, O>(
            self.receiver,
            method,
            matcher.into(),
            Location::caller(),
        );
        Call::new(self.inner.clone(), id)
    }

    /// Records a call of `method` and returns what the matching expectation was given.
    ///
    /// Falls back to [`Fallback`] values when nothing was configured or nothing matched.
    #[track_caller]
    pub fn call<I, O>(&self, method: &'static str, args: I) -> O
    where
        I: Args,
        O: Fallback + 'static,
    {
        self.call_with(method, args, Fallbacks::value())
    }

    /// Like [`call`](Mock::call) with explicit fallbacks. A situation the
    /// fallbacks have no value for fails fatally.
    #[track_caller]
    pub fn call_with<I, O>(&self, method: &'static str, args: I, fallbacks: Fallbacks<O>) -> O
    where
        I: Args,
        O: 'static,
    {
        self.inner.call(self.receiver, method, args, fallbacks)
    }
}

impl Debug for Mock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mock")
            .field("name", &self.name)
            .field("receiver", &self.receiver.0)
            .finish()
    }
}
