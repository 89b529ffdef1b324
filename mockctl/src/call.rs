use std::iter::repeat;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::controller::Inner;
use crate::ledger::ExpectationId;
use crate::{Behavior, Times};

/// An expected call, returned by recorder methods to configure it.
pub struct Call<I, O, B> {
    inner: Arc<Inner>,
    id: ExpectationId,
    #[allow(clippy::type_complexity)]
    _phantom: PhantomData<fn() -> (I, O, B)>,
}

impl<I, O, B> Call<I, O, B> {
    pub(crate) fn new(inner: Arc<Inner>, id: ExpectationId) -> Self {
        Self {
            inner,
            id,
            _phantom: Default::default(),
        }
    }

    pub fn id(&self) -> ExpectationId {
        self.id
    }

    /// Expects the call `times` times, `1` by default. Accepts counts and ranges.
    pub fn times(self, times: impl Into<Times>) -> Self {
        let times = times.into();
        self.inner
            .update(|ledger| ledger.set_times(self.id, times));
        self
    }

    pub fn any_times(self) -> Self {
        self.times(Times::any())
    }

    /// Expects no call at all; any call is unexpected.
    pub fn never(self) -> Self {
        self.times(0)
    }

    /// Makes this call eligible only once `other` has been called often enough.
    pub fn after<I2, O2, B2>(self, other: &Call<I2, O2, B2>) -> Self {
        assert!(
            Arc::ptr_eq(&self.inner, &other.inner),
            "{} and {} belong to different controllers",
            self.id,
            other.id
        );
        self.inner
            .update(|ledger| ledger.add_prerequisite(self.id, other.id));
        self
    }
}

impl<I, O, B> Call<I, O, B>
where
    I: 'static,
    O: Send + 'static,
{
    /// Returns value with using a closure.
    /// Arguments of a method call are passed to the given closure.
    pub fn returns_with<T: Into<B>>(self, behavior: T) -> Self
    where
        B: Into<Behavior<I, O>>,
    {
        let behavior: Behavior<I, O> = behavior.into().into();
        self.inner
            .update(|ledger| ledger.set_behavior(self.id, Box::new(behavior)));
        self
    }

    /// Returns value once and expects exactly one call.
    pub fn returns_once(self, ret: O) -> Self {
        self.inner.update(|ledger| {
            ledger.set_behavior(self.id, Box::new(Behavior::<I, O>::Once(Some(ret))));
            ledger.set_times(self.id, Times::Exact(1));
        });
        self
    }
}

impl<I, O, B> Call<I, O, B>
where
    I: 'static,
    O: Clone + Send + 'static,
{
    /// This makes the mock returns the given constant value.
    /// This requires `Clone`. For returning not clone value, use `returns_once`.
    pub fn returns(self, ret: O) -> Self {
        let behavior = Behavior::<I, O>::Const(Box::new(repeat(ret)));
        self.inner
            .update(|ledger| ledger.set_behavior(self.id, Box::new(behavior)));
        self
    }
}
