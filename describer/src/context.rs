use std::any::Any;
use std::fmt::{self, Debug};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::Error;

/// Cancellation, deadline and request-scoped values handed to a generator.
///
/// Derived contexts observe the cancellation of their parents. Two contexts
/// are equal only if one is a clone of the other.
#[derive(Clone)]
pub struct Context {
    inner: Arc<Inner>,
}

struct Inner {
    parent: Option<Context>,
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
    value: Option<(&'static str, Arc<dyn Any + Send + Sync>)>,
}

/// Cancels the context returned with it by [`Context::with_cancel`].
#[derive(Clone, Debug)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

impl Context {
    /// The root context: never cancelled, no deadline, no values.
    pub fn background() -> Self {
        Self::new(None, None, None)
    }

    pub fn with_cancel(&self) -> (Self, CancelHandle) {
        let child = self.child(self.deadline(), None);
        let handle = CancelHandle {
            cancelled: child.inner.cancelled.clone(),
        };
        (child, handle)
    }

    /// A child context that expires at `deadline`, or earlier if the parent does.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let deadline = match self.deadline() {
            Some(parent) if parent < deadline => parent,
            _ => deadline,
        };
        self.child(Some(deadline), None)
    }

    pub fn with_value<T: Any + Send + Sync>(&self, key: &'static str, value: T) -> Self {
        self.child(self.deadline(), Some((key, Arc::new(value))))
    }

    pub fn is_cancelled(&self) -> bool {
        let mut context = Some(self);
        while let Some(current) = context {
            if current.inner.cancelled.load(Ordering::SeqCst) {
                return true;
            }
            context = current.inner.parent.as_ref();
        }
        false
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.inner.deadline
    }

    /// The nearest value stored under `key`, if it has type `T`.
    pub fn value<T: Any>(&self, key: &str) -> Option<&T> {
        let mut context = Some(self);
        while let Some(current) = context {
            if let Some((stored, value)) = &current.inner.value {
                if *stored == key {
                    return value.downcast_ref();
                }
            }
            context = current.inner.parent.as_ref();
        }
        None
    }

    /// Why this context is done, or `None` while it is live.
    pub fn err(&self) -> Option<Error> {
        if self.is_cancelled() {
            return Some(Error::Cancelled);
        }
        match self.deadline() {
            Some(deadline) if Instant::now() >= deadline => Some(Error::DeadlineExceeded),
            _ => None,
        }
    }

    fn new(
        parent: Option<Context>,
        deadline: Option<Instant>,
        value: Option<(&'static str, Arc<dyn Any + Send + Sync>)>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                parent,
                cancelled: Default::default(),
                deadline,
                value,
            }),
        }
    }

    fn child(
        &self,
        deadline: Option<Instant>,
        value: Option<(&'static str, Arc<dyn Any + Send + Sync>)>,
    ) -> Self {
        Self::new(Some(self.clone()), deadline, value)
    }

    fn keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        let mut context = Some(self);
        while let Some(current) = context {
            if let Some((key, _)) = &current.inner.value {
                keys.push(*key);
            }
            context = current.inner.parent.as_ref();
        }
        keys
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::background()
    }
}

impl PartialEq for Context {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Context {}

impl Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("cancelled", &self.is_cancelled())
            .field("deadline", &self.deadline())
            .field("values", &self.keys())
            .finish()
    }
}
