use std::collections::{BTreeMap, HashMap};
use std::marker::PhantomData;

use crate::Failure;

/// Values a double hands back when it has nothing configured to return.
///
/// `zero` is used when an expectation matched but was given no return value.
/// `unexpected` is used when no expectation matched; the failure has already
/// been reported, so the value only needs to let the caller carry on.
pub trait Fallback: Sized {
    fn zero() -> Self;

    fn unexpected(failure: Failure) -> Self {
        let _ = failure;
        Self::zero()
    }
}

/// `Ok` of the zero value. See [`Fallbacks::result`] for returning the failure as `Err`.
impl<T: Fallback, E> Fallback for Result<T, E> {
    fn zero() -> Self {
        Ok(T::zero())
    }
}

/// What one call site returns when nothing configured applies.
///
/// A missing `zero` or `unexpected` turns the corresponding situation into a
/// fatal failure, because there is no value the call could return.
pub struct Fallbacks<O> {
    zero: Option<fn() -> O>,
    unexpected: Option<fn(Failure) -> O>,
}

impl<O> Fallbacks<O> {
    /// For return types without a [`Fallback`].
    pub fn none() -> Self {
        Self {
            zero: None,
            unexpected: None,
        }
    }

    pub(crate) fn zero(&self) -> Option<O> {
        self.zero.map(|zero| zero())
    }

    pub(crate) fn unexpected(&self, failure: Failure) -> Result<O, Failure> {
        match self.unexpected {
            Some(unexpected) => Ok(unexpected(failure)),
            None => Err(failure),
        }
    }
}

impl<O: Fallback> Fallbacks<O> {
    pub fn value() -> Self {
        Self {
            zero: Some(O::zero as fn() -> O),
            unexpected: Some(O::unexpected as fn(Failure) -> O),
        }
    }
}

impl<T: Fallback, E: From<Failure>> Fallbacks<Result<T, E>> {
    /// `Ok` of the zero value when nothing was configured, `Err` of the failure when nothing matched.
    pub fn result() -> Self {
        Self {
            zero: Some(<Result<T, E> as Fallback>::zero as fn() -> Result<T, E>),
            unexpected: Some(failure_as_err::<T, E> as fn(Failure) -> Result<T, E>),
        }
    }
}

fn failure_as_err<T, E: From<Failure>>(failure: Failure) -> Result<T, E> {
    Err(failure.into())
}

/// The richest [`Fallbacks`] for a return type, picked at the call site of a
/// generated double.
///
/// Results whose error converts from [`Failure`] get [`Fallbacks::result`],
/// other [`Fallback`] types get [`Fallbacks::value`], and everything else
/// gets [`Fallbacks::none`].
#[doc(hidden)]
#[macro_export]
macro_rules! fallbacks {
    ($output:ty) => {{
        #[allow(unused_imports)]
        use $crate::{SelectNone as _, SelectResult as _, SelectValue as _};
        (&&&$crate::Select::<$output>::new()).fallbacks()
    }};
}

#[doc(hidden)]
pub struct Select<O>(PhantomData<fn() -> O>);

impl<O> Select<O> {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

#[doc(hidden)]
pub trait SelectResult<O> {
    fn fallbacks(&self) -> Fallbacks<O>;
}

impl<T: Fallback, E: From<Failure>> SelectResult<Result<T, E>> for &&Select<Result<T, E>> {
    fn fallbacks(&self) -> Fallbacks<Result<T, E>> {
        Fallbacks::result()
    }
}

#[doc(hidden)]
pub trait SelectValue<O> {
    fn fallbacks(&self) -> Fallbacks<O>;
}

impl<O: Fallback> SelectValue<O> for &Select<O> {
    fn fallbacks(&self) -> Fallbacks<O> {
        Fallbacks::value()
    }
}

#[doc(hidden)]
pub trait SelectNone<O> {
    fn fallbacks(&self) -> Fallbacks<O>;
}

impl<O> SelectNone<O> for Select<O> {
    fn fallbacks(&self) -> Fallbacks<O> {
        Fallbacks::none()
    }
}

impl<T> Fallback for Option<T> {
    fn zero() -> Self {
        None
    }
}

impl<T> Fallback for Vec<T> {
    fn zero() -> Self {
        Vec::new()
    }
}

impl<K, V> Fallback for HashMap<K, V> {
    fn zero() -> Self {
        HashMap::new()
    }
}

impl<K, V> Fallback for BTreeMap<K, V> {
    fn zero() -> Self {
        BTreeMap::new()
    }
}

impl Fallback for &'static str {
    fn zero() -> Self {
        ""
    }
}

macro_rules! fallback_default {
    ($($ty:ty),*) => {
        $(
            impl Fallback for $ty {
                fn zero() -> Self {
                    Default::default()
                }
            }
        )*
    };
}

fallback_default!(
    (),
    bool,
    char,
    String,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64
);
