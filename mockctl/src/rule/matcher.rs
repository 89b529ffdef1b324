use std::any::Any;
use std::fmt::{self, Debug};

/// An enum describes what arguments are expected
pub enum Matcher<I> {
    /// Any value
    Any,
    /// Never matches
    Never,
    /// Equal to the value
    Eq {
        value: I,
        partial_eq: fn(&I, &I) -> bool,
    },
    /// Accepted by a predicate
    Fn {
        predicate: Box<dyn Fn(&I) -> bool + Send + 'static>,
        description: &'static str,
    },
    /// Rejected by the inner matcher
    Not(Box<Matcher<I>>),
    /// One matcher per element of an argument tuple
    Composite(Box<dyn CompositeMatcher<I> + Send>),
}

#[doc(hidden)]
pub trait CompositeMatcher<I>: Debug {
    fn matches(&self, input: &I) -> bool;
}

impl<I> Matcher<I> {
    pub fn new_eq(value: I) -> Self
    where
        I: PartialEq,
    {
        Matcher::Eq {
            value,
            partial_eq: <I as PartialEq>::eq,
        }
    }

    /// Matches when `predicate` accepts the argument. `description` shows up in failure messages.
    pub fn func(
        description: &'static str,
        predicate: impl Fn(&I) -> bool + Send + 'static,
    ) -> Self {
        Matcher::Fn {
            predicate: Box::new(predicate),
            description,
        }
    }

    pub fn not(matcher: impl Into<Matcher<I>>) -> Self {
        Matcher::Not(Box::new(matcher.into()))
    }

    pub(crate) fn matches(&self, input: &I) -> bool {
        match self {
            Matcher::Any => true,
            Matcher::Never => false,
            Matcher::Eq { value, partial_eq } => partial_eq(value, input),
            Matcher::Fn { predicate, .. } => predicate(input),
            Matcher::Not(matcher) => !matcher.matches(input),
            Matcher::Composite(matcher) => matcher.matches(input),
        }
    }
}

impl<I: Debug> Debug for Matcher<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Any => write!(f, "Any"),
            Matcher::Never => write!(f, "Never"),
            Matcher::Eq { value, .. } => f.debug_tuple("Eq").field(value).finish(),
            Matcher::Fn { description, .. } => write!(f, "Fn({description})"),
            Matcher::Not(matcher) => f.debug_tuple("Not").field(matcher).finish(),
            Matcher::Composite(matcher) => Debug::fmt(matcher, f),
        }
    }
}

impl<T: PartialEq> From<T> for Matcher<T> {
    fn from(from: T) -> Self {
        Matcher::new_eq(from)
    }
}

impl From<&str> for Matcher<String> {
    fn from(from: &str) -> Self {
        Matcher::new_eq(from.to_string())
    }
}

impl<I> From<(Matcher<I>,)> for Matcher<I> {
    fn from(val: (Matcher<I>,)) -> Self {
        val.0
    }
}

mockctl_macros::create_matchers!();

/// Argument matcher with the argument type erased, as stored by the ledger.
pub(crate) trait ArgsMatcher: Send {
    fn matches_any(&self, args: &dyn Any) -> bool;
    fn describe(&self) -> String;
}

impl<I: Debug + Send + 'static> ArgsMatcher for Matcher<I> {
    fn matches_any(&self, args: &dyn Any) -> bool {
        args.downcast_ref::<I>()
            .is_some_and(|args| self.matches(args))
    }

    fn describe(&self) -> String {
        format!("{self:?}")
    }
}
