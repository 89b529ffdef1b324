use std::fmt;
use std::ops::{Bound, Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

/// How many calls an expectation accepts before it is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Times {
    Exact(usize),
    Range((Bound<usize>, Bound<usize>)),
}

impl Times {
    pub fn any() -> Self {
        Times::Range((Bound::Unbounded, Bound::Unbounded))
    }

    pub(crate) fn contains(&self, count: &usize) -> bool {
        match self {
            Times::Exact(n) => count == n,
            Times::Range(range) => range.contains(count),
        }
    }

    /// Fewest calls that satisfy the expectation.
    pub(crate) fn min(&self) -> usize {
        match self {
            Times::Exact(n) => *n,
            Times::Range((Bound::Included(n), _)) => *n,
            Times::Range((Bound::Excluded(n), _)) => n.saturating_add(1),
            Times::Range((Bound::Unbounded, _)) => 0,
        }
    }

    /// Most calls the expectation accepts, `None` when unbounded.
    pub(crate) fn max(&self) -> Option<usize> {
        match self {
            Times::Exact(n) => Some(*n),
            Times::Range((_, Bound::Included(n))) => Some(*n),
            Times::Range((_, Bound::Excluded(n))) => Some(n.saturating_sub(1)),
            Times::Range((_, Bound::Unbounded)) => None,
        }
    }

    pub(crate) fn is_satisfied_by(&self, calls: usize) -> bool {
        calls >= self.min()
    }

    pub(crate) fn is_exhausted_by(&self, calls: usize) -> bool {
        self.max().is_some_and(|max| calls >= max)
    }
}

impl Default for Times {
    fn default() -> Self {
        Times::Exact(1)
    }
}

impl From<usize> for Times {
    fn from(times: usize) -> Self {
        Times::Exact(times)
    }
}

macro_rules! times_from_range {
    ($($range:ty),*) => {
        $(
            impl From<$range> for Times {
                fn from(range: $range) -> Self {
                    Times::Range((range.start_bound().cloned(), range.end_bound().cloned()))
                }
            }
        )*
    };
}

times_from_range!(
    Range<usize>,
    RangeFrom<usize>,
    RangeTo<usize>,
    RangeInclusive<usize>,
    RangeToInclusive<usize>
);

impl From<RangeFull> for Times {
    fn from(_: RangeFull) -> Self {
        Times::any()
    }
}

impl fmt::Display for Times {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Times::Exact(n) => write!(f, "{n}"),
            Times::Range((Bound::Unbounded, Bound::Unbounded)) => write!(f, "any number of"),
            Times::Range((start, end)) => {
                let start = match start {
                    Bound::Included(n) => format!("{n}<="),
                    Bound::Excluded(n) => format!("{n}<"),
                    Bound::Unbounded => String::from(""),
                };
                let end = match end {
                    Bound::Included(n) => format!("<={n}"),
                    Bound::Excluded(n) => format!("<{n}"),
                    Bound::Unbounded => String::from(""),
                };
                write!(f, "{start}x{end}")
            }
        }
    }
}
