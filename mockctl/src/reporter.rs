use std::sync::Arc;

use parking_lot::Mutex;

use crate::Failure;

/// Where a [`Controller`](crate::Controller) sends test failures.
pub trait Reporter: Send + Sync {
    /// Records a failure and lets the test continue.
    fn error(&self, failure: &Failure);

    /// Fails the test right away.
    #[track_caller]
    fn fatal(&self, failure: &Failure) -> !;

    /// Called once when the controller finishes, after verification.
    fn finish(&self) {}
}

impl<R: Reporter + ?Sized> Reporter for Arc<R> {
    fn error(&self, failure: &Failure) {
        (**self).error(failure)
    }

    #[track_caller]
    fn fatal(&self, failure: &Failure) -> ! {
        (**self).fatal(failure)
    }

    fn finish(&self) {
        (**self).finish()
    }
}

/// Collects failures and panics with all of them when the controller finishes.
#[derive(Debug, Default)]
pub struct PanicReporter {
    failures: Mutex<Vec<Failure>>,
}

impl Reporter for PanicReporter {
    fn error(&self, failure: &Failure) {
        self.failures.lock().push(failure.clone());
    }

    #[track_caller]
    fn fatal(&self, failure: &Failure) -> ! {
        panic!("{failure}")
    }

    fn finish(&self) {
        let failures = std::mem::take(&mut *self.failures.lock());
        if !failures.is_empty() {
            panic!("{}", summarize(&failures));
        }
    }
}

/// Keeps failures for the test to inspect instead of failing.
///
/// Fatal failures still panic once recorded.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    failures: Mutex<Vec<Failure>>,
    finished: Mutex<usize>,
}

impl RecordingReporter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failures(&self) -> Vec<Failure> {
        self.failures.lock().clone()
    }

    /// How many times a controller finished into this reporter.
    pub fn finished(&self) -> usize {
        *self.finished.lock()
    }
}

impl Reporter for RecordingReporter {
    fn error(&self, failure: &Failure) {
        self.failures.lock().push(failure.clone());
    }

    #[track_caller]
    fn fatal(&self, failure: &Failure) -> ! {
        self.failures.lock().push(failure.clone());
        panic!("{failure}")
    }

    fn finish(&self) {
        *self.finished.lock() += 1;
    }
}

pub(crate) fn summarize(failures: &[Failure]) -> String {
    let mut summary = format!("{} mock failure(s):", failures.len());
    for (index, failure) in failures.iter().enumerate() {
        summary.push_str(&format!("\n{}. {failure}", index + 1));
    }
    summary
}
