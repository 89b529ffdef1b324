use mockctl::{Any, Controller, Failure, RecordingReporter};

#[mockctl::double]
pub trait Counter: Send + Sync {
    fn hit(&self, n: u32) -> u32;
}

#[test]
fn concurrent_calls_consume_each_expectation_once() {
    let reporter = RecordingReporter::new();
    let ctrl = Controller::with_reporter(reporter.clone());
    let counter = MockCounter::new(&ctrl);
    counter.expect().hit(Any).returns(1).times(5);

    let counter = &counter;
    let hits: u32 = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|n| scope.spawn(move || counter.hit(n)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .sum()
    });

    assert_eq!(hits, 5);
    let failures = reporter.failures();
    assert_eq!(failures.len(), 3);
    assert!(failures
        .iter()
        .all(|failure| matches!(failure, Failure::UnexpectedCall { .. })));
    assert_eq!(ctrl.verify(), Ok(()));
}
