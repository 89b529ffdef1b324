use mockctl::{Any, Controller, ControllerConfig, Failure, RecordingReporter};

#[mockctl::double]
pub trait Cat {
    fn meow(&self, count: usize) -> String;
}

#[test]
fn meow_returns() {
    let ctrl = Controller::new();
    let cat = MockCat::new(&ctrl);

    cat.expect().meow(2).returns("Called".to_string());

    assert_eq!(cat.meow(2), "Called".to_string());
}

#[test]
fn meow_returns_with() {
    let ctrl = Controller::new();
    let cat = MockCat::new(&ctrl);

    cat.expect()
        .meow(Any)
        .returns_with(|count| format!("Called with {count}"))
        .times(2);

    assert_eq!(cat.meow(2), "Called with 2".to_string());
    assert_eq!(cat.meow(3), "Called with 3".to_string());
}

#[test]
fn expectation_without_return_yields_zero() {
    let ctrl = Controller::new();
    let cat = MockCat::new(&ctrl);

    cat.expect().meow(2);

    assert_eq!(cat.meow(2), "");
}

#[test]
fn unexpected_calls_are_collected() {
    let reporter = RecordingReporter::new();
    let ctrl = Controller::with_reporter(reporter.clone());
    let cat = MockCat::new(&ctrl);
    cat.expect().meow(2).returns("Called".to_string());

    assert_eq!(cat.meow(3), "");
    assert_eq!(cat.meow(2), "Called");
    assert_eq!(cat.meow(2), "");
    ctrl.finish();

    let failures = reporter.failures();
    assert_eq!(failures.len(), 2);
    assert!(failures
        .iter()
        .all(|failure| matches!(failure, Failure::UnexpectedCall { method: "Cat::meow", .. })));
    assert!(failures[0].to_string().starts_with("unexpected call to Cat::meow(3)"));
    assert!(failures[1]
        .to_string()
        .contains("has already been called the maximum number of times"));
}

#[test]
#[should_panic(expected = "unexpected call to Cat::meow(3)")]
fn unexpected_call_fails_the_test_at_finish() {
    let ctrl = Controller::new();
    let cat = MockCat::new(&ctrl);
    cat.expect().meow(Any).never();

    cat.meow(3);
    ctrl.finish();
}

#[test]
#[should_panic(expected = "missing call(s) to Cat::meow(Eq(2))")]
fn unfulfilled_expectation_fails_the_test_on_drop() {
    let ctrl = Controller::new();
    let cat = MockCat::new(&ctrl);

    cat.expect().meow(2).returns("Called".to_string());
}

#[test]
#[should_panic(expected = "unexpected call to Cat::meow(1)")]
fn fail_fast_panics_at_the_call() {
    let ctrl = Controller::with_config(
        ControllerConfig::default().fail_fast(true),
        mockctl::PanicReporter::default(),
    );
    let cat = MockCat::new(&ctrl);

    cat.meow(1);
}

#[test]
fn cardinality_bounds() {
    let reporter = RecordingReporter::new();
    let ctrl = Controller::with_reporter(reporter.clone());
    let cat = MockCat::new(&ctrl);
    cat.expect().meow(Any).returns("meow".to_string()).times(1..3);

    assert!(!ctrl.satisfied());
    cat.meow(1);
    assert!(ctrl.satisfied());
    cat.meow(1);
    cat.meow(1);

    assert_eq!(reporter.failures().len(), 1);
    assert_eq!(ctrl.verify(), Ok(()));
}
