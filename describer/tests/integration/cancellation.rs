use describer::fake::MockTabsGenerator;
use describer::{Context, TabsGenerator};
use mockctl::{Any, Controller, Matcher, RecordingReporter};

use crate::{pod_config, tabs};

#[test]
fn cancellation_is_observed_through_a_matcher() {
    let reporter = RecordingReporter::new();
    let ctrl = Controller::with_reporter(reporter.clone());
    let generator = MockTabsGenerator::new(&ctrl);
    generator
        .expect()
        .generate(
            Matcher::func("live context", |ctx: &Context| !ctx.is_cancelled()),
            pod_config(),
        )
        .returns(Ok(tabs()))
        .any_times();
    let (ctx, cancel) = Context::background().with_cancel();

    assert_eq!(generator.generate(&ctx, pod_config()), Ok(tabs()));
    cancel.cancel();
    assert!(generator.generate(&ctx, pod_config()).is_err());

    let failures = reporter.failures();
    assert_eq!(failures.len(), 1);
    let message = failures[0].to_string();
    assert!(message.contains("cancelled: true"), "{message}");
    assert!(message.contains("Fn(live context)"), "{message}");
}

#[test]
fn context_is_opaque_to_the_double() {
    let ctrl = Controller::new();
    let generator = MockTabsGenerator::new(&ctrl);
    generator.expect().generate(Any, Any).returns(Ok(tabs()));
    let (ctx, cancel) = Context::background().with_cancel();
    cancel.cancel();

    assert_eq!(generator.generate(&ctx, pod_config()), Ok(tabs()));
}

#[test]
fn exact_context_matches_by_identity() {
    let reporter = RecordingReporter::new();
    let ctrl = Controller::with_reporter(reporter.clone());
    let generator = MockTabsGenerator::new(&ctrl);
    let ctx = Context::background().with_value("user", "tama");
    generator
        .expect()
        .generate(ctx.clone(), Any)
        .returns(Ok(tabs()))
        .any_times();

    assert_eq!(generator.generate(&ctx, pod_config()), Ok(tabs()));
    assert!(generator
        .generate(&Context::background(), pod_config())
        .is_err());
    assert_eq!(reporter.failures().len(), 1);
}
