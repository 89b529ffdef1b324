use std::sync::Arc;

use describer::fake::MockTabsGenerator;
use describer::{Context, Error, TabsGenerator};
use mockctl::{Any, Controller, RecordingReporter};

use crate::{pod_config, tabs};

#[test]
fn concurrent_calls_never_share_an_expectation() {
    let reporter = RecordingReporter::new();
    let ctrl = Controller::with_reporter(reporter.clone());
    let generator = MockTabsGenerator::new(&ctrl);
    generator
        .expect()
        .generate(Any, pod_config())
        .returns(Ok(tabs()))
        .times(5usize);
    let ctx = Context::background();

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| generator.generate(&ctx, pod_config())))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 5);
    assert_eq!(
        results
            .iter()
            .filter(|result| matches!(result, Err(Error::Double(_))))
            .count(),
        3
    );
    assert_eq!(reporter.failures().len(), 3);
    assert_eq!(ctrl.verify(), Ok(()));
}

#[test]
fn shared_behind_an_arc() {
    let ctrl = Controller::new();
    let generator = Arc::new(MockTabsGenerator::new(&ctrl));
    generator
        .expect()
        .generate(Any, Any)
        .returns(Ok(tabs()))
        .times(2usize);

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let generator = generator.clone();
            std::thread::spawn(move || generator.generate(&Context::background(), pod_config()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(tabs()));
    }
}
