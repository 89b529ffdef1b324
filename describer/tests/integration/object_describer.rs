use describer::fake::MockTabsGenerator;
use describer::{Component, Context, Error, ObjectDescriber, ObjectRef, TabsGeneratorConfig};
use mockctl::{Any, Controller};
use pretty_assertions::assert_eq;

use crate::{pod_config, tabs};

#[test]
fn describe_returns_generated_tabs() {
    let ctrl = Controller::new();
    let generator = MockTabsGenerator::new(&ctrl);
    generator
        .expect()
        .generate(Any, pod_config())
        .returns(Ok(tabs()));
    let describer = ObjectDescriber::new(generator);

    let response = describer
        .describe(
            &Context::background(),
            &ObjectRef::new("v1", "Pod", "web").in_namespace("default"),
        )
        .unwrap();

    assert_eq!(response.title, "web");
    assert_eq!(response.components, tabs());
}

#[test]
fn done_context_skips_the_generator() {
    let ctrl = Controller::new();
    let generator = MockTabsGenerator::new(&ctrl);
    generator.expect().generate(Any, Any).never();
    let describer = ObjectDescriber::new(generator);
    let (ctx, cancel) = Context::background().with_cancel();
    cancel.cancel();

    assert_eq!(
        describer.describe(&ctx, &pod_config().object),
        Err(Error::Cancelled)
    );
    assert_eq!(
        describer.describe(
            &Context::background().with_deadline(std::time::Instant::now()),
            &pod_config().object
        ),
        Err(Error::DeadlineExceeded)
    );
}

#[test]
fn generator_errors_propagate() {
    let ctrl = Controller::new();
    let generator = MockTabsGenerator::new(&ctrl);
    let failed = Error::Generate {
        object: "Pod default/web".to_string(),
        reason: "no printer".to_string(),
    };
    generator
        .expect()
        .generate(Any, Any)
        .returns(Err(failed.clone()));
    let describer = ObjectDescriber::new(generator);

    assert_eq!(
        describer.describe(&Context::background(), &pod_config().object),
        Err(failed)
    );
}

#[test]
fn describe_all_keeps_the_order() {
    let ctrl = Controller::new();
    let generator = MockTabsGenerator::new(&ctrl);
    generator
        .expect()
        .generate(Any, Any)
        .returns_with(|_, config: TabsGeneratorConfig| {
            Ok(vec![Component::new("summary", config.object.kind)])
        })
        .times(3usize);
    let describer = ObjectDescriber::new(generator);
    let objects = [
        ObjectRef::new("v1", "Pod", "web").in_namespace("default"),
        ObjectRef::new("v1", "Service", "web").in_namespace("default"),
        ObjectRef::new("v1", "Node", "node-1"),
    ];

    let kinds: Vec<_> = describer
        .describe_all(&Context::background(), &objects)
        .into_iter()
        .map(|response| response.unwrap().components[0].title.clone())
        .collect();

    assert_eq!(kinds, vec!["Pod", "Service", "Node"]);
}

#[test]
fn describe_with_a_custom_title() {
    let ctrl = Controller::new();
    let generator = MockTabsGenerator::new(&ctrl);
    let config = pod_config().title("Web pod");
    generator
        .expect()
        .generate(Any, config.clone())
        .returns(Ok(vec![]));
    let describer = ObjectDescriber::new(generator);

    let response = describer
        .describe_with(&Context::background(), config)
        .unwrap();

    assert_eq!(response.title, "Web pod");
}
