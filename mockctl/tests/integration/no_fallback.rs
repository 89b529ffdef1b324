use std::io;

use mockctl::{Any, Controller, RecordingReporter};

#[mockctl::double]
trait Loader {
    fn load(&self, key: String) -> Result<Vec<u8>, io::Error>;
}

// no Fallback
struct Handle(u8);

#[mockctl::double]
trait Opener {
    fn open(&self, path: &str) -> Handle;
}

#[test]
fn result_with_foreign_error() {
    let ctrl = Controller::new();
    let loader = MockLoader::new(&ctrl);
    loader
        .expect()
        .load("a")
        .returns_with(|key: String| -> io::Result<Vec<u8>> { Ok(key.into_bytes()) });
    loader
        .expect()
        .load("missing")
        .returns_with(|_: String| -> io::Result<Vec<u8>> {
            Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
        });

    assert_eq!(loader.load("a".into()).unwrap(), b"a");
    assert_eq!(
        loader.load("missing".into()).unwrap_err().kind(),
        io::ErrorKind::NotFound
    );
}

#[test]
fn unmatched_result_with_foreign_error_continues_with_ok() {
    let reporter = RecordingReporter::new();
    let ctrl = Controller::with_reporter(reporter.clone());
    let loader = MockLoader::new(&ctrl);
    loader.expect().load(Any);

    assert_eq!(loader.load("a".into()).unwrap(), Vec::<u8>::new());
    assert_eq!(loader.load("b".into()).unwrap(), Vec::<u8>::new());
    assert_eq!(reporter.failures().len(), 1);
}

#[test]
fn configured_value_without_fallback() {
    let ctrl = Controller::new();
    let opener = MockOpener::new(&ctrl);
    opener.expect().open("a").returns_once(Handle(1));

    assert_eq!(opener.open("a").0, 1);
}

#[test]
#[should_panic(expected = "unexpected call to Opener::open(\"b\")")]
fn unmatched_call_without_fallback_fails_at_once() {
    let ctrl = Controller::new();
    let opener = MockOpener::new(&ctrl);
    opener.expect().open("a").returns_once(Handle(1));

    opener.open("b");
}

#[test]
#[should_panic(expected = "has no return value configured")]
fn expectation_without_value_or_fallback_fails_at_once() {
    let ctrl = Controller::new();
    let opener = MockOpener::new(&ctrl);
    opener.expect().open(Any);

    opener.open("a");
}
