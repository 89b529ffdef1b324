use mockctl::{Any, Controller};

#[mockctl::double]
trait Cat {
    fn name(&self) -> String;
    fn name_len(&self) -> usize;
}

#[test]
fn behavior_calls_another_method_of_the_double() {
    let ctrl = Controller::new();
    let cat = MockCat::new(&ctrl);
    let cat2 = cat.clone();
    cat.expect().name().returns("Tama".to_string());
    cat.expect().name_len().returns_with(move || cat2.name().len());

    assert_eq!(cat.name_len(), 4);
}

#[test]
#[should_panic(expected = "2 mock failure(s)")]
fn captured_double_does_not_skip_verification() {
    let ctrl = Controller::new();
    let cat = MockCat::new(&ctrl);
    let cat2 = cat.clone();
    cat.expect().name().returns("Tama".to_string());
    cat.expect().name_len().returns_with(move || cat2.name().len());
}

#[mockctl::double]
trait Math {
    fn fact(&self, n: u64) -> u64;
}

#[test]
#[should_panic(expected = "was called again from inside its own behavior")]
fn behavior_calling_itself_fails_instead_of_hanging() {
    let ctrl = Controller::new();
    let math = MockMath::new(&ctrl);
    let math2 = math.clone();
    math.expect()
        .fact(Any)
        .returns_with(move |n: u64| if n == 0 { 1 } else { n * math2.fact(n - 1) })
        .any_times();

    math.fact(3);
}
