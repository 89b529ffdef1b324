use mockctl::{Any, Controller};

#[mockctl::double(skip_fns(name))]
pub trait Cat {
    fn name(&self) -> String {
        "Tama".to_string()
    }
    fn meow(&self, count: usize) -> String;
    fn meow_default(&self, count: usize) -> String {
        "meow".repeat(count)
    }
}

#[mockctl::double(name = "FakeDog")]
pub trait Dog {
    fn bark(&self) -> u8;
}

#[test]
fn skipped_method_keeps_its_default() {
    let ctrl = Controller::new();
    let cat = MockCat::new(&ctrl);

    assert_eq!(cat.name(), "Tama");
}

#[test]
fn default_methods_are_doubled_too() {
    let ctrl = Controller::new();
    let cat = MockCat::new(&ctrl);

    cat.expect().meow_default(Any).returns("mocked".to_string());

    assert_eq!(cat.meow_default(2), "mocked");
}

#[test]
fn usable_as_trait_object() {
    let ctrl = Controller::new();
    let cat = MockCat::new(&ctrl);
    cat.expect().meow(1).returns("meow".to_string());

    let cat: Box<dyn Cat> = Box::new(cat);

    assert_eq!(cat.meow(1), "meow");
}

#[test]
fn renamed_double() {
    let ctrl = Controller::new();
    let dog = FakeDog::new(&ctrl);

    dog.expect().bark().returns(3);

    assert_eq!(dog.bark(), 3);
}

#[test]
fn debug() {
    let ctrl = Controller::new();
    let dog = FakeDog::new(&ctrl);

    assert_eq!(
        format!("{dog:?}"),
        r#"FakeDog { mock: Mock { name: "Dog", receiver: 0 } }"#
    );
}
