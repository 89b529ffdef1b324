use mockctl::{Any, Controller};

#[derive(Debug, Clone, PartialEq)]
pub struct Owner {
    name: String,
}

#[mockctl::double]
trait Cat {
    fn greet(&self, base: &str, owner: &Owner, toys: &[u8], _: String) -> String;
}

#[test]
fn borrowed_arguments_are_matched_by_value() {
    let ctrl = Controller::new();
    let cat = MockCat::new(&ctrl);
    let owner = Owner {
        name: "Taro".to_string(),
    };

    cat.expect()
        .greet("hello", owner.clone(), vec![1, 2], Any)
        .returns_with(|base, owner: Owner, toys: Vec<u8>, other| {
            format!("{base} {} {toys:?} {other}", owner.name)
        });

    assert_eq!(
        cat.greet("hello", &owner, &[1, 2], "bye".to_string()),
        "hello Taro [1, 2] bye"
    );
}
