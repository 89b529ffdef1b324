mod alphabets;
mod attrs;
mod create_behaviors;
mod create_matchers;
mod item_trait;
mod method;

use attrs::DoubleAttr;
use darling::{ast::NestedMeta, FromMeta};
use syn::{parse_macro_input, ItemTrait};

/// Generates a test double for a trait.
///
/// For `trait Cat` this emits `MockCat`, which implements `Cat` by delegating
/// to a `mockctl::Controller`, and `MockCatRecorder`, returned by
/// `MockCat::expect()`, with one method per trait method registering an
/// expected call.
#[proc_macro_attribute]
pub fn double(
    attribute: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let attr = match NestedMeta::parse_meta_list(attribute.into())
        .map_err(darling::Error::from)
        .and_then(|list| DoubleAttr::from_list(&list))
    {
        Ok(attr) => attr,
        Err(err) => return err.write_errors().into(),
    };
    item_trait::transform(&attr, parse_macro_input!(input as ItemTrait)).into()
}

#[doc(hidden)]
#[proc_macro]
pub fn create_behaviors(_: proc_macro::TokenStream) -> proc_macro::TokenStream {
    create_behaviors::create().into()
}

#[doc(hidden)]
#[proc_macro]
pub fn create_matchers(_: proc_macro::TokenStream) -> proc_macro::TokenStream {
    create_matchers::create().into()
}
