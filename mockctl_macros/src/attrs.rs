use darling::{ast::NestedMeta, FromMeta};
use syn::Meta;

/// Options of `#[mockctl::double(...)]`.
#[derive(FromMeta, Default)]
pub(crate) struct DoubleAttr {
    /// Name of the generated double, `Mock{Trait}` by default.
    pub name: Option<syn::Ident>,
    /// Methods left to their default body instead of being mocked.
    pub skip_fns: Option<Skip>,
}

#[derive(Default)]
pub(crate) struct Skip(pub Vec<syn::Path>);

impl FromMeta for Skip {
    fn from_list(list: &[NestedMeta]) -> darling::Result<Self> {
        list.iter()
            .map(|meta| match meta {
                NestedMeta::Meta(Meta::Path(path)) => Ok(path.clone()),
                _ => Err(darling::Error::custom(
                    "expected a list of methods like skip_fns(new, name)",
                )),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Skip)
    }
}

impl DoubleAttr {
    pub fn should_skip_method(&self, method_name: &syn::Ident) -> bool {
        self.skip_fns
            .as_ref()
            .is_some_and(|skip| skip.0.iter().any(|path| path.is_ident(method_name)))
    }
}
