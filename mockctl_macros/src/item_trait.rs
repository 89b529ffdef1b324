use proc_macro2::{Span, TokenStream};
use quote::{quote, ToTokens};
use syn::{spanned::Spanned, Ident, ItemTrait, TraitItem};

use crate::attrs::DoubleAttr;
use crate::method;

pub(crate) fn transform(attr: &DoubleAttr, input: ItemTrait) -> TokenStream {
    match expand(attr, &input) {
        Ok(tokens) => tokens,
        Err(err) => {
            let err = err.to_compile_error();
            quote! {
                #input
                #err
            }
        }
    }
}

fn expand(attr: &DoubleAttr, input: &ItemTrait) -> syn::Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "generic traits cannot be doubled",
        ));
    }
    let async_trait_or_blank = if input.attrs.iter().any(|attr| {
        attr.path()
            .segments
            .iter()
            .any(|segment| segment.ident == "async_trait")
    }) {
        quote!(#[async_trait::async_trait])
    } else {
        TokenStream::default()
    };

    let trait_ident = &input.ident;
    let mock_ident = attr
        .name
        .clone()
        .unwrap_or_else(|| Ident::new(&format!("Mock{}", trait_ident), Span::call_site()));
    let recorder_ident = Ident::new(&format!("{}Recorder", mock_ident), Span::call_site());
    let vis = &input.vis;
    let trait_name = trait_ident.to_string();
    let mock_doc = format!("A test double of [`{}`].", trait_ident);
    let recorder_doc = format!("Registers expected calls of [`{}`].", mock_ident);

    let mut impl_items = Vec::new();
    let mut recorder_items = Vec::new();
    for item in &input.items {
        match item {
            TraitItem::Fn(method) if attr.should_skip_method(&method.sig.ident) => {
                if method.default.is_none() {
                    return Err(syn::Error::new(
                        method.sig.ident.span(),
                        "skipped methods need a default body",
                    ));
                }
            }
            TraitItem::Fn(method) => {
                let (imp, recorder) = method::transform(trait_ident, method)?;
                impl_items.push(imp);
                recorder_items.push(recorder);
            }
            TraitItem::Const(item) if item.default.is_some() => {}
            item => {
                return Err(syn::Error::new(
                    item.span(),
                    format!(
                        "`{}` cannot be doubled; only methods and constants with a default are supported",
                        item.to_token_stream()
                    ),
                ))
            }
        }
    }

    Ok(quote! {
        #input

        #[doc = #mock_doc]
        #[derive(Clone, Debug)]
        #vis struct #mock_ident {
            mock: mockctl::Mock,
        }

        impl #mock_ident {
            pub fn new(controller: &mockctl::Controller) -> Self {
                Self {
                    mock: controller.mock(#trait_name),
                }
            }

            pub fn expect(&self) -> #recorder_ident<'_> {
                #recorder_ident { mock: &self.mock }
            }
        }

        #[doc = #recorder_doc]
        #vis struct #recorder_ident<'mock> {
            mock: &'mock mockctl::Mock,
        }

        impl #recorder_ident<'_> {
            #(#recorder_items)*
        }

        #async_trait_or_blank
        impl #trait_ident for #mock_ident {
            #(#impl_items)*
        }
    })
}
