use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{
    spanned::Spanned, FnArg, Ident, Pat, PatIdent, PatType, ReturnType, Signature, TraitItemFn,
    Type,
};

/// Largest number of arguments (besides the receiver) a mocked method may take.
const MAX_ARITY: usize = 6;

/// Expands one trait method into the double's implementation of it and the
/// recorder method registering calls of it.
pub(crate) fn transform(
    trait_ident: &Ident,
    method: &TraitItemFn,
) -> syn::Result<(TokenStream, TokenStream)> {
    let sig = &method.sig;
    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new(
            sig.generics.span(),
            "generic methods cannot be doubled; skip it with skip_fns(..) and give it a default body",
        ));
    }
    let mut inputs = sig.inputs.iter();
    match inputs.next() {
        Some(FnArg::Receiver(_)) => {}
        _ => {
            return Err(syn::Error::new(
                sig.ident.span(),
                "methods without a receiver cannot be doubled; skip it with skip_fns(..) and give it a default body",
            ))
        }
    }
    let inputs = inputs
        .enumerate()
        .map(|(i, input)| match input {
            FnArg::Typed(typed) => Ok(Input::new(i, typed)),
            FnArg::Receiver(receiver) => {
                Err(syn::Error::new(receiver.span(), "multiple receivers"))
            }
        })
        .collect::<syn::Result<Vec<_>>>()?;
    if inputs.len() > MAX_ARITY {
        return Err(syn::Error::new(
            sig.inputs.span(),
            format!("methods with more than {MAX_ARITY} arguments cannot be doubled"),
        ));
    }
    if let Some(ty) = inputs.iter().find_map(|input| match &*input.typed.ty {
        Type::ImplTrait(ty) => Some(ty),
        _ => None,
    }) {
        return Err(syn::Error::new(
            ty.span(),
            "`impl Trait` arguments cannot be doubled",
        ));
    }

    let output_type = match &sig.output {
        ReturnType::Default => quote!(()),
        ReturnType::Type(_, ty) => {
            if let Type::ImplTrait(_) = &**ty {
                return Err(syn::Error::new(
                    ty.span(),
                    "methods returning `impl Trait` cannot be doubled",
                ));
            }
            quote!(#ty)
        }
    };
    let name = format!("{}::{}", trait_ident, sig.ident);
    let owned_types: Vec<_> = inputs.iter().map(Input::owned_type).collect();
    let owned_values: Vec<_> = inputs.iter().map(Input::owned_value).collect();
    let idents: Vec<_> = inputs.iter().map(|input| &input.ident).collect();
    let (args_type, args_value, matcher) = match inputs.len() {
        0 => (quote!(()), quote!(()), quote!(mockctl::Matcher::Any)),
        1 => {
            let ident = idents[0];
            (
                quote!(#(#owned_types)*),
                quote!(#(#owned_values)*),
                quote!(#ident),
            )
        }
        _ => (
            quote!((#(#owned_types),*)),
            quote!((#(#owned_values),*)),
            quote!((#(Into::<mockctl::Matcher<#owned_types>>::into(#idents)),*)),
        ),
    };
    let behavior_name = Ident::new(&format!("Behavior{}", inputs.len()), Span::call_site());
    let behavior_type = quote!(mockctl::#behavior_name<#args_type, #output_type>);

    let sig = renamed(sig, &inputs);
    let ident = &sig.ident;
    Ok((
        quote! {
            #sig {
                self.mock.call_with::<#args_type, #output_type>(
                    #name,
                    #args_value,
                    mockctl::fallbacks!(#output_type)
                )
            }
        },
        quote! {
            #[track_caller]
            pub fn #ident(&self, #(#idents: impl Into<mockctl::Matcher<#owned_types>>),*) -> mockctl::Call<#args_type, #output_type, #behavior_type> {
                self.mock.expect(#name, #matcher)
            }
        },
    ))
}

struct Input<'a> {
    ident: Ident,
    typed: &'a PatType,
}

impl<'a> Input<'a> {
    fn new(index: usize, typed: &'a PatType) -> Self {
        let ident = match &*typed.pat {
            Pat::Ident(pat) => pat.ident.clone(),
            _ => Ident::new(&format!("arg{}", index), Span::call_site()),
        };
        Self { ident, typed }
    }

    /// The type recorded for this argument; borrowed arguments are recorded owned.
    fn owned_type(&self) -> TokenStream {
        match &*self.typed.ty {
            ty if is_str(ty) => quote!(String),
            Type::Reference(reference) => match &*reference.elem {
                Type::Slice(slice) => {
                    let elem = &slice.elem;
                    quote!(Vec<#elem>)
                }
                elem => quote!(#elem),
            },
            ty => quote!(#ty),
        }
    }

    fn owned_value(&self) -> TokenStream {
        let ident = &self.ident;
        match &*self.typed.ty {
            ty if is_str(ty) => quote!(#ident.to_string()),
            Type::Reference(reference) => match &*reference.elem {
                Type::Slice(_) => quote!(#ident.to_vec()),
                _ => quote!((*#ident).clone()),
            },
            _ => quote!(#ident),
        }
    }
}

/// The method signature with every argument bound to a plain identifier.
fn renamed(sig: &Signature, inputs: &[Input]) -> Signature {
    let mut sig = sig.clone();
    for (arg, input) in sig.inputs.iter_mut().skip(1).zip(inputs) {
        if let FnArg::Typed(typed) = arg {
            typed.attrs.clear();
            typed.pat = Box::new(Pat::Ident(PatIdent {
                attrs: Default::default(),
                by_ref: None,
                mutability: None,
                ident: input.ident.clone(),
                subpat: None,
            }));
        }
    }
    sig
}

pub(crate) fn is_str(ty: &Type) -> bool {
    match ty {
        Type::Reference(ty) => match &*ty.elem {
            Type::Path(path) => path.path.is_ident("str"),
            _ => false,
        },
        _ => false,
    }
}
