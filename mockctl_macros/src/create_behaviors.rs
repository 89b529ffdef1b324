use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use crate::alphabets::alphabets;

pub(crate) fn create() -> TokenStream {
    let items = alphabets(0..7).map(|args| {
        let (args, types): (Vec<_>, Vec<_>) = args
            .iter()
            .map(|name| {
                (
                    Ident::new(&name.to_lowercase(), Span::call_site()),
                    Ident::new(name, Span::call_site()),
                )
            })
            .unzip();
        let behavior_name = Ident::new(&format!("Behavior{}", args.len()), Span::call_site());
        // A single argument is passed bare, not as a one-element tuple.
        let (input_type, input_pattern) = match args.len() {
            1 => (quote![#(#types)*], quote![#(#args)*]),
            _ => (quote![(#(#types),*)], quote![(#(#args),*)]),
        };
        quote! {
            #[doc(hidden)]
            pub struct #behavior_name<I, O>(Box<dyn FnMut(I) -> O + Send + 'static>);

            impl<Fn, O, #(#types),*> From<Fn> for #behavior_name<#input_type, O>
            where
                Fn: FnMut(#(#types),*) -> O + Send + 'static,
            {
                fn from(mut function: Fn) -> Self {
                    #behavior_name(Box::new(move |#input_pattern| function(#(#args),*)))
                }
            }

            impl<I: Clone, O> From<#behavior_name<I, O>> for Behavior<I, O> {
                fn from(behavior: #behavior_name<I, O>) -> Self {
                    Behavior::Function {
                        clone: Clone::clone,
                        call: behavior.0,
                    }
                }
            }
        }
    });
    quote![#(#items)*]
}
