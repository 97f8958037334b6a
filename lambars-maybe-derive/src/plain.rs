//! Implementation of the `#[derive(Plain)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

/// Main implementation of the Plain derive macro.
pub fn derive_plain_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    TokenStream::from(expand(&input))
}

fn expand(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::lambars_maybe::combinator::Argument for #name #type_generics #where_clause {
            const WRAPPED: bool = false;
            type Value = Self;

            #[inline]
            fn is_present(&self) -> bool {
                true
            }

            #[inline]
            fn into_value(self) -> ::core::option::Option<Self> {
                ::core::option::Option::Some(self)
            }
        }
    }
}
