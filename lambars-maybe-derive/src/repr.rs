//! Implementation of the `#[derive(Repr)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, parse_macro_input};

/// Storage selected by the `#[maybe(...)]` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Policy {
    Tagged,
    Sentinel,
}

/// Main implementation of the Repr derive macro.
pub fn derive_repr_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    TokenStream::from(expand(&input).unwrap_or_else(syn::Error::into_compile_error))
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    if let Data::Union(_) = input.data {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Repr cannot be derived for unions.",
        ));
    }

    let slot = match parse_policy(&input.attrs)? {
        Policy::Tagged => quote!(::lambars_maybe::repr::Tagged<Self>),
        Policy::Sentinel => quote!(::lambars_maybe::repr::Sentinel<Self>),
    };

    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::lambars_maybe::repr::Repr for #name #type_generics #where_clause {
            type Slot = #slot;
        }
    })
}

/// Reads every `#[maybe(...)]` attribute. The last policy named wins.
fn parse_policy(attributes: &[Attribute]) -> syn::Result<Policy> {
    let mut policy = Policy::Tagged;

    for attribute in attributes
        .iter()
        .filter(|attribute| attribute.path().is_ident("maybe"))
    {
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("sentinel") {
                policy = Policy::Sentinel;
                Ok(())
            } else if meta.path.is_ident("tagged") {
                policy = Policy::Tagged;
                Ok(())
            } else {
                Err(meta.error("expected `sentinel` or `tagged`"))
            }
        })?;
    }

    Ok(policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use syn::parse_quote;

    fn expanded(input: &DeriveInput) -> String {
        expand(input).map(|tokens| tokens.to_string()).unwrap_or_default()
    }

    #[rstest]
    fn tagged_by_default() {
        let input: DeriveInput = parse_quote! {
            struct Port(u16);
        };
        let output = expanded(&input);
        assert!(output.contains("Tagged < Self >"));
        assert!(output.contains("for Port"));
    }

    #[rstest]
    fn sentinel_attribute_switches_policy() {
        let input: DeriveInput = parse_quote! {
            #[maybe(sentinel)]
            struct Percent(u8);
        };
        assert!(expanded(&input).contains("Sentinel < Self >"));
    }

    #[rstest]
    fn generics_are_carried_over() {
        let input: DeriveInput = parse_quote! {
            enum Either<L, R> where L: Clone {
                Left(L),
                Right(R),
            }
        };
        let output = expanded(&input);
        assert!(output.contains("impl < L , R >"));
        assert!(output.contains("for Either < L , R >"));
        assert!(output.contains("where L : Clone"));
    }

    #[rstest]
    fn unknown_policy_is_an_error() {
        let input: DeriveInput = parse_quote! {
            #[maybe(boxed)]
            struct Value(i32);
        };
        let error = expand(&input).unwrap_err();
        assert_eq!(error.to_string(), "expected `sentinel` or `tagged`");
    }

    #[rstest]
    fn unions_are_rejected() {
        let input: DeriveInput = parse_quote! {
            union Bits {
                integer: u32,
                float: f32,
            }
        };
        assert!(expand(&input).is_err());
    }

    #[rstest]
    fn unrelated_attributes_are_ignored() {
        let input: DeriveInput = parse_quote! {
            #[derive(Debug)]
            #[doc = "documented"]
            struct Plain(u8);
        };
        assert_eq!(parse_policy(&input.attrs).ok(), Some(Policy::Tagged));
    }
}
