//! This independent module is used to provide the required path.
//! So as to minimize changes when the `vc_reflect` structure is modified.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// The access path to the `vc_reflect` crate.
///
/// Generated code always goes through `::vc_reflect`, the reflection crate
/// itself declares `extern crate self as vc_reflect` so this also works inside it.
///
/// The path is created once per macro invocation and passed around.
pub(crate) fn vc_reflect() -> syn::Path {
    syn::parse_quote!(::vc_reflect)
}

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod info;
mod ops;

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use cell::*;
pub(crate) use info::*;
pub(crate) use ops::*;

#[inline(always)]
pub(crate) fn macro_utils_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::__macro_exports::macro_utils
    }
}

#[inline(always)]
pub(crate) fn reflect_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn reflect_hasher_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::reflect_hasher
    }
}
