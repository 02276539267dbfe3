//! `Reflect` methods forwarding to the standard traits declared
//! with `#[reflect(clone, partial_eq, ..)]`.

use proc_macro2::{Span, TokenStream};
use quote::quote_spanned;

use crate::derive_data::ReflectMeta;
use crate::path::fp::{CloneFP, DebugFP, HashFP, HasherFP, OptionFP, PartialEqFP, PartialOrdFP, ResultFP};

pub(super) fn clone_tokens(meta: &ReflectMeta, span: Span) -> TokenStream {
    let vc_reflect_path = meta.vc_reflect_path();
    let macro_utils_ = crate::path::macro_utils_(vc_reflect_path);
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let reflect_clone_error_ = crate::path::reflect_clone_error_(vc_reflect_path);

    quote_spanned! { span =>
        #[inline]
        fn reflect_clone(&self) -> #ResultFP<#macro_utils_::Box<dyn #reflect_>, #reflect_clone_error_> {
            #ResultFP::Ok(#macro_utils_::Box::new(<Self as #CloneFP>::clone(self)))
        }
    }
}

pub(super) fn partial_eq_tokens(meta: &ReflectMeta, span: Span) -> TokenStream {
    let reflect_ = crate::path::reflect_(meta.vc_reflect_path());

    quote_spanned! { span =>
        #[inline]
        fn reflect_partial_eq(&self, other: &dyn #reflect_) -> #OptionFP<bool> {
            match <dyn #reflect_>::downcast_ref::<Self>(other) {
                #OptionFP::Some(value) => #OptionFP::Some(<Self as #PartialEqFP>::eq(self, value)),
                #OptionFP::None => #OptionFP::Some(false),
            }
        }
    }
}

pub(super) fn partial_cmp_tokens(meta: &ReflectMeta, span: Span) -> TokenStream {
    let reflect_ = crate::path::reflect_(meta.vc_reflect_path());

    quote_spanned! { span =>
        #[inline]
        fn reflect_partial_cmp(&self, other: &dyn #reflect_) -> #OptionFP<::core::cmp::Ordering> {
            <dyn #reflect_>::downcast_ref::<Self>(other)
                .and_then(|value| <Self as #PartialOrdFP>::partial_cmp(self, value))
        }
    }
}

pub(super) fn hash_tokens(meta: &ReflectMeta, span: Span) -> TokenStream {
    let reflect_hasher_ = crate::path::reflect_hasher_(meta.vc_reflect_path());

    quote_spanned! { span =>
        #[inline]
        fn reflect_hash(&self) -> #OptionFP<u64> {
            let mut hasher = #reflect_hasher_();
            <Self as #HashFP>::hash(self, &mut hasher);
            #OptionFP::Some(#HasherFP::finish(&hasher))
        }
    }
}

pub(super) fn debug_tokens(span: Span) -> TokenStream {
    quote_spanned! { span =>
        #[inline]
        fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            <Self as #DebugFP>::fmt(self, f)
        }
    }
}
