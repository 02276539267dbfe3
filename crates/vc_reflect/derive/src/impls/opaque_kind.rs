use proc_macro2::TokenStream;
use quote::quote;

use super::std_traits;
use super::{ReflectMethods, impl_trait_reflect, impl_trait_typed};

use crate::derive_data::ReflectMeta;
use crate::path::fp::ResultFP;

/// Implement full reflect for opaque type.
///
/// Nothing inside the value is visible, so every value operation
/// depends on the declared standard traits.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> TokenStream {
    let flags = &meta.attrs().avail_traits;

    let type_path_trait_tokens = super::impl_trait_type_path(meta);
    let typed_trait_tokens = impl_trait_typed(meta, meta.to_info_tokens());

    let reflect_trait_tokens = impl_trait_reflect(
        meta,
        quote!(Opaque),
        ReflectMethods {
            reflect_clone: get_opaque_clone_impl(meta),
            reflect_partial_eq: flags
                .partial_eq
                .map(|span| std_traits::partial_eq_tokens(meta, span))
                .unwrap_or_default(),
            reflect_partial_cmp: flags
                .partial_cmp
                .map(|span| std_traits::partial_cmp_tokens(meta, span))
                .unwrap_or_default(),
            reflect_hash: flags
                .hash
                .map(|span| std_traits::hash_tokens(meta, span))
                .unwrap_or_default(),
            reflect_debug: flags.debug.map(std_traits::debug_tokens).unwrap_or_default(),
        },
    );

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #reflect_trait_tokens
    }
}

/// Generate `Reflect::reflect_clone` implementation tokens.
fn get_opaque_clone_impl(meta: &ReflectMeta) -> TokenStream {
    if let Some(span) = meta.attrs().avail_traits.clone {
        return std_traits::clone_tokens(meta, span);
    }

    let vc_reflect_path = meta.vc_reflect_path();
    let macro_utils_ = crate::path::macro_utils_(vc_reflect_path);
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let reflect_clone_error_ = crate::path::reflect_clone_error_(vc_reflect_path);
    let type_path_ = crate::path::type_path_(vc_reflect_path);

    quote! {
        #[inline]
        fn reflect_clone(&self) -> #ResultFP<#macro_utils_::Box<dyn #reflect_>, #reflect_clone_error_> {
            #ResultFP::Err(#reflect_clone_error_::NotSupport {
                type_path: #macro_utils_::Cow::Borrowed(<Self as #type_path_>::type_path()),
            })
        }
    }
}
