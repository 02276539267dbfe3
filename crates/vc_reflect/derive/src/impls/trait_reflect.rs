use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// The per-kind method bodies of a `Reflect` impl.
///
/// Empty tokens keep the trait default.
pub(crate) struct ReflectMethods {
    pub reflect_clone: TokenStream,
    pub reflect_partial_eq: TokenStream,
    pub reflect_partial_cmp: TokenStream,
    pub reflect_hash: TokenStream,
    pub reflect_debug: TokenStream,
}

/// Generate implementation code for `Reflect` trait.
///
/// `reflect_kind_token` is the shared variant name of `ReflectKind` and `ReflectRef`.
pub(crate) fn impl_trait_reflect(
    meta: &ReflectMeta,
    reflect_kind_token: TokenStream,
    methods: ReflectMethods,
) -> TokenStream {
    let vc_reflect_path = meta.vc_reflect_path();

    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(vc_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(vc_reflect_path);

    let ReflectMethods {
        reflect_clone,
        reflect_partial_eq,
        reflect_partial_cmp,
        reflect_hash,
        reflect_debug,
    } = methods;

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#reflect_kind_token
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#reflect_kind_token(self)
            }

            #reflect_clone

            #reflect_partial_eq

            #reflect_partial_cmp

            #reflect_hash

            #reflect_debug
        }
    }
}
