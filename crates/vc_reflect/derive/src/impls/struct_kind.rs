use proc_macro2::TokenStream;
use quote::quote;

use super::std_traits;
use super::{ReflectMethods, get_struct_clone_impl};
use super::{impl_trait_reflect, impl_trait_typed};

use crate::derive_data::{FieldAccessors, ReflectMeta, ReflectStruct};
use crate::path::fp::OptionFP;

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let type_path_trait_tokens = super::impl_trait_type_path(meta);
    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens());
    let struct_trait_tokens = impl_trait_struct(info);

    let reflect_trait_tokens = impl_trait_reflect(
        meta,
        quote!(Struct),
        ReflectMethods {
            reflect_clone: get_struct_clone_impl(info),
            reflect_partial_eq: get_struct_partial_eq_impl(meta),
            reflect_partial_cmp: get_struct_partial_cmp_impl(meta),
            reflect_hash: get_struct_hash_impl(meta),
            reflect_debug: get_struct_debug_impl(meta),
        },
    );

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let vc_reflect_path = meta.vc_reflect_path();
    let struct_ = crate::path::struct_(vc_reflect_path);
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(vc_reflect_path);

    let FieldAccessors {
        fields_ref,
        field_names,
        field_indices,
        field_count,
    } = info.accessors();

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    // `quote!` treats every `#var` inside a repetition as an iterator.
    let some_ = quote!(#OptionFP::Some);

    quote! {
        impl #impl_generics #struct_ for #real_ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #OptionFP<&dyn #reflect_> {
                match name {
                    #(#field_names => #some_(#fields_ref),)*
                    _ => #OptionFP::None,
                }
            }

            fn field_at(&self, index: usize) -> #OptionFP<&dyn #reflect_> {
                match index {
                    #(#field_indices => #some_(#fields_ref),)*
                    _ => #OptionFP::None,
                }
            }

            fn name_at(&self, index: usize) -> #OptionFP<&str> {
                match index {
                    #(#field_indices => #some_(#field_names),)*
                    _ => #OptionFP::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }
        }
    }
}

/// Generate `Reflect::reflect_partial_eq` implementation tokens.
fn get_struct_partial_eq_impl(meta: &ReflectMeta) -> TokenStream {
    if let Some(span) = meta.attrs().avail_traits.partial_eq {
        return std_traits::partial_eq_tokens(meta, span);
    }

    let vc_reflect_path = meta.vc_reflect_path();
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let struct_partial_eq_ = crate::path::struct_partial_eq_(vc_reflect_path);
    quote! {
        #[inline]
        fn reflect_partial_eq(&self, other: &dyn #reflect_) -> #OptionFP<bool> {
            #struct_partial_eq_(self, other)
        }
    }
}

/// Only with `#[reflect(partial_cmp)]`, there is no field-wise ordering.
fn get_struct_partial_cmp_impl(meta: &ReflectMeta) -> TokenStream {
    match meta.attrs().avail_traits.partial_cmp {
        Some(span) => std_traits::partial_cmp_tokens(meta, span),
        None => crate::utils::empty(),
    }
}

/// Generate `Reflect::reflect_hash` implementation tokens.
fn get_struct_hash_impl(meta: &ReflectMeta) -> TokenStream {
    if let Some(span) = meta.attrs().avail_traits.hash {
        return std_traits::hash_tokens(meta, span);
    }

    let struct_hash_ = crate::path::struct_hash_(meta.vc_reflect_path());
    quote! {
        #[inline]
        fn reflect_hash(&self) -> #OptionFP<u64> {
            #struct_hash_(self)
        }
    }
}

/// Generate `Reflect::reflect_debug` implementation tokens.
fn get_struct_debug_impl(meta: &ReflectMeta) -> TokenStream {
    if let Some(span) = meta.attrs().avail_traits.debug {
        return std_traits::debug_tokens(span);
    }

    let struct_debug_ = crate::path::struct_debug_(meta.vc_reflect_path());
    quote! {
        #[inline]
        fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            #struct_debug_(self, f)
        }
    }
}
