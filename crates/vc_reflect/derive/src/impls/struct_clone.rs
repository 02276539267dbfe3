use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;
use crate::path::fp::ResultFP;

/// Generate `Reflect::reflect_clone` tokens for struct.
///
/// - `#[reflect(clone)]`: forwards to `Clone`.
/// - any ignored field: always fails, the field could not be rebuilt.
/// - otherwise: clones field by field through reflection.
pub(crate) fn get_struct_clone_impl(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    if let Some(span) = meta.attrs().avail_traits.clone {
        return super::std_traits::clone_tokens(meta, span);
    }

    let vc_reflect_path = meta.vc_reflect_path();
    let macro_utils_ = crate::path::macro_utils_(vc_reflect_path);
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let reflect_clone_error_ = crate::path::reflect_clone_error_(vc_reflect_path);
    let type_path_ = crate::path::type_path_(vc_reflect_path);
    let clone_item_ = crate::path::clone_item_(vc_reflect_path);

    if info.has_ignored_field() {
        return quote! {
            #[inline]
            fn reflect_clone(&self) -> #ResultFP<#macro_utils_::Box<dyn #reflect_>, #reflect_clone_error_> {
                #ResultFP::Err(#reflect_clone_error_::NotSupport {
                    type_path: #macro_utils_::Cow::Borrowed(<Self as #type_path_>::type_path()),
                })
            }
        };
    }

    let fields = info.active_fields().map(|field| {
        let ty = &field.data.ty;
        let member = field.member();
        quote! {
            #member: #clone_item_::<#ty>(#reflect_::as_reflect(&self.#member), __owner)?,
        }
    });

    quote! {
        fn reflect_clone(&self) -> #ResultFP<#macro_utils_::Box<dyn #reflect_>, #reflect_clone_error_> {
            let __owner = <Self as #type_path_>::type_path();
            #ResultFP::Ok(#macro_utils_::Box::new(Self {
                #(#fields)*
            }))
        }
    }
}
