//! Provide some tools for parsing attributes.
//!
//! Type level: `#[reflect(type_path = "..", opaque, clone, partial_eq, partial_cmp, hash, debug, full, doc = ..)]`.
//!
//! Field level: `#[reflect(ignore, base, doc = ..)]`.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod flags;
mod reflect_docs;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

use flags::TraitAvailableFlags;
use reflect_docs::ReflectDocs;

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use type_attributes::TypeAttributes;

/// Iterate over the `#[reflect(...)]` attributes, calling `f` for each nested meta.
fn parse_reflect_attrs(
    attrs: &[syn::Attribute],
    mut f: impl FnMut(syn::meta::ParseNestedMeta) -> syn::Result<()>,
) -> syn::Result<()> {
    for attr in attrs {
        match &attr.meta {
            syn::Meta::List(list) if list.path.is_ident(crate::REFLECT_ATTRIBUTE_NAME) => {
                list.parse_nested_meta(&mut f)?;
            }
            meta if meta.path().is_ident(crate::REFLECT_ATTRIBUTE_NAME) => {
                return Err(syn::Error::new_spanned(
                    meta,
                    "expected `#[reflect(...)]`",
                ));
            }
            _ => {}
        }
    }
    Ok(())
}
