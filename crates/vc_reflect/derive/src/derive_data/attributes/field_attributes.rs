use proc_macro2::Span;
use syn::{Attribute, Lit, spanned::Spanned};

use super::{ReflectDocs, parse_reflect_attrs};

/// Attributes on a struct field.
///
/// - `ignore`: the field is invisible to reflection.
/// - `base`: the field is the embedded ancestor of the struct.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub ignore: Option<Span>,
    pub base: Option<Span>,
    pub docs: ReflectDocs,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self {
            docs: ReflectDocs::from_doc_attrs(attrs),
            ..Self::default()
        };

        parse_reflect_attrs(attrs, |meta| {
            if meta.path.is_ident("ignore") {
                res.ignore = Some(meta.path.span());
                Ok(())
            } else if meta.path.is_ident("base") {
                res.base = Some(meta.path.span());
                Ok(())
            } else if meta.path.is_ident("doc") {
                let lit: Lit = meta.value()?.parse()?;
                res.docs.parse_custom_docs(&lit)
            } else {
                Err(meta.error("unsupported reflect field attribute"))
            }
        })?;

        if let (Some(_), Some(span)) = (res.ignore, res.base) {
            return Err(syn::Error::new(span, "an ignored field can not be the base"));
        }

        Ok(res)
    }
}
