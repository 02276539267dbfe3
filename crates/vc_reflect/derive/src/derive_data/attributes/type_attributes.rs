use proc_macro2::Span;
use syn::{Attribute, Lit, LitStr, Path, spanned::Spanned};

use super::{ReflectDocs, TraitAvailableFlags, parse_reflect_attrs};

/// Attributes on the type itself.
///
/// ```ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "billing::Invoice", clone, hash)]
/// struct Invoice { /* ... */ }
/// ```
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// Full custom path, including the type ident.
    pub type_path: Option<Path>,
    /// Treat the type as opaque, even if it is a struct.
    pub is_opaque: Option<Span>,
    pub avail_traits: TraitAvailableFlags,
    pub docs: ReflectDocs,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self {
            docs: ReflectDocs::from_doc_attrs(attrs),
            ..Self::default()
        };

        parse_reflect_attrs(attrs, |meta| {
            if meta.path.is_ident("type_path") {
                let lit: LitStr = meta.value()?.parse()?;
                let path = lit.parse_with(Path::parse_mod_style)?;
                if path.leading_colon.is_some() || path.segments.len() < 2 {
                    return Err(meta.error(
                        "expected a path like `my_crate::module::Type`, without leading `::`",
                    ));
                }
                res.type_path = Some(path);
                return Ok(());
            }
            if meta.path.is_ident("doc") {
                let lit: Lit = meta.value()?.parse()?;
                return res.docs.parse_custom_docs(&lit);
            }
            if meta.path.is_ident("opaque") {
                res.is_opaque = Some(meta.path.span());
                return Ok(());
            }
            if let Some(ident) = meta.path.get_ident()
                && res.avail_traits.parse_flag(ident)
            {
                return Ok(());
            }
            Err(meta.error("unsupported reflect attribute"))
        })?;

        Ok(res)
    }
}
