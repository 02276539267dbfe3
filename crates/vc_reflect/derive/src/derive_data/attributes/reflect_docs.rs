use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Expr, ExprLit, Lit, Meta};

use crate::path::fp::OptionFP;

/// The documentation of a type or field, if any.
///
/// By default, this collects `#[doc = "..."]` (including `/// ...`).
/// The first `#[reflect(doc = "...")]` switches to custom documentation,
/// and `#[reflect(doc = false)]` disables it.
///
/// Nothing is collected when the `reflect_docs` feature is disabled.
#[derive(Debug)]
pub(crate) struct ReflectDocs {
    enabled: bool,
    is_custom: bool,
    docs: Vec<String>,
}

impl Default for ReflectDocs {
    #[inline]
    fn default() -> Self {
        Self {
            enabled: cfg!(feature = "reflect_docs"),
            is_custom: false,
            docs: Vec::new(),
        }
    }
}

impl ReflectDocs {
    /// Collect `#[doc = "..."]` attributes.
    ///
    /// Must run before any `#[reflect(doc = ...)]` is parsed.
    pub fn from_doc_attrs(attrs: &[Attribute]) -> Self {
        let mut res = Self::default();
        if !res.enabled {
            return res;
        }
        for attr in attrs {
            // `#[doc = include_str!(..)]` and friends are skipped.
            if let Meta::NameValue(pair) = &attr.meta
                && pair.path.is_ident("doc")
                && let Expr::Lit(ExprLit {
                    lit: Lit::Str(lit_str),
                    ..
                }) = &pair.value
            {
                res.docs.push(lit_str.value());
            }
        }
        res
    }

    /// Parse the value of `#[reflect(doc = ...)]`.
    pub fn parse_custom_docs(&mut self, lit: &Lit) -> syn::Result<()> {
        match lit {
            Lit::Str(lit_str) => {
                if !self.is_custom {
                    self.docs.clear();
                    self.is_custom = true;
                }
                self.docs.push(lit_str.value());
                Ok(())
            }
            Lit::Bool(lit_bool) if !lit_bool.value() => {
                self.enabled = false;
                self.docs.clear();
                Ok(())
            }
            _ => Err(syn::Error::new(
                lit.span(),
                "expected a string or `false` literal",
            )),
        }
    }

    fn doc_string(&self) -> Option<String> {
        if !self.enabled {
            return None;
        }
        let joined = self
            .docs
            .iter()
            .map(|line| line.strip_prefix(' ').unwrap_or(line))
            .collect::<Vec<&str>>()
            .join("\n");

        (!joined.trim().is_empty()).then_some(joined)
    }

    /// Returns `.with_docs(Some("..."))`, or nothing if there are no docs.
    pub fn get_expression_with(&self) -> TokenStream {
        match self.doc_string() {
            Some(doc) => quote! {
                .with_docs(#OptionFP::Some(#doc))
            },
            None => crate::utils::empty(),
        }
    }
}
