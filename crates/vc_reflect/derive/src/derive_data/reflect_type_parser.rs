use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{
    GenericParam, Generics, Ident, LitStr, Path, TypeParam, punctuated::Punctuated,
    spanned::Spanned,
};

use crate::utils::StringExpr;

/// Where the type path strings of a type come from.
///
/// Only a part of [`ReflectMeta`](crate::derive_data::ReflectMeta).
pub(crate) enum TypeParser<'a> {
    /// Types that can be named from any scope without a module (e.g. `bool`).
    Primitive(&'a Ident),
    /// A type defined in the calling crate, reachable with its ident.
    ///
    /// The module path comes from [`module_path!()`](module_path)
    /// unless a custom path is given.
    Local {
        ident: &'a Ident,
        custom_path: Option<Path>,
        generics: &'a Generics,
    },
    /// A type of another crate, written as `::my_crate::foo::Bar`.
    Foreign {
        ident: &'a Ident,
        path: &'a Path,
        custom_path: Option<Path>,
        generics: &'a Generics,
    },
}

impl core::fmt::Debug for TypeParser<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.real_ident(), f)
    }
}

impl<'a> TypeParser<'a> {
    pub fn new_local(ident: &'a Ident, custom_path: Option<Path>, generics: &'a Generics) -> Self {
        Self::Local {
            ident,
            custom_path,
            generics,
        }
    }

    /// See [`impl_type_path`](crate::impl_type_path).
    pub fn new_foreign(
        ident: &'a Ident,
        path: &'a Path,
        custom_path: Option<Path>,
        generics: &'a Generics,
    ) -> Self {
        if custom_path.is_none() && path.leading_colon.is_none() {
            Self::Primitive(ident)
        } else {
            Self::Foreign {
                ident,
                path,
                custom_path,
                generics,
            }
        }
    }

    pub(super) fn generics(&self) -> &'a Generics {
        // A constant, so the reference lives for `'a`.
        const EMPTY_GENERICS: &Generics = &Generics {
            lt_token: None,
            params: Punctuated::new(),
            gt_token: None,
            where_clause: None,
        };

        match self {
            Self::Local { generics, .. } | Self::Foreign { generics, .. } => generics,
            Self::Primitive(_) => EMPTY_GENERICS,
        }
    }

    /// Whether the type has generic parameters other than lifetimes.
    pub(super) fn impl_with_generic(&self) -> bool {
        self.generics()
            .params
            .iter()
            .any(|param| !matches!(param, GenericParam::Lifetime(_)))
    }

    /// The name used in `impl ... for #real_ident {...}`.
    pub(super) fn real_ident(&self) -> TokenStream {
        match self {
            Self::Local { ident, .. } | Self::Primitive(ident) => ident.to_token_stream(),
            Self::Foreign { path, .. } => path.to_token_stream(),
        }
    }

    /// The path used to build strings, custom one first.
    fn string_path(&self) -> Option<&Path> {
        match self {
            Self::Local { custom_path, .. } => custom_path.as_ref(),
            Self::Foreign {
                path, custom_path, ..
            } => Some(custom_path.as_ref().unwrap_or(path)),
            Self::Primitive(_) => None,
        }
    }

    fn ident(&self) -> &Ident {
        let last = self
            .string_path()
            .and_then(|path| path.segments.last())
            .map(|segment| &segment.ident);
        match self {
            Self::Local { ident, .. } | Self::Foreign { ident, .. } | Self::Primitive(ident) => {
                last.unwrap_or(ident)
            }
        }
    }

    pub(super) fn module_path(&self) -> Option<StringExpr> {
        if let Some(path) = self.string_path() {
            let count = path.segments.len().saturating_sub(1);
            if count == 0 {
                return None;
            }
            let module = path
                .segments
                .iter()
                .take(count)
                .map(|segment| segment.ident.to_string())
                .collect::<Vec<_>>()
                .join("::");

            return Some(StringExpr::Const(
                LitStr::new(&module, path.span()).to_token_stream(),
            ));
        }

        match self {
            Self::Local { .. } => Some(StringExpr::Const(quote! {
                ::core::module_path!()
            })),
            _ => None,
        }
    }

    pub(super) fn type_ident(&self) -> StringExpr {
        StringExpr::from(self.ident())
    }

    /// Joins type and const parameters with `", "`.
    ///
    /// `ty_param_fn` maps each type parameter to its string.
    fn reduce_generics(
        generics: &Generics,
        mut ty_param_fn: impl FnMut(&TypeParam) -> StringExpr,
        vc_reflect_path: &Path,
    ) -> StringExpr {
        let macro_utils_ = crate::path::macro_utils_(vc_reflect_path);

        let mut params = generics.params.iter().filter_map(|param| match param {
            GenericParam::Type(type_param) => Some(ty_param_fn(type_param)),
            GenericParam::Const(const_param) => {
                let ident = &const_param.ident;
                let ty = &const_param.ty;
                Some(StringExpr::Owned(quote! {
                    <#ty as #macro_utils_::ToString>::to_string(&#ident)
                }))
            }
            GenericParam::Lifetime(_) => None,
        });

        let first = params.next().into_iter();
        StringExpr::concat(
            first.chain(params.flat_map(|x| [StringExpr::from_str(", "), x])),
            vc_reflect_path,
        )
    }

    /// `"Option<PhantomData>"` for `core::option::Option<core::marker::PhantomData>`.
    pub(super) fn type_name(&self, vc_reflect_path: &Path) -> StringExpr {
        let type_ident = self.type_ident();
        if !self.impl_with_generic() {
            return type_ident;
        }

        let type_path_ = crate::path::type_path_(vc_reflect_path);
        let generics = Self::reduce_generics(
            self.generics(),
            |TypeParam { ident, .. }| {
                StringExpr::Borrowed(quote!(<#ident as #type_path_>::type_name()))
            },
            vc_reflect_path,
        );
        StringExpr::concat(
            [
                type_ident,
                StringExpr::from_str("<"),
                generics,
                StringExpr::from_str(">"),
            ],
            vc_reflect_path,
        )
    }

    /// `"core::option::Option<core::marker::PhantomData>"` for `Option<PhantomData>`.
    pub(super) fn type_path(&self, vc_reflect_path: &Path) -> StringExpr {
        let mut parts = Vec::with_capacity(6);
        if let Some(module_path) = self.module_path() {
            parts.push(module_path);
            parts.push(StringExpr::from_str("::"));
        }
        parts.push(self.type_ident());

        if self.impl_with_generic() {
            let type_path_ = crate::path::type_path_(vc_reflect_path);
            parts.push(StringExpr::from_str("<"));
            parts.push(Self::reduce_generics(
                self.generics(),
                |TypeParam { ident, .. }| {
                    StringExpr::Borrowed(quote!(<#ident as #type_path_>::type_path()))
                },
                vc_reflect_path,
            ));
            parts.push(StringExpr::from_str(">"));
        }

        if parts.len() == 1 {
            return parts.remove(0);
        }
        StringExpr::concat(parts, vc_reflect_path)
    }
}
