use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, ImplGenerics, Path, Type, TypeGenerics};

use super::{TypeAttributes, TypeParser};
use crate::utils::StringExpr;

/// Everything known about the type, independent of its kind.
pub(crate) struct ReflectMeta<'a> {
    vc_reflect_path: Path,
    attrs: TypeAttributes,
    type_parser: TypeParser<'a>,
    // Field types that mention a type parameter, in declaration order.
    active_types: Vec<Type>,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("vc_reflect_path", &self.vc_reflect_path.to_token_stream())
            .field("type_parser", &self.type_parser)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, type_parser: TypeParser<'a>) -> Self {
        Self {
            attrs,
            type_parser,
            vc_reflect_path: crate::path::vc_reflect(),
            active_types: Vec::new(),
        }
    }

    /// Records the field types, only those using a type parameter are kept.
    pub(super) fn set_active_types<'t>(&mut self, types: impl IntoIterator<Item = &'t Type>) {
        let params = self
            .generics()
            .type_params()
            .map(|param| param.ident.clone())
            .collect::<Vec<syn::Ident>>();
        if params.is_empty() {
            return;
        }

        for ty in types {
            if mentions_any_ident(&params, ty.to_token_stream()) && !self.active_types.contains(ty) {
                self.active_types.push(ty.clone());
            }
        }
    }

    #[inline]
    pub fn vc_reflect_path(&self) -> &Path {
        &self.vc_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    /// `.with_docs(::core::option::Option::Some("..."))`, or nothing.
    #[inline]
    pub fn with_docs_expression(&self) -> TokenStream {
        self.attrs.docs.get_expression_with()
    }

    #[inline]
    pub fn generics(&self) -> &'a Generics {
        self.type_parser.generics()
    }

    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.type_parser.impl_with_generic()
    }

    #[inline]
    pub fn real_ident(&self) -> TokenStream {
        self.type_parser.real_ident()
    }

    #[inline]
    pub fn module_path(&self) -> Option<StringExpr> {
        self.type_parser.module_path()
    }

    #[inline]
    pub fn type_ident(&self) -> StringExpr {
        self.type_parser.type_ident()
    }

    #[inline]
    pub fn type_name(&self) -> StringExpr {
        self.type_parser.type_name(&self.vc_reflect_path)
    }

    #[inline]
    pub fn type_path(&self) -> StringExpr {
        self.type_parser.type_path(&self.vc_reflect_path)
    }

    /// For primitives, make sure the ident names a type in debug builds.
    pub fn assert_ident_tokens(&self) -> TokenStream {
        #[cfg(debug_assertions)]
        if let TypeParser::Primitive(_) = &self.type_parser {
            let ident = self.real_ident();
            return quote! {
                mod __assert_primitive_ident {
                    type AssertIdentValidity = #ident;
                }
            };
        }
        crate::utils::empty()
    }

    /// Returns `impl_generics`, `ty_generics` and the full where clause.
    ///
    /// ```ignore
    /// let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);
    ///
    /// quote! {
    ///     impl #impl_generics Trait for #real_ident #ty_generics #where_clause { /* ... */ }
    /// }
    /// ```
    ///
    /// Bounds added to the user's where clause:
    ///
    /// - `Self: 'static` if there are lifetimes, `Self: Any + Send + Sync` if
    ///   there are type parameters.
    /// - `T: TypePath` for every type parameter.
    /// - `FieldTy: Reflect + Typed` for field types using a type parameter,
    ///   only when `add_reflect_typed` is set. `TypePath` does not need it.
    pub fn split_generics(
        &self,
        add_reflect_typed: bool,
    ) -> (ImplGenerics<'a>, TypeGenerics<'a>, TokenStream) {
        use crate::path::fp::{AnyFP, SendFP, SyncFP};

        let generics = self.generics();
        let mut where_tokens = quote! { where };

        if generics.type_params().next().is_some() {
            where_tokens.extend(quote! { Self: #AnyFP + #SendFP + #SyncFP, });
        } else if generics.lifetimes().next().is_some() {
            where_tokens.extend(quote! { Self: 'static, });
        }

        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            where_tokens.extend(quote! { #(#predicates,)* });
        }

        let type_path_ = crate::path::type_path_(&self.vc_reflect_path);
        for param in generics.type_params() {
            let ident = &param.ident;
            where_tokens.extend(quote! { #ident: #type_path_, });
        }

        if add_reflect_typed {
            let reflect_ = crate::path::reflect_(&self.vc_reflect_path);
            let typed_ = crate::path::typed_(&self.vc_reflect_path);
            for ty in &self.active_types {
                where_tokens.extend(quote! { #ty: #reflect_ + #typed_, });
            }
        }

        (impl_generics, ty_generics, where_tokens)
    }

    /// `ValueTraits` expression of the declared flags.
    pub fn value_traits_tokens(&self) -> TokenStream {
        let value_traits_ = crate::path::value_traits_(&self.vc_reflect_path);
        let flags = self
            .attrs
            .avail_traits
            .value_trait_names()
            .map(|name| syn::Ident::new(name, proc_macro2::Span::call_site()));

        quote! {
            #value_traits_::empty() #( .union(#value_traits_::#flags) )*
        }
    }

    /// `TypeInfo` of an opaque type.
    pub fn to_info_tokens(&self) -> TokenStream {
        let opaque_info_ = crate::path::opaque_info_(&self.vc_reflect_path);
        let type_info_ = crate::path::type_info_(&self.vc_reflect_path);
        let traits = self.value_traits_tokens();
        let with_docs = self.with_docs_expression();

        quote! {
            #type_info_::Opaque(
                #opaque_info_::new::<Self>()
                    .with_traits(#traits)
                    #with_docs
            )
        }
    }
}

/// Do any of `idents` appear in `tokens`?
fn mentions_any_ident(idents: &[syn::Ident], tokens: TokenStream) -> bool {
    tokens.into_iter().any(|tree| match tree {
        proc_macro2::TokenTree::Ident(ident) => idents.contains(&ident),
        proc_macro2::TokenTree::Group(group) => mentions_any_ident(idents, group.stream()),
        _ => false,
    })
}
