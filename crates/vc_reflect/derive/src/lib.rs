//! See following macros:
//!
//! - [`Reflect`](derive@Reflect)
//! - [`TypePath`](derive@TypePath)
//! - [`impl_type_path`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Full Reflection Derivation
///
/// `#[derive(Reflect)]` implements `TypePath`, `Typed` and `Reflect`,
/// plus `Struct` for structs with named fields (or none).
///
/// Tuple structs, enums and unions are rejected unless marked `opaque`.
///
/// ## Custom Type Path
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "billing::Invoice")]
/// struct Invoice { /* ... */ }
/// ```
///
/// The path must have a module and must not start with `::`.
/// Generic parameters are appended automatically.
///
/// ## Opaque Types
///
/// `opaque` hides the content of the type. Nothing is inspected, so every
/// value operation relies on the standard traits declared below.
///
/// ```rust, ignore
/// #[derive(Reflect, Clone, PartialEq, Hash, Debug)]
/// #[reflect(opaque, clone, partial_eq, hash, debug)]
/// struct Token { /* ... */ }
/// ```
///
/// ## Standard Traits
///
/// The macro can not see trait impls, declare them with flags:
///
/// - `clone`: `Clone`
/// - `partial_eq`: `PartialEq`
/// - `partial_cmp`: `PartialOrd`
/// - `hash`: `Hash`
/// - `debug`: `Debug`
/// - `full`: all of the above
///
/// For structs, missing flags fall back to field-wise implementations,
/// except `partial_cmp`. For opaque types, the flags are recorded in the
/// `ValueTraits` of the `OpaqueInfo`.
///
/// ## Field Attributes
///
/// - `#[reflect(ignore)]`: the field is invisible to reflection.
///   `reflect_clone` fails unless `clone` is declared.
/// - `#[reflect(base)]`: the field is the embedded ancestor of the struct,
///   recorded in `StructInfo::base_index`. At most one per struct.
///
/// ## Documentation Reflection
///
/// With the `reflect_docs` feature, `#[doc = "..."]` attributes are
/// collected into the type information. `#[reflect(doc = "...")]` replaces
/// them, `#[reflect(doc = false)]` disables them.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_full_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}

/// # Derive TypePath Trait
///
/// Only implements `TypePath`, accepts the same `type_path` attribute as
/// [`derive Reflect`](derive_full_reflect).
///
/// ```rust, ignore
/// #[derive(TypePath)]
/// struct A;
///
/// #[derive(TypePath)]
/// #[reflect(type_path = "crate_name::foo::C")]
/// struct C<T>(T);
/// ```
#[proc_macro_derive(TypePath, attributes(reflect))]
pub fn derive_type_path(input: TokenStream) -> TokenStream {
    use crate::derive_data::{ReflectMeta, TypeAttributes, TypeParser};

    let ast: DeriveInput = parse_macro_input!(input as DeriveInput);

    let type_attributes = match TypeAttributes::parse_attrs(&ast.attrs) {
        Ok(v) => v,
        Err(err) => return err.into_compile_error().into(),
    };

    let type_parser =
        TypeParser::new_local(&ast.ident, type_attributes.type_path.clone(), &ast.generics);

    let meta = ReflectMeta::new(type_attributes, type_parser);
    let type_path_impls = impls::impl_trait_type_path(&meta);

    quote! {
        const _: () = {
            #type_path_impls
        };
    }
    .into()
}

/// Implements `TypePath` for a foreign type.
///
/// Syntax: `(in module_path as Alias) ::full::path::Type<T>`.
///
/// Paths starting with `::` can not be used for primitive types. The path
/// must resolve to the type from the invoking crate.
///
/// ```ignore
/// // `u64`
/// impl_type_path!(u64);
///
/// // `alloc::string::String`, the leading `::` is required and removed.
/// impl_type_path!(::alloc::string::String);
///
/// // `alloc::vec::Vec<T>`
/// impl_type_path!(::alloc::vec::Vec<T>);
///
/// // `hashbrown::HashMap<K, V, S>`
/// impl_type_path!((in hashbrown as HashMap) ::vc_utils::hash::hashbrown::HashMap<K, V, S>);
/// ```
#[proc_macro]
pub fn impl_type_path(input: TokenStream) -> TokenStream {
    use crate::derive_data::{ReflectMeta, ReflectTypePathParser, TypeAttributes, TypeParser};

    let ReflectTypePathParser {
        custom_path,
        type_ident,
        type_path,
        generics,
    } = parse_macro_input!(input with ReflectTypePathParser::parse);

    let parser = TypeParser::new_foreign(&type_ident, &type_path, custom_path, &generics);

    let meta = ReflectMeta::new(TypeAttributes::default(), parser);
    let assert_tokens = meta.assert_ident_tokens();

    let type_path_impls = impls::impl_trait_type_path(&meta);

    quote! {
        const _: () = {
            #assert_tokens
            #type_path_impls
        };
    }
    .into()
}
