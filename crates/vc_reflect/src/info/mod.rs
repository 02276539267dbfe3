//! Compile-time type information.
//!
//! ## Menu
//!
//! - [`TypePath`]: A trait for obtaining type names, without prefix `::`.
//!     - [`type_path`](TypePath::type_path): Full name, a fixed and unique identifier for the type.
//!     - [`type_name`](TypePath::type_name): The name without module path, may be duplicated.
//!     - [`type_ident`](TypePath::type_ident): The name without generics and module path.
//!     - [`module_path`](TypePath::module_path): optional module path(e.g. "vc_reflect::info").
//!
//! - [`DynamicTypePath`]: Provide dynamic dispatch for `TypePath`.
//!
//! - [`Type`]: A `TypeId` plus the type path.
//!
//! - [`TypeInfo`]: The shape of a reflected type, one of:
//!     - [`StructInfo`]: named fields in declaration order, with an optional base field.
//!     - [`ArrayInfo`]: fixed length sequences (e.g. `[i32; 5]`).
//!     - [`ListInfo`]: growable sequences (e.g. `Vec<i32>`).
//!     - [`SetInfo`]: unique collections (e.g. `HashSet<T>`).
//!     - [`MapInfo`]: key-value collections (e.g. `BTreeMap<K, V>`).
//!     - [`OptionalInfo`]: a value that may be absent (`Option<T>`).
//!     - [`OpaqueInfo`]: types with no visible structure (e.g. `i32`, `String`),
//!       annotated with their [`ValueTraits`].
//!
//! - [`NamedField`]: a struct field, with name and lazily created type info.
//!
//! - [`ReflectKind`]: a pure discriminator of the shapes above.
//!
//! - [`Typed`]: A trait for obtaining `TypeInfo` data.
//!
//! - [`DynamicTyped`]: Provide dynamic dispatch for `Typed`.

// -----------------------------------------------------------------------------
// Modules

mod array_info;
mod docs_macro;
mod field_info;
mod list_info;
mod map_info;
mod opaque_info;
mod optional_info;
mod set_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

use docs_macro::impl_docs_fn;

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use array_info::ArrayInfo;
pub use field_info::NamedField;
pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use opaque_info::{OpaqueInfo, ValueTraits};
pub use optional_info::OptionalInfo;
pub use set_info::SetInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};
