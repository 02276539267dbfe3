//! Read access to reflected data, by kind.
//!
//! ## Menu
//!
//! The following are subtraits of [`Reflect`], each exposing the data of one
//! [`ReflectKind`](crate::info::ReflectKind):
//!
//! - [`Struct`]: For struct (e.g. `A{ .. }`), named fields in declaration order.
//! - [`Array`]: For array (e.g. `[i32; 5]`).
//! - [`List`]: For list-like (e.g. `Vec<i32>`).
//! - [`Set`]: For set-like (e.g. `HashSet<i32>`).
//! - [`Map`]: For map-like (e.g. `BTreeMap<i32, f32>`).
//! - [`Optional`]: For a value that may be absent (e.g. `Option<T>`).
//!
//! [`ReflectRef`] is the borrowed dispatch over all of them, obtained from
//! [`Reflect::reflect_ref`].
//!
//! [`Reflect`]: crate::Reflect
//! [`Reflect::reflect_ref`]: crate::Reflect::reflect_ref

// -----------------------------------------------------------------------------
// Modules

mod array_ops;
mod clone_error;
mod kind;
mod list_ops;
mod map_ops;
mod optional_ops;
mod set_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use clone_error::ReflectCloneError;

pub use kind::ReflectRef;

pub use array_ops::{Array, ArrayItemIter};
pub use list_ops::{List, ListItemIter};
pub use map_ops::Map;
pub use optional_ops::Optional;
pub use set_ops::Set;
pub use struct_ops::{Struct, StructFieldIter};
