//! Read-only runtime reflection.
//!
//! Every reflectable type implements [`Reflect`], [`Typed`](info::Typed)
//! and [`TypePath`](info::TypePath). The [`TypeInfo`](info::TypeInfo) of a
//! type describes its *kind* (struct, list, array, map, set, optional or
//! opaque) along with kind specific metadata, and the traits in [`ops`]
//! give access to the data behind a `&dyn Reflect`.
//!
//! ```
//! use vc_reflect::{Reflect, derive::Reflect, info::Typed, ops::Struct};
//!
//! #[derive(Reflect)]
//! struct Order {
//!     count: u32,
//!     label: String,
//! }
//!
//! let order = Order { count: 2, label: "pens".into() };
//! let value: &dyn Reflect = &order;
//!
//! let fields = value.reflect_ref().as_struct().unwrap();
//! assert_eq!(fields.get_field::<u32>("count"), Some(&2));
//! assert_eq!(Order::type_info().as_struct().unwrap().field_len(), 2);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macros emit `::vc_reflect::` paths, the alias makes them
// usable inside this crate as well.
extern crate self as vc_reflect;

// -----------------------------------------------------------------------------
// Extern crates

extern crate alloc;
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use reflection::{Reflect, reflect_hasher};
pub use vc_reflect_derive as derive;
