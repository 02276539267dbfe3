//! Provide some utilities for implementing reflection traits.
//!
//! - [`concat`]: An efficient string concatenation function.
//! - [`NonGenericTypeInfoCell`]: Used to implement [`Typed`] for non-generic types.
//! - [`GenericTypePathCell`]: Used to implement [`TypePath`] for generic types.
//! - [`GenericTypeInfoCell`]: Used to implement [`Typed`] for generic types.
//! - [`clone_item`]: Used to implement [`Reflect::reflect_clone`] for containers.
//! - `xxx_partial_eq`: Used to implement [`Reflect::reflect_partial_eq`] (e.g. [`list_partial_eq`]).
//! - `xxx_hash`: Used to implement [`Reflect::reflect_hash`] (e.g. [`list_hash`]).
//! - `xxx_debug`: Used to implement [`Reflect::reflect_debug`] (e.g. [`list_debug`]).
//!
//! ## Implemented Menu
//!
//! - basic:
//!     - `bool`, `char`, `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`, `()`
//!     - `[T; N]`
//!     - `&'static str`
//! - core:
//!     - `Option<T>`
//! - alloc:
//!     - `String`, `Vec<T>`, `VecDeque<T>`
//!     - `BTreeMap<K, V>`, `BTreeSet<T>`
//! - std:
//!     - `HashMap<K, V, S>`, `HashSet<T, S>`
//! - vc_utils:
//!     - `HashMap` `HashSet` (`hashbrown` with any supported hash state)
//!
//! [`Reflect::reflect_partial_eq`]: crate::Reflect::reflect_partial_eq
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
//! [`Reflect::reflect_hash`]: crate::Reflect::reflect_hash
//! [`Reflect::reflect_clone`]: crate::Reflect::reflect_clone
//! [`TypePath`]: crate::info::TypePath
//! [`Typed`]: crate::info::Typed

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod utils;

mod alloc;
mod core;
mod native;
mod std;
mod vc_utils;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};

pub use utils::*;

/// An efficient string concatenation function.
///
/// This is usually used for the implementation of `TypePath`.
///
/// # Example
///
/// ```
/// use vc_reflect::impls;
///
/// let s = impls::concat(&["module", "::", "name", "<", "T" , ">"]);
///
/// assert_eq!(s.capacity(), 15);
/// ```
///
/// Inline is prohibited here to reduce compilation time.
#[inline(never)]
pub fn concat(arr: &[&str]) -> ::alloc::string::String {
    let len = arr.iter().map(|item| item.len()).sum();
    let mut res = ::alloc::string::String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}
