//! Canonical forms of reflected values.
//!
//! A [`Normalizer`] turns any value implementing
//! [`Reflect`](vc_reflect::Reflect) into a [`Normal`]: a tree of
//! self-describing leaves, ordered sequences, unordered sets, mappings
//! and named fields. Values with equal normal forms are considered the
//! same, whatever their hashing or insertion order.
//!
//! Conversion is driven by [`Rule`]s. A rule is registered explicitly,
//! produced on demand by the first matching [`Producer`], or built by the
//! fallback, which decomposes structs through the [`FieldMapper`].
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use vc_normal::{Normal, Normalizer};
//! use vc_reflect::derive::Reflect;
//!
//! #[derive(Reflect)]
//! struct Stock {
//!     item: String,
//!     owner: Option<String>,
//!     counts: BTreeMap<u8, u32>,
//! }
//!
//! let stock = Stock {
//!     item: "pen".into(),
//!     owner: None,
//!     counts: [(1, 10), (2, 0)].into(),
//! };
//!
//! let normal = Normalizer::new().normal(&stock).unwrap();
//! assert!(normal.get("owner").unwrap().is_absent());
//! assert_eq!(normal.to_string(), r#"{counts: {1: 10, 2: 0}, item: "pen", owner: absent}"#);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern crates

extern crate alloc;
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod builder;
mod cache;
mod error;
mod fields;
mod normal;
mod normalizer;
mod producers;
mod reduce;
mod rule;
mod void;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use builder::NormalizerBuilder;
pub use error::NormalError;
pub use fields::{FieldMapper, Member};
pub use normal::{Normal, NormalKind, Value};
pub use normalizer::Normalizer;
pub use producers::{Factory, Predicate, Producer, Producers};
pub use rule::Rule;
pub use void::Void;
