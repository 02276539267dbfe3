mod common;
pub use common::*;

mod clone_item;
pub use clone_item::clone_item;

mod simple_type;
pub(crate) use simple_type::{impl_float_type_reflect, impl_simple_type_reflect};

mod hash_map;
pub(crate) use hash_map::impl_reflect_for_hashmap;

mod hash_set;
pub(crate) use hash_set::impl_reflect_for_hashset;
