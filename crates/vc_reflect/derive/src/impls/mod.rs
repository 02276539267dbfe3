// -----------------------------------------------------------------------------
// Modules

mod match_reflect;

mod opaque_kind;
mod struct_kind;

mod std_traits;
mod struct_clone;
mod trait_reflect;
mod trait_type_path;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use match_reflect::match_reflect_impls;
pub(crate) use trait_type_path::impl_trait_type_path;

use opaque_kind::impl_opaque;
use struct_clone::get_struct_clone_impl;
use struct_kind::impl_struct;
use trait_reflect::{ReflectMethods, impl_trait_reflect};
use trait_typed::impl_trait_typed;
