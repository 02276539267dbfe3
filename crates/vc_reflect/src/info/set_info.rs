use core::any::{Any, TypeId};

use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::Set;

/// A container for compile-time set-like info, e.g. `BTreeSet<T>`.
#[derive(Clone, Debug)]
pub struct SetInfo {
    ty: Type,
    value_id: TypeId,
    // `TypeInfo` is created on the first visit, use function pointers to delay it.
    value_info: fn() -> &'static TypeInfo,
}

impl SetInfo {
    impl_type_fn!(ty);

    /// Creates a new [`SetInfo`].
    #[inline]
    pub const fn new<TSet: Set + TypePath, TValue: Reflect + Typed>() -> Self {
        Self {
            ty: Type::of::<TSet>(),
            value_id: TypeId::of::<TValue>(),
            value_info: TValue::type_info,
        }
    }

    /// Returns the [`TypeId`] of the element type.
    #[inline]
    pub const fn value_id(&self) -> TypeId {
        self.value_id
    }

    /// Check if the element type is `T`.
    #[inline]
    pub fn value_is<T: Any>(&self) -> bool {
        self.value_id == TypeId::of::<T>()
    }

    /// Returns the [`TypeInfo`] of the element type.
    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }
}
