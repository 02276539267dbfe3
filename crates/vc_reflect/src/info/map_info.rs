use core::any::{Any, TypeId};

use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::Map;

/// A container for compile-time map-like info, e.g. `HashMap<K, V>`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_reflect::info::Typed;
///
/// let info = <BTreeMap<String, i64> as Typed>::type_info().as_map().unwrap();
/// assert!(info.key_is::<String>());
/// assert!(info.value_is::<i64>());
/// ```
#[derive(Clone, Debug)]
pub struct MapInfo {
    ty: Type,
    key_id: TypeId,
    value_id: TypeId,
    // `TypeInfo` is created on the first visit, use function pointers to delay it.
    key_info: fn() -> &'static TypeInfo,
    value_info: fn() -> &'static TypeInfo,
}

impl MapInfo {
    impl_type_fn!(ty);

    /// Creates a new [`MapInfo`].
    #[inline]
    pub const fn new<TMap: Map + TypePath, TKey: Reflect + Typed, TValue: Reflect + Typed>()
    -> Self {
        Self {
            ty: Type::of::<TMap>(),
            key_id: TypeId::of::<TKey>(),
            value_id: TypeId::of::<TValue>(),
            key_info: TKey::type_info,
            value_info: TValue::type_info,
        }
    }

    /// Returns the [`TypeId`] of the key type.
    #[inline]
    pub const fn key_id(&self) -> TypeId {
        self.key_id
    }

    /// Check if the key type is `T`.
    #[inline]
    pub fn key_is<T: Any>(&self) -> bool {
        self.key_id == TypeId::of::<T>()
    }

    /// Returns the [`TypeId`] of the value type.
    #[inline]
    pub const fn value_id(&self) -> TypeId {
        self.value_id
    }

    /// Check if the value type is `T`.
    #[inline]
    pub fn value_is<T: Any>(&self) -> bool {
        self.value_id == TypeId::of::<T>()
    }

    /// Returns the [`TypeInfo`] of the key type.
    #[inline]
    pub fn key_info(&self) -> &'static TypeInfo {
        (self.key_info)()
    }

    /// Returns the [`TypeInfo`] of the value type.
    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }
}
