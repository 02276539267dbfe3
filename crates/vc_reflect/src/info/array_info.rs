use core::any::{Any, TypeId};

use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::Array;

/// A container for compile-time array info, e.g. `[T; N]`.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::Typed;
///
/// let info = <[u16; 4] as Typed>::type_info().as_array().unwrap();
/// assert_eq!(info.len(), 4);
/// assert!(info.item_is::<u16>());
/// ```
#[derive(Clone, Debug)]
pub struct ArrayInfo {
    ty: Type,
    item_id: TypeId,
    // `TypeInfo` is created on the first visit, use function pointers to delay it.
    item_info: fn() -> &'static TypeInfo,
    len: usize,
}

impl ArrayInfo {
    impl_type_fn!(ty);

    /// Creates a new [`ArrayInfo`] of fixed length `len`.
    #[inline]
    pub const fn new<TArray: Array + TypePath, TItem: Reflect + Typed>(len: usize) -> Self {
        Self {
            ty: Type::of::<TArray>(),
            item_id: TypeId::of::<TItem>(),
            item_info: TItem::type_info,
            len,
        }
    }

    /// Returns the fixed length of the array.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the [`TypeId`] of the item type.
    #[inline]
    pub const fn item_id(&self) -> TypeId {
        self.item_id
    }

    /// Check if the item type is `T`.
    #[inline]
    pub fn item_is<T: Any>(&self) -> bool {
        self.item_id == TypeId::of::<T>()
    }

    /// Returns the [`TypeInfo`] of the item type.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }
}
