use core::any::{Any, TypeId};

use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::Optional;

/// A container for compile-time info of a value that may be absent, e.g. `Option<T>`.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::Typed;
///
/// let info = <Option<u8> as Typed>::type_info().as_optional().unwrap();
/// assert!(info.some_is::<u8>());
/// ```
#[derive(Clone, Debug)]
pub struct OptionalInfo {
    ty: Type,
    some_id: TypeId,
    // `TypeInfo` is created on the first visit, use function pointers to delay it.
    some_info: fn() -> &'static TypeInfo,
}

impl OptionalInfo {
    impl_type_fn!(ty);

    /// Creates a new [`OptionalInfo`].
    #[inline]
    pub const fn new<TOptional: Optional + TypePath, TSome: Reflect + Typed>() -> Self {
        Self {
            ty: Type::of::<TOptional>(),
            some_id: TypeId::of::<TSome>(),
            some_info: TSome::type_info,
        }
    }

    /// Returns the [`TypeId`] of the present value.
    #[inline]
    pub const fn some_id(&self) -> TypeId {
        self.some_id
    }

    /// Check if the present value type is `T`.
    #[inline]
    pub fn some_is<T: Any>(&self) -> bool {
        self.some_id == TypeId::of::<T>()
    }

    /// Returns the [`TypeInfo`] of the present value.
    #[inline]
    pub fn some_info(&self) -> &'static TypeInfo {
        (self.some_info)()
    }
}
