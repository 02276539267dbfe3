use core::any::{Any, TypeId};

use crate::info::{TypeInfo, Typed, impl_docs_fn};

// -----------------------------------------------------------------------------
// NamedField

/// Information about a named field of a struct.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::{NamedField, ReflectKind};
///
/// let field = NamedField::new::<String>("label");
///
/// assert_eq!(field.name(), "label");
/// assert!(field.type_is::<String>());
/// assert_eq!(field.type_info().kind(), ReflectKind::Opaque);
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
    #[cfg(feature = "reflect_docs")]
    docs: Option<&'static str>,
}

impl NamedField {
    impl_docs_fn!(docs);

    /// Creates a field of type `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            type_info: T::type_info,
            ty_id: TypeId::of::<T>(),
            #[cfg(feature = "reflect_docs")]
            docs: None,
        }
    }

    /// Returns the [`TypeId`] of the field type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the field type is `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`TypeInfo`] of the field type.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}
