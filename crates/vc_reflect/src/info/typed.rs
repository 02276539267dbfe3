use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Automatically implemented by [`#[derive(Reflect)]`](crate::derive::Reflect),
/// allowing access to type information without an instance of the type.
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, info::{Typed, TypeInfo}};
///
/// #[derive(Reflect)]
/// struct Point { x: i32, y: i32 }
///
/// let info: &'static TypeInfo = <Point as Typed>::type_info();
/// assert_eq!(info.as_struct().unwrap().field_len(), 2);
/// ```
///
/// # Manually Impl
///
/// Use [`NonGenericTypeInfoCell`] for plain types and [`GenericTypeInfoCell`]
/// for generic ones, so the information is created once and leaked.
///
/// ```
/// use vc_reflect::impls::GenericTypeInfoCell;
/// use vc_reflect::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
/// # use vc_reflect::impls::concat;
///
/// struct Handle<T>(T);
/// # impl<T: TypePath> TypePath for Handle<T> {
/// #     fn type_path() -> &'static str {
/// #         static CELL: vc_reflect::impls::GenericTypePathCell = vc_reflect::impls::GenericTypePathCell::new();
/// #         CELL.get_or_insert::<Self>(|| concat(&["demo::Handle<", T::type_path(), ">"]))
/// #     }
/// #     fn type_name() -> &'static str { Self::type_path() }
/// #     fn type_ident() -> &'static str { "Handle" }
/// # }
///
/// impl<T: TypePath> Typed for Handle<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert!(Handle::<u8>::type_info().type_is::<Handle<u8>>());
/// assert!(Handle::<u16>::type_info().type_is::<Handle<u16>>());
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: TypePath {
    /// Returns the compile-time info for the underlying type.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`].
///
/// Auto impl for all types that implemented [`Typed`], this is what makes
/// the [`TypeInfo`] of a `&dyn Reflect` reachable.
///
/// # Examples
///
/// ```
/// use vc_reflect::{Reflect, info::{DynamicTyped, ReflectKind}};
///
/// let value: &dyn Reflect = &vec![1_u8, 2];
/// assert_eq!(value.reflect_type_info().kind(), ReflectKind::List);
/// ```
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
