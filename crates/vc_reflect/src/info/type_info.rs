use core::{error, fmt};

use crate::info::{ArrayInfo, ListInfo, MapInfo, SetInfo};
use crate::info::{OpaqueInfo, OptionalInfo, StructInfo, Type, ValueTraits};

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected type.
///
/// Each kind corresponds to a specific reflection trait,
/// such as `Struct` or `List`, which itself corresponds
/// to the kind or structure of a type.
///
/// A [`ReflectKind`] is obtained via [`Reflect::reflect_kind`],
/// [`ReflectRef::kind`] or [`TypeInfo::kind`].
///
/// [`Reflect::reflect_kind`]: crate::Reflect::reflect_kind
/// [`ReflectRef::kind`]: crate::ops::ReflectRef::kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Struct,
    List,
    Array,
    Map,
    Set,
    Optional,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::List => f.pad("List"),
            Self::Array => f.pad("Array"),
            Self::Map => f.pad("Map"),
            Self::Set => f.pad("Set"),
            Self::Optional => f.pad("Optional"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a value is not the expected `ReflectKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for reflected types.
///
/// A `TypeInfo` carries the [`ReflectKind`], the [`Type`] identity and the
/// kind-specific shape (field list, item type, key and value types ...).
///
/// It is obtained through [`Typed::type_info`] when the type is known at
/// compile time, or [`DynamicTyped::reflect_type_info`] from a `dyn Reflect`.
/// Both return a `'static` reference created on first access.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::{ReflectKind, Typed};
///
/// let info = <Vec<u8> as Typed>::type_info();
/// assert_eq!(info.kind(), ReflectKind::List);
///
/// let list = info.as_list().unwrap();
/// assert!(list.item_is::<u8>());
/// assert!(info.as_struct().is_err());
/// ```
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    List(ListInfo),
    Array(ArrayInfo),
    Map(MapInfo),
    Set(SetInfo),
    Optional(OptionalInfo),
    Opaque(OpaqueInfo),
}

// Helper macro that implements type-safe accessor methods like `as_struct`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to specific type information.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

macro_rules! impl_is_method {
    ($name:ident : $kind:ident) => {
        /// Check infomation kind, can be used in const function.
        #[inline]
        pub const fn $name(&self) -> bool {
            matches!(self, Self::$kind(..))
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_array: Array => ArrayInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_set: Set => SetInfo);
    impl_cast_method!(as_optional: Optional => OptionalInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    impl_is_method!(is_struct: Struct);
    impl_is_method!(is_list: List);
    impl_is_method!(is_array: Array);
    impl_is_method!(is_map: Map);
    impl_is_method!(is_set: Set);
    impl_is_method!(is_optional: Optional);
    impl_is_method!(is_opaque: Opaque);

    /// Returns the underlying [`Type`] metadata for this `TypeInfo`.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Array(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Set(info) => info.ty(),
            Self::Optional(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// Returns the [`ReflectKind`] for this `TypeInfo` (a fast discriminator).
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_reflect::info::{Typed, ReflectKind};
    ///
    /// let info = i32::type_info();
    /// assert_eq!(info.kind(), ReflectKind::Opaque);
    /// ```
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Array(_) => ReflectKind::Array,
            Self::Map(_) => ReflectKind::Map,
            Self::Set(_) => ReflectKind::Set,
            Self::Optional(_) => ReflectKind::Optional,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the [`ValueTraits`] declared by a struct or an opaque type.
    ///
    /// Empty for every other kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_reflect::info::{Typed, ValueTraits};
    ///
    /// assert!(u8::type_info().value_traits().contains(ValueTraits::SELF_DESCRIBING));
    /// assert!(<Vec<u8>>::type_info().value_traits().is_empty());
    /// ```
    pub const fn value_traits(&self) -> ValueTraits {
        match self {
            Self::Struct(info) => info.traits(),
            Self::Opaque(info) => info.traits(),
            _ => ValueTraits::empty(),
        }
    }

    /// Returns the documentation string for the type, if `reflect_docs` is
    /// enabled and docs are present.
    ///
    /// Only structs and opaque types derived with `#[derive(Reflect)]` carry docs.
    #[cfg_attr(not(feature = "reflect_docs"), inline(always))]
    pub const fn docs(&self) -> Option<&str> {
        #[cfg(not(feature = "reflect_docs"))]
        return None;
        #[cfg(feature = "reflect_docs")]
        match self {
            Self::Struct(info) => info.docs(),
            Self::Opaque(info) => info.docs(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{ReflectKind, ReflectKindError};
    use crate::info::Typed;

    #[test]
    fn kind_mismatch_reports_both_sides() {
        let err = <u32 as Typed>::type_info().as_struct().unwrap_err();
        assert_eq!(
            err,
            ReflectKindError {
                expected: ReflectKind::Struct,
                received: ReflectKind::Opaque,
            }
        );
        assert_eq!(
            err.to_string(),
            "reflect kind mismatch: expected Struct, received Opaque"
        );
    }

    #[test]
    fn display_pads() {
        assert_eq!(alloc::format!("{:>8}", ReflectKind::Set), "     Set");
    }
}
