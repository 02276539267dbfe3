use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{Array, List, Map, Optional, Set, Struct};

/// An immutable enumeration of ["kinds"](ReflectKind) of a reflected value.
///
/// Obtained via [`Reflect::reflect_ref`]. Each variant borrows the value as
/// the matching subtrait.
///
/// # Examples
///
/// ```
/// use vc_reflect::{Reflect, ops::ReflectRef};
///
/// let value: &dyn Reflect = &[1_u8, 2, 3];
/// match value.reflect_ref() {
///     ReflectRef::Array(array) => assert_eq!(array.len(), 3),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Array(&'a dyn Array),
    Map(&'a dyn Map),
    Set(&'a dyn Set),
    Optional(&'a dyn Optional),
    Opaque(&'a dyn Reflect),
}

macro_rules! impl_ref_cast {
    ($name:ident : $kind:ident => $trait:ident) => {
        /// Casts to the matching subtrait, or reports the actual kind.
        #[inline]
        pub fn $name(self) -> Result<&'a dyn $trait, ReflectKindError> {
            match self {
                Self::$kind(value) => Ok(value),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl<'a> ReflectRef<'a> {
    impl_ref_cast!(as_struct: Struct => Struct);
    impl_ref_cast!(as_list: List => List);
    impl_ref_cast!(as_array: Array => Array);
    impl_ref_cast!(as_map: Map => Map);
    impl_ref_cast!(as_set: Set => Set);
    impl_ref_cast!(as_optional: Optional => Optional);
    impl_ref_cast!(as_opaque: Opaque => Reflect);

    /// Returns the [`ReflectKind`] of this value.
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
}
