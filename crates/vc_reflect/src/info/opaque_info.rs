use bitflags::bitflags;

use crate::info::{Type, TypePath, impl_docs_fn, impl_type_fn};

bitflags! {
    /// The value-level capabilities an opaque type exposes through
    /// [`Reflect`](crate::Reflect).
    ///
    /// Derived types declare them with `#[reflect(clone, partial_eq, ...)]`,
    /// built-in scalars provide all of them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ValueTraits: u8 {
        /// `reflect_clone` produces an equal copy.
        const CLONE = 1 << 0;
        /// `reflect_partial_eq` returns `Some`.
        const PARTIAL_EQ = 1 << 1;
        /// `reflect_partial_cmp` returns `Some` for values of the same type.
        const PARTIAL_CMP = 1 << 2;
        /// `reflect_hash` returns `Some`.
        const HASH = 1 << 3;
        /// `reflect_debug` renders the value itself.
        const DEBUG = 1 << 4;

        /// A value whose own equality, hashing and rendering are meaningful,
        /// and that can be copied.
        const SELF_DESCRIBING = Self::CLONE.bits()
            | Self::PARTIAL_EQ.bits()
            | Self::HASH.bits()
            | Self::DEBUG.bits();
    }
}

/// A container for compile-time info of types with no visible structure.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::{Typed, ValueTraits};
///
/// let info = <String as Typed>::type_info().as_opaque().unwrap();
/// assert!(info.is_self_describing());
/// assert!(info.traits().contains(ValueTraits::PARTIAL_CMP));
/// ```
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
    traits: ValueTraits,
    #[cfg(feature = "reflect_docs")]
    docs: Option<&'static str>,
}

impl OpaqueInfo {
    impl_docs_fn!(docs);
    impl_type_fn!(ty);

    /// Creates a new [`OpaqueInfo`] without any [`ValueTraits`].
    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self {
            ty: Type::of::<T>(),
            traits: ValueTraits::empty(),
            #[cfg(feature = "reflect_docs")]
            docs: None,
        }
    }

    /// Replaces the declared [`ValueTraits`].
    #[inline]
    pub const fn with_traits(self, traits: ValueTraits) -> Self {
        Self { traits, ..self }
    }

    /// Returns the declared [`ValueTraits`].
    #[inline]
    pub const fn traits(&self) -> ValueTraits {
        self.traits
    }

    /// Returns `true` if every trait of [`ValueTraits::SELF_DESCRIBING`] is declared.
    #[inline]
    pub const fn is_self_describing(&self) -> bool {
        self.traits.contains(ValueTraits::SELF_DESCRIBING)
    }
}

#[cfg(test)]
mod tests {
    use super::ValueTraits;

    #[test]
    fn self_describing_needs_all_four() {
        let partial = ValueTraits::CLONE | ValueTraits::PARTIAL_EQ | ValueTraits::DEBUG;
        assert!(!partial.contains(ValueTraits::SELF_DESCRIBING));
        assert!((partial | ValueTraits::HASH).contains(ValueTraits::SELF_DESCRIBING));
        assert!(!ValueTraits::SELF_DESCRIBING.contains(ValueTraits::PARTIAL_CMP));
    }
}
