/// Implement [`Reflect`](crate::Reflect) for an opaque type
/// through its `Clone`, `PartialEq`, `PartialOrd`, `Hash` and `Debug`.
macro_rules! impl_simple_type_reflect {
    () => {
        $crate::reflection::impl_reflect_cast_fn!(Opaque);

        #[inline]
        fn reflect_clone(
            &self,
        ) -> Result<::alloc::boxed::Box<dyn $crate::Reflect>, $crate::ops::ReflectCloneError> {
            Ok(::alloc::boxed::Box::new(Clone::clone(self)))
        }

        fn reflect_partial_eq(&self, value: &dyn $crate::Reflect) -> Option<bool> {
            match <dyn $crate::Reflect>::downcast_ref::<Self>(value) {
                Some(value) => Some(PartialEq::eq(self, value)),
                None => Some(false),
            }
        }

        fn reflect_partial_cmp(&self, value: &dyn $crate::Reflect) -> Option<::core::cmp::Ordering> {
            <dyn $crate::Reflect>::downcast_ref::<Self>(value)
                .and_then(|value| PartialOrd::partial_cmp(self, value))
        }

        fn reflect_hash(&self) -> Option<u64> {
            let mut hasher = $crate::reflect_hasher();
            <Self as ::core::hash::Hash>::hash(self, &mut hasher);
            Some(::core::hash::Hasher::finish(&hasher))
        }

        fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            ::core::fmt::Debug::fmt(self, f)
        }
    };
}

/// Like [`impl_simple_type_reflect`], for floats.
///
/// Equality, ordering and hashing all follow `total_cmp`, so `NaN == NaN`
/// and `-0.0 != 0.0`. This keeps the three consistent with each other.
macro_rules! impl_float_type_reflect {
    () => {
        $crate::reflection::impl_reflect_cast_fn!(Opaque);

        #[inline]
        fn reflect_clone(
            &self,
        ) -> Result<::alloc::boxed::Box<dyn $crate::Reflect>, $crate::ops::ReflectCloneError> {
            Ok(::alloc::boxed::Box::new(*self))
        }

        fn reflect_partial_eq(&self, value: &dyn $crate::Reflect) -> Option<bool> {
            match <dyn $crate::Reflect>::downcast_ref::<Self>(value) {
                Some(value) => Some(self.total_cmp(value).is_eq()),
                None => Some(false),
            }
        }

        fn reflect_partial_cmp(&self, value: &dyn $crate::Reflect) -> Option<::core::cmp::Ordering> {
            <dyn $crate::Reflect>::downcast_ref::<Self>(value).map(|value| self.total_cmp(value))
        }

        fn reflect_hash(&self) -> Option<u64> {
            let mut hasher = $crate::reflect_hasher();
            ::core::hash::Hash::hash(&self.to_bits(), &mut hasher);
            Some(::core::hash::Hasher::finish(&hasher))
        }

        fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            ::core::fmt::Debug::fmt(self, f)
        }
    };
}

pub(crate) use {impl_float_type_reflect, impl_simple_type_reflect};
