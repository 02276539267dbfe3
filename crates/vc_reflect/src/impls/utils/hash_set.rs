// -----------------------------------------------------------------------------
// For hash based sets

/// Implement `Typed`, `Reflect` and `Set` for a hash set type with
/// `T, S` generic parameters and a `with_capacity_and_hasher` constructor.
macro_rules! impl_reflect_for_hashset {
    ($ty:path $(,)?) => {
        impl<T, S> $crate::info::Typed for $ty
        where
            T: $crate::Reflect + $crate::info::Typed + Eq + ::core::hash::Hash,
            S: $crate::info::TypePath + ::core::hash::BuildHasher + Default + Send + Sync,
        {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::GenericTypeInfoCell = $crate::impls::GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    $crate::info::TypeInfo::Set($crate::info::SetInfo::new::<Self, T>())
                })
            }
        }

        impl<T, S> $crate::Reflect for $ty
        where
            T: $crate::Reflect + $crate::info::Typed + Eq + ::core::hash::Hash,
            S: $crate::info::TypePath + ::core::hash::BuildHasher + Default + Send + Sync,
        {
            $crate::reflection::impl_reflect_cast_fn!(Set);

            fn reflect_clone(&self) -> Result<::alloc::boxed::Box<dyn $crate::Reflect>, $crate::ops::ReflectCloneError> {
                let owner = <Self as $crate::info::TypePath>::type_path();
                let mut set = Self::with_capacity_and_hasher(Self::len(self), S::default());
                for value in Self::iter(self) {
                    set.insert($crate::impls::clone_item::<T>(value, owner)?);
                }

                Ok(::alloc::boxed::Box::new(set))
            }

            #[inline]
            fn reflect_partial_eq(&self, value: &dyn $crate::Reflect) -> Option<bool> {
                $crate::impls::set_partial_eq(self, value)
            }

            #[inline]
            fn reflect_hash(&self) -> Option<u64> {
                $crate::impls::set_hash(self)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::impls::set_debug(self, f)
            }
        }

        impl<T, S> $crate::ops::Set for $ty
        where
            T: $crate::Reflect + $crate::info::Typed + Eq + ::core::hash::Hash,
            S: $crate::info::TypePath + ::core::hash::BuildHasher + Default + Send + Sync,
        {
            fn get(&self, value: &dyn $crate::Reflect) -> Option<&dyn $crate::Reflect> {
                value
                    .downcast_ref::<T>()
                    .and_then(|value| Self::get(self, value))
                    .map($crate::Reflect::as_reflect)
            }

            #[inline]
            fn len(&self) -> usize {
                Self::len(self)
            }

            #[inline]
            fn is_empty(&self) -> bool {
                Self::is_empty(self)
            }

            fn iter(&self) -> ::alloc::boxed::Box<dyn Iterator<Item = &dyn $crate::Reflect> + '_> {
                ::alloc::boxed::Box::new(Self::iter(self).map(|v| v as &dyn $crate::Reflect))
            }
        }
    };
}

pub(crate) use impl_reflect_for_hashset;
