// -----------------------------------------------------------------------------
// For hash based maps

/// Implement `Typed`, `Reflect` and `Map` for a hash map type with
/// `K, V, S` generic parameters and a `with_capacity_and_hasher` constructor.
macro_rules! impl_reflect_for_hashmap {
    ($ty:path $(,)?) => {
        impl<K, V, S> $crate::info::Typed for $ty
        where
            K: $crate::Reflect + $crate::info::Typed + Eq + ::core::hash::Hash,
            V: $crate::Reflect + $crate::info::Typed,
            S: $crate::info::TypePath + ::core::hash::BuildHasher + Default + Send + Sync,
        {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::GenericTypeInfoCell = $crate::impls::GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    $crate::info::TypeInfo::Map($crate::info::MapInfo::new::<Self, K, V>())
                })
            }
        }

        impl<K, V, S> $crate::Reflect for $ty
        where
            K: $crate::Reflect + $crate::info::Typed + Eq + ::core::hash::Hash,
            V: $crate::Reflect + $crate::info::Typed,
            S: $crate::info::TypePath + ::core::hash::BuildHasher + Default + Send + Sync,
        {
            $crate::reflection::impl_reflect_cast_fn!(Map);

            fn reflect_clone(&self) -> Result<::alloc::boxed::Box<dyn $crate::Reflect>, $crate::ops::ReflectCloneError> {
                let owner = <Self as $crate::info::TypePath>::type_path();
                let mut map = Self::with_capacity_and_hasher(Self::len(self), S::default());
                for (key, value) in Self::iter(self) {
                    let key = $crate::impls::clone_item::<K>(key, owner)?;
                    let value = $crate::impls::clone_item::<V>(value, owner)?;
                    map.insert(key, value);
                }

                Ok(::alloc::boxed::Box::new(map))
            }

            #[inline]
            fn reflect_partial_eq(&self, value: &dyn $crate::Reflect) -> Option<bool> {
                $crate::impls::map_partial_eq(self, value)
            }

            #[inline]
            fn reflect_hash(&self) -> Option<u64> {
                $crate::impls::map_hash(self)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::impls::map_debug(self, f)
            }
        }

        impl<K, V, S> $crate::ops::Map for $ty
        where
            K: $crate::Reflect + $crate::info::Typed + Eq + ::core::hash::Hash,
            V: $crate::Reflect + $crate::info::Typed,
            S: $crate::info::TypePath + ::core::hash::BuildHasher + Default + Send + Sync,
        {
            fn get(&self, key: &dyn $crate::Reflect) -> Option<&dyn $crate::Reflect> {
                key.downcast_ref::<K>()
                    .and_then(|key| Self::get(self, key))
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

            fn iter(&self) -> ::alloc::boxed::Box<dyn Iterator<Item = (&dyn $crate::Reflect, &dyn $crate::Reflect)> + '_> {
                ::alloc::boxed::Box::new(
                    Self::iter(self).map(|(k, v)| (k as &dyn $crate::Reflect, v as &dyn $crate::Reflect))
                )
            }
        }
    };
}

pub(crate) use impl_reflect_for_hashmap;
