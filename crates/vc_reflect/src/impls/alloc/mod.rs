/// Implement `Typed`, `Reflect` and `List` for a growable sequence
/// with `with_capacity`, `push_back`-like insertion and a by-reference iterator.
macro_rules! impl_reflect_for_list {
    ($ty:ident, $push:ident) => {
        impl<T: $crate::Reflect + $crate::info::Typed> $crate::info::Typed for $ty<T> {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::GenericTypeInfoCell = $crate::impls::GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    $crate::info::TypeInfo::List($crate::info::ListInfo::new::<Self, T>())
                })
            }
        }

        impl<T: $crate::Reflect + $crate::info::Typed> $crate::Reflect for $ty<T> {
            $crate::reflection::impl_reflect_cast_fn!(List);

            fn reflect_clone(&self) -> Result<::alloc::boxed::Box<dyn $crate::Reflect>, $crate::ops::ReflectCloneError> {
                let owner = <Self as $crate::info::TypePath>::type_path();
                let mut list = Self::with_capacity(Self::len(self));
                for item in self.iter() {
                    list.$push($crate::impls::clone_item::<T>(item, owner)?);
                }
                Ok(::alloc::boxed::Box::new(list))
            }

            #[inline]
            fn reflect_partial_eq(&self, value: &dyn $crate::Reflect) -> Option<bool> {
                $crate::impls::list_partial_eq(self, value)
            }

            #[inline]
            fn reflect_hash(&self) -> Option<u64> {
                $crate::impls::list_hash(self)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::impls::list_debug(self, f)
            }
        }

        impl<T: $crate::Reflect + $crate::info::Typed> $crate::ops::List for $ty<T> {
            #[inline]
            fn get(&self, index: usize) -> Option<&dyn $crate::Reflect> {
                ::core::iter::IntoIterator::into_iter(self)
                    .nth(index)
                    .map(|item| item as &dyn $crate::Reflect)
            }

            #[inline]
            fn len(&self) -> usize {
                Self::len(self)
            }

            #[inline]
            fn iter(&self) -> $crate::ops::ListItemIter<'_> {
                $crate::ops::ListItemIter::new(self)
            }
        }
    };
}

mod btree_map;
mod btree_set;
mod string;
mod vec;
mod vec_deque;
