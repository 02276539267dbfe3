use alloc::{boxed::Box, string::ToString, vec::Vec};

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell};
use crate::info::{ArrayInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Array, ArrayItemIter, ReflectCloneError};

impl<T: TypePath, const N: usize> TypePath for [T; N] {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            crate::impls::concat(&["[", T::type_path(), "; ", &N.to_string(), "]"])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            crate::impls::concat(&["[", T::type_name(), "; ", &N.to_string(), "]"])
        })
    }

    fn type_ident() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            crate::impls::concat(&["[", T::type_ident(), "; ", &N.to_string(), "]"])
        })
    }
}

impl<T: Reflect + Typed, const N: usize> Typed for [T; N] {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Array(ArrayInfo::new::<Self, T>(N)))
    }
}

impl<T: Reflect + Typed, const N: usize> Reflect for [T; N] {
    crate::reflection::impl_reflect_cast_fn!(Array);

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let owner = <Self as TypePath>::type_path();
        let items = <[T]>::iter(self)
            .map(|item| crate::impls::clone_item::<T>(item, owner))
            .collect::<Result<Vec<T>, ReflectCloneError>>()?;

        // The length always matches, the iterator walks all `N` items.
        let array: Self = items
            .try_into()
            .map_err(|_| ReflectCloneError::NotSupport {
                type_path: owner.into(),
            })?;

        Ok(Box::new(array))
    }

    #[inline]
    fn reflect_partial_eq(&self, value: &dyn Reflect) -> Option<bool> {
        crate::impls::array_partial_eq(self, value)
    }

    #[inline]
    fn reflect_hash(&self) -> Option<u64> {
        crate::impls::array_hash(self)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        crate::impls::array_debug(self, f)
    }
}

impl<T: Reflect + Typed, const N: usize> Array for [T; N] {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn iter(&self) -> ArrayItemIter<'_> {
        ArrayItemIter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::Array;

    #[test]
    fn array_info_and_clone() {
        let info = <[u8; 3]>::type_info().as_array().unwrap();
        assert_eq!(info.len(), 3);
        assert!(info.item_is::<u8>());
        assert_eq!(<[u8; 3]>::type_path(), "[u8; 3]");

        let value = [1_u8, 2, 3];
        let cloned = value.reflect_clone().unwrap();
        assert_eq!(cloned.downcast_ref::<[u8; 3]>(), Some(&[1, 2, 3]));
        assert_eq!(Array::get(&value, 1).unwrap().downcast_ref::<u8>(), Some(&2));
    }
}
