use alloc::boxed::Box;
use alloc::collections::BTreeSet;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{SetInfo, TypeInfo, TypePath, Typed};
use crate::ops::{ReflectCloneError, Set};

crate::derive::impl_type_path!(::alloc::collections::BTreeSet<T>);

impl<T: Reflect + Typed + Ord> Typed for BTreeSet<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Set(SetInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed + Ord> Reflect for BTreeSet<T> {
    crate::reflection::impl_reflect_cast_fn!(Set);

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let owner = <Self as TypePath>::type_path();
        Self::iter(self)
            .map(|value| crate::impls::clone_item::<T>(value, owner))
            .collect::<Result<Self, ReflectCloneError>>()
            .map(|set| Box::new(set) as Box<dyn Reflect>)
    }

    #[inline]
    fn reflect_partial_eq(&self, value: &dyn Reflect) -> Option<bool> {
        crate::impls::set_partial_eq(self, value)
    }

    #[inline]
    fn reflect_hash(&self) -> Option<u64> {
        crate::impls::set_hash(self)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        crate::impls::set_debug(self, f)
    }
}

impl<T: Reflect + Typed + Ord> Set for BTreeSet<T> {
    fn get(&self, value: &dyn Reflect) -> Option<&dyn Reflect> {
        value
            .downcast_ref::<T>()
            .and_then(|value| Self::get(self, value))
            .map(Reflect::as_reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Reflect> + '_> {
        Box::new(Self::iter(self).map(|v| v as &dyn Reflect))
    }
}
