use alloc::boxed::Box;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{OptionalInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Optional, ReflectCloneError};

crate::derive::impl_type_path!(::core::option::Option<T>);

impl<T: Reflect + Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Optional(OptionalInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    crate::reflection::impl_reflect_cast_fn!(Optional);

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let cloned: Self = match self {
            Some(value) => Some(crate::impls::clone_item::<T>(
                value,
                <Self as TypePath>::type_path(),
            )?),
            None => None,
        };
        Ok(Box::new(cloned))
    }

    #[inline]
    fn reflect_partial_eq(&self, value: &dyn Reflect) -> Option<bool> {
        crate::impls::optional_partial_eq(self, value)
    }

    #[inline]
    fn reflect_hash(&self) -> Option<u64> {
        crate::impls::optional_hash(self)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        crate::impls::optional_debug(self, f)
    }
}

impl<T: Reflect + Typed> Optional for Option<T> {
    #[inline]
    fn value(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(Reflect::as_reflect)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};

    #[test]
    fn option_is_optional_kind() {
        let info = <Option<String>>::type_info();
        assert_eq!(info.kind(), ReflectKind::Optional);
        assert!(info.as_optional().unwrap().some_is::<String>());
        assert_eq!(
            <Option<u8>>::type_path(),
            "core::option::Option<u8>"
        );
    }

    #[test]
    fn nested_option_value() {
        let value: Option<Option<u8>> = Some(Some(3));
        let inner = value.reflect_ref().as_optional().unwrap().value().unwrap();
        let innermost = inner.reflect_ref().as_optional().unwrap().value().unwrap();
        assert_eq!(innermost.downcast_ref::<u8>(), Some(&3));
    }

    #[test]
    fn none_of_different_types_differ() {
        assert_eq!(None::<u8>.reflect_partial_eq(&None::<u16>), Some(false));
        assert_eq!(None::<u8>.reflect_partial_eq(&None::<u8>), Some(true));
    }
}
