use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed, ValueTraits};

impl TypePath for &'static str {
    #[inline]
    fn type_path() -> &'static str {
        "&str"
    }
    #[inline]
    fn type_name() -> &'static str {
        "&str"
    }
    #[inline]
    fn type_ident() -> &'static str {
        "&str"
    }
}

impl Typed for &'static str {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            TypeInfo::Opaque(
                OpaqueInfo::new::<Self>()
                    .with_traits(ValueTraits::SELF_DESCRIBING.union(ValueTraits::PARTIAL_CMP)),
            )
        })
    }
}

impl Reflect for &'static str {
    crate::impls::impl_simple_type_reflect!();
}
