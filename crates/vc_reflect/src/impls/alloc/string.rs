use alloc::string::String;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, Typed, ValueTraits};

crate::derive::impl_type_path!(::alloc::string::String);

impl Typed for String {
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

impl Reflect for String {
    crate::impls::impl_simple_type_reflect!();
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;

    #[test]
    fn string_clone_and_compare() {
        let s = String::from("vc");
        let cloned = s.reflect_clone().unwrap();
        assert_eq!(cloned.downcast_ref::<String>().map(String::as_str), Some("vc"));
        assert_eq!(s.reflect_partial_eq(&*cloned), Some(true));
        assert_eq!(s.reflect_partial_eq(&"vc"), Some(false));
        assert_eq!(alloc::format!("{:?}", s.as_reflect()), "\"vc\"");
    }
}
