use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed, ValueTraits};

/// Primitive scalars declare every value trait, so they are self-describing.
const SCALAR_TRAITS: ValueTraits = ValueTraits::SELF_DESCRIBING.union(ValueTraits::PARTIAL_CMP);

macro_rules! impl_native_type_path {
    ($($ty:ident),* $(,)?) => {$(
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                stringify!($ty)
            }
            #[inline]
            fn type_name() -> &'static str {
                stringify!($ty)
            }
            #[inline]
            fn type_ident() -> &'static str {
                stringify!($ty)
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    TypeInfo::Opaque(OpaqueInfo::new::<Self>().with_traits(SCALAR_TRAITS))
                })
            }
        }
    )*};
}

impl_native_type_path!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

macro_rules! impl_native_reflect {
    ($($ty:ident),* $(,)?) => {$(
        impl Reflect for $ty {
            crate::impls::impl_simple_type_reflect!();
        }
    )*};
}

impl_native_reflect!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize,
);

impl Reflect for f32 {
    crate::impls::impl_float_type_reflect!();
}

impl Reflect for f64 {
    crate::impls::impl_float_type_reflect!();
}

// -----------------------------------------------------------------------------
// Unit

impl TypePath for () {
    #[inline]
    fn type_path() -> &'static str {
        "()"
    }
    #[inline]
    fn type_name() -> &'static str {
        "()"
    }
    #[inline]
    fn type_ident() -> &'static str {
        "()"
    }
}

impl Typed for () {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>().with_traits(SCALAR_TRAITS)))
    }
}

impl Reflect for () {
    crate::impls::impl_simple_type_reflect!();
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{TypePath, Typed};

    #[test]
    fn scalars_are_self_describing() {
        for info in [i32::type_info(), bool::type_info(), f64::type_info(), <()>::type_info()] {
            assert!(info.as_opaque().unwrap().is_self_describing());
        }
        assert_eq!(u128::type_path(), "u128");
    }

    #[test]
    fn floats_follow_total_order() {
        let nan = f64::NAN;
        assert_eq!(nan.reflect_partial_eq(&f64::NAN), Some(true));
        assert_eq!(0.0_f64.reflect_partial_eq(&-0.0_f64), Some(false));
        assert_eq!(nan.reflect_hash(), f64::NAN.reflect_hash());
        assert_eq!(1.5_f32.reflect_partial_cmp(&2.5_f32), Some(core::cmp::Ordering::Less));
    }

    #[test]
    fn different_types_are_not_equal() {
        assert_eq!(1_i32.reflect_partial_eq(&1_i64), Some(false));
        assert_eq!(1_i32.reflect_partial_cmp(&1_i64), None);
    }
}
