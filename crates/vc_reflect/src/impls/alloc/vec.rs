use alloc::vec::Vec;

crate::derive::impl_type_path!(::alloc::vec::Vec<T>);

impl_reflect_for_list!(Vec, push);

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec, vec::Vec};

    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::List;

    #[test]
    fn vec_is_a_list() {
        let info = <Vec<String>>::type_info().as_list().unwrap();
        assert!(info.item_is::<String>());
        assert_eq!(
            <Vec<String>>::type_path(),
            "alloc::vec::Vec<alloc::string::String>"
        );

        let value = vec![1_u32, 2, 3];
        let list: &dyn List = &value;
        assert_eq!(list.get_as::<u32>(2), Some(&3));
        assert!(list.get(3).is_none());
    }

    #[test]
    fn vec_equality_is_ordered() {
        let a = vec![1_u8, 2];
        let b = vec![2_u8, 1];
        assert_eq!(a.reflect_partial_eq(&b), Some(false));
        assert_eq!(a.reflect_partial_eq(&a.clone()), Some(true));
        assert_ne!(a.reflect_hash(), b.reflect_hash());
    }
}
