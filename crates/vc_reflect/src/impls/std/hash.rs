use crate::derive::impl_type_path;
use crate::impls::{impl_reflect_for_hashmap, impl_reflect_for_hashset};

impl_type_path!(::std::hash::RandomState);
impl_type_path!(::std::collections::HashSet<T, S>);
impl_type_path!(::std::collections::HashMap<K, V, S>);

impl_reflect_for_hashset!(::std::collections::HashSet<T, S>);
impl_reflect_for_hashmap!(::std::collections::HashMap<K, V, S>);

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use std::string::String;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::Set;

    #[test]
    fn std_hash_collections() {
        assert_eq!(
            <HashSet<u8>>::type_path(),
            "std::collections::HashSet<u8, std::hash::RandomState>"
        );
        assert!(<HashMap<String, u8>>::type_info().as_map().unwrap().key_is::<String>());

        let a = HashSet::from([1_u8, 2, 3]);
        let b = HashSet::from([3_u8, 2, 1]);
        assert_eq!(a.reflect_partial_eq(&b), Some(true));
        assert_eq!(a.reflect_hash(), b.reflect_hash());
        assert!(Set::get(&a, &2_u8).is_some());
    }
}
