use crate::derive::impl_type_path;
use crate::impls::{impl_reflect_for_hashmap, impl_reflect_for_hashset};

impl_type_path!(::vc_utils::hash::FixedHashState);
impl_type_path!(::vc_utils::hash::NoOpHashState);

impl_type_path!(
    (in hashbrown as HashSet)
    ::vc_utils::hash::hashbrown::HashSet<T, S>
);

impl_type_path!(
    (in hashbrown as HashMap)
    ::vc_utils::hash::hashbrown::HashMap<K, V, S>
);

// `vc_utils::hash::{HashMap, HashSet}` are aliases of the hashbrown types.
impl_reflect_for_hashset!(::vc_utils::hash::hashbrown::HashSet<T, S>);
impl_reflect_for_hashmap!(::vc_utils::hash::hashbrown::HashMap<K, V, S>);

#[cfg(test)]
mod tests {
    use vc_utils::hash::{HashMap, HashSet};

    use crate::Reflect;
    use crate::info::TypePath;

    #[test]
    fn fixed_state_collections() {
        assert_eq!(
            <HashMap<u8, u8>>::type_path(),
            "hashbrown::HashMap<u8, u8, vc_utils::hash::FixedHashState>"
        );

        let set: HashSet<u32> = [4, 5].into_iter().collect();
        let cloned = set.reflect_clone().unwrap();
        assert_eq!(set.reflect_partial_eq(&*cloned), Some(true));
    }
}
