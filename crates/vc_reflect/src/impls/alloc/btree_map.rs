use alloc::boxed::Box;
use alloc::collections::BTreeMap;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{MapInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Map, ReflectCloneError};

crate::derive::impl_type_path!(::alloc::collections::BTreeMap<K, V>);

impl<K, V> Typed for BTreeMap<K, V>
where
    K: Reflect + Typed + Ord,
    V: Reflect + Typed,
{
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
    }
}

impl<K, V> Reflect for BTreeMap<K, V>
where
    K: Reflect + Typed + Ord,
    V: Reflect + Typed,
{
    crate::reflection::impl_reflect_cast_fn!(Map);

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let owner = <Self as TypePath>::type_path();
        let mut map = Self::new();
        for (key, value) in Self::iter(self) {
            let key = crate::impls::clone_item::<K>(key, owner)?;
            let value = crate::impls::clone_item::<V>(value, owner)?;
            map.insert(key, value);
        }
        Ok(Box::new(map))
    }

    #[inline]
    fn reflect_partial_eq(&self, value: &dyn Reflect) -> Option<bool> {
        crate::impls::map_partial_eq(self, value)
    }

    #[inline]
    fn reflect_hash(&self) -> Option<u64> {
        crate::impls::map_hash(self)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        crate::impls::map_debug(self, f)
    }
}

impl<K, V> Map for BTreeMap<K, V>
where
    K: Reflect + Typed + Ord,
    V: Reflect + Typed,
{
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect> {
        key.downcast_ref::<K>()
            .and_then(|key| Self::get(self, key))
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

    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
        Box::new(Self::iter(self).map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect)))
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::Typed;
    use crate::ops::Map;

    #[test]
    fn btree_map_lookup_and_clone() {
        let info = <BTreeMap<String, u8>>::type_info().as_map().unwrap();
        assert!(info.key_is::<String>());
        assert!(info.value_is::<u8>());

        let value = BTreeMap::from([(String::from("a"), 1_u8), (String::from("b"), 2)]);
        assert_eq!(Map::get(&value, &String::from("b")).unwrap().downcast_ref::<u8>(), Some(&2));
        assert!(Map::get(&value, &1_u8).is_none());

        let cloned = value.reflect_clone().unwrap();
        assert_eq!(value.reflect_partial_eq(&*cloned), Some(true));
        assert_eq!(value.reflect_hash(), cloned.reflect_hash());
    }
}
