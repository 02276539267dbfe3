use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;

use vc_reflect::Reflect;
use vc_reflect::info::TypeInfo;
use vc_reflect::ops::{Array, List, Map, Set};

use crate::{FieldMapper, Normal, NormalError, Normalizer};

// -----------------------------------------------------------------------------
// Reducers

/// Shape reducers, public so that custom rules can delegate to them.
impl Normalizer {
    /// Normalizes `items` in order into a [`Normal::Sequence`].
    pub fn normal_sequence<'a, I>(&self, items: I) -> Result<Normal, NormalError>
    where
        I: IntoIterator<Item = &'a dyn Reflect>,
    {
        items
            .into_iter()
            .map(|item| self.normal(item))
            .collect::<Result<Vec<_>, _>>()
            .map(Normal::Sequence)
    }

    /// Normalizes `items` into a [`Normal::Set`], dropping items whose
    /// normal forms are equal.
    pub fn normal_unique<'a, I>(&self, items: I) -> Result<Normal, NormalError>
    where
        I: IntoIterator<Item = &'a dyn Reflect>,
    {
        items
            .into_iter()
            .map(|item| self.normal(item))
            .collect::<Result<BTreeSet<_>, _>>()
            .map(Normal::Set)
    }

    /// Normalizes key value pairs into a [`Normal::Mapping`].
    ///
    /// Keys whose normal forms are equal collapse into one entry, the
    /// value coming last in iteration order is kept.
    pub fn normal_entries<'a, I>(&self, entries: I) -> Result<Normal, NormalError>
    where
        I: IntoIterator<Item = (&'a dyn Reflect, &'a dyn Reflect)>,
    {
        let mut mapping = BTreeMap::new();
        for (key, value) in entries {
            mapping.insert(self.normal(key)?, self.normal(value)?);
        }
        Ok(Normal::Mapping(mapping))
    }

    #[inline]
    pub fn normal_array(&self, array: &dyn Array) -> Result<Normal, NormalError> {
        self.normal_sequence(array.iter())
    }

    #[inline]
    pub fn normal_list(&self, list: &dyn List) -> Result<Normal, NormalError> {
        self.normal_sequence(list.iter())
    }

    #[inline]
    pub fn normal_set(&self, set: &dyn Set) -> Result<Normal, NormalError> {
        self.normal_unique(set.iter())
    }

    #[inline]
    pub fn normal_map(&self, map: &dyn Map) -> Result<Normal, NormalError> {
        self.normal_entries(map.iter())
    }

    /// Normalizes every member the [`FieldMapper`] lists for `info`.
    ///
    /// Fails with [`NormalError::InaccessibleMember`] if `subject` does not
    /// have the shape `info` describes.
    pub fn decompose_by_fields(
        &self,
        info: &'static TypeInfo,
        subject: &dyn Reflect,
    ) -> Result<BTreeMap<String, Normal>, NormalError> {
        let members = FieldMapper::fields_of(info);

        let mut fields = BTreeMap::new();
        for member in members.iter() {
            let Some(value) = member.read(subject) else {
                return Err(NormalError::InaccessibleMember {
                    member: String::from(member.name()),
                    subject: subject.reflect_type_path(),
                });
            };
            fields.insert(String::from(member.name()), self.normal(value)?);
        }
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;

    use vc_reflect::Reflect;
    use vc_reflect::derive::Reflect;
    use vc_reflect::info::Typed;

    use crate::{Normal, NormalError, Normalizer};

    #[derive(Reflect)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn sequence_keeps_order() {
        let normalizer = Normalizer::new();
        let items: [&dyn Reflect; 3] = [&3_u8, &1_u8, &3_u8];
        let normal = normalizer.normal_sequence(items).unwrap();
        assert_eq!(
            normal,
            Normal::sequence([Normal::value(3_u8), Normal::value(1_u8), Normal::value(3_u8)])
        );
    }

    #[test]
    fn unique_drops_equal_items() {
        let normalizer = Normalizer::new();
        let items: [&dyn Reflect; 3] = [&3_u8, &1_u8, &3_u8];
        let normal = normalizer.normal_unique(items).unwrap();
        assert_eq!(normal, Normal::set([Normal::value(1_u8), Normal::value(3_u8)]));
    }

    #[test]
    fn entries_keep_the_last_value() {
        let normalizer = Normalizer::new();
        let entries: [(&dyn Reflect, &dyn Reflect); 2] = [(&Some(1_u8), &"a"), (&1_u8, &"b")];
        let normal = normalizer.normal_entries(entries).unwrap();
        assert_eq!(normal, Normal::mapping([(Normal::value(1_u8), Normal::value("b"))]));
    }

    #[test]
    fn decompose_point() {
        let normalizer = Normalizer::new();
        let fields = normalizer
            .decompose_by_fields(Point::type_info(), &Point { x: 1, y: -1 })
            .unwrap();

        let mut expected = BTreeMap::new();
        expected.insert(String::from("x"), Normal::value(1_i32));
        expected.insert(String::from("y"), Normal::value(-1_i32));
        assert_eq!(fields, expected);
    }

    #[test]
    fn decompose_wrong_shape() {
        let normalizer = Normalizer::new();
        let err = normalizer
            .decompose_by_fields(Point::type_info(), &vec![1_i32, 2])
            .unwrap_err();
        assert!(matches!(err, NormalError::InaccessibleMember { ref member, .. } if member == "x"));
    }
}
