use alloc::boxed::Box;

use vc_utils::hash::HashMap;

use crate::info::{NamedField, Type, TypePath, ValueTraits, impl_docs_fn, impl_type_fn};
use crate::ops::Struct;

/// A container for compile-time named struct info.
///
/// Fields are kept in declaration order. Fields marked `#[reflect(ignore)]`
/// never appear here.
///
/// A struct may designate one field as its *base*: the embedded ancestor
/// whose members are considered inherited. See [`StructInfo::base`].
///
/// Like opaque types, a struct may declare [`ValueTraits`] with
/// `#[reflect(clone, partial_eq, ...)]`. A struct declaring all of
/// [`ValueTraits::SELF_DESCRIBING`] is treated as a value, not as a bag
/// of fields.
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Shape { id: u32 }
///
/// #[derive(Reflect)]
/// struct Circle {
///     #[reflect(base)]
///     shape: Shape,
///     radius: f32,
/// }
///
/// let info = Circle::type_info().as_struct().unwrap();
///
/// assert_eq!(*info.field_names(), ["shape", "radius"]);
/// assert_eq!(info.base_index(), Some(0));
/// assert!(info.base().unwrap().type_is::<Shape>());
/// assert!(!info.is_self_describing());
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    field_indices: HashMap<&'static str, usize>,
    base: Option<usize>,
    traits: ValueTraits,
    #[cfg(feature = "reflect_docs")]
    docs: Option<&'static str>,
}

impl StructInfo {
    impl_docs_fn!(docs);
    impl_type_fn!(ty);

    /// Creates a new [`StructInfo`].
    ///
    /// The order of fields is the declaration order.
    pub fn new<T: Struct + TypePath>(fields: &[NamedField]) -> Self {
        let field_indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            field_indices,
            base: None,
            traits: ValueTraits::empty(),
            #[cfg(feature = "reflect_docs")]
            docs: None,
        }
    }

    /// Marks the field at `index` as the base.
    ///
    /// Used by the proc-macro crate. An out of range index is ignored.
    pub fn with_base(self, index: usize) -> Self {
        let base = (index < self.fields.len()).then_some(index);
        Self { base, ..self }
    }

    /// Replaces the declared [`ValueTraits`].
    #[inline]
    pub fn with_traits(self, traits: ValueTraits) -> Self {
        Self { traits, ..self }
    }

    /// Returns the declared [`ValueTraits`].
    #[inline]
    pub const fn traits(&self) -> ValueTraits {
        self.traits
    }

    #[inline]
    pub const fn is_self_describing(&self) -> bool {
        self.traits.contains(ValueTraits::SELF_DESCRIBING)
    }

    /// Returns the field with the given name.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(*self.field_indices.get(name)?)
    }

    /// Returns the field at the given index.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Iterate over fields in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    /// Returns the field names in declaration order.
    pub fn field_names(&self) -> Box<[&'static str]> {
        self.fields.iter().map(NamedField::name).collect()
    }

    /// Returns the index of the field with the given name.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the index of the base field, if any.
    #[inline]
    pub const fn base_index(&self) -> Option<usize> {
        self.base
    }

    /// Returns the base field, if any.
    #[inline]
    pub fn base(&self) -> Option<&NamedField> {
        self.fields.get(self.base?)
    }
}
