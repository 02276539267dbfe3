use crate::Reflect;

// -----------------------------------------------------------------------------
// Struct

/// A trait used to power [struct-like] operations via [reflection].
///
/// This trait uses the [`Reflect`] trait to allow implementors to have their fields
/// be dynamically addressed by both name and index, in declaration order.
///
/// When using [`#[derive(Reflect)]`](crate::derive::Reflect) on a standard struct,
/// this trait will be automatically implemented. Fields marked
/// `#[reflect(ignore)]` are invisible here.
///
/// # Example
///
/// ```
/// use vc_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     bar: u32,
///     #[reflect(ignore)]
///     cache: Vec<u8>,
/// }
///
/// let foo = Foo { bar: 123, cache: vec![] };
///
/// assert_eq!(foo.field_len(), 1);
/// assert_eq!(foo.name_at(0), Some("bar"));
///
/// let field = foo.field_at(0).unwrap();
/// assert_eq!(field.downcast_ref::<u32>(), Some(&123));
/// assert!(foo.field("cache").is_none());
/// ```
///
/// [struct-like]: https://doc.rust-lang.org/book/ch05-01-defining-structs.html
/// [reflection]: crate
pub trait Struct: Reflect {
    /// Returns a reference to the value of the field named `name` as a `&dyn Reflect`.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns a reference to the value of the field with index `index` as a `&dyn Reflect`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the name of the field with index `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of reflected fields in the struct.
    fn field_len(&self) -> usize;

    /// Returns an iterator over `(name, value)` pairs in declaration order.
    fn iter_fields(&self) -> StructFieldIter<'_>;
}

impl dyn Struct {
    /// Returns a typed reference to the field named `name`.
    ///
    /// Returns `None` if the field does not exist or has another type.
    #[inline]
    pub fn get_field<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name)?.downcast_ref::<T>()
    }
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// An iterator over the `(name, value)` pairs of a [`Struct`].
pub struct StructFieldIter<'a> {
    inner: &'a dyn Struct,
    index: usize,
}

impl StructFieldIter<'_> {
    /// Creates a new iterator for the given struct.
    #[inline(always)]
    pub const fn new(inner: &dyn Struct) -> StructFieldIter<'_> {
        StructFieldIter { inner, index: 0 }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'a str, &'a dyn Reflect);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.inner.name_at(self.index)?;
        let value = self.inner.field_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.inner.field_len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}
