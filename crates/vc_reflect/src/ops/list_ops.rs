use crate::Reflect;

// -----------------------------------------------------------------------------
// List

/// A trait used to power [list-like] operations via [reflection].
///
/// This corresponds to types, like `Vec<T>` or `VecDeque<T>`, which contain
/// an ordered sequence of elements of a growable length.
///
/// # Example
///
/// ```
/// use vc_reflect::ops::List;
///
/// let vec = vec!["first", "second"];
/// let list: &dyn List = &vec;
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.get_as::<&str>(1), Some(&"second"));
/// ```
///
/// [list-like]: https://doc.rust-lang.org/book/ch08-01-vectors.html
/// [reflection]: crate
pub trait List: Reflect {
    /// Returns a reference to the element at the given index, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the number of elements in the list.
    fn len(&self) -> usize;

    /// Returns `true` if the collection contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the list in order.
    fn iter(&self) -> ListItemIter<'_>;
}

impl dyn List {
    /// Returns a typed reference to the element at `index`.
    ///
    /// Returns `None` if out of bounds or if the element has another type.
    #[inline]
    pub fn get_as<T: Reflect>(&self, index: usize) -> Option<&T> {
        self.get(index)?.downcast_ref::<T>()
    }
}

// -----------------------------------------------------------------------------
// ListItemIter

/// An iterator over a [`List`].
///
/// The iterator uses [`List::get`] internally, which may have different
/// performance characteristics than iterating directly over a concrete list type.
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl ListItemIter<'_> {
    /// Creates a new iterator for the given list.
    #[inline(always)]
    pub const fn new(list: &dyn List) -> ListItemIter<'_> {
        ListItemIter { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
