use alloc::boxed::Box;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Set

/// A trait used to power [set-like] operations via [reflection].
///
/// Iteration order is whatever the underlying collection provides,
/// callers that need determinism must impose their own order.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use vc_reflect::ops::Set;
///
/// let tags = BTreeSet::from(["a", "b"]);
/// let set: &dyn Set = &tags;
///
/// assert_eq!(set.len(), 2);
/// assert!(set.get(&"a").is_some());
/// assert!(set.get(&"c").is_none());
/// ```
///
/// [set-like]: https://doc.rust-lang.org/std/collections/struct.HashSet.html
/// [reflection]: crate
pub trait Set: Reflect {
    /// Returns the element equal to `value`, if present.
    ///
    /// Values of another type are never present.
    fn get(&self, value: &dyn Reflect) -> Option<&dyn Reflect>;

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the collection contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the elements of the set.
    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Reflect> + '_>;
}
