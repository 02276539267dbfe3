use alloc::boxed::Box;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Map

/// A trait used to power [map-like] operations via [reflection].
///
/// Iteration order is whatever the underlying collection provides,
/// callers that need determinism must impose their own order.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_reflect::ops::Map;
///
/// let scores = BTreeMap::from([("ann", 3_u32)]);
/// let map: &dyn Map = &scores;
///
/// let value = map.get(&"ann").unwrap();
/// assert_eq!(value.downcast_ref::<u32>(), Some(&3));
/// ```
///
/// [map-like]: https://doc.rust-lang.org/book/ch08-03-hash-maps.html
/// [reflection]: crate
pub trait Map: Reflect {
    /// Returns the value stored under `key`, if present.
    ///
    /// Keys of another type are never present.
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect>;

    /// Returns the number of entries in the map.
    fn len(&self) -> usize;

    /// Returns `true` if the collection contains no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the `(key, value)` entries of the map.
    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_>;
}
