use crate::Reflect;

/// A trait used to power operations on a value that may be absent.
///
/// Implemented for `Option<T>`.
///
/// # Example
///
/// ```
/// use vc_reflect::ops::Optional;
///
/// let some: &dyn Optional = &Some(7_i32);
/// let none: &dyn Optional = &None::<i32>;
///
/// assert_eq!(some.value().and_then(|v| v.downcast_ref::<i32>()), Some(&7));
/// assert!(!none.is_some());
/// ```
pub trait Optional: Reflect {
    /// Returns the present value, if any.
    fn value(&self) -> Option<&dyn Reflect>;

    /// Returns `true` if a value is present.
    #[inline]
    fn is_some(&self) -> bool {
        self.value().is_some()
    }
}
