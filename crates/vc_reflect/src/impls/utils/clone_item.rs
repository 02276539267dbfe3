use alloc::borrow::Cow;

use crate::Reflect;
use crate::info::TypePath;
use crate::ops::ReflectCloneError;

/// Clones one item of a container back into its concrete type `T`.
///
/// Used to implement [`Reflect::reflect_clone`] for generic containers.
///
/// # Examples
///
/// ```
/// use vc_reflect::impls::clone_item;
///
/// let item = String::from("a");
/// let cloned: String = clone_item(&item, "alloc::vec::Vec<alloc::string::String>").unwrap();
/// assert_eq!(cloned, "a");
/// ```
pub fn clone_item<T: Reflect + TypePath>(
    item: &dyn Reflect,
    owner: &'static str,
) -> Result<T, ReflectCloneError> {
    item.reflect_clone()?
        .take::<T>()
        .ok_or_else(|| ReflectCloneError::ItemNotCloneable {
            type_path: Cow::Borrowed(owner),
            item: Cow::Borrowed(T::type_path()),
        })
}
