use alloc::borrow::Cow;
use core::fmt;

/// A enumeration of all error outcomes that might happen when
/// running [`Reflect::reflect_clone`](crate::Reflect::reflect_clone).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReflectCloneError {
    /// The type does not support clone.
    NotSupport { type_path: Cow<'static, str> },
    /// An item of a container could not be cloned into its concrete type.
    ItemNotCloneable {
        type_path: Cow<'static, str>,
        item: Cow<'static, str>,
    },
}

impl fmt::Display for ReflectCloneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSupport { type_path } => {
                write!(f, "`reflect_clone` not support for `{type_path}`")
            }
            Self::ItemNotCloneable { type_path, item } => {
                write!(f, "item `{item}` of `{type_path}` cannot be cloned")
            }
        }
    }
}

impl core::error::Error for ReflectCloneError {}
