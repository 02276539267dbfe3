use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// TypePath

/// Stable, human readable names of a type.
///
/// Unlike [`core::any::type_name`], the strings are fixed by the
/// implementation and do not change between compiler versions. None of
/// them starts with `::`, manual implementations must keep it that way.
///
/// [`#[derive(Reflect)]`](crate::derive::Reflect) and
/// [`#[derive(TypePath)]`](crate::derive::TypePath) build the names from
/// `module_path!()` and the identifier, unless `type_path` is given.
///
/// ```
/// use vc_reflect::derive::TypePath;
/// use vc_reflect::info::TypePath as _;
///
/// #[derive(TypePath)]
/// #[reflect(type_path = "billing::Invoice")]
/// struct Invoice;
///
/// assert_eq!(Invoice::type_path(), "billing::Invoice");
/// assert_eq!(Invoice::type_name(), "Invoice");
/// assert_eq!(Invoice::module_path(), Some("billing"));
/// ```
///
/// Generic types cache one string per instantiation with
/// [`GenericTypePathCell`](crate::impls::GenericTypePathCell).
pub trait TypePath: 'static {
    /// Module path, identifier and generics, e.g.
    /// `"core::option::Option<alloc::vec::Vec<usize>>"`.
    ///
    /// Two distinct types should never share a type path.
    fn type_path() -> &'static str;

    /// Identifier and generics without module paths, e.g.
    /// `"Option<Vec<usize>>"`. Not unique.
    fn type_name() -> &'static str;

    /// Bare identifier, e.g. `"Option"`.
    fn type_ident() -> &'static str;

    /// Module the type is declared in, `None` for primitives.
    fn module_path() -> Option<&'static str> {
        None
    }
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Object-safe access to [`TypePath`], implemented for every `TypePath`.
///
/// # Examples
///
/// ```
/// use vc_reflect::{info::DynamicTypePath, Reflect};
///
/// let text = String::new();
/// let value: &dyn Reflect = &text;
/// assert_eq!(value.reflect_type_path(), "alloc::string::String");
/// assert_eq!(value.reflect_type_name(), "String");
/// ```
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        T::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        T::type_name()
    }
}

// -----------------------------------------------------------------------------
// Type

/// A [`TypeId`] together with the [`TypePath::type_path`] of the type.
///
/// Equality and hashing only look at the id.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use vc_reflect::info::Type;
///
/// let ty = Type::of::<String>();
/// assert!(ty.is::<String>());
/// assert_eq!(ty.id(), TypeId::of::<String>());
/// assert_eq!(ty.path(), "alloc::string::String");
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: fn() -> &'static str,
}

impl Type {
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: T::type_path,
        }
    }

    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// See [`TypePath::type_path`].
    #[inline]
    pub fn path(&self) -> &'static str {
        (self.path)()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// impl_type_fn

/// Adds `ty`, `ty_id`, `type_is` and `type_path` to an info struct.
///
/// `impl_type_fn!(field)` reads the [`Type`] from `self.field`, the empty
/// form expects a `ty` method to exist already.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the underlying `Type`.
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }
        $crate::info::impl_type_fn!();
    };
    () => {
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.ty().id()
        }

        /// Returns `true` if the described type is `T`.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.ty().is::<T>()
        }

        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.ty().path()
        }
    };
}

pub(crate) use impl_type_fn;

#[cfg(test)]
mod tests {
    use super::{DynamicTypePath, Type};

    #[test]
    fn type_equality_uses_type_id() {
        assert_eq!(Type::of::<u8>(), Type::of::<u8>());
        assert_ne!(Type::of::<u8>(), Type::of::<i8>());
        assert_eq!(alloc::format!("{:?}", Type::of::<u8>()), "u8");
    }

    #[test]
    fn dynamic_names_follow_the_static_ones() {
        let list = alloc::vec![1_u8];
        assert_eq!(list.reflect_type_path(), "alloc::vec::Vec<u8>");
        assert_eq!(list.reflect_type_name(), "Vec<u8>");
    }
}
