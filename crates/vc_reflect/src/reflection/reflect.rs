use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::cmp::Ordering;
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::{ReflectCloneError, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime reflection in [`vc_reflect`].
///
/// This trait enables read access to data without compile-time type
/// information: its [`TypeInfo`], its [kind](ReflectKind), and the
/// value-level operations the type chooses to expose.
///
/// # Recommendations
///
/// It's strongly recommended to use [the derive macro for `Reflect`] rather than
/// manually implementing this trait. The derive macro implements this trait
/// along with [`Struct`] and [`Typed`].
///
/// # Type Information
///
/// `Reflect` extends [`DynamicTypePath`] and [`DynamicTyped`]:
///
/// ```rust
/// # use vc_reflect::{Reflect, info::{DynamicTypePath, DynamicTyped}};
/// let value = 10i32.into_boxed_reflect();
/// assert_eq!(value.reflect_type_path(), "i32");
/// assert!(value.reflect_type_info().type_is::<i32>());
/// ```
///
/// # Type Identification
///
/// [`Any::type_id`] on `Box<dyn Reflect>` returns the container's type ID,
/// not the inner value's. Use [`Reflect::ty_id`] instead:
///
/// ```rust
/// # use vc_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());    // Container type ID
/// assert!(x.ty_id() == TypeId::of::<i32>());      // Preferred method
/// ```
///
/// # Value Operations
///
/// [`reflect_clone`], [`reflect_partial_eq`], [`reflect_partial_cmp`],
/// [`reflect_hash`] and [`reflect_debug`] are optional capabilities. The
/// [`ValueTraits`] of an [`OpaqueInfo`] declare which ones an opaque type
/// actually supports.
///
/// [`reflect_partial_eq`]: Reflect::reflect_partial_eq
/// [`reflect_partial_cmp`]: Reflect::reflect_partial_cmp
/// [`reflect_hash`]: Reflect::reflect_hash
/// [`reflect_debug`]: Reflect::reflect_debug
/// [`reflect_clone`]: Reflect::reflect_clone
/// [`vc_reflect`]: crate
/// [the derive macro for `Reflect`]: crate::derive::Reflect
/// [`Struct`]: crate::ops::Struct
/// [`Typed`]: crate::info::Typed
/// [`TypeInfo`]: crate::info::TypeInfo
/// [`OpaqueInfo`]: crate::info::OpaqueInfo
/// [`ValueTraits`]: crate::info::ValueTraits
/// [`DynamicTypePath`]: crate::info::DynamicTypePath
/// [`DynamicTyped`]: crate::info::DynamicTyped
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    ///
    /// # Example
    ///
    /// ```
    /// use vc_reflect::Reflect;
    ///
    /// let x = 32;
    /// let r: &dyn Reflect = x.as_reflect();
    /// ```
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Return the [`TypeId`] of underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns a pure enumeration of ["kinds"](ReflectKind) of type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::{Reflect, info::ReflectKind};
    /// let vec = vec![1, 2, 3].into_boxed_reflect();
    ///
    /// assert_eq!(vec.reflect_kind(), ReflectKind::List);
    /// ```
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable enumeration of ["kinds"](ReflectRef) of type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::{Reflect, ops::List};
    /// let vec = vec![1, 2, 3].into_boxed_reflect();
    ///
    /// let list: &dyn List = vec.reflect_ref().as_list().unwrap();
    /// assert_eq!(list.len(), 3);
    /// ```
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Attempts to clone `Self` using reflection.
    ///
    /// On success the returned value has the same concrete type as `self`.
    ///
    /// # Example
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let value = vec![String::from("a")];
    /// let cloned = value.reflect_clone().unwrap();
    /// assert!(cloned.is::<Vec<String>>());
    /// ```
    ///
    /// Derived types support it with the `#[reflect(clone)]` flag:
    ///
    /// ```
    /// # use vc_reflect::derive::Reflect;
    /// #[derive(Reflect, Clone)]
    /// #[reflect(clone)]
    /// struct A { /* ... */ }
    /// ```
    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError>;

    /// Returns a "partial equality" comparison result.
    ///
    /// If the underlying type does not support equality testing, returns `None`.
    /// Values of different types are never equal.
    ///
    /// For composite types this performs an element-by-element comparison,
    /// see [`crate::impls::struct_partial_eq`] and siblings.
    #[inline]
    fn reflect_partial_eq(&self, _other: &dyn Reflect) -> Option<bool> {
        None
    }

    /// Returns an ordering between `self` and `other`.
    ///
    /// Returns `None` if the type has no ordering, or if `other`
    /// has another type.
    ///
    /// Built-in scalars provide it; derived types opt in with
    /// `#[reflect(partial_cmp)]`.
    #[inline]
    fn reflect_partial_cmp(&self, _other: &dyn Reflect) -> Option<Ordering> {
        None
    }

    /// Returns a hash of the value, may differ from [`core::hash::Hash`].
    ///
    /// We use [`reflect_hasher`](crate::reflect_hasher) to ensure that the hash
    /// result of the program running multiple times is the same for the same data.
    #[inline]
    fn reflect_hash(&self) -> Option<u64> {
        None
    }

    /// Debug formatter for the value.
    ///
    /// For opaque type, this function will write `"Opaque(type_path)"` by default.
    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_debug(data, f),
            ReflectRef::List(data) => impls::list_debug(data, f),
            ReflectRef::Array(data) => impls::array_debug(data, f),
            ReflectRef::Map(data) => impls::map_debug(data, f),
            ReflectRef::Set(data) => impls::set_debug(data, f),
            ReflectRef::Optional(data) => impls::optional_debug(data, f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// assert!(x.is::<i32>());
    /// ```
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// assert_eq!(x.downcast_ref::<i32>(), Some(&10));
    /// assert_eq!(x.downcast_ref::<u32>(), None);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// assert_eq!(x.take::<i32>(), Some(10));
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Option<T> {
        let any: Box<dyn Any> = self;
        any.downcast::<T>().ok().map(|boxed| *boxed)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement `reflect_kind` and `reflect_ref` for a kind.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
