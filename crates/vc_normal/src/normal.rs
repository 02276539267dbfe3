use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::Any;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use vc_reflect::Reflect;
use vc_reflect::ops::ReflectCloneError;

// -----------------------------------------------------------------------------
// Value

/// A self-describing leaf of a [`Normal`].
///
/// Holds a reflected copy of the subject, so the result never borrows
/// from the value it was produced from.
///
/// Values are totally ordered: values of different types order by type
/// path and then by type id, values of the same type by
/// [`reflect_partial_cmp`], then by equality, then by [`reflect_hash`].
///
/// [`reflect_partial_cmp`]: Reflect::reflect_partial_cmp
/// [`reflect_hash`]: Reflect::reflect_hash
#[derive(Clone)]
pub struct Value(Arc<dyn Reflect>);

impl Value {
    /// Wraps an owned value.
    #[inline]
    pub fn new<T: Reflect>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Copies a reflected value with [`Reflect::reflect_clone`].
    pub fn from_reflect(subject: &dyn Reflect) -> Result<Self, ReflectCloneError> {
        subject.reflect_clone().map(|boxed| Self(Arc::from(boxed)))
    }

    /// Returns the reflected value.
    #[inline]
    pub fn as_reflect(&self) -> &dyn Reflect {
        &*self.0
    }

    /// Returns `true` if the underlying value is a `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.as_reflect().is::<T>()
    }

    /// Downcasts the underlying value.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_reflect().downcast_ref::<T>()
    }

    /// Type path of the underlying value.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.0.reflect_type_path()
    }

    fn debug_string(&self) -> String {
        alloc::format!("{:?}", self.as_reflect())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        let (x, y) = (self.as_reflect(), other.as_reflect());

        if x.ty_id() != y.ty_id() {
            // Distinct types may share a declared path.
            return self
                .type_path()
                .cmp(other.type_path())
                .then_with(|| x.ty_id().cmp(&y.ty_id()));
        }
        if let Some(ordering) = x.reflect_partial_cmp(y) {
            return ordering;
        }
        if x.reflect_partial_eq(y) == Some(true) {
            return Ordering::Equal;
        }
        match (x.reflect_hash(), y.reflect_hash()) {
            (Some(a), Some(b)) if a != b => a.cmp(&b),
            _ => self.debug_string().cmp(&other.debug_string()),
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let value = self.as_reflect();
        value.ty_id().hash(state);
        value.reflect_hash().hash(state);
    }
}

impl fmt::Debug for Value {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_reflect().reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Normal

/// The discriminant of a [`Normal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NormalKind {
    Absent,
    Value,
    Sequence,
    Set,
    Mapping,
    Fields,
}

/// The canonical form of a value.
///
/// Two values are considered the same when their normal forms compare
/// equal. Unordered shapes are kept in sorted containers, so equality
/// and iteration order never depend on hashing or insertion order.
///
/// # Examples
///
/// ```
/// use vc_normal::{Normal, NormalKind};
///
/// let tags = Normal::set([Normal::value(2_u8), Normal::value(1_u8), Normal::value(2_u8)]);
/// assert_eq!(tags.kind(), NormalKind::Set);
/// assert_eq!(tags.as_set().unwrap().len(), 2);
/// assert_eq!(tags.to_string(), "{1, 2}");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Normal {
    /// No value, the result of normalizing `None`.
    Absent,
    /// A self-describing value, kept as is.
    Value(Value),
    /// Ordered items of a list or an array.
    Sequence(Vec<Normal>),
    /// Unordered, deduplicated items of a set.
    Set(BTreeSet<Normal>),
    /// Entries of a map, keyed by normalized keys.
    Mapping(BTreeMap<Normal, Normal>),
    /// Named members of a struct.
    Fields(BTreeMap<String, Normal>),
}

impl Normal {
    /// Wraps a self-describing value.
    #[inline]
    pub fn value<T: Reflect>(value: T) -> Self {
        Self::Value(Value::new(value))
    }

    pub fn sequence(items: impl IntoIterator<Item = Normal>) -> Self {
        Self::Sequence(items.into_iter().collect())
    }

    pub fn set(items: impl IntoIterator<Item = Normal>) -> Self {
        Self::Set(items.into_iter().collect())
    }

    pub fn mapping(entries: impl IntoIterator<Item = (Normal, Normal)>) -> Self {
        Self::Mapping(entries.into_iter().collect())
    }

    pub fn fields<K: Into<String>>(entries: impl IntoIterator<Item = (K, Normal)>) -> Self {
        Self::Fields(
            entries
                .into_iter()
                .map(|(name, normal)| (name.into(), normal))
                .collect(),
        )
    }

    pub const fn kind(&self) -> NormalKind {
        match self {
            Self::Absent => NormalKind::Absent,
            Self::Value(_) => NormalKind::Value,
            Self::Sequence(_) => NormalKind::Sequence,
            Self::Set(_) => NormalKind::Set,
            Self::Mapping(_) => NormalKind::Mapping,
            Self::Fields(_) => NormalKind::Fields,
        }
    }

    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Normal]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub const fn as_set(&self) -> Option<&BTreeSet<Normal>> {
        match self {
            Self::Set(items) => Some(items),
            _ => None,
        }
    }

    pub const fn as_mapping(&self) -> Option<&BTreeMap<Normal, Normal>> {
        match self {
            Self::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    pub const fn as_fields(&self) -> Option<&BTreeMap<String, Normal>> {
        match self {
            Self::Fields(fields) => Some(fields),
            _ => None,
        }
    }

    /// Returns the member `name` of a [`Normal::Fields`].
    pub fn get(&self, name: &str) -> Option<&Normal> {
        self.as_fields().and_then(|fields| fields.get(name))
    }

    /// Downcasts a [`Normal::Value`].
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_value().and_then(Value::downcast_ref)
    }
}

impl fmt::Display for Normal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("absent"),
            Self::Value(value) => fmt::Debug::fmt(value, f),
            Self::Sequence(items) => {
                f.write_str("[")?;
                write_joined(f, items.iter())?;
                f.write_str("]")
            }
            Self::Set(items) => {
                f.write_str("{")?;
                write_joined(f, items.iter())?;
                f.write_str("}")
            }
            Self::Mapping(entries) => {
                f.write_str("{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Self::Fields(fields) => {
                f.write_str("{")?;
                for (index, (name, value)) in fields.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

fn write_joined<'a>(f: &mut fmt::Formatter<'_>, items: impl Iterator<Item = &'a Normal>) -> fmt::Result {
    for (index, item) in items.enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(item, f)?;
    }
    Ok(())
}

impl From<Value> for Normal {
    #[inline]
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl fmt::Display for NormalKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeSet;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use core::cmp::Ordering;

    use vc_reflect::derive::Reflect;

    use super::{Normal, NormalKind, Value};

    #[derive(Reflect, Clone, PartialEq, Hash, Debug)]
    #[reflect(opaque, clone, partial_eq, hash, debug, type_path = "tests::Twin")]
    struct Left(u8);

    #[derive(Reflect, Clone, PartialEq, Hash, Debug)]
    #[reflect(opaque, clone, partial_eq, hash, debug, type_path = "tests::Twin")]
    struct Right(u8);

    #[test]
    fn value_equality_follows_reflection() {
        assert_eq!(Value::new(3_u32), Value::new(3_u32));
        assert_ne!(Value::new(3_u32), Value::new(4_u32));
        assert_ne!(Value::new(3_u32), Value::new(3_u64));
        assert_eq!(Value::new(String::from("a")).downcast_ref::<String>().unwrap(), "a");
    }

    #[test]
    fn values_of_different_types_order_by_path() {
        let a = Value::new(1_u8);
        let b = Value::new(String::from("x"));
        assert_eq!(a.cmp(&b), "u8".cmp(b.type_path()));
        assert_eq!(b.cmp(&a), a.cmp(&b).reverse());
    }

    #[test]
    fn types_sharing_a_path_stay_distinct() {
        let (left, right) = (Value::new(Left(1)), Value::new(Right(1)));
        assert_eq!(left.type_path(), right.type_path());
        assert_ne!(left, right);
        assert_eq!(left.cmp(&right), right.cmp(&left).reverse());

        let set: BTreeSet<Value> = [left.clone(), right, left].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn floats_are_totally_ordered() {
        let nan = Value::new(f64::NAN);
        assert_eq!(nan.cmp(&nan.clone()), Ordering::Equal);
        assert!(Value::new(-1.0_f64) < Value::new(0.5_f64));
    }

    #[test]
    fn set_and_mapping_are_canonical() {
        let x = Normal::set([Normal::value(2_u8), Normal::value(1_u8)]);
        let y = Normal::set([Normal::value(1_u8), Normal::value(2_u8), Normal::value(1_u8)]);
        assert_eq!(x, y);

        let m = Normal::mapping([
            (Normal::value(1_u8), Normal::Absent),
            (Normal::value(1_u8), Normal::value(true)),
        ]);
        assert_eq!(m.as_mapping().unwrap().len(), 1);
        assert_eq!(m.to_string(), "{1: true}");
    }

    #[test]
    fn accessors_and_display() {
        let normal = Normal::fields([
            ("count", Normal::value(3_u32)),
            ("items", Normal::sequence(vec![Normal::Absent, Normal::value(1_i8)])),
        ]);
        assert_eq!(normal.kind(), NormalKind::Fields);
        assert_eq!(normal.get("count").and_then(Normal::downcast_ref::<u32>), Some(&3));
        assert!(normal.get("missing").is_none());
        assert!(Normal::Absent.is_absent());
        assert_eq!(normal.to_string(), "{count: 3, items: [absent, 1]}");
        assert_eq!(NormalKind::Mapping.to_string(), "Mapping");
    }
}
