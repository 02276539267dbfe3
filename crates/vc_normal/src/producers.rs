use alloc::borrow::Cow;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use vc_reflect::Reflect;
use vc_reflect::info::{TypeInfo, ValueTraits};
use vc_reflect::ops::ReflectRef;

use crate::{FieldMapper, Normal, NormalError, Rule, Value, Void};

/// Decides whether a [`Producer`] handles a type.
pub type Predicate = Arc<dyn Fn(&'static TypeInfo) -> bool + Send + Sync>;

/// Builds the [`Rule`] of a type.
pub type Factory = Arc<dyn Fn(&'static TypeInfo) -> Rule + Send + Sync>;

// -----------------------------------------------------------------------------
// Producer

/// A predicate over [`TypeInfo`] paired with a rule factory.
///
/// Producers build rules lazily for whole families of types, such as
/// every list or every opaque type with value semantics.
#[derive(Clone)]
pub struct Producer {
    label: Cow<'static, str>,
    predicate: Predicate,
    factory: Factory,
}

impl Producer {
    pub fn new<P, F>(label: impl Into<Cow<'static, str>>, predicate: P, factory: F) -> Self
    where
        P: Fn(&'static TypeInfo) -> bool + Send + Sync + 'static,
        F: Fn(&'static TypeInfo) -> Rule + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            predicate: Arc::new(predicate),
            factory: Arc::new(factory),
        }
    }

    /// A name shown in logs.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn matches(&self, info: &'static TypeInfo) -> bool {
        (self.predicate)(info)
    }

    #[inline]
    pub fn produce(&self, info: &'static TypeInfo) -> Rule {
        (self.factory)(info)
    }

    /// Opaque types and structs declaring clone, equality, hash and debug
    /// are kept as [`Normal::Value`].
    pub fn self_describing() -> Self {
        Self::new(
            "self_describing",
            |info| info.value_traits().contains(ValueTraits::SELF_DESCRIBING),
            |_| Rule::new(|_, subject| Ok(Normal::Value(Value::from_reflect(subject)?))),
        )
    }

    /// Fixed size arrays become [`Normal::Sequence`].
    pub fn array() -> Self {
        Self::new("array", TypeInfo::is_array, |info| {
            Rule::new(move |normalizer, subject| match subject.reflect_ref() {
                ReflectRef::Array(array) => normalizer.normal_array(array),
                _ => Err(mismatched(info, subject)),
            })
        })
    }

    /// [`Void`] becomes [`Normal::Absent`].
    pub fn absent() -> Self {
        Self::new(
            "absent",
            TypeInfo::type_is::<Void>,
            |_| Rule::new(|_, _| Ok(Normal::Absent)),
        )
    }

    /// Lists become [`Normal::Sequence`].
    pub fn list() -> Self {
        Self::new("list", TypeInfo::is_list, |info| {
            Rule::new(move |normalizer, subject| match subject.reflect_ref() {
                ReflectRef::List(list) => normalizer.normal_list(list),
                _ => Err(mismatched(info, subject)),
            })
        })
    }

    /// Sets become [`Normal::Set`].
    pub fn set() -> Self {
        Self::new("set", TypeInfo::is_set, |info| {
            Rule::new(move |normalizer, subject| match subject.reflect_ref() {
                ReflectRef::Set(set) => normalizer.normal_set(set),
                _ => Err(mismatched(info, subject)),
            })
        })
    }

    /// Maps become [`Normal::Mapping`].
    pub fn map() -> Self {
        Self::new("map", TypeInfo::is_map, |info| {
            Rule::new(move |normalizer, subject| match subject.reflect_ref() {
                ReflectRef::Map(map) => normalizer.normal_map(map),
                _ => Err(mismatched(info, subject)),
            })
        })
    }

    /// Decomposes any type into [`Normal::Fields`] through the
    /// [`FieldMapper`]. A type without members, such as an opaque type
    /// lacking value semantics, yields empty fields.
    pub fn fields() -> Factory {
        Arc::new(|info: &'static TypeInfo| {
            if FieldMapper::fields_of(info).is_empty() {
                log::debug!("`{}` has no members, normalized to empty fields", info.type_path());
            }
            Rule::new(move |normalizer, subject| {
                normalizer.decompose_by_fields(info, subject).map(Normal::Fields)
            })
        })
    }
}

impl fmt::Debug for Producer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Producer").field("label", &self.label).finish_non_exhaustive()
    }
}

fn mismatched(info: &'static TypeInfo, subject: &dyn Reflect) -> NormalError {
    NormalError::MismatchedSubject {
        expected: info.type_path(),
        found: subject.reflect_type_path(),
    }
}

// -----------------------------------------------------------------------------
// Producers

/// Ordered producers and an optional fallback factory.
#[derive(Clone, Default)]
pub struct Producers {
    producers: Vec<Producer>,
    fallback: Option<Factory>,
}

impl Producers {
    pub fn new(producers: Vec<Producer>, fallback: Option<Factory>) -> Self {
        Self { producers, fallback }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.producers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.producers.is_empty()
    }

    #[inline]
    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Producer> {
        self.producers.iter()
    }

    /// Builds the rule of `info` with the first matching producer, or
    /// the fallback when none matches.
    pub fn resolve(&self, info: &'static TypeInfo) -> Result<Rule, NormalError> {
        if let Some(producer) = self.producers.iter().find(|p| p.matches(info)) {
            log::debug!("rule for `{}` produced by `{}`", info.type_path(), producer.label());
            return Ok(producer.produce(info));
        }

        if let Some(fallback) = &self.fallback {
            log::debug!("rule for `{}` produced by the fallback", info.type_path());
            return Ok(fallback(info));
        }

        log::warn!("no rule can be resolved for `{}`", info.type_path());
        Err(NormalError::UnresolvableType {
            type_path: info.type_path(),
        })
    }
}

impl fmt::Debug for Producers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Producers")
            .field("producers", &self.producers)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use vc_reflect::derive::Reflect;
    use vc_reflect::info::Typed;

    use super::{Producer, Producers};
    use crate::{NormalError, Void};

    #[derive(Reflect, Clone, PartialEq, Hash, Debug)]
    #[reflect(clone, partial_eq, hash, debug)]
    struct Span {
        start: u32,
        end: u32,
    }

    #[derive(Reflect)]
    struct Plain {
        start: u32,
    }

    #[derive(Reflect, Clone)]
    #[reflect(opaque, clone)]
    struct Token(u8);

    fn label_of(producers: &Producers, info: &'static vc_reflect::info::TypeInfo) -> Option<String> {
        producers
            .iter()
            .find(|p| p.matches(info))
            .map(|p| String::from(p.label()))
    }

    #[test]
    fn builtin_predicates() {
        let producers = Producers::new(
            vec![
                Producer::self_describing(),
                Producer::array(),
                Producer::absent(),
                Producer::list(),
                Producer::set(),
                Producer::map(),
            ],
            None,
        );

        let label = |info| label_of(&producers, info);
        assert_eq!(label(u32::type_info()).as_deref(), Some("self_describing"));
        assert_eq!(label(String::type_info()).as_deref(), Some("self_describing"));
        assert_eq!(label(<[u8; 3]>::type_info()).as_deref(), Some("array"));
        assert_eq!(label(Void::type_info()).as_deref(), Some("absent"));
        assert_eq!(label(<Vec<u8>>::type_info()).as_deref(), Some("list"));
        assert_eq!(label(<Option<u8>>::type_info()), None);
        assert_eq!(label(Span::type_info()).as_deref(), Some("self_describing"));
        assert_eq!(label(Plain::type_info()), None);
    }

    #[test]
    fn resolve_without_fallback_fails() {
        let producers = Producers::default();
        let err = producers.resolve(u8::type_info()).unwrap_err();
        assert_eq!(err, NormalError::UnresolvableType { type_path: "u8" });
    }

    #[test]
    fn first_match_wins() {
        let producers = Producers::new(
            vec![
                Producer::new("first", |_| true, |_| absent_rule()),
                Producer::self_describing(),
            ],
            Some(Producer::fields()),
        );
        assert_eq!(label_of(&producers, u8::type_info()).as_deref(), Some("first"));
        assert!(producers.has_fallback());
        assert_eq!(producers.len(), 2);
    }

    #[test]
    fn fields_of_memberless_types_are_empty() {
        let rule = Producer::fields()(Token::type_info());
        let normal = rule.apply(&crate::Normalizer::new(), &Token(1)).unwrap();
        assert_eq!(normal, crate::Normal::fields::<String>([]));

        let rule = Producer::fields()(Plain::type_info());
        let normal = rule.apply(&crate::Normalizer::new(), &Plain { start: 2 }).unwrap();
        assert_eq!(normal.get("start"), Some(&crate::Normal::value(2_u32)));
    }

    fn absent_rule() -> crate::Rule {
        crate::Rule::new(|_, _| Ok(crate::Normal::Absent))
    }
}
