use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use vc_reflect::Reflect;
use vc_reflect::info::{TypeInfo, TypePath};
use vc_utils::TypeIdMap;

use crate::cache::RuleCache;
use crate::{Factory, Normal, NormalError, Normalizer, Producer, Producers, Rule, Value};

// -----------------------------------------------------------------------------
// NormalizerBuilder

/// Configures a [`Normalizer`].
///
/// The configuration is frozen by [`build`](Self::build).
///
/// # Examples
///
/// ```
/// use vc_normal::{Normal, Normalizer};
///
/// let normalizer = Normalizer::builder()
///     .with_collections()
///     .add_rule::<String, _>(|_, s| Ok(Normal::value(s.to_lowercase())))
///     .build();
///
/// let normal = normalizer.normal(&vec![String::from("A")]).unwrap();
/// assert_eq!(normal, Normal::sequence([Normal::value(String::from("a"))]));
/// ```
pub struct NormalizerBuilder {
    producers: Vec<Producer>,
    fallback: Option<Factory>,
    rules: TypeIdMap<Rule>,
}

impl NormalizerBuilder {
    /// No producers, no fallback and no rules.
    pub fn empty() -> Self {
        Self {
            producers: Vec::new(),
            fallback: None,
            rules: TypeIdMap::new(),
        }
    }

    /// Self-describing values, arrays and `None`, with the fields fallback.
    pub fn new() -> Self {
        Self {
            producers: alloc::vec![
                Producer::self_describing(),
                Producer::array(),
                Producer::absent(),
            ],
            fallback: Some(Producer::fields()),
            rules: TypeIdMap::new(),
        }
    }

    /// Appends the list, set and map producers.
    pub fn with_collections(self) -> Self {
        self.with_producer(Producer::list())
            .with_producer(Producer::set())
            .with_producer(Producer::map())
    }

    /// Registers the rule of `T`, replacing a previous one.
    pub fn add_rule<T, F>(mut self, f: F) -> Self
    where
        T: Reflect + TypePath,
        F: Fn(&Normalizer, &T) -> Result<Normal, NormalError> + Send + Sync + 'static,
    {
        self.rules.insert_type::<T>(Rule::typed(f));
        self
    }

    /// Registers the rule of the type `info` describes.
    pub fn add_rule_by_info(mut self, info: &'static TypeInfo, rule: Rule) -> Self {
        self.rules.insert(info.ty_id(), rule);
        self
    }

    /// Keeps values of `T` as [`Normal::Value`].
    ///
    /// `T` must support [`Reflect::reflect_clone`].
    pub fn add_opaque<T: Reflect + TypePath>(self) -> Self {
        self.add_rule::<T, _>(|_, value| Ok(Normal::Value(Value::from_reflect(value)?)))
    }

    /// Appends a producer built from `predicate` and `factory`, tried
    /// after the existing ones.
    pub fn add_producer<P, F>(self, predicate: P, factory: F) -> Self
    where
        P: Fn(&'static TypeInfo) -> bool + Send + Sync + 'static,
        F: Fn(&'static TypeInfo) -> Rule + Send + Sync + 'static,
    {
        self.with_producer(Producer::new("custom", predicate, factory))
    }

    /// Prepends a producer built from `predicate` and `factory`, tried
    /// before the existing ones.
    pub fn add_producer_first<P, F>(self, predicate: P, factory: F) -> Self
    where
        P: Fn(&'static TypeInfo) -> bool + Send + Sync + 'static,
        F: Fn(&'static TypeInfo) -> Rule + Send + Sync + 'static,
    {
        self.with_producer_first(Producer::new("custom", predicate, factory))
    }

    /// Appends a producer.
    pub fn with_producer(mut self, producer: Producer) -> Self {
        self.producers.push(producer);
        self
    }

    /// Prepends a producer.
    pub fn with_producer_first(mut self, producer: Producer) -> Self {
        self.producers.insert(0, producer);
        self
    }

    /// Replaces the fallback factory.
    pub fn with_fallback<F>(mut self, factory: F) -> Self
    where
        F: Fn(&'static TypeInfo) -> Rule + Send + Sync + 'static,
    {
        self.fallback = Some(Arc::new(factory));
        self
    }

    /// Removes the fallback, types no producer accepts become errors.
    pub fn without_fallback(mut self) -> Self {
        self.fallback = None;
        self
    }

    pub fn build(self) -> Normalizer {
        log::debug!(
            "building normalizer with {} producers, {} rules, fallback: {}",
            self.producers.len(),
            self.rules.len(),
            self.fallback.is_some(),
        );

        Normalizer::from_parts(
            Producers::new(self.producers, self.fallback),
            RuleCache::new(self.rules),
        )
    }
}

impl Default for NormalizerBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NormalizerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizerBuilder")
            .field("producers", &self.producers)
            .field("fallback", &self.fallback.is_some())
            .field("rules", &self.rules.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use vc_reflect::info::Typed;

    use super::NormalizerBuilder;
    use crate::{Normal, Producer, Rule};

    #[test]
    fn defaults() {
        let normalizer = NormalizerBuilder::new().build();
        assert_eq!(normalizer.producers().len(), 3);
        assert!(normalizer.producers().has_fallback());

        // Lists fall back to fields, which a list has none of.
        assert_eq!(normalizer.normal(&vec![1_u8]), Ok(Normal::fields::<String>([])));

        let normalizer = NormalizerBuilder::new().with_collections().build();
        assert_eq!(normalizer.producers().len(), 6);
        assert_eq!(
            normalizer.normal(&vec![1_u8]),
            Ok(Normal::sequence([Normal::value(1_u8)]))
        );
    }

    #[test]
    fn rules_count_as_cached() {
        let normalizer = NormalizerBuilder::empty()
            .add_rule_by_info(u8::type_info(), Rule::new(|_, _| Ok(Normal::Absent)))
            .build();
        assert_eq!(normalizer.cached_len(), 1);
        assert_eq!(normalizer.normal(&9_u8), Ok(Normal::Absent));
    }

    #[test]
    fn first_producer_takes_precedence() {
        let normalizer = NormalizerBuilder::new()
            .add_producer_first(
                |info| info.type_is::<u8>(),
                |_| Rule::new(|_, _| Ok(Normal::value(true))),
            )
            .build();
        assert_eq!(normalizer.producers().iter().next().map(Producer::label), Some("custom"));
        assert_eq!(normalizer.normal(&9_u8), Ok(Normal::value(true)));
        assert_eq!(normalizer.normal(&9_u16), Ok(Normal::value(9_u16)));
    }

    #[test]
    fn custom_fallback() {
        let normalizer = NormalizerBuilder::empty()
            .with_fallback(|_| Rule::new(|_, _| Ok(Normal::Absent)))
            .build();
        assert_eq!(normalizer.normal(&String::from("x")), Ok(Normal::Absent));
    }
}
