use core::fmt;

use vc_reflect::Reflect;
use vc_reflect::info::TypeInfo;
use vc_reflect::ops::ReflectRef;

use crate::cache::RuleCache;
use crate::void::VOID;
use crate::{Normal, NormalError, NormalizerBuilder, Producers, Rule};

// -----------------------------------------------------------------------------
// Normalizer

/// Converts reflected values into their [`Normal`] form.
///
/// The rule of a type is looked up in this order:
///
/// 1. rules registered with [`NormalizerBuilder::add_rule`] and siblings;
/// 2. the first [`Producer`](crate::Producer) whose predicate accepts the
///    type's [`TypeInfo`];
/// 3. the fallback factory, which decomposes values by fields unless
///    replaced or removed.
///
/// A resolved rule is cached and reused for the lifetime of the
/// normalizer. The normalizer can be shared between threads.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
///
/// use vc_normal::{Normal, Normalizer};
/// use vc_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Order {
///     count: u32,
///     label: String,
///     tags: HashSet<String>,
/// }
///
/// let order = Order {
///     count: 3,
///     label: "abc".into(),
///     tags: ["b".into(), "a".into()].into(),
/// };
///
/// let normal = Normalizer::new().normal(&order).unwrap();
/// assert_eq!(
///     normal,
///     Normal::fields([
///         ("count", Normal::value(3_u32)),
///         ("label", Normal::value(String::from("abc"))),
///         ("tags", Normal::set([
///             Normal::value(String::from("a")),
///             Normal::value(String::from("b")),
///         ])),
///     ]),
/// );
/// ```
pub struct Normalizer {
    producers: Producers,
    cache: RuleCache,
}

impl Normalizer {
    /// The default configuration, with collection producers.
    ///
    /// Same as `Normalizer::builder().with_collections().build()`.
    #[inline]
    pub fn new() -> Self {
        Self::builder().with_collections().build()
    }

    /// A builder holding the base producers and the fields fallback.
    #[inline]
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::new()
    }

    pub(crate) fn from_parts(producers: Producers, cache: RuleCache) -> Self {
        Self { producers, cache }
    }

    /// Normalizes `subject`.
    ///
    /// Optional values are unwrapped first, `None` is normalized as
    /// [`Void`](crate::Void).
    pub fn normal(&self, subject: &dyn Reflect) -> Result<Normal, NormalError> {
        let subject = unwrap_optional(subject);
        let rule = self.rule_for(subject.reflect_type_info())?;
        rule.apply(self, subject)
    }

    /// Normalizes a typed value.
    #[inline]
    pub fn normal_of<T: Reflect>(&self, value: &T) -> Result<Normal, NormalError> {
        self.normal(value)
    }

    /// Returns the rule of the type `info` describes, resolving and
    /// caching it on first use.
    pub fn rule_for(&self, info: &'static TypeInfo) -> Result<Rule, NormalError> {
        if let Some(rule) = self.cache.get(info.ty_id()) {
            return Ok(rule);
        }

        log::trace!("resolving rule for `{}`", info.type_path());
        let rule = self.producers.resolve(info)?;
        Ok(self.cache.insert(info.ty_id(), rule))
    }

    /// Number of cached rules, registered rules included.
    #[inline]
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    #[inline]
    pub fn producers(&self) -> &Producers {
        &self.producers
    }
}

impl Default for Normalizer {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("producers", &self.producers)
            .field("cached", &self.cached_len())
            .finish()
    }
}

fn unwrap_optional(mut subject: &dyn Reflect) -> &dyn Reflect {
    while let ReflectRef::Optional(optional) = subject.reflect_ref() {
        subject = match optional.value() {
            Some(value) => value,
            None => &VOID,
        };
    }
    subject
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use vc_reflect::info::Typed;

    use super::Normalizer;
    use crate::{Normal, NormalError};

    #[test]
    fn options_are_unwrapped() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normal(&Some(Some(5_u8))), Ok(Normal::value(5_u8)));
        assert_eq!(normalizer.normal(&None::<u8>), Ok(Normal::Absent));
        assert_eq!(normalizer.normal(&Some(None::<String>)), Ok(Normal::Absent));
    }

    #[test]
    fn rules_are_cached_once() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.cached_len(), 0);

        normalizer.normal(&vec![1_u8, 2]).unwrap();
        assert_eq!(normalizer.cached_len(), 2);

        normalizer.normal(&vec![3_u8]).unwrap();
        assert_eq!(normalizer.cached_len(), 2);
    }

    #[test]
    fn empty_normalizer_resolves_nothing() {
        let normalizer = Normalizer::builder().without_fallback().build();
        assert!(!normalizer.producers().has_fallback());
        assert!(normalizer.rule_for(u8::type_info()).is_ok());

        let normalizer = crate::NormalizerBuilder::empty().build();
        assert_eq!(
            normalizer.normal(&1_u8),
            Err(NormalError::UnresolvableType { type_path: "u8" })
        );
    }
}
