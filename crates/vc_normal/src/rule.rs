use alloc::sync::Arc;
use core::fmt;

use vc_reflect::Reflect;
use vc_reflect::info::TypePath;

use crate::{Normal, NormalError, Normalizer};

type RuleFn = dyn Fn(&Normalizer, &dyn Reflect) -> Result<Normal, NormalError> + Send + Sync;

// -----------------------------------------------------------------------------
// Rule

/// Converts values of one type into their [`Normal`] form.
///
/// A rule receives the [`Normalizer`] it runs in, so it can normalize
/// nested values with [`Normalizer::normal`]. Cloning a rule is cheap.
///
/// # Examples
///
/// ```
/// use vc_normal::{Normal, Normalizer, Rule};
///
/// let rule = Rule::typed::<String, _>(|_, s| Ok(Normal::value(s.len())));
/// let normalizer = Normalizer::new();
///
/// let normal = rule.apply(&normalizer, &String::from("four")).unwrap();
/// assert_eq!(normal, Normal::value(4_usize));
/// assert!(rule.apply(&normalizer, &4_usize).is_err());
/// ```
#[derive(Clone)]
pub struct Rule(Arc<RuleFn>);

impl Rule {
    /// Creates a rule from a closure over reflected values.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Normalizer, &dyn Reflect) -> Result<Normal, NormalError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Creates a rule for values of type `T`.
    ///
    /// Applying it to another type fails with
    /// [`NormalError::MismatchedSubject`].
    pub fn typed<T, F>(f: F) -> Self
    where
        T: Reflect + TypePath,
        F: Fn(&Normalizer, &T) -> Result<Normal, NormalError> + Send + Sync + 'static,
    {
        Self::new(move |normalizer, subject| match subject.downcast_ref::<T>() {
            Some(value) => f(normalizer, value),
            None => Err(NormalError::MismatchedSubject {
                expected: T::type_path(),
                found: subject.reflect_type_path(),
            }),
        })
    }

    #[inline]
    pub fn apply(&self, normalizer: &Normalizer, subject: &dyn Reflect) -> Result<Normal, NormalError> {
        (self.0)(normalizer, subject)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Rule(..)")
    }
}
