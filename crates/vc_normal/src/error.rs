use alloc::string::String;

use thiserror::Error;
use vc_reflect::ops::ReflectCloneError;

// -----------------------------------------------------------------------------
// Error

/// An error returned by [`Normalizer::normal`](crate::Normalizer::normal).
///
/// Every failure is fatal to the whole call, there are no partial results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NormalError {
    /// No explicit rule, no producer and no fallback for this type.
    #[error("no normal rule can be resolved for `{type_path}`")]
    UnresolvableType { type_path: &'static str },

    /// A member listed by the [`FieldMapper`](crate::FieldMapper) could not
    /// be read from the subject.
    #[error("member `{member}` can not be read from `{subject}`")]
    InaccessibleMember {
        member: String,
        subject: &'static str,
    },

    /// A rule was applied to a value of another type.
    #[error("rule for `{expected}` applied to a `{found}`")]
    MismatchedSubject {
        expected: &'static str,
        found: &'static str,
    },

    /// A self-describing value could not be copied into the result.
    #[error(transparent)]
    NotCloneable(#[from] ReflectCloneError),
}
