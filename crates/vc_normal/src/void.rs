use vc_reflect::derive::Reflect;

/// The runtime type of "no value".
///
/// [`Normalizer::normal`](crate::Normalizer::normal) dispatches `None` on
/// this type, so absence goes through the same rule lookup as any other
/// value. The default configuration maps it to [`Normal::Absent`].
///
/// It declares no equality or hash, hence is never self-describing.
///
/// [`Normal::Absent`]: crate::Normal::Absent
#[derive(Reflect, Clone, Copy, Debug, Default)]
#[reflect(opaque, clone, type_path = "vc_normal::Void")]
pub struct Void;

/// The instance `None` is dispatched on.
pub(crate) static VOID: Void = Void;

#[cfg(test)]
mod tests {
    use vc_reflect::info::{TypePath, Typed};

    use super::Void;

    #[test]
    fn void_is_opaque_but_not_self_describing() {
        assert_eq!(Void::type_path(), "vc_normal::Void");
        let info = Void::type_info().as_opaque().unwrap();
        assert!(!info.is_self_describing());
    }
}
