use core::any::TypeId;
use std::sync::{PoisonError, RwLock};

use vc_utils::TypeIdMap;

use crate::Rule;

// -----------------------------------------------------------------------------
// RuleCache

/// Rules by type, shared between threads.
///
/// Lookups take the read lock only. Rules are never applied while a
/// lock is held, so a rule may normalize nested values of any type.
#[derive(Default)]
pub(crate) struct RuleCache {
    rules: RwLock<TypeIdMap<Rule>>,
}

impl RuleCache {
    pub fn new(rules: TypeIdMap<Rule>) -> Self {
        Self {
            rules: RwLock::new(rules),
        }
    }

    pub fn get(&self, type_id: TypeId) -> Option<Rule> {
        self.rules
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .cloned()
    }

    /// Stores `rule` unless another thread was faster, returns the stored one.
    pub fn insert(&self, type_id: TypeId, rule: Rule) -> Rule {
        self.rules
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || rule)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.rules.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use vc_utils::TypeIdMap;

    use super::RuleCache;
    use crate::{Normal, Normalizer, Rule};

    #[test]
    fn first_insert_wins() {
        let cache = RuleCache::new(TypeIdMap::new());
        let id = TypeId::of::<u8>();
        assert!(cache.get(id).is_none());

        cache.insert(id, Rule::new(|_, _| Ok(Normal::Absent)));
        let kept = cache.insert(id, Rule::new(|_, _| Ok(Normal::value(1_u8))));

        let normalizer = Normalizer::new();
        assert_eq!(kept.apply(&normalizer, &0_u8), Ok(Normal::Absent));
        assert_eq!(cache.len(), 1);
    }
}
