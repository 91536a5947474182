use crate::model::resource::{Resource, ResourceIdentifier};
use std::collections::HashMap;

/// Lookup from `(type, id)` to the raw `included` resource.
///
/// Built once per document and read-only afterwards. When `included` holds the same identity
/// twice, the later entry wins. Entries missing `type` or `id` are never returned by
/// [`RelationshipIndex::find`].
#[derive(Debug, Clone, Default)]
pub struct RelationshipIndex<'a> {
    resources: HashMap<ResourceIdentifier, &'a Resource>,
}

impl<'a> RelationshipIndex<'a> {
    pub fn new(included: &'a [Resource]) -> Self {
        let mut resources = HashMap::with_capacity(included.len());
        for resource in included {
            let key = resource.identifier();
            if !key.is_complete() {
                trace!("Skipping included resource without identity: {}", key);
                continue;
            }
            if resources.insert(key, resource).is_some() {
                trace!("Duplicated included resource {}, the last one wins", resource.identifier());
            }
        }
        Self { resources }
    }

    pub fn find(&self, key: &ResourceIdentifier) -> Option<&'a Resource> {
        if key.is_complete() {
            self.resources.get(key).copied()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize { self.resources.len() }

    pub fn is_empty(&self) -> bool { self.resources.is_empty() }
}
