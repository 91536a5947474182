use crate::expand::record::Record;
use crate::model::resource::ResourceIdentifier;
use std::collections::HashMap;
use std::rc::Rc;

/// Records already expanded during one top-level expansion, keyed by `(type, id)`.
///
/// An entry is never removed, only replaced: first by the shallow snapshot that cyclic back
/// references observe, then by the full record. One instance serves exactly one root resource.
#[derive(Debug, Default)]
pub struct ExpansionCache {
    records: HashMap<ResourceIdentifier, Rc<Record>>,
}

impl ExpansionCache {
    pub fn get(&self, key: &ResourceIdentifier) -> Option<Rc<Record>> {
        self.records.get(key).cloned()
    }

    pub fn put(&mut self, key: ResourceIdentifier, record: Rc<Record>) {
        self.records.insert(key, record);
    }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}
