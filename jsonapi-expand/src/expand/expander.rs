use crate::error::Error;
use crate::expand::cache::ExpansionCache;
use crate::expand::index::RelationshipIndex;
use crate::expand::record::{Field, Record};
use crate::model::relationship::{RelationshipData, Relationships};
use crate::model::resource::Resource;
use crate::settings::{NullRelationship, Settings};
use crate::Result;
use serde_json::Value;
use std::rc::Rc;

/// Which parts of a resource end up in its record. `type` and `id` are always kept.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Expansion {
    pub attributes: bool,
    pub relationships: bool,
}

impl Expansion {
    pub const FULL: Expansion = Expansion { attributes: true, relationships: true };
    /// Attributes and identity only, the form a cyclic back reference observes
    pub const SHALLOW: Expansion = Expansion { attributes: true, relationships: false };
}

/// Expands resources against one document's `included` index.
///
/// The cache belongs to a single top-level expansion and is threaded through every recursive
/// call, so each root resource must get its own `Expander` over a fresh [`ExpansionCache`].
/// Resolving a reference nested deeper than [`Settings::max_depth`] fails the expansion.
pub struct Expander<'a> {
    index: &'a RelationshipIndex<'a>,
    cache: &'a mut ExpansionCache,
    settings: &'a Settings,
    depth: usize,
}

impl<'a> Expander<'a> {
    pub fn new(
        index: &'a RelationshipIndex<'a>, cache: &'a mut ExpansionCache, settings: &'a Settings,
    ) -> Self {
        Self { index, cache, settings, depth: 0 }
    }

    pub fn expand(&mut self, resource: &Resource, expansion: Expansion) -> Result<Record> {
        let mut record = Record::default();

        if expansion.attributes {
            if let Some(attributes) = &resource.attributes {
                for (k, v) in attributes {
                    record.insert(k.as_str(), Field::Attribute(v.clone()));
                }
            }
        }

        if expansion.relationships {
            if let Some(relationships) = &resource.relationships {
                self.expand_relationships(relationships, &mut record)?;
            }
        }

        // identity goes last so it overrides attributes or relationships named `type`/`id`
        if let Some(ty) = &resource.ty {
            record.insert("type", Field::Attribute(Value::String(ty.clone())));
        }
        if let Some(id) = &resource.id {
            record.insert("id", Field::Attribute(Value::String(id.clone())));
        }

        Ok(record)
    }

    fn expand_relationships(
        &mut self, relationships: &Relationships, record: &mut Record,
    ) -> Result<()> {
        for (name, relationship) in relationships {
            match &relationship.data {
                Some(RelationshipData::Many(references)) => {
                    let records =
                        references.iter().map(|r| self.resolve(r)).collect::<Result<_>>()?;
                    record.insert(name.as_str(), Field::ToMany(records));
                },
                Some(RelationshipData::One(reference)) => {
                    let resolved = self.resolve(reference)?;
                    record.insert(name.as_str(), Field::ToOne(resolved));
                },
                None => match self.settings.null_relationship {
                    NullRelationship::Empty => {
                        record.insert(name.as_str(), Field::ToOne(Rc::new(Record::default())));
                    },
                    NullRelationship::Null => {
                        record.insert(name.as_str(), Field::Attribute(Value::Null));
                    },
                    NullRelationship::Omit => {},
                },
            }
        }
        Ok(())
    }

    /// Resolves one relationship reference to its expanded record.
    ///
    /// A shallow snapshot is cached before the resource's own relationships are expanded, so a
    /// reference looping back to it gets the snapshot instead of recursing forever. The full
    /// record then replaces the snapshot, and every later reference shares it.
    pub fn resolve(&mut self, reference: &Resource) -> Result<Rc<Record>> {
        let key = reference.identifier();
        if key.is_complete() {
            if let Some(cached) = self.cache.get(&key) {
                trace!("Cache hit on {}", key);
                return Ok(cached);
            }
        }

        if self.depth >= self.settings.max_depth {
            return Err(Error::too_deep(self.settings.max_depth));
        }
        self.depth += 1;
        let resolved = self.resolve_uncached(reference);
        self.depth -= 1;
        resolved
    }

    fn resolve_uncached(&mut self, reference: &Resource) -> Result<Rc<Record>> {
        let key = reference.identifier();
        if !key.is_complete() {
            return Ok(Rc::new(self.expand(reference, Expansion::FULL)?));
        }

        let index = self.index;
        let resource = match index.find(&key) {
            Some(included) => included,
            None => {
                trace!("No included resource for {}, using the linkage itself", key);
                reference
            },
        };

        let shallow = self.expand(resource, Expansion::SHALLOW)?;
        self.cache.put(key.clone(), Rc::new(shallow));

        let full = Rc::new(self.expand(resource, Expansion::FULL)?);
        self.cache.put(key, Rc::clone(&full));
        Ok(full)
    }
}
