use crate::expand::{Deserialized, Expander, Expansion, ExpansionCache, RelationshipIndex};
use crate::model::document::{Document, PrimaryData};
use crate::settings::Settings;
use crate::Result;
use serde::Deserialize;
use serde_json::Value;
use std::rc::Rc;

/// Deserializes an already decoded JSON:API document
#[derive(Debug, Clone, Default)]
pub struct Deserializer {
    document: Document,
    settings: Settings,
}

impl Deserializer {
    pub fn new(document: Document, settings: Settings) -> Self { Self { document, settings } }

    /// Expands the primary data against `included`.
    ///
    /// Every root resource gets its own [`ExpansionCache`], so records are shared between
    /// relationships of one item of an array `data`, never between two items. References
    /// nested deeper than [`Settings::max_depth`] fail the whole document.
    pub fn deserialize(&self) -> Result<Deserialized> {
        let index = RelationshipIndex::new(&self.document.included);

        match &self.document.data {
            PrimaryData::Single(resource) => {
                debug!(
                    "Deserializing a single resource with {} included resources",
                    index.len()
                );
                let mut cache = ExpansionCache::default();
                let record = Expander::new(&index, &mut cache, &self.settings)
                    .expand(resource, Expansion::FULL)?;
                Ok(Deserialized::Single(Rc::new(record)))
            },
            PrimaryData::Multiple(resources) => {
                debug!(
                    "Deserializing {} resources with {} included resources",
                    resources.len(),
                    index.len()
                );
                let expansion = Expansion {
                    attributes: self.settings.collection_attributes,
                    relationships: true,
                };
                let records = resources
                    .iter()
                    .map(|resource| {
                        let mut cache = ExpansionCache::default();
                        let record = Expander::new(&index, &mut cache, &self.settings)
                            .expand(resource, expansion)?;
                        Ok(Rc::new(record))
                    })
                    .collect::<Result<_>>()?;
                Ok(Deserialized::Multiple(records))
            },
        }
    }
}

pub fn deserialize(document: &Value) -> Result<Deserialized> {
    deserialize_with(document, &Settings::default())
}

pub fn deserialize_with(document: &Value, settings: &Settings) -> Result<Deserialized> {
    let document = Document::deserialize(document)?;
    Deserializer::new(document, settings.clone()).deserialize()
}

pub fn from_str(s: &str) -> Result<Deserialized> {
    let document: Document = serde_json::from_str(s)?;
    Deserializer::new(document, Default::default()).deserialize()
}

pub fn from_slice(v: &[u8]) -> Result<Deserialized> {
    let document: Document = serde_json::from_slice(v)?;
    Deserializer::new(document, Default::default()).deserialize()
}
