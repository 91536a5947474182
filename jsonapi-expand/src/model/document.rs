use crate::model::resource::{Resource, Resources};
use core::fmt;
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

pub type Included = Resources;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PrimaryData {
    Multiple(Resources),
    Single(Box<Resource>),
}

impl Default for PrimaryData {
    fn default() -> Self { PrimaryData::Single(Default::default()) }
}

/// The specification refers to this as a top-level `document`
///
/// Only `data` and `included` take part in deserialization. `links`, `meta`, `jsonapi` and
/// `errors` are skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub data: PrimaryData,
    pub included: Included,
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = Document;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a JSON Object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut data = None;
        let mut included = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "data" if data.is_none() => {
                    data = Some(map.next_value::<Option<PrimaryData>>()?);
                },
                "data" => return Err(serde::de::Error::duplicate_field("data")),
                "included" if included.is_none() => {
                    included = Some(map.next_value::<Option<Included>>()?);
                },
                "included" => return Err(serde::de::Error::duplicate_field("included")),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                },
            }
        }

        Ok(Document {
            data: data.flatten().unwrap_or_default(),
            included: included.flatten().unwrap_or_default(),
        })
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DocumentVisitor)
    }
}
