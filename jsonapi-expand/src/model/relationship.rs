use crate::model::resource::{Resource, Resources};
use core::fmt;
use indexmap::IndexMap;
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Named relationships of a resource, in the order they appear in the input
pub type Relationships = IndexMap<String, Relationship>;

/// Linkage carried by a relationship's `data` member.
///
/// Elements are full resources rather than bare identifiers, so non-normalized payloads that
/// embed `attributes` or `relationships` directly in the linkage are handled like identifiers.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RelationshipData {
    Many(Resources),
    One(Box<Resource>),
}

/// Relationship with another object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Relationship {
    /// `None` when `data` is missing or `null`
    pub data: Option<RelationshipData>,
}

struct RelationshipVisitor;

impl<'de> Visitor<'de> for RelationshipVisitor {
    type Value = Relationship;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a JSON:API relationship object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut data = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "data" if data.is_none() => {
                    data = Some(map.next_value::<Option<RelationshipData>>()?)
                },
                "data" => return Err(serde::de::Error::duplicate_field("data")),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                },
            }
        }

        Ok(Relationship { data: data.flatten() })
    }
}

impl<'de> Deserialize<'de> for Relationship {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RelationshipVisitor)
    }
}
