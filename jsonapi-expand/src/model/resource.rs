use crate::model::relationship::Relationships;
use crate::model::Id;
use core::fmt;
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

pub type Attributes = Map<String, Value>;
pub type Resources = Vec<Resource>;

/// The `(type, id)` pair a resource is indexed and cached under.
///
/// Both halves are optional: anonymous resources are legal input, they simply never match an
/// `included` entry.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct ResourceIdentifier {
    pub ty: Option<String>,
    pub id: Option<Id>,
}

impl ResourceIdentifier {
    pub fn new(ty: impl ToString, id: impl ToString) -> Self {
        Self { ty: Some(ty.to_string()), id: Some(id.to_string()) }
    }

    pub fn is_complete(&self) -> bool { self.ty.is_some() && self.id.is_some() }
}

impl fmt::Display for ResourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            self.ty.as_deref().unwrap_or("<none>"),
            self.id.as_deref().unwrap_or("<none>")
        )
    }
}

/// JSON-API Resource, also used for the resource identifiers inside relationship `data`
///
/// `links`, `meta` and any other member are accepted and dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resource {
    pub ty: Option<String>,
    pub id: Option<Id>,
    pub attributes: Option<Attributes>,
    pub relationships: Option<Relationships>,
}

impl Resource {
    pub fn identifier(&self) -> ResourceIdentifier {
        ResourceIdentifier { ty: self.ty.clone(), id: self.id.clone() }
    }
}

struct ResourceVisitor;

impl<'de> Visitor<'de> for ResourceVisitor {
    type Value = Resource;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a JSON:API resource object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut ty = None;
        let mut id = None;
        let mut attributes = None;
        let mut relationships = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "type" if ty.is_none() => ty = Some(map.next_value::<Option<String>>()?),
                "type" => return Err(serde::de::Error::duplicate_field("type")),
                "id" if id.is_none() => id = Some(map.next_value::<Option<Id>>()?),
                "id" => return Err(serde::de::Error::duplicate_field("id")),
                "attributes" if attributes.is_none() => {
                    attributes = Some(map.next_value::<Option<Attributes>>()?)
                },
                "attributes" => return Err(serde::de::Error::duplicate_field("attributes")),
                "relationships" if relationships.is_none() => {
                    relationships = Some(map.next_value::<Option<Relationships>>()?)
                },
                "relationships" => {
                    return Err(serde::de::Error::duplicate_field("relationships"));
                },
                _ => {
                    map.next_value::<IgnoredAny>()?;
                },
            }
        }

        Ok(Resource {
            ty: ty.flatten(),
            id: id.flatten(),
            attributes: attributes.flatten(),
            relationships: relationships.flatten(),
        })
    }
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ResourceVisitor)
    }
}
