use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::rc::Rc;

/// A value inside a deserialized record
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// A flattened attribute, or the resource's `type`/`id`
    Attribute(Value),
    ToOne(Rc<Record>),
    ToMany(Vec<Rc<Record>>),
}

impl Field {
    pub fn as_attribute(&self) -> Option<&Value> {
        if let Field::Attribute(value) = self {
            Some(value)
        } else {
            None
        }
    }

    pub fn as_to_one(&self) -> Option<&Rc<Record>> {
        if let Field::ToOne(record) = self {
            Some(record)
        } else {
            None
        }
    }

    pub fn as_to_many(&self) -> Option<&[Rc<Record>]> {
        if let Field::ToMany(records) = self {
            Some(records.as_slice())
        } else {
            None
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Field::Attribute(value) => value.clone(),
            Field::ToOne(record) => record.to_value(),
            Field::ToMany(records) => Value::Array(records.iter().map(|r| r.to_value()).collect()),
        }
    }
}

/// A fully expanded resource: attributes and relationships side by side, plus `type` and `id`.
///
/// Keys keep the position of their first insertion; inserting an existing key replaces its value.
/// Records reached through the same relationship reference are shared, compare them with
/// [`Rc::ptr_eq`] to tell a shared record from an equal one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record(IndexMap<String, Field>);

impl Record {
    pub fn insert(&mut self, key: impl Into<String>, field: Field) -> Option<Field> {
        self.0.insert(key.into(), field)
    }

    pub fn get(&self, key: &str) -> Option<&Field> { self.0.get(key) }

    pub fn contains_key(&self, key: &str) -> bool { self.0.contains_key(key) }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn keys(&self) -> impl Iterator<Item = &str> { self.0.keys().map(String::as_str) }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn to_value(&self) -> Value {
        let map: Map<String, Value> =
            self.0.iter().map(|(k, v)| (k.clone(), v.to_value())).collect();
        Value::Object(map)
    }
}

impl Serialize for Field {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Field::Attribute(value) => value.serialize(serializer),
            Field::ToOne(record) => (**record).serialize(serializer),
            Field::ToMany(records) => serializer.collect_seq(records.iter().map(|r| &**r)),
        }
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            state.serialize_entry(k, v)?;
        }
        state.end()
    }
}

/// The result of deserializing a document, mirroring the shape of its primary `data`
#[derive(Debug, Clone, PartialEq)]
pub enum Deserialized {
    Single(Rc<Record>),
    Multiple(Vec<Rc<Record>>),
}

impl Deserialized {
    pub fn into_single(self) -> Result<Rc<Record>, Self> {
        if let Deserialized::Single(record) = self {
            Ok(record)
        } else {
            Err(self)
        }
    }

    pub fn into_multiple(self) -> Result<Vec<Rc<Record>>, Self> {
        if let Deserialized::Multiple(records) = self {
            Ok(records)
        } else {
            Err(self)
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Deserialized::Single(record) => record.to_value(),
            Deserialized::Multiple(records) => {
                Value::Array(records.iter().map(|r| r.to_value()).collect())
            },
        }
    }
}

impl Serialize for Deserialized {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Deserialized::Single(record) => (**record).serialize(serializer),
            Deserialized::Multiple(records) => {
                serializer.collect_seq(records.iter().map(|r| &**r))
            },
        }
    }
}
