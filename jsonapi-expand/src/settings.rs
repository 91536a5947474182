/// What a relationship whose `data` is `null` or missing turns into
#[derive(Debug, Deserialize, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum NullRelationship {
    /// An empty record, `{}`
    Empty,
    /// A JSON `null`
    Null,
    /// The key is left out of the record
    Omit,
}

impl Default for NullRelationship {
    fn default() -> Self { NullRelationship::Empty }
}

/// How deep relationship references may nest below a root resource, the same limit
/// `serde_json` puts on nested JSON values
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Debug, Deserialize, Clone, Eq, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub null_relationship: NullRelationship,
    /// Keep the own attributes of the items of an array `data`.
    ///
    /// An array is only allowed as primary data when updating relationships, where nothing but
    /// the identity of each item matters, so these attributes are dropped unless this is set.
    pub collection_attributes: bool,
    /// Resolving a reference nested deeper than this fails with `MalformedDocument`
    pub max_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            null_relationship: Default::default(),
            collection_attributes: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
