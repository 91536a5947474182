use serde::de::Error as _;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The document, a resource, a relationship or a reference has the wrong JSON shape
    #[error("Malformed JSON:API document: {0}")]
    MalformedDocument(#[source] serde_json::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self { Error::MalformedDocument(err) }
}

impl Error {
    /// Relationship references nested past `limit` levels below a root resource
    pub(crate) fn too_deep(limit: usize) -> Self {
        Error::MalformedDocument(serde_json::Error::custom(format!(
            "relationships nested deeper than {} levels",
            limit
        )))
    }
}
