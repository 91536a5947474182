//! Turns a JSON:API compound document into plain nested records.
//!
//! Every relationship reference is replaced in place by the related resource's expanded form,
//! looked up from the document's `included` array. Cyclic relationships are allowed and
//! terminate: the back edge closing a cycle sees the resource's attributes and identity only.
//!
//! ```
//! let doc = serde_json::json!({
//!     "data": {
//!         "id": "123", "type": "mice",
//!         "attributes": { "name": "Vinnie" },
//!         "relationships": { "bike": { "data": { "id": "5", "type": "bikes" } } }
//!     },
//!     "included": [ { "id": "5", "type": "bikes", "attributes": { "color": "red" } } ]
//! });
//!
//! let mouse = jsonapi_expand::deserialize(&doc).unwrap().to_value();
//! assert_eq!(mouse["bike"]["color"], "red");
//! ```

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

pub mod deserializer;
pub mod error;
pub mod expand;
pub mod model;
pub mod settings;

pub use crate::deserializer::{deserialize, deserialize_with, from_slice, from_str, Deserializer};
pub use crate::expand::record::{Deserialized, Field, Record};
pub use crate::settings::{NullRelationship, Settings, DEFAULT_MAX_DEPTH};
