pub mod document;
pub mod relationship;
pub mod resource;

pub type Id = String;
