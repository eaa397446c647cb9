use serde::{Deserialize, Serialize};

/// Reference field that the backend may or may not have populated.
///
/// A populated reference arrives as the embedded document, an unpopulated
/// one as the bare id string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Populated<T> {
    Document(T),
    Id(String),
}

impl<T> Populated<T> {
    /// Embedded document, if the backend sent one
    pub fn document(&self) -> Option<&T> {
        match self {
            Populated::Document(doc) => Some(doc),
            Populated::Id(_) => None,
        }
    }
}
