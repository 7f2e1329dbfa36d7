//! Frontend Models
//!
//! Data structures for the list screen.

use serde::{Deserialize, Serialize};

/// A single display row. Menu rows carry the optional fields; basic rows
/// are just an id and a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub likes: Option<u32>,
    #[serde(default)]
    pub image: Option<String>,
}

impl ListItem {
    /// Row with only a name, for the basic variant
    pub fn basic(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
            price: None,
            likes: None,
            image: None,
        }
    }
}
