//! The fixed person record served by the data endpoints.

use serde::{Deserialize, Serialize};

/// A person record: name, age, and city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub city: String,
}

impl Person {
    /// The record behind every data-bearing endpoint.
    ///
    /// Rebuilt on each call; handlers never share an instance.
    pub fn fixed() -> Self {
        Self {
            name: "John Doe".to_string(),
            age: 30,
            city: "Paris".to_string(),
        }
    }
}
