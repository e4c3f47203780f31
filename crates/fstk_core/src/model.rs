//! Model listing types.

use serde::{Deserialize, Serialize};

/// One entry of a deployment's model listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ModelInfo {
    /// Model identifier
    id: String,
}

impl ModelInfo {
    /// Creates a new model listing entry.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
