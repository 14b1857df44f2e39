//! Role domain entity.

use serde::{Deserialize, Serialize};

/// Named role a user is assigned to. Names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Opaque identifier; empty until the role has been stored
    pub id: String,
    pub name: String,
}

impl Role {
    /// Role that has not been stored yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
        }
    }
}
