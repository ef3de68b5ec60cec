//! Screen registration data

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pattern::PathPattern;
use crate::Result;

/// A navigable unit registered with a router.
///
/// Identity is `id`. Routers reject a second screen with the same `path`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Screen {
    /// Unique identifier
    pub id: String,
    /// Path pattern, e.g. `/settings/:tab`
    pub path: String,
}

impl Screen {
    /// Create a screen with a freshly generated id
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            path: path.into(),
        }
    }

    pub fn with_id(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
        }
    }

    /// Parse this screen's path pattern
    pub fn pattern(&self) -> Result<PathPattern> {
        PathPattern::parse(&self.path)
    }
}
