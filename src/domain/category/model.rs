use serde::{Deserialize, Serialize};

/// A named tag grouping posts. Referenced by posts many-to-many; the slug is
/// the canonical identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
}
