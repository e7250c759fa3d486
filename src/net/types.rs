//! Wire DTOs for the editor REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror server payloads so serde round-trips stay lossless.
//! Block attributes are open-ended JSON because each block type owns its
//! own attribute schema.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Descriptive metadata for a template-like document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Unique template identifier.
    pub id: String,
    /// Stable machine slug (e.g. `"front-page"`).
    pub slug: String,
    /// Human-readable title; may be absent or empty for auto-created templates.
    #[serde(default)]
    pub title: Option<String>,
    /// Optional longer description shown in the details popover.
    #[serde(default)]
    pub description: Option<String>,
    /// Where the template came from (e.g. `"theme"`, `"custom"`).
    #[serde(default)]
    pub source: Option<String>,
}

/// One block instance in the editing surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Unique block instance identifier.
    pub id: String,
    /// Block type name (e.g. `"core/paragraph"`, `"core/template-part"`).
    pub name: String,
    /// Per-type attributes. `Null` when the block carries none.
    #[serde(default)]
    pub attributes: serde_json::Value,
    /// Parent block instance, if nested.
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// Backing record for a reusable block, referenced from block instances
/// through their `"ref"` attribute.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReusableBlockRecord {
    /// Entity identifier the `"ref"` attribute points at.
    pub id: String,
    /// Display title, if the user named the block.
    #[serde(default)]
    pub title: Option<String>,
    /// True while the record exists only client-side and has not been
    /// persisted yet. Temporary records are deletable unconditionally.
    #[serde(default)]
    pub is_temporary: bool,
}

/// Everything the editor page needs to open one document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditorBootstrap {
    /// The document's template metadata.
    pub template: Template,
    /// Flat list of block instances; nesting is expressed via `parent_id`.
    #[serde(default)]
    pub blocks: Vec<Block>,
    /// Reusable-block records referenced by the blocks above.
    #[serde(default)]
    pub reusable_blocks: Vec<ReusableBlockRecord>,
    /// Reusable-block ids the current user may delete.
    #[serde(default)]
    pub deletable_ids: Vec<String>,
}
