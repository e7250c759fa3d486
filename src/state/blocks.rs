//! Block-editor state: the local projection of one open document.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stores the flat block map and the current selection. Nesting is
//! expressed through `parent_id`, so ancestor-sensitive selectors walk
//! the parent chain instead of holding a separate tree structure.

#[cfg(test)]
#[path = "blocks_test.rs"]
mod blocks_test;

use std::collections::HashMap;

use crate::net::types::Block;

/// Block type names whose enclosing instance counts as the "active
/// sub-entity" for the document header.
pub const ACTIVE_ENTITY_BLOCK_NAMES: &[&str] = &["core/template-part"];

/// Block type name of a reusable-block instance.
pub const REUSABLE_BLOCK_NAME: &str = "core/block";

/// Block-level state: all block instances of the open document plus the
/// current selection.
#[derive(Clone, Debug, Default)]
pub struct BlockEditorState {
    /// All block instances keyed by block id.
    pub blocks: HashMap<String, Block>,
    /// Currently selected block instance, if any.
    pub selected_block_id: Option<String>,
}

impl BlockEditorState {
    /// Look up a block instance by id.
    pub fn get_block(&self, id: &str) -> Option<&Block> {
        self.blocks.get(id)
    }

    /// Insert or replace a block instance.
    pub fn insert_block(&mut self, block: Block) {
        self.blocks.insert(block.id.clone(), block);
    }

    /// Resolve the active sub-entity block for a set of tracked type names.
    ///
    /// Walks the parent chain upward from the selected block (inclusive)
    /// and returns the first block whose type name is in `names`. Returns
    /// `None` when nothing is selected or no ancestor matches. The walk is
    /// bounded by the block-map size so a corrupt parent cycle terminates.
    pub fn active_block_id_by_names(&self, names: &[&str]) -> Option<String> {
        let mut current = self.selected_block_id.clone()?;
        for _ in 0..=self.blocks.len() {
            let block = self.blocks.get(&current)?;
            if names.contains(&block.name.as_str()) {
                return Some(block.id.clone());
            }
            current = block.parent_id.clone()?;
        }
        None
    }

    /// Resolve the reusable-block reference id carried by a block instance.
    ///
    /// Returns `None` when the block is missing, is not a reusable-block
    /// instance, or carries no usable `"ref"` attribute. Numeric refs are
    /// normalized to their decimal string form.
    pub fn reusable_ref(&self, id: &str) -> Option<String> {
        let block = self.get_block(id)?;
        if block.name != REUSABLE_BLOCK_NAME {
            return None;
        }
        let reference = block.attributes.get("ref")?;
        if let Some(text) = reference.as_str() {
            return (!text.is_empty()).then(|| text.to_owned());
        }
        reference.as_i64().map(|n| n.to_string())
    }
}
