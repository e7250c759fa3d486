//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render editor chrome and block actions while reading shared
//! state from Leptos context providers.

pub mod document_actions;
pub mod reusable_block_delete;
pub mod snackbar_list;
pub mod template_details;
