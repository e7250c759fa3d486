//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure
//! derivation logic from page and component code to improve reuse and
//! testability.

pub mod block_label;
pub mod confirm;
pub mod template_info;
