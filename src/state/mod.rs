//! Reactive state modules for the editor client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module holds one plain state struct provided to components as an
//! `RwSignal` via Leptos context. Selector methods live on the structs so
//! derivation logic stays testable without a live signal graph.

pub mod blocks;
pub mod entities;
pub mod notices;
