//! Page modules for screen-level composition.
//!
//! ARCHITECTURE
//! ============
//! Pages own document-scoped orchestration (loading, menu hosting) and
//! delegate rendering details to `components`.

pub mod editor;
