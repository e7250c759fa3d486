//! Application shell wiring the shared state contexts.
//!
//! SYSTEM CONTEXT
//! ==============
//! All reactive stores are created here and provided through Leptos
//! context so any component below can read them without prop drilling.

use leptos::prelude::*;

use crate::pages::editor::EditorPage;
use crate::state::blocks::BlockEditorState;
use crate::state::entities::EntitiesState;
use crate::state::notices::NoticesState;
use crate::util::block_label::BlockLabelRegistry;

/// Root component: provides the store contexts and mounts the editor page.
#[component]
pub fn App() -> impl IntoView {
    provide_context(RwSignal::new(BlockEditorState::default()));
    provide_context(RwSignal::new(EntitiesState::default()));
    provide_context(RwSignal::new(NoticesState::default()));
    provide_context(BlockLabelRegistry::default());

    view! {
        <main class="editor-shell">
            <EditorPage slug="front-page".to_owned()/>
        </main>
    }
}
