//! Editor page — loads one document and hosts the header, the block list,
//! and the block-options menu.
//!
//! ARCHITECTURE
//! ============
//! The page fetches a single bootstrap payload and fans it out into the
//! shared stores; components below read those stores through context. The
//! block-options menu is the page's render surface for contextual block
//! actions and hands its close handle down to them.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use leptos::prelude::*;

use crate::components::document_actions::DocumentActions;
use crate::components::reusable_block_delete::ReusableBlockDeleteButton;
use crate::components::snackbar_list::SnackbarList;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::EditorBootstrap;
use crate::net::types::Template;
use crate::state::blocks::BlockEditorState;
use crate::state::entities::EntitiesState;
use crate::util::block_label::BlockLabelRegistry;
use crate::util::confirm::browser_confirm_callback;

/// Fan one bootstrap payload out into the block and entity stores.
/// Returns the template metadata for the header.
#[cfg(any(test, feature = "hydrate"))]
fn apply_bootstrap(
    blocks: &mut BlockEditorState,
    entities: &mut EntitiesState,
    bootstrap: EditorBootstrap,
) -> Template {
    for block in bootstrap.blocks {
        blocks.insert_block(block);
    }
    for record in bootstrap.reusable_blocks {
        entities.upsert_reusable_block(record);
    }
    entities.deletable_ids.extend(bootstrap.deletable_ids);
    bootstrap.template
}

fn block_row_class(selected: bool) -> &'static str {
    if selected {
        "editor-page__block editor-page__block--selected"
    } else {
        "editor-page__block"
    }
}

/// Editor screen for one template-backed document.
#[component]
pub fn EditorPage(slug: String) -> impl IntoView {
    let blocks = expect_context::<RwSignal<BlockEditorState>>();
    let entities = expect_context::<RwSignal<EntitiesState>>();
    let registry = expect_context::<BlockLabelRegistry>();

    let template = RwSignal::new(None::<Template>);
    let menu_open = RwSignal::new(false);

    // Load the document once on mount.
    #[cfg(feature = "hydrate")]
    {
        let slug = slug.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_editor_bootstrap(&slug).await {
                Some(bootstrap) => {
                    blocks.update(|b| {
                        entities.update(|e| {
                            let loaded = apply_bootstrap(b, e, bootstrap);
                            template.set(Some(loaded));
                        });
                    });
                }
                None => log::warn!("editor bootstrap failed for {slug}"),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (&slug, entities);
    }

    let on_menu_close = Callback::new(move |()| menu_open.set(false));
    let selected_id = move || blocks.get().selected_block_id;

    view! {
        <div class="editor-page">
            <header class="editor-page__header">
                <DocumentActions template=template/>

                <div class="editor-page__menu-anchor">
                    <button
                        class="btn editor-page__menu-toggle"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                        title="Block options"
                    >
                        "⋮"
                    </button>
                    <Show when=move || menu_open.get()>
                        {move || {
                            selected_id().map(|id| {
                                view! {
                                    <div class="block-menu">
                                        <ReusableBlockDeleteButton
                                            client_id=id
                                            on_close=on_menu_close
                                            confirm=browser_confirm_callback()
                                        />
                                    </div>
                                }
                            })
                        }}
                    </Show>
                </div>
            </header>

            <section class="editor-page__canvas">
                {move || {
                    let state = blocks.get();
                    let mut rows: Vec<_> = state.blocks.values().cloned().collect();
                    rows.sort_by(|a, b| a.id.cmp(&b.id));
                    rows.into_iter()
                        .map(|block| {
                            let selected =
                                state.selected_block_id.as_deref() == Some(block.id.as_str());
                            let label = registry
                                .block_display_label(&block)
                                .unwrap_or_else(|| block.name.clone());
                            let id = block.id.clone();
                            view! {
                                <button
                                    class=block_row_class(selected)
                                    on:click=move |_| {
                                        blocks.update(|s| s.selected_block_id = Some(id.clone()));
                                    }
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </section>

            <SnackbarList/>
        </div>
    }
}
