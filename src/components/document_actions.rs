//! Document header: template title, active sub-entity label, and the
//! template-details popover.
//!
//! DESIGN
//! ======
//! Emphasis is mutually exclusive: while the user edits inside a tracked
//! sub-entity (e.g. a template part), that entity's label takes visual
//! priority and the document title recedes. The details popover is only
//! reachable when no sub-entity is active.

use leptos::prelude::*;

use crate::components::template_details::TemplateDetails;
use crate::net::types::Template;
use crate::state::blocks::{ACTIVE_ENTITY_BLOCK_NAMES, BlockEditorState};
use crate::util::block_label::BlockLabelRegistry;
use crate::util::template_info::template_title;

#[cfg(test)]
#[path = "document_actions_test.rs"]
mod document_actions_test;

/// Header control showing the document title and, when the user is
/// editing inside a tracked sub-entity, that entity's label. Renders a
/// loading placeholder until the template metadata resolves.
#[component]
pub fn DocumentActions(template: RwSignal<Option<Template>>) -> impl IntoView {
    let blocks = expect_context::<RwSignal<BlockEditorState>>();
    let registry = expect_context::<BlockLabelRegistry>();

    let details_open = RwSignal::new(false);
    let on_toggle_details = move |_| details_open.update(|open| *open = !*open);

    view! {
        {move || {
            let resolved = template
                .get()
                .map(|t| template_title(&t))
                .filter(|title| !title.is_empty());
            let Some(title) = resolved else {
                return view! { <div class="document-actions">"Loading…"</div> }.into_any();
            };

            let state = blocks.get();
            let (label, secondary_active) =
                match state.active_block_id_by_names(ACTIVE_ENTITY_BLOCK_NAMES) {
                    Some(id) => (
                        state
                            .get_block(&id)
                            .and_then(|block| registry.block_display_label(block)),
                        true,
                    ),
                    None => (None, false),
                };

            let title_emphasized = title_is_emphasized(label.as_deref(), secondary_active);
            let has_label = label.is_some();
            let secondary_text = label.unwrap_or_default();

            view! {
                <div class=wrapper_class(has_label)>
                    <div class="document-actions__title-wrapper">
                        <h1>
                            <span class="visually-hidden">"Edit template:"</span>
                            <span class=title_class(title_emphasized)>{title}</span>
                        </h1>
                        <Show when=move || !secondary_active>
                            <button
                                class="document-actions__details-toggle"
                                aria-haspopup="true"
                                aria-expanded=move || details_open.get().to_string()
                                on:click=on_toggle_details
                                title="Show template details"
                            >
                                "▾"
                            </button>
                            <Show when=move || details_open.get()>
                                <div class="document-actions__details-popover">
                                    <TemplateDetails template=template/>
                                </div>
                            </Show>
                        </Show>
                    </div>

                    <span class=secondary_class(!title_emphasized)>{secondary_text}</span>
                </div>
            }
            .into_any()
        }}
    }
}

fn wrapper_class(has_secondary: bool) -> &'static str {
    if has_secondary {
        "document-actions document-actions--has-secondary"
    } else {
        "document-actions"
    }
}

/// The title carries emphasis exactly when there is no secondary label or
/// the secondary context is inactive.
fn title_is_emphasized(label: Option<&str>, secondary_active: bool) -> bool {
    label.map_or(true, str::is_empty) || !secondary_active
}

fn title_class(emphasized: bool) -> &'static str {
    if emphasized {
        "document-actions__title document-actions__title--emphasized"
    } else {
        "document-actions__title document-actions__title--muted"
    }
}

fn secondary_class(emphasized: bool) -> &'static str {
    if emphasized {
        "document-actions__secondary document-actions__secondary--emphasized"
    } else {
        "document-actions__secondary document-actions__secondary--muted"
    }
}
