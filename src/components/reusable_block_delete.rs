//! Destructive menu action removing a reusable block everywhere it is used.
//!
//! DESIGN
//! ======
//! Visibility is a hard contract: when the resolved entity is absent or
//! the user lacks permission, the menu item is not rendered at all rather
//! than shown disabled. A confirmation gate precedes the mutation, and the
//! outcome is surfaced only through the notices store under a stable id so
//! repeated attempts replace their previous notice.
//!
//! The delete is the one async path in this module. The item stays
//! disabled while a mutation is in flight, and the continuation writes
//! signals through `try_*` so a response landing after teardown is
//! dropped instead of panicking.

use leptos::prelude::*;

use crate::state::blocks::BlockEditorState;
use crate::state::entities::EntitiesState;
use crate::state::notices::NoticesState;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::notices::REUSABLE_BLOCK_NOTICE_ID;

#[cfg(test)]
#[path = "reusable_block_delete_test.rs"]
mod reusable_block_delete_test;

/// Confirmation prompt shown before deleting a reusable block.
pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this Reusable Block?\n\n\
It will be permanently removed from all posts and pages that use it.";

/// Derived render state for the delete action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct DeleteControlState {
    /// Render the menu item at all.
    is_visible: bool,
    /// Render it non-clickable (entity not yet persisted).
    is_disabled: bool,
}

/// Resolve visibility and enablement from the block instance and its
/// backing entity record.
///
/// A block that is not a reusable-block instance, or whose record cannot
/// be resolved, yields the absent state. Temporary records are visible but
/// disabled; persisted records are visible only with delete permission.
fn derive_delete_control(
    blocks: &BlockEditorState,
    entities: &EntitiesState,
    client_id: &str,
) -> DeleteControlState {
    let Some(ref_id) = blocks.reusable_ref(client_id) else {
        return DeleteControlState::default();
    };
    let Some(record) = entities.reusable_block(&ref_id) else {
        return DeleteControlState::default();
    };
    DeleteControlState {
        is_visible: record.is_temporary || entities.can_delete_reusable_block(&ref_id),
        is_disabled: record.is_temporary,
    }
}

/// Record the mutation outcome in the notices store. Returns whether the
/// hosting menu should close (success only).
#[cfg(any(test, feature = "hydrate"))]
fn apply_delete_outcome(notices: &mut NoticesState, outcome: &Result<(), String>) -> bool {
    match outcome {
        Ok(()) => {
            notices.add_success(Some(REUSABLE_BLOCK_NOTICE_ID), "Block deleted.");
            true
        }
        Err(message) => {
            notices.add_error(Some(REUSABLE_BLOCK_NOTICE_ID), message.clone());
            false
        }
    }
}

/// Menu item deleting the reusable block behind a block instance.
///
/// `on_close` is the hosting menu's close handle; `confirm` is the
/// confirmation strategy run before the mutation.
#[component]
pub fn ReusableBlockDeleteButton(
    client_id: String,
    on_close: Callback<()>,
    confirm: Callback<String, bool>,
) -> impl IntoView {
    let blocks = expect_context::<RwSignal<BlockEditorState>>();
    let entities = expect_context::<RwSignal<EntitiesState>>();
    let notices = expect_context::<RwSignal<NoticesState>>();

    let pending = RwSignal::new(false);

    let control_id = client_id.clone();

    let on_click = move |_| {
        if pending.get_untracked() {
            return;
        }
        let state =
            derive_delete_control(&blocks.get_untracked(), &entities.get_untracked(), &client_id);
        if !state.is_visible || state.is_disabled {
            return;
        }
        if !confirm.run(DELETE_CONFIRM_MESSAGE.to_owned()) {
            return;
        }
        let Some(ref_id) = blocks.get_untracked().reusable_ref(&client_id) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            pending.set(true);
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::delete_reusable_block(&ref_id).await;
                if outcome.is_ok() {
                    let _ = entities.try_update(|e| e.remove_reusable_block(&ref_id));
                }
                let close = notices
                    .try_update(|n| apply_delete_outcome(n, &outcome))
                    .unwrap_or(false);
                let _ = pending.try_set(false);
                if close {
                    let _ = on_close.try_run(());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ref_id, notices, on_close);
        }
    };

    view! {
        {move || {
            let state = derive_delete_control(&blocks.get(), &entities.get(), &control_id);
            if !state.is_visible {
                return None;
            }
            let disabled = state.is_disabled || pending.get();
            let on_click = on_click.clone();
            Some(view! {
                <button
                    class="menu-item menu-item--destructive"
                    disabled=disabled
                    on:click=on_click
                >
                    "Remove from Reusable blocks"
                </button>
            })
        }}
    }
}
