//! Snackbar layer rendering the transient notices store.

use leptos::prelude::*;

use crate::state::notices::{NoticeKind, NoticesState};

#[cfg(test)]
#[path = "snackbar_list_test.rs"]
mod snackbar_list_test;

/// Stacked snackbar notices with per-notice dismissal, oldest first.
#[component]
pub fn SnackbarList() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticesState>>();

    view! {
        <div class="snackbar-list">
            {move || {
                notices
                    .get()
                    .notices
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id.clone();
                        view! {
                            <div class=notice_class(notice.kind)>
                                <span class="snackbar__message">{notice.message}</span>
                                <button
                                    class="snackbar__dismiss"
                                    on:click=move |_| notices.update(|n| n.dismiss(&id))
                                    title="Dismiss"
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "snackbar snackbar--success",
        NoticeKind::Error => "snackbar snackbar--error",
    }
}
