//! Confirmation strategy for destructive actions.
//!
//! Components take confirmation as an injected `Callback<String, bool>`
//! so tests and future dialog components can substitute their own
//! strategy. The browser default blocks the calling interaction on
//! `window.confirm`; SSR paths safely decline.

use leptos::prelude::Callback;

/// Ask the browser for confirmation. Returns `false` when no window is
/// available (SSR) or the user declines.
pub fn browser_confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// The browser confirmation strategy as an injectable callback.
pub fn browser_confirm_callback() -> Callback<String, bool> {
    Callback::new(|message: String| browser_confirm(&message))
}
