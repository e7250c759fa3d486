//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Mutation
//! failures carry the server's message text when the response body has
//! one, so notices can surface it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::EditorBootstrap;
#[cfg(feature = "hydrate")]
use serde::Deserialize;

#[cfg(any(test, feature = "hydrate"))]
fn editor_bootstrap_endpoint(slug: &str) -> String {
    format!("/api/editor/{slug}")
}

#[cfg(any(test, feature = "hydrate"))]
fn reusable_block_endpoint(ref_id: &str) -> String {
    format!("/api/reusable-blocks/{ref_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_failed_message(status: u16) -> String {
    format!("delete failed: {status}")
}

/// Server error body carrying a human-readable message.
#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

/// Fetch the editor bootstrap payload for a template slug.
/// Returns `None` if the document cannot be loaded or on the server.
pub async fn fetch_editor_bootstrap(slug: &str) -> Option<EditorBootstrap> {
    #[cfg(feature = "hydrate")]
    {
        let url = editor_bootstrap_endpoint(slug);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<EditorBootstrap>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = slug;
        None
    }
}

/// Delete a reusable block by its reference id.
///
/// # Errors
///
/// Returns the server's failure message when the response body carries
/// one, otherwise a generic message with the HTTP status.
pub async fn delete_reusable_block(ref_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = reusable_block_endpoint(ref_id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = delete_failed_message(resp.status());
            let message = resp
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or(fallback);
            return Err(message);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ref_id;
        Err("not available on server".to_owned())
    }
}
