//! Template title resolution.
//!
//! Auto-created templates often carry no explicit title, so display code
//! falls back to a humanized form of the slug. An empty result means the
//! template metadata has not resolved yet and callers should render their
//! loading state.

#[cfg(test)]
#[path = "template_info_test.rs"]
mod template_info_test;

use crate::net::types::Template;

/// Resolve the display title for a template.
///
/// Prefers the explicit title when it is non-empty, then the humanized
/// slug. Returns an empty string when neither yields text.
pub fn template_title(template: &Template) -> String {
    if let Some(title) = &template.title {
        let trimmed = title.trim();
        if !trimmed.is_empty() {
            return trimmed.to_owned();
        }
    }
    humanize_slug(&template.slug)
}

/// Turn a machine slug into display text: dashes and underscores become
/// spaces and the first letter is uppercased (`"front-page"` → `"Front page"`).
pub fn humanize_slug(slug: &str) -> String {
    let spaced = slug.trim().replace(['-', '_'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
