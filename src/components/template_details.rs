//! Popover body with extended template metadata.

use leptos::prelude::*;

use crate::net::types::Template;
use crate::util::template_info::template_title;

/// Template details shown inside the document-header popover.
#[component]
pub fn TemplateDetails(template: RwSignal<Option<Template>>) -> impl IntoView {
    let title = move || template.get().map(|t| template_title(&t)).unwrap_or_default();
    let description = move || {
        template
            .get()
            .and_then(|t| t.description)
            .unwrap_or_else(|| "No description available.".to_owned())
    };
    let slug = move || template.get().map(|t| t.slug).unwrap_or_default();
    let source = move || {
        template
            .get()
            .and_then(|t| t.source)
            .unwrap_or_else(|| "theme".to_owned())
    };

    view! {
        <div class="template-details">
            <h2 class="template-details__title">{title}</h2>
            <p class="template-details__description">{description}</p>

            <div class="template-details__row">
                <span class="template-details__label">"Slug"</span>
                <span class="template-details__value template-details__value--mono">{slug}</span>
            </div>
            <div class="template-details__row">
                <span class="template-details__label">"Source"</span>
                <span class="template-details__value">{source}</span>
            </div>
        </div>
    }
}
