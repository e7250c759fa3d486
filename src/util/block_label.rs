//! Block-type → display-label formatting.
//!
//! DESIGN
//! ======
//! Each block type may contribute an attribute-aware label formatter
//! (e.g. a template part labels itself after its `slug` attribute). The
//! registry maps type names to formatter functions and falls back to the
//! type's static display title when a formatter yields nothing.

#[cfg(test)]
#[path = "block_label_test.rs"]
mod block_label_test;

use std::collections::HashMap;

use crate::net::types::Block;
use crate::util::template_info::humanize_slug;

type LabelFormatter = fn(&serde_json::Value) -> Option<String>;

/// Registry of per-type label formatters and display titles.
#[derive(Clone)]
pub struct BlockLabelRegistry {
    formatters: HashMap<&'static str, LabelFormatter>,
    titles: HashMap<&'static str, &'static str>,
}

impl Default for BlockLabelRegistry {
    fn default() -> Self {
        let mut registry = Self {
            formatters: HashMap::new(),
            titles: HashMap::new(),
        };
        registry.register("core/template-part", "Template Part", Some(template_part_label));
        registry.register("core/block", "Reusable block", None);
        registry
    }
}

impl BlockLabelRegistry {
    /// Register a block type with a display title and an optional
    /// attribute-aware formatter.
    pub fn register(&mut self, name: &'static str, title: &'static str, formatter: Option<LabelFormatter>) {
        self.titles.insert(name, title);
        if let Some(f) = formatter {
            self.formatters.insert(name, f);
        }
    }

    /// Resolve the display label for a block instance.
    ///
    /// Tries the type's formatter against the block attributes first, then
    /// the type's display title. Returns `None` for unregistered types.
    pub fn block_display_label(&self, block: &Block) -> Option<String> {
        if let Some(formatter) = self.formatters.get(block.name.as_str()) {
            if let Some(label) = formatter(&block.attributes).filter(|l| !l.is_empty()) {
                return Some(label);
            }
        }
        self.titles.get(block.name.as_str()).map(|t| (*t).to_owned())
    }
}

/// Template parts label themselves after their `slug` attribute.
fn template_part_label(attributes: &serde_json::Value) -> Option<String> {
    let slug = attributes.get("slug")?.as_str()?;
    let label = humanize_slug(slug);
    (!label.is_empty()).then_some(label)
}
