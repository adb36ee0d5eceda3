use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::renderer::components::Attributes;

/// Options controlling how a menu renders.
///
/// Every field has a default; a partial JSON object overrides only the
/// keys it names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Maximum nesting levels, `0` for unlimited
    pub depth: usize,
    /// Tag of the outer container and of every branch container
    pub container: String,
    /// Tag wrapping each item
    pub items: String,
    pub container_attributes: Attributes,
    pub branch_container_attributes: Attributes,
    pub item_attributes: Attributes,
    pub link_attributes: Attributes,
    /// Text before each item's opening tag
    pub before: String,
    /// Text after each item's link
    pub after: String,
    /// Text before the link text, inside the link
    pub link_before: String,
    /// Text after the link text, inside the link
    pub link_after: String,
    pub current_item_class: String,
    pub current_parent_class: String,
    pub current_ancestor_class: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            depth: 0,
            container: "ul".to_string(),
            items: "li".to_string(),
            container_attributes: Attributes::new(),
            branch_container_attributes: Attributes::new(),
            item_attributes: Attributes::new(),
            link_attributes: Attributes::new(),
            before: String::new(),
            after: String::new(),
            link_before: String::new(),
            link_after: String::new(),
            current_item_class: String::new(),
            current_parent_class: String::new(),
            current_ancestor_class: String::new(),
        }
    }
}

impl RenderOptions {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Invalid render options JSON")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read render options {}", path.display()))?;
        Self::from_json(&text)
    }
}
