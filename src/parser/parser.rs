use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::parser::types::*;

// Parser for turning raw site documents into typed menu data
pub struct MenuParser;

impl MenuParser {
    pub fn parse_file(&self, path: &Path) -> Result<SiteDocument> {
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read site document {}", path.display()))?;
        self.parse_bytes(&bytes)
            .with_context(|| format!("Failed to parse site document {}", path.display()))
    }

    /// Invalid UTF-8 sequences are replaced with U+FFFD before decoding,
    /// so a stray byte in a title never aborts the render.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<SiteDocument> {
        let text = String::from_utf8_lossy(bytes);
        self.parse_str(&text)
    }

    pub fn parse_str(&self, text: &str) -> Result<SiteDocument> {
        let document: SiteDocument =
            serde_json::from_str(text).context("Invalid site document JSON")?;

        debug!(
            menus = document.menus.len(),
            has_queried_object = document.queried_object.is_some(),
            "parsed site document"
        );

        Ok(document)
    }

    /// Parse a bare JSON array of menu items.
    pub fn parse_items(&self, text: &str) -> Result<Vec<MenuItem>> {
        let items: Vec<MenuItem> =
            serde_json::from_str(text).context("Invalid menu item list JSON")?;
        debug!(items = items.len(), "parsed menu items");
        Ok(items)
    }
}
