//! # navmenu
//!
//! Renders hierarchical navigation menus into nested markup, classifying
//! each item relative to the item that represents the page being viewed.
//!
//! A menu arrives as a flat list of parent-pointer items. [`TreeIndex`]
//! indexes it, [`CurrentItemResolver`] finds the current item,
//! [`Relations`] answers current/parent/ancestor/descendant questions and
//! [`MenuBuilder`] walks the tree emitting markup.
//!
//! ## Example
//! ```
//! use navmenu::{JsonSite, Menu, MenuIdent, RenderOptions};
//!
//! let site = JsonSite::from_json(r#"{
//!     "menus": [{"id": 1, "slug": "main", "items": [
//!         {"id": 1, "parent_id": 0, "linked_object_id": 5, "title": "Home", "url": "/"}
//!     ]}],
//!     "queried_object": {"id": 5, "type_tag": "page"}
//! }"#).unwrap();
//!
//! let menu = Menu::from_site(&site, &MenuIdent::from("main")).unwrap();
//! let options = RenderOptions {
//!     current_item_class: "active".to_string(),
//!     ..RenderOptions::default()
//! };
//! assert!(menu.render(&options).contains(r#"<li class="active">"#));
//! ```

pub mod menu;
pub mod options;
pub mod parser;
pub mod renderer;

#[cfg(test)]
mod tests;

pub use menu::*;
pub use options::RenderOptions;
pub use parser::*;
pub use renderer::*;
