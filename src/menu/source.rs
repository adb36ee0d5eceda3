use anyhow::Result;
use std::path::Path;

use crate::parser::*;

/// Where menus and their items come from.
pub trait MenuSource {
    /// Resolve a menu by id, slug or name.
    fn menu_object(&self, ident: &MenuIdent) -> Option<MenuObject>;

    /// Flat item list of a menu, in display order.
    fn menu_items(&self, menu: &MenuObject) -> Vec<MenuItem>;
}

/// Reports what is currently being viewed.
pub trait ViewContext {
    fn queried_object(&self) -> Option<QueriedObject>;
}

/// Site-wide settings consulted when resolving the current item.
pub trait SiteOptions {
    /// Page that lists posts of the generic post type.
    fn page_for_posts(&self) -> Option<ItemId>;

    /// Page associated with objects of `type_tag`.
    fn page_association(&self, type_tag: &str) -> Option<ItemId>;
}

/// A site described by a single JSON document: menus, settings and the
/// viewed object. Serves all three collaborator roles.
#[derive(Debug, Clone, Default)]
pub struct JsonSite {
    document: SiteDocument,
}

impl JsonSite {
    pub fn new(document: SiteDocument) -> Self {
        Self { document }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::new(MenuParser.parse_file(path)?))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(Self::new(MenuParser.parse_str(text)?))
    }

    /// Identifier of the first menu in the document.
    pub fn default_menu(&self) -> Option<MenuIdent> {
        self.document.menus.first().map(|menu| MenuIdent::Id(menu.id))
    }
}

impl MenuSource for JsonSite {
    fn menu_object(&self, ident: &MenuIdent) -> Option<MenuObject> {
        let menus = || self.document.menus.iter().map(MenuDocument::object);

        // An exact id wins over a slug or name made of the same digits.
        if let MenuIdent::Id(id) = ident {
            if let Some(menu) = menus().find(|menu| menu.id == *id) {
                return Some(menu);
            }
        }
        menus().find(|menu| menu.matches(ident))
    }

    fn menu_items(&self, menu: &MenuObject) -> Vec<MenuItem> {
        self.document
            .menus
            .iter()
            .find(|candidate| candidate.id == menu.id)
            .map(|candidate| candidate.items.clone())
            .unwrap_or_default()
    }
}

impl ViewContext for JsonSite {
    fn queried_object(&self) -> Option<QueriedObject> {
        self.document.queried_object.clone()
    }
}

impl SiteOptions for JsonSite {
    fn page_for_posts(&self) -> Option<ItemId> {
        Some(self.document.settings.page_for_posts).filter(|&id| id != 0)
    }

    fn page_association(&self, type_tag: &str) -> Option<ItemId> {
        self.document
            .settings
            .page_associations
            .get(type_tag)
            .copied()
            .filter(|&id| id != 0)
    }
}
