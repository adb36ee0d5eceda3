//! The menu facade: resolves a menu, tracks the current item and renders.

pub mod relations;
pub mod resolver;
pub mod source;

pub use relations::*;
pub use resolver::*;
pub use source::*;

use tracing::debug;

use crate::options::RenderOptions;
use crate::parser::*;
use crate::renderer::{MenuBuilder, MenuHooks, NoHooks};

/// What `Menu::context` re-targets to: an indexed id or an item value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextTarget {
    Id(ItemId),
    Item(MenuItem),
}

impl From<ItemId> for ContextTarget {
    fn from(id: ItemId) -> Self {
        ContextTarget::Id(id)
    }
}

impl From<MenuItem> for ContextTarget {
    fn from(item: MenuItem) -> Self {
        ContextTarget::Item(item)
    }
}

impl From<&MenuItem> for ContextTarget {
    fn from(item: &MenuItem) -> Self {
        ContextTarget::Item(item.clone())
    }
}

#[derive(Debug, Clone)]
enum CurrentItem {
    /// Points at an item of the index
    Indexed(ItemId),
    /// An item supplied by the caller that is not part of this menu
    Detached(Box<MenuItem>),
}

/// A resolved menu with its current-item context.
#[derive(Debug, Clone)]
pub struct Menu {
    object: MenuObject,
    index: TreeIndex,
    current: Option<CurrentItem>,
}

impl Menu {
    /// Resolve `ident` through `source` and pick the current item.
    ///
    /// Returns `None` when the identifier names no menu.
    pub fn new<S, V, O>(ident: &MenuIdent, source: &S, view: &V, options: &O) -> Option<Self>
    where
        S: MenuSource + ?Sized,
        V: ViewContext + ?Sized,
        O: SiteOptions + ?Sized,
    {
        let Some(object) = source.menu_object(ident) else {
            debug!(menu = %ident, "menu not found");
            return None;
        };

        let items = source.menu_items(&object);
        let queried = view.queried_object();
        let current = CurrentItemResolver::new(options)
            .resolve(&items, queried.as_ref())
            .map(|item| CurrentItem::Indexed(item.id));

        Some(Self {
            object,
            index: TreeIndex::new(items),
            current,
        })
    }

    /// Convenience constructor for a site that plays every collaborator role.
    pub fn from_site<T>(site: &T, ident: &MenuIdent) -> Option<Self>
    where
        T: MenuSource + ViewContext + SiteOptions,
    {
        Self::new(ident, site, site, site)
    }

    pub fn menu_object(&self) -> &MenuObject {
        &self.object
    }

    pub fn items(&self) -> &[MenuItem] {
        self.index.items()
    }

    pub fn index(&self) -> &TreeIndex {
        &self.index
    }

    /// Re-target the current item.
    ///
    /// Only applies when a current item was resolved; an id that names no
    /// item clears the context.
    pub fn context(&mut self, target: impl Into<ContextTarget>) -> &mut Self {
        if self.current.is_none() {
            return self;
        }

        self.current = match target.into() {
            ContextTarget::Id(id) if self.index.contains(id) => Some(CurrentItem::Indexed(id)),
            ContextTarget::Id(id) => {
                debug!(id, "context target not in menu, clearing current item");
                None
            }
            ContextTarget::Item(item) if self.index.find_by_id(item.id) == Some(&item) => {
                Some(CurrentItem::Indexed(item.id))
            }
            ContextTarget::Item(item) => Some(CurrentItem::Detached(Box::new(item))),
        };
        self
    }

    /// Relationship queries relative to the current item.
    pub fn relations(&self) -> Relations<'_> {
        let current = match &self.current {
            Some(CurrentItem::Indexed(id)) => self.index.find_by_id(*id),
            Some(CurrentItem::Detached(item)) => Some(item.as_ref()),
            None => None,
        };
        Relations::new(&self.index, current)
    }

    pub fn current(&self) -> Option<&MenuItem> {
        self.relations().current()
    }

    pub fn is_current(&self, id: ItemId) -> bool {
        self.relations().is_current(id)
    }

    pub fn parent(&self) -> Option<&MenuItem> {
        self.relations().parent()
    }

    pub fn is_parent(&self, id: ItemId) -> bool {
        self.relations().is_parent(id)
    }

    pub fn ancestors(&self) -> Vec<ItemId> {
        self.relations().ancestors()
    }

    pub fn is_ancestor(&self, id: ItemId) -> bool {
        self.relations().is_ancestor(id)
    }

    pub fn are_ancestors(&self, ids: &[ItemId]) -> bool {
        self.relations().are_ancestors(ids)
    }

    pub fn descendants(&self) -> Vec<&MenuItem> {
        self.relations().descendants()
    }

    pub fn is_descendant(&self, id: ItemId) -> bool {
        self.relations().is_descendant(id)
    }

    pub fn are_descendants(&self, ids: &[ItemId]) -> bool {
        self.relations().are_descendants(ids)
    }

    pub fn render(&self, options: &RenderOptions) -> String {
        self.render_with(options, &NoHooks)
    }

    pub fn render_with(&self, options: &RenderOptions, hooks: &dyn MenuHooks) -> String {
        MenuBuilder::new(self.relations(), options)
            .with_hooks(hooks)
            .render()
    }
}
