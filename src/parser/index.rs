use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use crate::parser::types::*;

/// In-memory index over a flat list of menu items.
///
/// Items keep their source order; that order decides sibling order
/// everywhere the tree is walked.
#[derive(Debug, Clone, Default)]
pub struct TreeIndex {
    items: Vec<MenuItem>,
    by_id: HashMap<ItemId, usize>,
    children: HashMap<ItemId, Vec<usize>>,
    root_parent: ItemId,
}

impl TreeIndex {
    pub fn new(items: Vec<MenuItem>) -> Self {
        let mut by_id = HashMap::with_capacity(items.len());
        let mut children: HashMap<ItemId, Vec<usize>> = HashMap::new();

        for (position, item) in items.iter().enumerate() {
            if by_id.contains_key(&item.id) {
                warn!(id = item.id, "duplicate menu item id, keeping the first");
            } else {
                by_id.insert(item.id, position);
            }
            children.entry(item.parent_id).or_default().push(position);
        }

        // Without any root-level item, the first item's parent acts as the root.
        let root_parent = if items.iter().any(MenuItem::is_root) {
            ROOT_PARENT
        } else {
            items.first().map_or(ROOT_PARENT, |item| item.parent_id)
        };

        debug!(
            items = items.len(),
            parents = children.len(),
            root_parent,
            "built menu tree index"
        );

        Self {
            items,
            by_id,
            children,
            root_parent,
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn root_parent(&self) -> ItemId {
        self.root_parent
    }

    pub fn find_by_id(&self, id: ItemId) -> Option<&MenuItem> {
        self.by_id.get(&id).map(|&position| &self.items[position])
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn children_of(&self, id: ItemId) -> Vec<&MenuItem> {
        self.children
            .get(&id)
            .map(|positions| positions.iter().map(|&p| &self.items[p]).collect())
            .unwrap_or_default()
    }

    pub fn roots(&self) -> Vec<&MenuItem> {
        self.children_of(self.root_parent)
    }

    /// Pre-order depth-first list of everything below `id`, never `id` itself.
    ///
    /// An item declaring itself (or a descendant) as its parent is visited
    /// once and not followed again.
    pub fn descendants_of(&self, id: ItemId) -> Vec<&MenuItem> {
        let mut seen = HashSet::from([id]);
        let mut list = Vec::new();
        self.collect_descendants(id, &mut seen, &mut list);
        list
    }

    fn collect_descendants<'a>(
        &'a self,
        id: ItemId,
        seen: &mut HashSet<ItemId>,
        list: &mut Vec<&'a MenuItem>,
    ) {
        for child in self.children_of(id) {
            if !seen.insert(child.id) {
                continue;
            }
            list.push(child);
            self.collect_descendants(child.id, seen, list);
        }
    }
}
