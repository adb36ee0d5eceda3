use tracing::trace;

use crate::parser::*;

/// Relationship queries over a [`TreeIndex`], evaluated relative to an
/// explicit current item.
///
/// Every query degrades to "absent" (`None`, `false` or empty) when there
/// is no current item.
#[derive(Debug, Clone, Copy)]
pub struct Relations<'a> {
    index: &'a TreeIndex,
    current: Option<&'a MenuItem>,
}

impl<'a> Relations<'a> {
    pub fn new(index: &'a TreeIndex, current: Option<&'a MenuItem>) -> Self {
        Self { index, current }
    }

    /// Relations relative to the indexed item `id`, if there is one.
    pub fn for_id(index: &'a TreeIndex, id: Option<ItemId>) -> Self {
        Self::new(index, id.and_then(|id| index.find_by_id(id)))
    }

    pub fn index(&self) -> &'a TreeIndex {
        self.index
    }

    pub fn current(&self) -> Option<&'a MenuItem> {
        self.current
    }

    pub fn is_current(&self, id: ItemId) -> bool {
        self.current.is_some_and(|current| current.id == id)
    }

    pub fn parent(&self) -> Option<&'a MenuItem> {
        let current = self.current?;
        if current.is_root() {
            return None;
        }
        self.index.find_by_id(current.parent_id)
    }

    pub fn is_parent(&self, id: ItemId) -> bool {
        self.parent().is_some_and(|parent| parent.id == id)
    }

    /// Ancestor ids of the current item, nearest first.
    ///
    /// The walk stops at an ancestor without a parent, at an ancestor whose
    /// parent is the current item, or at an id already collected. The first
    /// parent id is always reported, even if it names no item.
    pub fn ancestors(&self) -> Vec<ItemId> {
        let Some(current) = self.current else {
            return Vec::new();
        };
        if current.is_root() {
            return Vec::new();
        }

        let mut ids = vec![current.parent_id];
        let mut next = current.parent_id;

        while let Some(ancestor) = self.index.find_by_id(next) {
            let up = ancestor.parent_id;
            if up == ROOT_PARENT {
                break;
            }
            if up == current.id || ids.contains(&up) {
                trace!(current = current.id, at = ancestor.id, "ancestor chain loops, stopping");
                break;
            }
            ids.push(up);
            next = up;
        }

        ids
    }

    pub fn is_ancestor(&self, id: ItemId) -> bool {
        self.ancestors().contains(&id)
    }

    /// Whether every id in `ids` is an ancestor of the current item.
    pub fn are_ancestors(&self, ids: &[ItemId]) -> bool {
        if self.current.is_none() {
            return false;
        }
        let ancestors = self.ancestors();
        ids.iter().all(|id| ancestors.contains(id))
    }

    pub fn descendants(&self) -> Vec<&'a MenuItem> {
        match self.current {
            Some(current) => self.index.descendants_of(current.id),
            None => Vec::new(),
        }
    }

    pub fn is_descendant(&self, id: ItemId) -> bool {
        self.descendants().iter().any(|item| item.id == id)
    }

    /// Whether every id in `ids` is a descendant of the current item.
    pub fn are_descendants(&self, ids: &[ItemId]) -> bool {
        if self.current.is_none() {
            return false;
        }
        let descendants = self.descendants();
        ids.iter()
            .all(|id| descendants.iter().any(|item| item.id == *id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeIndex {
        TreeIndex::new(vec![
            MenuItem::new(1, 0, "Home"),
            MenuItem::new(2, 0, "About"),
            MenuItem::new(3, 2, "Team"),
            MenuItem::new(4, 3, "Alice"),
            MenuItem::new(5, 2, "History"),
        ])
    }

    #[test]
    fn test_queries_without_current_item() {
        let index = sample();
        let relations = Relations::for_id(&index, None);

        assert!(relations.current().is_none());
        assert!(!relations.is_current(1));
        assert!(relations.parent().is_none());
        assert!(!relations.is_parent(2));
        assert!(relations.ancestors().is_empty());
        assert!(!relations.is_ancestor(2));
        assert!(!relations.are_ancestors(&[]));
        assert!(relations.descendants().is_empty());
        assert!(!relations.are_descendants(&[]));
    }

    #[test]
    fn test_current_and_parent() {
        let index = sample();
        let relations = Relations::for_id(&index, Some(4));

        assert!(relations.is_current(4));
        assert!(!relations.is_current(3));
        assert_eq!(relations.parent().map(|p| p.id), Some(3));
        assert!(relations.is_parent(3));
        assert!(!relations.is_parent(2));
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let index = sample();
        let relations = Relations::for_id(&index, Some(4));

        assert_eq!(relations.ancestors(), vec![3, 2]);
        assert!(relations.is_ancestor(2));
        assert!(relations.are_ancestors(&[2, 3]));
        assert!(!relations.are_ancestors(&[2, 5]));
    }

    #[test]
    fn test_root_item_has_no_ancestors() {
        let index = sample();
        let relations = Relations::for_id(&index, Some(1));
        assert!(relations.ancestors().is_empty());
        assert!(relations.parent().is_none());
    }

    #[test]
    fn test_parent_is_ancestor_at_distance_one() {
        let index = sample();
        for item in index.items() {
            let relations = Relations::new(&index, Some(item));
            let ancestors = relations.ancestors();
            for candidate in index.items() {
                assert_eq!(
                    relations.is_parent(candidate.id),
                    ancestors.first() == Some(&candidate.id),
                    "item {} candidate {}",
                    item.id,
                    candidate.id
                );
            }
        }
    }

    #[test]
    fn test_cycle_through_current_terminates() {
        let index = TreeIndex::new(vec![
            MenuItem::new(1, 3, "A"),
            MenuItem::new(2, 1, "B"),
            MenuItem::new(3, 2, "C"),
        ]);
        let relations = Relations::for_id(&index, Some(1));
        assert_eq!(relations.ancestors(), vec![3, 2]);
    }

    #[test]
    fn test_cycle_above_current_terminates() {
        let index = TreeIndex::new(vec![
            MenuItem::new(1, 0, "Root"),
            MenuItem::new(2, 3, "A"),
            MenuItem::new(3, 4, "B"),
            MenuItem::new(4, 3, "C"),
        ]);
        let relations = Relations::for_id(&index, Some(2));
        assert_eq!(relations.ancestors(), vec![3, 4]);
    }

    #[test]
    fn test_self_parent_reports_itself() {
        let index = TreeIndex::new(vec![MenuItem::new(7, 7, "Self")]);
        let relations = Relations::for_id(&index, Some(7));
        assert_eq!(relations.ancestors(), vec![7]);
    }

    #[test]
    fn test_dangling_parent_is_reported() {
        let index = TreeIndex::new(vec![MenuItem::new(1, 0, "Root"), MenuItem::new(2, 50, "Lost")]);
        let relations = Relations::for_id(&index, Some(2));
        assert_eq!(relations.ancestors(), vec![50]);
        assert!(relations.parent().is_none());
    }

    #[test]
    fn test_descendants_of_current() {
        let index = sample();
        let relations = Relations::for_id(&index, Some(2));

        let ids: Vec<ItemId> = relations.descendants().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 4, 5]);
        assert!(relations.is_descendant(4));
        assert!(!relations.is_descendant(2));
        assert!(relations.are_descendants(&[3, 5]));
        assert!(!relations.are_descendants(&[3, 1]));
    }
}
