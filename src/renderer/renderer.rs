use std::collections::HashSet;
use tracing::{debug, trace};

use crate::parser::*;
use crate::renderer::traits::*;

/// Depth-first, pre-order walk over a [`TreeIndex`].
///
/// `max_depth` counts nesting levels; `0` means unlimited. Each item is
/// visited at most once, so malformed parent chains cannot loop.
pub struct TreeWalker<'a> {
    index: &'a TreeIndex,
    max_depth: usize,
}

impl<'a> TreeWalker<'a> {
    pub fn new(index: &'a TreeIndex, max_depth: usize) -> Self {
        Self { index, max_depth }
    }

    pub fn walk<V: TreeVisitor>(&self, visitor: &mut V) {
        let mut visited = HashSet::new();
        let context = RenderContext::new();

        for root in self.index.roots() {
            self.display_item(root, &context, visitor, &mut visited);
        }

        // Items never reached from the root level hang off a missing parent
        // (or a parent loop). An unlimited walk still shows them, flat.
        if self.max_depth == 0 {
            for item in self.index.items() {
                if visited.insert(item.id) {
                    debug!(id = item.id, parent_id = item.parent_id, "rendering orphaned menu item");
                    visitor.visit_item(item, &context);
                    visitor.end_item(item, &context);
                }
            }
        }
    }

    fn display_item<V: TreeVisitor>(
        &self,
        item: &MenuItem,
        context: &RenderContext,
        visitor: &mut V,
        visited: &mut HashSet<ItemId>,
    ) {
        if !visited.insert(item.id) {
            trace!(id = item.id, "menu item already rendered, skipping");
            return;
        }

        visitor.visit_item(item, context);

        if self.descends_below(context) {
            let children: Vec<&MenuItem> = self
                .index
                .children_of(item.id)
                .into_iter()
                .filter(|child| !visited.contains(&child.id))
                .collect();

            if !children.is_empty() {
                visitor.begin_branch(context);
                let child_context = context.deeper();
                for child in children {
                    self.display_item(child, &child_context, visitor, visited);
                }
                visitor.end_branch(context);
            }
        }

        visitor.end_item(item, context);
    }

    fn descends_below(&self, context: &RenderContext) -> bool {
        self.max_depth == 0 || self.max_depth > context.depth + 1
    }
}
