use crate::options::RenderOptions;
use crate::parser::{ItemId, MenuItem};
use crate::renderer::components::{Attributes, IndentationHelper};

/// Position of the walk while rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub depth: usize,
}

impl RenderContext {
    pub fn new() -> Self {
        Self { depth: 0 }
    }

    pub fn with_depth(&self, depth: usize) -> Self {
        Self { depth }
    }

    pub fn deeper(&self) -> Self {
        self.with_depth(self.depth + 1)
    }

    pub fn indent(&self) -> String {
        IndentationHelper::indent_for_depth(self.depth)
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Extension points consulted while a menu renders.
///
/// Every method has a pass-through default, so implementors override only
/// what they contribute. Attribute contributions are merged ahead of the
/// caller's options and the computed defaults.
pub trait MenuHooks {
    /// Attributes for the outermost container.
    fn container_attributes(&self, _options: &RenderOptions) -> Attributes {
        Attributes::new()
    }

    /// Attributes for a nested branch container opened at `depth`.
    fn branch_container_attributes(&self, _depth: usize, _options: &RenderOptions) -> Attributes {
        Attributes::new()
    }

    fn item_attributes(&self, _item: &MenuItem, _options: &RenderOptions) -> Attributes {
        Attributes::new()
    }

    fn link_attributes(&self, _item: &MenuItem, _options: &RenderOptions) -> Attributes {
        Attributes::new()
    }

    /// Filter the link text of an item.
    fn title(&self, title: &str, _item_id: ItemId) -> String {
        title.to_string()
    }
}

/// Hook set that contributes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl MenuHooks for NoHooks {}

/// Callbacks fired by [`crate::renderer::TreeWalker`] during a pre-order walk.
///
/// For an item with visible children the sequence is `visit_item`,
/// `begin_branch`, the children, `end_branch`, `end_item`.
pub trait TreeVisitor {
    fn begin_branch(&mut self, context: &RenderContext);
    fn visit_item(&mut self, item: &MenuItem, context: &RenderContext);
    fn end_item(&mut self, item: &MenuItem, context: &RenderContext);
    fn end_branch(&mut self, context: &RenderContext);
}
