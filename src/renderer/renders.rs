use tracing::debug;

use crate::menu::Relations;
use crate::options::RenderOptions;
use crate::parser::*;
use crate::renderer::components::*;
use crate::renderer::renderer::TreeWalker;
use crate::renderer::traits::*;

/// Visitor that emits nested container/item markup.
pub struct MenuWalker<'a> {
    relations: Relations<'a>,
    options: &'a RenderOptions,
    hooks: &'a dyn MenuHooks,
    output: String,
}

impl<'a> MenuWalker<'a> {
    pub fn new(relations: Relations<'a>, options: &'a RenderOptions, hooks: &'a dyn MenuHooks) -> Self {
        Self {
            relations,
            options,
            hooks,
            output: String::new(),
        }
    }

    pub fn into_output(self) -> String {
        self.output
    }

    /// Classes describing how `item` relates to the current item.
    fn context_class(&self, item: &MenuItem) -> String {
        let mut classes = Vec::new();

        if self.relations.is_ancestor(item.id) {
            classes.push(self.options.current_ancestor_class.as_str());
        }
        if self.relations.is_parent(item.id) {
            classes.push(self.options.current_parent_class.as_str());
        }
        if self.relations.is_current(item.id) {
            classes.push(self.options.current_item_class.as_str());
        }

        classes.retain(|class| !class.is_empty());
        classes.join(" ")
    }

    fn item_attributes(&self, item: &MenuItem) -> String {
        let mut classes = item.classes.clone();
        let context_class = self.context_class(item);
        if !context_class.is_empty() {
            classes.push(context_class);
        }

        let hooked = self.hooks.item_attributes(item, self.options);
        let defaults = Attributes::new().with("class", classes);

        AttributeMerger::render(&[&hooked, &self.options.item_attributes, &defaults])
    }

    fn link_attributes(&self, item: &MenuItem) -> String {
        let hooked = self.hooks.link_attributes(item, self.options);

        // Empty item fields leave caller and hook values in place.
        let mut defaults = Attributes::new();
        for (key, value) in [
            ("title", &item.attr_title),
            ("target", &item.target),
            ("rel", &item.relation),
            ("href", &item.url),
        ] {
            if !value.is_empty() {
                defaults.insert(key, value.as_str());
            }
        }

        AttributeMerger::render(&[&hooked, &self.options.link_attributes, &defaults])
    }
}

impl TreeVisitor for MenuWalker<'_> {
    fn begin_branch(&mut self, context: &RenderContext) {
        let hooked = self
            .hooks
            .branch_container_attributes(context.depth, self.options);
        let attributes =
            AttributeMerger::render(&[&hooked, &self.options.branch_container_attributes]);

        self.output.push_str(&format!(
            "\n{}<{}{}>\n",
            context.indent(),
            self.options.container,
            attributes
        ));
    }

    fn visit_item(&mut self, item: &MenuItem, context: &RenderContext) {
        let indent = IndentationHelper::indent_for_depth(context.depth + 1);
        let item_attributes = self.item_attributes(item);
        let link_attributes = self.link_attributes(item);
        let title = self.hooks.title(&item.title, item.id);

        self.output.push_str(&self.options.before);
        self.output.push_str(&format!(
            "\n{}<{}{}>",
            indent, self.options.items, item_attributes
        ));
        self.output.push_str(&format!("<a{}>", link_attributes));
        self.output.push_str(&self.options.link_before);
        self.output.push_str(&title);
        self.output.push_str(&self.options.link_after);
        self.output.push_str("</a>");
        self.output.push_str(&self.options.after);
    }

    fn end_item(&mut self, _item: &MenuItem, _context: &RenderContext) {
        self.output.push_str(&format!("</{}>\n", self.options.items));
    }

    fn end_branch(&mut self, context: &RenderContext) {
        self.output.push_str(&format!(
            "\n{}</{}>\n",
            context.indent(),
            self.options.container
        ));
    }
}

/// Renders a whole menu: the outer container wrapping the walked tree.
pub struct MenuBuilder<'a> {
    relations: Relations<'a>,
    options: &'a RenderOptions,
    hooks: &'a dyn MenuHooks,
}

impl<'a> MenuBuilder<'a> {
    pub fn new(relations: Relations<'a>, options: &'a RenderOptions) -> Self {
        Self {
            relations,
            options,
            hooks: &NoHooks,
        }
    }

    pub fn with_hooks(mut self, hooks: &'a dyn MenuHooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn render(&self) -> String {
        debug!(
            items = self.relations.index().len(),
            depth = self.options.depth,
            current = self.relations.current().map(|item| item.id),
            "rendering menu"
        );

        let mut walker = MenuWalker::new(self.relations, self.options, self.hooks);
        TreeWalker::new(self.relations.index(), self.options.depth).walk(&mut walker);
        let body = walker.into_output();

        let hooked = self.hooks.container_attributes(self.options);
        let attributes = AttributeMerger::render(&[&hooked, &self.options.container_attributes]);
        let container = &self.options.container;

        format!("<{}{}>{}</{}>", container, attributes, body, container)
    }
}
