use tracing::debug;

use crate::menu::source::SiteOptions;
use crate::parser::*;

/// Type tag of the generic post type, listed on the posts page.
pub const POST_TYPE: &str = "post";

/// Picks the menu item that stands for the page being viewed.
pub struct CurrentItemResolver<'a, O: SiteOptions + ?Sized> {
    options: &'a O,
}

impl<'a, O: SiteOptions + ?Sized> CurrentItemResolver<'a, O> {
    pub fn new(options: &'a O) -> Self {
        Self { options }
    }

    /// First item, in list order, that links to the posts page while a
    /// post is viewed, to the page associated with the viewed type, or to
    /// the viewed object itself.
    pub fn resolve<'i>(
        &self,
        items: &'i [MenuItem],
        queried: Option<&QueriedObject>,
    ) -> Option<&'i MenuItem> {
        let queried = queried?;

        let posts_page = self
            .options
            .page_for_posts()
            .filter(|_| queried.type_tag == POST_TYPE);
        let associated_page = self.options.page_association(&queried.type_tag);

        let current = items.iter().find(|item| {
            let target = Some(item.linked_object_id);
            target == posts_page || target == associated_page || item.linked_object_id == queried.id
        });

        match current {
            Some(item) => debug!(id = item.id, queried = queried.id, "resolved current menu item"),
            None => debug!(queried = queried.id, "no menu item matches the viewed object"),
        }

        current
    }
}
