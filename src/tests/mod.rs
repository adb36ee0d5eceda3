#[cfg(test)]
mod formatting_tests {
    use similar::TextDiff;

    use crate::{
        Attributes, ItemId, MenuBuilder, MenuHooks, MenuItem, Relations, RenderOptions, TreeIndex,
    };

    fn assert_markup(actual: &str, expected: &str) {
        if actual != expected {
            let diff = TextDiff::from_lines(expected, actual);
            panic!(
                "Rendered markup differs:\n{}",
                diff.unified_diff().header("expected", "actual")
            );
        }
    }

    fn site_tree() -> TreeIndex {
        TreeIndex::new(vec![
            MenuItem::new(1, 0, "Home").with_url("/"),
            MenuItem::new(2, 0, "About").with_url("/about"),
            MenuItem::new(3, 2, "Team").with_url("/about/team"),
            MenuItem::new(4, 3, "Alice").with_url("/about/team/alice"),
        ])
    }

    fn classed_options() -> RenderOptions {
        RenderOptions {
            current_item_class: "current".to_string(),
            current_parent_class: "current-parent".to_string(),
            current_ancestor_class: "current-ancestor".to_string(),
            ..RenderOptions::default()
        }
    }

    fn render(index: &TreeIndex, current: Option<ItemId>, options: &RenderOptions) -> String {
        MenuBuilder::new(Relations::for_id(index, current), options).render()
    }

    #[test]
    fn test_nested_menu_layout() {
        let index = site_tree();
        let output = render(&index, Some(3), &classed_options());

        let expected = concat!(
            "<ul>",
            "\n\t<li><a href=\"/\">Home</a></li>\n",
            "\n\t<li class=\"current-ancestor current-parent\"><a href=\"/about\">About</a>",
            "\n<ul>\n",
            "\n\t\t<li class=\"current\"><a href=\"/about/team\">Team</a>",
            "\n\t<ul>\n",
            "\n\t\t\t<li><a href=\"/about/team/alice\">Alice</a></li>\n",
            "\n\t</ul>\n",
            "</li>\n",
            "\n</ul>\n",
            "</li>\n",
            "</ul>"
        );
        assert_markup(&output, expected);
    }

    #[test]
    fn test_single_current_item() {
        let index = TreeIndex::new(vec![MenuItem::new(1, 0, "Home").with_url("/")]);
        let output = render(&index, Some(1), &classed_options());

        assert_markup(
            &output,
            "<ul>\n\t<li class=\"current\"><a href=\"/\">Home</a></li>\n</ul>",
        );
    }

    #[test]
    fn test_depth_limit_truncates_and_closes_tags() {
        let index = TreeIndex::new(vec![
            MenuItem::new(1, 0, "Root").with_url("/"),
            MenuItem::new(2, 1, "Child").with_url("/child"),
            MenuItem::new(3, 2, "Grandchild").with_url("/child/grand"),
        ]);
        let options = RenderOptions {
            depth: 1,
            ..RenderOptions::default()
        };
        let output = render(&index, None, &options);

        assert_markup(&output, "<ul>\n\t<li><a href=\"/\">Root</a></li>\n</ul>");
        assert!(!output.contains("Grandchild"));
        assert_eq!(output.matches("<li").count(), output.matches("</li>").count());
        assert_eq!(output.matches("<ul").count(), output.matches("</ul>").count());
    }

    #[test]
    fn test_fragments_surround_item_and_link() {
        let index = TreeIndex::new(vec![MenuItem::new(1, 0, "Home").with_url("/")]);
        let options = RenderOptions {
            before: "[B]".to_string(),
            after: "[A]".to_string(),
            link_before: "<span>".to_string(),
            link_after: "</span>".to_string(),
            ..RenderOptions::default()
        };

        assert_markup(
            &render(&index, None, &options),
            "<ul>[B]\n\t<li><a href=\"/\"><span>Home</span></a>[A]</li>\n</ul>",
        );
    }

    #[test]
    fn test_link_attributes_from_item_fields() {
        let mut item = MenuItem::new(1, 0, "Docs").with_url("/docs?a=1&b=2");
        item.attr_title = "Read the \"docs\"".to_string();
        item.target = "_blank".to_string();
        item.relation = "noopener".to_string();
        item.classes = vec!["menu-item".to_string(), String::new()];

        let index = TreeIndex::new(vec![item]);
        let output = render(&index, None, &RenderOptions::default());

        assert!(output.contains(concat!(
            "<li class=\"menu-item\">",
            "<a title=\"Read the &quot;docs&quot;\" target=\"_blank\" rel=\"noopener\" href=\"/docs?a=1&amp;b=2\">"
        )));
    }

    #[test]
    fn test_empty_item_fields_keep_configured_link_attributes() {
        let index = TreeIndex::new(vec![MenuItem::new(1, 0, "Ext").with_url("https://x")]);
        let options = RenderOptions {
            link_attributes: Attributes::new().with("target", "_blank").with("title", "Go"),
            ..RenderOptions::default()
        };

        assert_markup(
            &render(&index, None, &options),
            "<ul>\n\t<li><a target=\"_blank\" title=\"Go\" href=\"https://x\">Ext</a></li>\n</ul>",
        );
    }

    #[test]
    fn test_custom_tags_and_container_attributes() {
        let index = TreeIndex::new(vec![
            MenuItem::new(1, 0, "Root").with_url("/"),
            MenuItem::new(2, 1, "Child").with_url("/child"),
        ]);
        let options = RenderOptions {
            container: "ol".to_string(),
            items: "div".to_string(),
            container_attributes: Attributes::new().with("id", "nav"),
            branch_container_attributes: Attributes::new().with("class", vec!["sub-menu"]),
            ..RenderOptions::default()
        };

        let expected = concat!(
            "<ol id=\"nav\">",
            "\n\t<div><a href=\"/\">Root</a>",
            "\n<ol class=\"sub-menu\">\n",
            "\n\t\t<div><a href=\"/child\">Child</a></div>\n",
            "\n</ol>\n",
            "</div>\n",
            "</ol>"
        );
        assert_markup(&render(&index, None, &options), expected);
    }

    struct BrandHooks;

    impl MenuHooks for BrandHooks {
        fn container_attributes(&self, _options: &RenderOptions) -> Attributes {
            Attributes::new().with("class", vec!["brand-nav"])
        }

        fn branch_container_attributes(&self, depth: usize, _options: &RenderOptions) -> Attributes {
            Attributes::new().with("data-depth", depth.to_string())
        }

        fn item_attributes(&self, item: &MenuItem, _options: &RenderOptions) -> Attributes {
            Attributes::new().with("class", vec![format!("item-{}", item.id)])
        }

        fn link_attributes(&self, _item: &MenuItem, _options: &RenderOptions) -> Attributes {
            Attributes::new().with("href", "#overridden")
        }

        fn title(&self, title: &str, _item_id: ItemId) -> String {
            title.to_uppercase()
        }
    }

    #[test]
    fn test_hooks_merge_ahead_of_options_and_defaults() {
        let index = TreeIndex::new(vec![
            MenuItem::new(1, 0, "Root").with_url("/"),
            MenuItem::new(2, 1, "Child").with_url("/child"),
        ]);
        let options = RenderOptions {
            container_attributes: Attributes::new().with("class", vec!["main"]),
            item_attributes: Attributes::new().with("class", vec!["nav-item"]),
            current_item_class: "active".to_string(),
            ..RenderOptions::default()
        };

        let output = MenuBuilder::new(Relations::for_id(&index, Some(2)), &options)
            .with_hooks(&BrandHooks)
            .render();

        let expected = concat!(
            "<ul class=\"brand-nav main\">",
            "\n\t<li class=\"item-1 nav-item\"><a href=\"/\">ROOT</a>",
            "\n<ul data-depth=\"0\">\n",
            "\n\t\t<li class=\"item-2 nav-item active\"><a href=\"/child\">CHILD</a></li>\n",
            "\n</ul>\n",
            "</li>\n",
            "</ul>"
        );
        assert_markup(&output, expected);
    }

    #[test]
    fn test_no_current_item_adds_no_classes() {
        let index = site_tree();
        let output = render(&index, None, &classed_options());
        assert!(!output.contains("current"));
        assert!(!output.contains("class="));
    }

    #[test]
    fn test_empty_menu_renders_empty_container() {
        let index = TreeIndex::new(Vec::new());
        assert_eq!(render(&index, None, &RenderOptions::default()), "<ul></ul>");
    }
}
