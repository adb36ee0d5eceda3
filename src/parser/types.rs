use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Identifier of a menu item or of the content object it links to.
///
/// `0` means "none": a `parent_id` of `0` marks a root-level item.
pub type ItemId = u64;

/// Parent id carried by root-level items.
pub const ROOT_PARENT: ItemId = 0;

/// One entry of a navigation menu, as delivered by the item source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuItem {
    #[serde(alias = "ID", deserialize_with = "loose_id")]
    pub id: ItemId,
    #[serde(default, alias = "menu_item_parent", deserialize_with = "loose_id")]
    pub parent_id: ItemId,
    /// Id of the content object this item points to (page, post, term...)
    #[serde(default, alias = "object_id", deserialize_with = "loose_id")]
    pub linked_object_id: ItemId,
    #[serde(default, deserialize_with = "loose_string")]
    pub title: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub url: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub attr_title: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub target: String,
    #[serde(default, alias = "xfn", deserialize_with = "loose_string")]
    pub relation: String,
    #[serde(default)]
    pub classes: Vec<String>,
}

impl MenuItem {
    pub fn new(id: ItemId, parent_id: ItemId, title: impl Into<String>) -> Self {
        Self {
            id,
            parent_id,
            linked_object_id: 0,
            title: title.into(),
            url: String::new(),
            attr_title: String::new(),
            target: String::new(),
            relation: String::new(),
            classes: Vec::new(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn linked_to(mut self, object_id: ItemId) -> Self {
        self.linked_object_id = object_id;
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id == ROOT_PARENT
    }
}

/// The menu container itself (id, slug and display name).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuObject {
    #[serde(alias = "term_id", deserialize_with = "loose_id")]
    pub id: ItemId,
    #[serde(default, deserialize_with = "loose_string")]
    pub slug: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub name: String,
}

impl MenuObject {
    /// Whether this menu answers to the given identifier.
    ///
    /// A numeric identifier also matches a slug or name spelled with the
    /// same digits.
    pub fn matches(&self, ident: &MenuIdent) -> bool {
        match ident {
            MenuIdent::Id(id) => {
                let digits = id.to_string();
                self.id == *id || self.slug == digits || self.name == digits
            }
            MenuIdent::Name(name) => self.slug == *name || self.name == *name,
        }
    }
}

/// How a caller names a menu: by numeric id, or by slug/name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuIdent {
    Id(ItemId),
    Name(String),
}

impl From<&str> for MenuIdent {
    fn from(value: &str) -> Self {
        match value.trim().parse::<ItemId>() {
            Ok(id) => MenuIdent::Id(id),
            Err(_) => MenuIdent::Name(value.to_string()),
        }
    }
}

impl From<ItemId> for MenuIdent {
    fn from(value: ItemId) -> Self {
        MenuIdent::Id(value)
    }
}

impl fmt::Display for MenuIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuIdent::Id(id) => write!(f, "{}", id),
            MenuIdent::Name(name) => write!(f, "{}", name),
        }
    }
}

/// The object currently being viewed, as reported by the view context.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueriedObject {
    #[serde(alias = "ID", deserialize_with = "loose_id")]
    pub id: ItemId,
    #[serde(default, alias = "post_type", deserialize_with = "loose_string")]
    pub type_tag: String,
}

impl QueriedObject {
    pub fn new(id: ItemId, type_tag: impl Into<String>) -> Self {
        Self {
            id,
            type_tag: type_tag.into(),
        }
    }
}

// Site document structures - the JSON shape read by `MenuParser`

#[derive(Debug, Clone, Deserialize)]
pub struct MenuDocument {
    #[serde(alias = "term_id", deserialize_with = "loose_id")]
    pub id: ItemId,
    #[serde(default, deserialize_with = "loose_string")]
    pub slug: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl MenuDocument {
    pub fn object(&self) -> MenuObject {
        MenuObject {
            id: self.id,
            slug: self.slug.clone(),
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteSettings {
    #[serde(default, deserialize_with = "loose_id")]
    pub page_for_posts: ItemId,
    /// Type tag -> id of the page listing objects of that type
    #[serde(default)]
    pub page_associations: HashMap<String, ItemId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteDocument {
    #[serde(default)]
    pub menus: Vec<MenuDocument>,
    #[serde(default, alias = "options")]
    pub settings: SiteSettings,
    #[serde(default)]
    pub queried_object: Option<QueriedObject>,
}

/// Accepts ids the way CMS exports carry them: numbers, numeric strings,
/// or `""`/`null` for "none".
fn loose_id<'de, D>(deserializer: D) -> Result<ItemId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Number(ItemId),
        Text(String),
    }

    match Option::<Loose>::deserialize(deserializer)? {
        None => Ok(ROOT_PARENT),
        Some(Loose::Number(id)) => Ok(id),
        Some(Loose::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                Ok(ROOT_PARENT)
            } else {
                text.parse()
                    .map_err(|_| de::Error::custom(format!("invalid id '{}'", text)))
            }
        }
    }
}

fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
