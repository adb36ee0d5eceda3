use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// Value of a single HTML attribute: plain text, or a list of tokens
/// joined with spaces when rendered (`class`, `rel`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    List(Vec<String>),
}

impl AttrValue {
    /// Falsy values are dropped from the rendered output.
    pub fn is_empty(&self) -> bool {
        match self {
            AttrValue::Text(text) => text.is_empty(),
            AttrValue::List(tokens) => tokens.iter().all(|token| token.is_empty()),
        }
    }

    pub fn flatten(&self) -> String {
        match self {
            AttrValue::Text(text) => text.clone(),
            AttrValue::List(tokens) => tokens
                .iter()
                .filter(|token| !token.is_empty())
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Combine a value from a later source into this one.
    ///
    /// Lists concatenate, a scalar on either side joins the list, and
    /// two scalars resolve to the later one.
    fn absorb(&mut self, later: &AttrValue) {
        let merged = match (&*self, later) {
            (AttrValue::Text(_), AttrValue::Text(text)) => AttrValue::Text(text.clone()),
            (AttrValue::List(earlier), AttrValue::List(tokens)) => {
                AttrValue::List(earlier.iter().chain(tokens).cloned().collect())
            }
            (AttrValue::Text(text), AttrValue::List(tokens)) => AttrValue::List(
                std::iter::once(text.clone()).chain(tokens.iter().cloned()).collect(),
            ),
            (AttrValue::List(earlier), AttrValue::Text(text)) => {
                let mut tokens = earlier.clone();
                tokens.push(text.clone());
                AttrValue::List(tokens)
            }
        };
        *self = merged;
    }

    fn from_json(value: serde_json::Value) -> Result<Self, String> {
        use serde_json::Value;

        match value {
            Value::Null => Ok(AttrValue::Text(String::new())),
            Value::Array(entries) => entries
                .into_iter()
                .map(|entry| match AttrValue::from_json(entry)? {
                    AttrValue::Text(text) => Ok(text),
                    AttrValue::List(_) => Err("nested attribute lists are not supported".to_string()),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(AttrValue::List),
            other => scalar_text(&other)
                .map(AttrValue::Text)
                .ok_or_else(|| format!("unsupported attribute value: {}", other)),
        }
    }
}

fn scalar_text(value: &serde_json::Value) -> Option<String> {
    use serde_json::Value;

    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) | Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(value: Vec<String>) -> Self {
        AttrValue::List(value)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(value: Vec<&str>) -> Self {
        AttrValue::List(value.into_iter().map(str::to_string).collect())
    }
}

impl<'de> Deserialize<'de> for AttrValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        AttrValue::from_json(value).map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrKey {
    Named(String),
    /// Boolean-attribute shorthand: the value doubles as the name
    /// (`required` renders as `required="required"`).
    Positional,
}

/// Ordered attribute map. Named keys are unique; positional entries
/// accumulate in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(AttrKey, AttrValue)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.push_flag(name);
        self
    }

    /// Set a named attribute, replacing any previous value for that key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = AttrKey::Named(key.into());
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn push_flag(&mut self, name: impl Into<String>) {
        self.entries
            .push((AttrKey::Positional, AttrValue::Text(name.into())));
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.iter().find_map(|(existing, value)| match existing {
            AttrKey::Named(name) if name == key => Some(value),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(AttrKey, AttrValue)> {
        self.entries.iter()
    }

    /// Fold a later source into this one (see [`AttrValue`] for how
    /// colliding named keys combine).
    pub fn merge_from(&mut self, later: &Attributes) {
        for (key, value) in &later.entries {
            let existing = match key {
                AttrKey::Named(_) => self.entries.iter_mut().find(|(k, _)| k == key),
                AttrKey::Positional => None,
            };
            match existing {
                Some(entry) => entry.1.absorb(value),
                None => self.entries.push((key.clone(), value.clone())),
            }
        }
    }

    /// Render as ` key="value" key="value"`, skipping empty values.
    pub fn to_html(&self) -> String {
        let parts: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| {
                let value = value.flatten();
                let name = match key {
                    AttrKey::Named(name) => name.as_str(),
                    AttrKey::Positional => value.as_str(),
                };
                format!("{}=\"{}\"", name, escape_html(&value))
            })
            .collect();

        if parts.is_empty() {
            String::new()
        } else {
            format!(" {}", parts.join(" "))
        }
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AttributesVisitor;

        impl<'de> Visitor<'de> for AttributesVisitor {
            type Value = Attributes;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an attribute map or a list of boolean attribute names")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Attributes, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut attributes = Attributes::new();
                while let Some((key, value)) = map.next_entry::<String, AttrValue>()? {
                    // Numeric keys carry boolean shorthand, like a list index would
                    if key.parse::<u64>().is_ok() {
                        attributes.entries.push((AttrKey::Positional, value));
                    } else {
                        attributes.insert(key, value);
                    }
                }
                Ok(attributes)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Attributes, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut attributes = Attributes::new();
                while let Some(value) = seq.next_element::<AttrValue>()? {
                    attributes.entries.push((AttrKey::Positional, value));
                }
                Ok(attributes)
            }
        }

        deserializer.deserialize_any(AttributesVisitor)
    }
}

/// Merges attribute sources in precedence order (hook contributions,
/// caller options, computed defaults) into one rendered string.
pub struct AttributeMerger;

impl AttributeMerger {
    pub fn merge(sources: &[&Attributes]) -> Attributes {
        let mut merged = Attributes::new();
        for source in sources {
            merged.merge_from(source);
        }
        merged
    }

    pub fn render(sources: &[&Attributes]) -> String {
        Self::merge(sources).to_html()
    }
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Helper for consistent indentation
pub struct IndentationHelper;

impl IndentationHelper {
    pub fn indent_for_depth(depth: usize) -> String {
        "\t".repeat(depth)
    }
}
