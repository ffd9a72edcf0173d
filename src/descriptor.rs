//! Icon descriptors
//!
//! An icon is a fixed list of SVG element descriptors: a tag name, an ordered
//! attribute map and optional children. The same types describe rendered
//! output, so a rendered tree can be inspected or serialized the same way
//! as the static data it came from.

use std::fmt;

/// SVG element types eligible for stroke/fill defaulting
pub const SHAPE_TAGS: &[&str] = &[
    "path", "circle", "rect", "line", "polyline", "polygon", "ellipse",
];

/// Check whether a tag is a shape tag
pub fn is_shape_tag(tag: &str) -> bool {
    SHAPE_TAGS.contains(&tag)
}

/// An attribute value as it appears in descriptor data
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    Num(f64),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(s) => f.write_str(s),
            AttrValue::Num(n) => f.write_str(&format_number(*n)),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Num(n)
    }
}

impl From<i32> for AttrValue {
    fn from(n: i32) -> Self {
        AttrValue::Num(f64::from(n))
    }
}

/// Format a number for SVG output: at most 4 decimals, no trailing `.0`
pub fn format_number(n: f64) -> String {
    let rounded = (n * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        // also folds -0
        return "0".to_string();
    }
    format!("{}", rounded)
}

/// Compare attribute names ignoring case, `-` and `_`
///
/// `strokeWidth`, `stroke-width` and `stroke_width` all name the same
/// attribute. Descriptor data from different targets uses different
/// spellings, so presence checks must not depend on one of them.
pub fn same_attribute(a: &str, b: &str) -> bool {
    normalized(a).eq(normalized(b))
}

fn normalized(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
}

/// Ordered attribute map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(Vec<(String, AttrValue)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Attributes::set`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0
            .iter()
            .find(|(key, _)| same_attribute(key, name))
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Set an attribute, replacing an existing one in place
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(key, _)| same_attribute(key, &name)) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Set an attribute only if it is not already present
    pub fn set_if_absent(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        if !self.contains(&name) {
            self.0.push((name, value.into()));
        }
    }

    /// Append all attributes of `other`, replacing those already present
    pub fn extend_from(&mut self, other: &Attributes) {
        for (name, value) in other {
            self.set(name.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, AttrValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a (String, AttrValue);
    type IntoIter = std::slice::Iter<'a, (String, AttrValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

/// Children of a descriptor
#[derive(Debug, Clone, PartialEq)]
pub enum Children {
    Nodes(Vec<IconNode>),
    Text(String),
}

/// One SVG element, either static icon data or rendered output
#[derive(Debug, Clone, PartialEq)]
pub struct IconNode {
    pub tag: String,
    pub attrs: Attributes,
    pub children: Option<Children>,
}

impl IconNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attributes::new(),
            children: None,
        }
    }

    /// Add an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Replace the attribute map
    pub fn with_attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = attrs;
        self
    }

    /// Set element children
    pub fn with_children(mut self, children: Vec<IconNode>) -> Self {
        self.children = Some(Children::Nodes(children));
        self
    }

    /// Set text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children = Some(Children::Text(text.into()));
        self
    }

    pub fn is_shape(&self) -> bool {
        is_shape_tag(&self.tag)
    }

    /// Child elements; empty for leaves and text nodes
    pub fn child_nodes(&self) -> &[IconNode] {
        match &self.children {
            Some(Children::Nodes(nodes)) => nodes,
            _ => &[],
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.children {
            Some(Children::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Depth-first walk over this node and all descendants
    pub fn walk(&self) -> Vec<&IconNode> {
        let mut out = vec![self];
        for child in self.child_nodes() {
            out.extend(child.walk());
        }
        out
    }
}
