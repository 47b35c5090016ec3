//! Renderable HTML node tree.
//!
//! A [`RenderNode`] is either a [`Leaf`] holding a literal value or a
//! [`Container`] owning an ordered list of children. Rendering is a plain
//! concatenation: no whitespace is inserted between children and no text is
//! escaped.
//!
//! Leaf values and container child lists are optional in the type so that a
//! tree read back from JSON can be missing them; the renderer rejects such
//! trees instead of guessing.

use crate::error::{Error, Result};
use crate::text::{TextFragment, TextKind};

/// HTML attributes in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Attributes {
    pairs: Vec<(String, String)>,
}

impl Attributes {
    /// Create an empty attribute list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Append ` key="value"` for every attribute.
    fn write_html(&self, out: &mut String) {
        for (key, value) in &self.pairs {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (key, value) in iter {
            attrs.insert(key, value);
        }
        attrs
    }
}

/// A node without children.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leaf {
    /// Element tag. `None` emits the value as raw text.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub tag: Option<String>,
    /// Element content. Required for rendering.
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Attributes::is_empty")
    )]
    pub attributes: Attributes,
}

impl Leaf {
    /// An element with a value and no attributes.
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Raw text, emitted verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Add or replace an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        let value = self
            .value
            .as_deref()
            .ok_or_else(|| Error::missing_value(self.tag.as_deref()))?;

        let Some(tag) = self.tag.as_deref() else {
            out.push_str(value);
            return Ok(());
        };

        out.push('<');
        out.push_str(tag);
        self.attributes.write_html(out);
        out.push('>');
        out.push_str(value);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        Ok(())
    }
}

/// A node owning an ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Container {
    pub tag: String,
    /// Child nodes. Required for rendering; may be empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Option<Vec<RenderNode>>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Attributes::is_empty")
    )]
    pub attributes: Attributes,
}

impl Container {
    /// A container with the given children and no attributes.
    pub fn new(tag: impl Into<String>, children: Vec<RenderNode>) -> Self {
        Self {
            tag: tag.into(),
            children: Some(children),
            attributes: Attributes::new(),
        }
    }

    /// Add or replace an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        let children = self
            .children
            .as_ref()
            .ok_or_else(|| Error::missing_children(&self.tag))?;

        out.push('<');
        out.push_str(&self.tag);
        self.attributes.write_html(out);
        out.push('>');
        for child in children {
            child.write_html(out)?;
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
        Ok(())
    }
}

/// A node of the HTML output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "lowercase")
)]
pub enum RenderNode {
    Leaf(Leaf),
    Container(Container),
}

impl RenderNode {
    /// Serialize this node and its descendants to HTML.
    ///
    /// # Errors
    ///
    /// [`MissingValue`](crate::ErrorKind::MissingValue) for a leaf without a
    /// value, [`MissingChildren`](crate::ErrorKind::MissingChildren) for a
    /// container without a child list.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        match self {
            RenderNode::Leaf(leaf) => leaf.write_html(out),
            RenderNode::Container(container) => container.write_html(out),
        }
    }
}

impl From<Leaf> for RenderNode {
    fn from(leaf: Leaf) -> Self {
        RenderNode::Leaf(leaf)
    }
}

impl From<Container> for RenderNode {
    fn from(container: Container) -> Self {
        RenderNode::Container(container)
    }
}

impl From<TextFragment> for RenderNode {
    fn from(fragment: TextFragment) -> Self {
        let leaf = match fragment.kind() {
            TextKind::Plain => Leaf::text(fragment.into_text()),
            TextKind::Bold => Leaf::new("b", fragment.into_text()),
            TextKind::Italic => Leaf::new("i", fragment.into_text()),
            TextKind::Code => Leaf::new("code", fragment.into_text()),
            TextKind::Link => {
                let href = fragment.target().unwrap_or_default().to_string();
                Leaf::new("a", fragment.into_text()).with_attribute("href", href)
            }
            TextKind::Image => {
                let src = fragment.target().unwrap_or_default().to_string();
                Leaf::new("img", "")
                    .with_attribute("src", src)
                    .with_attribute("alt", fragment.into_text())
            }
        };
        RenderNode::Leaf(leaf)
    }
}
