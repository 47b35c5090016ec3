//! Typed inline text fragments.
//!
//! The inline parser turns the content of a block into a flat sequence of
//! [`TextFragment`]s. Fragments are immutable once built: every parsing stage
//! consumes one sequence and produces a new one.

use std::fmt;

/// The style of an inline text fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    /// Unstyled text.
    Plain,
    /// `**bold**`
    Bold,
    /// `_italic_`
    Italic,
    /// `` `code` ``
    Code,
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
}

impl TextKind {
    /// Whether fragments of this kind carry a target URL.
    #[inline]
    pub const fn has_target(self) -> bool {
        matches!(self, TextKind::Link | TextKind::Image)
    }

    /// Whether the delimiter splitter can produce this kind.
    #[inline]
    pub const fn is_delimited(self) -> bool {
        matches!(self, TextKind::Bold | TextKind::Italic | TextKind::Code)
    }
}

/// A piece of inline text with its style.
///
/// Link and image fragments always carry a target URL, every other kind
/// never does. The constructors uphold this, so the fields stay private.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextFragment {
    text: String,
    kind: TextKind,
    target: Option<String>,
}

impl TextFragment {
    /// Unstyled text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::untargeted(text, TextKind::Plain)
    }

    /// Bold text.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::untargeted(text, TextKind::Bold)
    }

    /// Italic text.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::untargeted(text, TextKind::Italic)
    }

    /// Inline code.
    pub fn code(text: impl Into<String>) -> Self {
        Self::untargeted(text, TextKind::Code)
    }

    /// A link with its anchor text and destination.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TextKind::Link,
            target: Some(url.into()),
        }
    }

    /// An image with its alt text and source.
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: TextKind::Image,
            target: Some(url.into()),
        }
    }

    /// Build a fragment of a kind that has no target.
    ///
    /// Callers must have checked `!kind.has_target()`.
    pub(crate) fn untargeted(text: impl Into<String>, kind: TextKind) -> Self {
        debug_assert!(!kind.has_target());
        Self {
            text: text.into(),
            kind,
            target: None,
        }
    }

    /// The fragment text (alt text for images).
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The fragment style.
    #[inline]
    pub fn kind(&self) -> TextKind {
        self.kind
    }

    /// The URL of a link or image.
    #[inline]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Check if the fragment is unstyled text.
    #[inline]
    pub fn is_plain(&self) -> bool {
        self.kind == TextKind::Plain
    }

    /// Consume the fragment, returning its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for TextFragment {
    /// Writes the fragment back as markdown source.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = self.target().unwrap_or_default();
        match self.kind {
            TextKind::Plain => f.write_str(&self.text),
            TextKind::Bold => write!(f, "**{}**", self.text),
            TextKind::Italic => write!(f, "_{}_", self.text),
            TextKind::Code => write!(f, "`{}`", self.text),
            TextKind::Link => write!(f, "[{}]({})", self.text, target),
            TextKind::Image => write!(f, "![{}]({})", self.text, target),
        }
    }
}
