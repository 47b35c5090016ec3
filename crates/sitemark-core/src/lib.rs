//! # SiteMark Core
//!
//! Converts a small Markdown dialect into an HTML node tree and renders it.
//!
//! A document is split into blocks at blank lines. Each block is classified
//! (heading, code fence, quote, list, paragraph), stripped of its markers and
//! parsed for inline spans (bold, italic, code, links, images). Spans do not
//! nest and there is no escaping.
//!
//! ## Quick Start
//!
//! ```rust
//! let input = "# Hello World\n\nThis is a **paragraph**.";
//!
//! let html = sitemark_core::render_document(input).unwrap();
//! assert_eq!(
//!     html,
//!     "<div><h1>Hello World</h1><p>This is a <b>paragraph</b>.</p></div>"
//! );
//!
//! let title = sitemark_core::extract_title(input).unwrap();
//! assert_eq!(title, "Hello World");
//! ```
//!
//! ## Validation
//!
//! Rendering stops at the first bad block. To see every problem at once:
//!
//! ```rust
//! let input = "A **broken paragraph\n\nfine\n\nand _another";
//! let errors = sitemark_core::check(input);
//!
//! assert_eq!(errors.len(), 2);
//! ```

pub mod block;
pub mod error;
pub mod inline;
pub mod lexer;
pub mod node;
pub mod parser;
pub mod span;
pub mod text;

pub use block::BlockKind;
pub use error::{Error, ErrorKind, Errors, Result};
pub use lexer::{split_blocks, to_blocks};
pub use node::{Attributes, Container, Leaf, RenderNode};
pub use parser::{build_tree, ParseResult, Parser};
pub use text::{TextFragment, TextKind};

/// Return the text of the first level-1 heading (`# `) line.
///
/// # Errors
///
/// [`NoTitleFound`](ErrorKind::NoTitleFound) if no line starts with `# `.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .split('\n')
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or_else(Error::no_title)
}

/// Build the node tree for a document.
pub fn markdown_to_node(markdown: &str) -> Result<RenderNode> {
    Parser::new().parse(markdown)
}

/// Render a document to an HTML fragment wrapped in a single `<div>`.
pub fn render_document(markdown: &str) -> Result<String> {
    markdown_to_node(markdown)?.render()
}

/// Collect the errors of every block that fails to convert.
pub fn check(markdown: &str) -> Errors {
    Parser::new().parse_with_recovery(markdown).errors
}
