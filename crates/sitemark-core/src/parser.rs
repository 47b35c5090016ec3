//! Node tree builder.
//!
//! Splits a document into blocks, classifies each one, strips its markers
//! and turns the remaining content into render nodes. The whole document is
//! wrapped in a single `div` container, one child per block in source order.

use crate::block::BlockKind;
use crate::error::{Error, Errors, Result};
use crate::inline::parse_inlines;
use crate::lexer::{Lexer, RawBlock};
use crate::node::{Container, Leaf, RenderNode};
use crate::text::TextFragment;

/// Tag of the container wrapping the whole document.
pub const ROOT_TAG: &str = "div";

/// Result of a recovering parse.
#[derive(Debug)]
pub struct ParseResult {
    /// The document tree, without the blocks that failed.
    pub root: RenderNode,
    /// One error per failed block, in source order.
    pub errors: Errors,
}

impl ParseResult {
    /// Check if every block converted without errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Markdown to node tree converter.
#[derive(Debug, Default)]
pub struct Parser {
    /// Errors collected during a recovering parse.
    errors: Errors,
}

impl Parser {
    /// Create a new parser.
    #[inline]
    pub fn new() -> Self {
        Self {
            errors: Errors::new(),
        }
    }

    /// Parse the input, failing on the first block that cannot be converted.
    pub fn parse(&self, input: &str) -> Result<RenderNode> {
        let mut children = Vec::with_capacity(16);
        for block in Lexer::new(input) {
            children.push(self.parse_block(block)?);
        }
        log::debug!("built {} block(s)", children.len());
        Ok(Container::new(ROOT_TAG, children).into())
    }

    /// Parse every block that can be converted, collecting an error for each
    /// one that cannot.
    ///
    /// Failed blocks are left out of the tree.
    pub fn parse_with_recovery(&mut self, input: &str) -> ParseResult {
        self.errors = Errors::new();
        let mut children = Vec::with_capacity(16);

        for block in Lexer::new(input) {
            match self.parse_block(block) {
                Ok(node) => children.push(node),
                Err(err) => self.record_error(err),
            }
        }

        ParseResult {
            root: Container::new(ROOT_TAG, children).into(),
            errors: std::mem::take(&mut self.errors),
        }
    }

    /// Record an error during parsing.
    #[inline]
    fn record_error(&mut self, error: Error) {
        log::debug!("recovered: {}", error);
        self.errors.push(error);
    }

    fn parse_block(&self, block: RawBlock<'_>) -> Result<RenderNode> {
        let kind = BlockKind::classify(block.text);
        log::debug!(
            "block at {}..{}: {:?}",
            block.span.start,
            block.span.end,
            kind
        );
        build_block(block.text, kind).map_err(|err| err.with_span(block.span))
    }
}

/// Wrap already split blocks into a document tree.
pub fn build_tree<'a, I>(blocks: I) -> Result<RenderNode>
where
    I: IntoIterator<Item = &'a str>,
{
    let children = blocks
        .into_iter()
        .map(block_to_node)
        .collect::<Result<Vec<_>>>()?;
    Ok(Container::new(ROOT_TAG, children).into())
}

/// Convert a single block into its render node.
pub fn block_to_node(block: &str) -> Result<RenderNode> {
    build_block(block, BlockKind::classify(block))
}

fn build_block(block: &str, kind: BlockKind) -> Result<RenderNode> {
    let content = kind.strip(block);

    let children = match kind {
        BlockKind::Paragraph | BlockKind::Heading(_) | BlockKind::Quote => {
            text_to_children(&content)?
        }
        BlockKind::UnorderedList | BlockKind::OrderedList => content
            .split('\n')
            .filter(|item| !item.is_empty())
            .map(|item| Ok(Container::new("li", text_to_children(item)?).into()))
            .collect::<Result<Vec<RenderNode>>>()?,
        BlockKind::CodeBlock => {
            // Spans inside a fence are parsed, but only the text of the first
            // fragment is kept.
            let code = parse_inlines(&content)?
                .into_iter()
                .next()
                .map(TextFragment::into_text)
                .unwrap_or_default();
            vec![Leaf::new("code", code).into()]
        }
    };

    Ok(Container::new(kind.tag(), children).into())
}

fn text_to_children(text: &str) -> Result<Vec<RenderNode>> {
    Ok(parse_inlines(text)?
        .into_iter()
        .map(RenderNode::from)
        .collect())
}
