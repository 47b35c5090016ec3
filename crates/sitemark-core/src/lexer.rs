//! Block splitter.
//!
//! A document is cut into blocks at every blank line (`"\n\n"`). Each piece
//! is trimmed and empty pieces are skipped.
//!
//! # Performance
//!
//! - Zero-copy: blocks borrow directly from input
//! - SIMD-accelerated separator scanning via `memchr::memmem`

use memchr::memmem;

use crate::span::Span;

const SEPARATOR: &[u8] = b"\n\n";

/// A trimmed block of source text with its location in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBlock<'a> {
    /// The block text, without surrounding whitespace.
    pub text: &'a str,
    /// Byte span in the original input.
    pub span: Span,
}

/// Iterator over the blocks of a document.
pub struct Lexer<'a> {
    /// The complete input text.
    input: &'a str,
    /// Byte offset of the next unread piece.
    offset: usize,
    /// Separator positions, front to back.
    separators: memmem::FindIter<'a, 'static>,
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            separators: memmem::find_iter(input.as_bytes(), SEPARATOR),
            done: false,
        }
    }

    /// Read the next untrimmed piece, which may be blank.
    fn next_piece(&mut self) -> Option<(usize, &'a str)> {
        if self.done {
            return None;
        }
        let start = self.offset;
        let end = match self.separators.next() {
            Some(pos) => {
                self.offset = pos + SEPARATOR.len();
                pos
            }
            None => {
                self.done = true;
                self.input.len()
            }
        };
        Some((start, &self.input[start..end]))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = RawBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((start, piece)) = self.next_piece() {
            let text = piece.trim();
            if text.is_empty() {
                continue;
            }
            let lead = piece.len() - piece.trim_start().len();
            let start = (start + lead) as u32;
            return Some(RawBlock {
                text,
                span: Span::new(start, start + text.len() as u32),
            });
        }
        None
    }
}

/// Split a document into trimmed, non-empty blocks.
pub fn to_blocks(document: &str) -> Vec<&str> {
    Lexer::new(document).map(|block| block.text).collect()
}

/// Like [`to_blocks`], keeping each block's span.
pub fn split_blocks(document: &str) -> Vec<RawBlock<'_>> {
    Lexer::new(document).collect()
}
