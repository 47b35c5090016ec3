//! Inline span parser.
//!
//! Inline parsing is a fixed sequence of passes over a flat list of
//! [`TextFragment`]s. Each pass only looks at `Plain` fragments, so anything
//! an earlier pass styled is opaque to the later ones:
//!
//! 1. `` ` `` → code
//! 2. `**` → bold
//! 3. `_` → italic
//! 4. `![alt](url)` → image
//! 5. `[text](url)` → link
//!
//! Spans do not nest. A backtick span may contain `**` or `_` literally.

use std::sync::LazyLock;

use memchr::memmem;
use regex::Regex;

use crate::error::{Error, Result};
use crate::text::{TextFragment, TextKind};

/// `![alt](url)`; neither part may contain its own bracket characters.
static IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

/// `[text](url)` with an optional leading `!`.
///
/// The regex crate has no lookbehind, so images are matched here too and
/// discarded by the caller. Consuming the `!` keeps the scan from reporting
/// the `[alt](url)` tail of an image as a link.
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(!?)\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

/// One pass of the inline pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Split plain text on a delimiter pair.
    Delimiter {
        delimiter: &'static str,
        kind: TextKind,
    },
    /// Pull `![alt](url)` out of plain text.
    Images,
    /// Pull `[text](url)` out of plain text.
    Links,
}

impl Stage {
    /// Run this pass over `fragments`.
    pub fn apply(self, fragments: Vec<TextFragment>) -> Result<Vec<TextFragment>> {
        match self {
            Stage::Delimiter { delimiter, kind } => split_delimiter(fragments, delimiter, kind),
            Stage::Images => Ok(split_images(fragments)),
            Stage::Links => Ok(split_links(fragments)),
        }
    }
}

/// The inline passes, in the order they run.
pub const PIPELINE: [Stage; 5] = [
    Stage::Delimiter {
        delimiter: "`",
        kind: TextKind::Code,
    },
    Stage::Delimiter {
        delimiter: "**",
        kind: TextKind::Bold,
    },
    Stage::Delimiter {
        delimiter: "_",
        kind: TextKind::Italic,
    },
    Stage::Images,
    Stage::Links,
];

/// Parse the inline content of a block into fragments.
///
/// Empty input yields no fragments.
pub fn parse_inlines(text: &str) -> Result<Vec<TextFragment>> {
    let mut fragments = vec![TextFragment::plain(text)];
    for stage in PIPELINE {
        fragments = stage.apply(fragments)?;
        log::trace!("{:?}: {} fragment(s)", stage, fragments.len());
    }
    Ok(fragments)
}

/// Split every plain fragment on `delimiter`.
///
/// Pieces at odd positions become `kind`, pieces at even positions stay
/// plain, empty pieces are dropped. Non-plain fragments pass through.
///
/// # Errors
///
/// - [`EmptyDelimiter`](crate::ErrorKind::EmptyDelimiter) if `delimiter` is empty.
/// - [`UnsupportedKind`](crate::ErrorKind::UnsupportedKind) unless `kind` is
///   bold, italic or code.
/// - [`MalformedDelimiter`](crate::ErrorKind::MalformedDelimiter) if a plain
///   fragment holds an odd number of delimiters.
pub fn split_delimiter(
    fragments: Vec<TextFragment>,
    delimiter: &str,
    kind: TextKind,
) -> Result<Vec<TextFragment>> {
    if delimiter.is_empty() {
        return Err(Error::empty_delimiter());
    }
    if !kind.is_delimited() {
        return Err(Error::unsupported_kind(kind));
    }

    let finder = memmem::Finder::new(delimiter);
    let mut out = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        if !fragment.is_plain() {
            out.push(fragment);
            continue;
        }

        let text = fragment.text();
        let mut pieces = Vec::new();
        let mut start = 0;
        for pos in finder.find_iter(text.as_bytes()) {
            pieces.push(&text[start..pos]);
            start = pos + delimiter.len();
        }
        pieces.push(&text[start..]);

        if pieces.len() % 2 == 0 {
            return Err(Error::malformed_delimiter(delimiter));
        }

        for (index, piece) in pieces.into_iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            let piece_kind = if index % 2 == 0 { TextKind::Plain } else { kind };
            out.push(TextFragment::untargeted(piece, piece_kind));
        }
    }

    Ok(out)
}

/// Find every `![alt](url)` in `text`, left to right.
pub fn extract_images(text: &str) -> Vec<(&str, &str)> {
    IMAGE_PATTERN
        .captures_iter(text)
        .filter_map(|caps| Some((caps.get(1)?.as_str(), caps.get(2)?.as_str())))
        .collect()
}

/// Find every `[text](url)` in `text` that is not part of an image.
pub fn extract_links(text: &str) -> Vec<(&str, &str)> {
    link_matches(text)
        .map(|(_, label, url)| (label, url))
        .collect()
}

/// Split `![alt](url)` out of every plain fragment.
pub fn split_images(fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    split_matches(fragments, |text| {
        IMAGE_PATTERN
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let fragment = TextFragment::image(caps.get(1)?.as_str(), caps.get(2)?.as_str());
                Some((whole.start(), whole.end(), fragment))
            })
            .collect()
    })
}

/// Split `[text](url)` out of every plain fragment.
///
/// Images left in plain text are not treated as links; they stay plain.
/// Cuts are made at match offsets, so the result only agrees with cutting at
/// the first literal occurrence of the link once [`split_images`] has run.
pub fn split_links(fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    split_matches(fragments, |text| {
        link_matches(text)
            .map(|(range, label, url)| (range.start, range.end, TextFragment::link(label, url)))
            .collect()
    })
}

fn link_matches(text: &str) -> impl Iterator<Item = (std::ops::Range<usize>, &str, &str)> {
    LINK_PATTERN.captures_iter(text).filter_map(|caps| {
        if !caps.get(1)?.as_str().is_empty() {
            return None;
        }
        Some((
            caps.get(0)?.range(),
            caps.get(2)?.as_str(),
            caps.get(3)?.as_str(),
        ))
    })
}

/// Shared driver for the image and link passes.
///
/// `find` returns the byte ranges of each match, in order and
/// non-overlapping, together with the fragment that replaces it.
fn split_matches<F>(fragments: Vec<TextFragment>, find: F) -> Vec<TextFragment>
where
    F: Fn(&str) -> Vec<(usize, usize, TextFragment)>,
{
    let mut out = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        if !fragment.is_plain() {
            out.push(fragment);
            continue;
        }
        if fragment.text().is_empty() {
            continue;
        }

        let matches = find(fragment.text());
        if matches.is_empty() {
            out.push(fragment);
            continue;
        }

        let text = fragment.text();
        let mut cursor = 0;
        for (start, end, replacement) in matches {
            if start > cursor {
                out.push(TextFragment::plain(&text[cursor..start]));
            }
            out.push(replacement);
            cursor = end;
        }
        if cursor < text.len() {
            out.push(TextFragment::plain(&text[cursor..]));
        }
    }

    out
}
