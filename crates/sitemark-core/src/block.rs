//! Block classification and marker stripping.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static UNORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-+\s").unwrap());
static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s").unwrap());

const FENCE: &str = "```";

/// The structural type of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Anything that matches no other kind.
    Paragraph,
    /// `#` to `######` followed by a space. Holds the level (1-6).
    Heading(u8),
    /// Text between triple-backtick fences.
    CodeBlock,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Every line starts with `<number>. `.
    OrderedList,
}

impl BlockKind {
    /// Classify a trimmed block.
    ///
    /// Ordered lists are not checked for sequential numbering: `1.` followed
    /// by `3.` still makes an ordered list.
    pub fn classify(block: &str) -> Self {
        if let Some(level) = heading_level(block) {
            return BlockKind::Heading(level);
        }

        let trimmed = block.trim();
        if trimmed.starts_with(FENCE) && trimmed.ends_with(FENCE) {
            return BlockKind::CodeBlock;
        }

        let lines: Vec<&str> = trimmed.split('\n').filter(|line| !line.is_empty()).collect();
        if lines.is_empty() {
            return BlockKind::Paragraph;
        }
        if lines.iter().all(|line| line.starts_with('>')) {
            return BlockKind::Quote;
        }
        if lines.iter().all(|line| UNORDERED_ITEM.is_match(line)) {
            return BlockKind::UnorderedList;
        }
        if lines.iter().all(|line| ORDERED_ITEM.is_match(line)) {
            return BlockKind::OrderedList;
        }
        BlockKind::Paragraph
    }

    /// The HTML tag of the element this block renders as.
    pub const fn tag(self) -> &'static str {
        match self {
            BlockKind::Paragraph => "p",
            BlockKind::Heading(1) => "h1",
            BlockKind::Heading(2) => "h2",
            BlockKind::Heading(3) => "h3",
            BlockKind::Heading(4) => "h4",
            BlockKind::Heading(5) => "h5",
            BlockKind::Heading(_) => "h6",
            BlockKind::CodeBlock => "pre",
            BlockKind::Quote => "blockquote",
            BlockKind::UnorderedList => "ul",
            BlockKind::OrderedList => "ol",
        }
    }

    /// Remove the block's structural markers, leaving inline content.
    pub fn strip<'a>(self, block: &'a str) -> Cow<'a, str> {
        match self {
            BlockKind::Paragraph => Cow::Borrowed(block),
            BlockKind::Heading(_) => Cow::Borrowed(strip_heading(block)),
            BlockKind::CodeBlock => Cow::Owned(strip_fences(block)),
            BlockKind::Quote => Cow::Owned(strip_quote(block)),
            BlockKind::UnorderedList => Cow::Owned(strip_lines(block, &UNORDERED_ITEM)),
            BlockKind::OrderedList => Cow::Owned(strip_lines(block, &ORDERED_ITEM)),
        }
    }
}

/// Level of a `# ` style heading marker, if the block starts with one.
fn heading_level(block: &str) -> Option<u8> {
    let level = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&level) && block.as_bytes().get(level) == Some(&b' ') {
        Some(level as u8)
    } else {
        None
    }
}

fn strip_heading(block: &str) -> &str {
    match block.split_once("# ") {
        Some((_, rest)) => rest,
        None => block,
    }
}

fn strip_fences(block: &str) -> String {
    let lines: Vec<&str> = block.split('\n').collect();
    let inner = if lines.len() > 2 {
        lines[1..lines.len() - 1].join("\n")
    } else {
        String::new()
    };
    inner + "\n"
}

fn strip_quote(block: &str) -> String {
    let lines: Vec<&str> = block
        .split('\n')
        .map(|line| {
            let line = line.trim_start();
            line.strip_prefix('>').unwrap_or(line).trim_start()
        })
        .collect();
    lines.join("\n").trim().to_string()
}

fn strip_lines(block: &str, marker: &Regex) -> String {
    let lines: Vec<&str> = block
        .split('\n')
        .map(|line| match marker.find(line) {
            Some(m) => &line[m.end()..],
            None => line,
        })
        .collect();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_level_requires_a_space() {
        assert_eq!(heading_level("### Three"), Some(3));
        assert_eq!(heading_level("###Three"), None);
        assert_eq!(heading_level("####### Seven"), None);
        assert_eq!(heading_level("#"), None);
    }

    #[test]
    fn fences_on_one_line_leave_only_a_newline() {
        assert_eq!(strip_fences("```code```"), "\n");
        assert_eq!(strip_fences("```\n```"), "\n");
    }
}
