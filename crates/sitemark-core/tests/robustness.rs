//! Malformed and unusual input must produce a result or an error, never a
//! panic, and a successful render must always be a single `<div>`.

use sitemark_core::{check, render_document, split_blocks, ErrorKind, Parser};

const CASES: &[(&str, &str)] = &[
    ("lone_backtick", "`"),
    ("lone_underscore", "_"),
    ("lone_bold", "**"),
    ("triple_star", "***"),
    ("unclosed_image", "![alt](no end"),
    ("unclosed_link", "[text](no end"),
    ("bracket_soup", "[[[]]]((()))![![]]"),
    ("only_fence", "```"),
    ("fence_in_paragraph", "text ``` more"),
    ("quote_marker_only", ">"),
    ("list_marker_only", "- "),
    ("number_marker_only", "1. "),
    ("seven_hashes", "####### not a heading"),
    ("hash_only", "#"),
    ("crlf", "# Title\r\n\r\ntext\r\n"),
    ("tabs", "\t-\titem\n\t- item"),
    ("multibyte", "# Überschrift\n\n**fett** und _kursiv_ — ✓\n\n- 日本語\n- 中文"),
    ("emoji_link", "[🦀](https://rust-lang.org/🦀)"),
    ("nul_bytes", "a\0b\n\n\0"),
    ("many_blank_lines", "\n\n\n\n\n\n\n\n"),
];

#[test]
fn test_no_panics_on_unusual_input() {
    for (name, input) in CASES {
        match render_document(input) {
            Ok(html) => {
                assert!(html.starts_with("<div>"), "{}: {}", name, html);
                assert!(html.ends_with("</div>"), "{}: {}", name, html);
            }
            Err(err) => {
                assert!(!err.message.is_empty(), "{}: empty error message", name);
            }
        }
        let _ = check(input);
    }
}

#[test]
fn test_check_agrees_with_render() {
    for (name, input) in CASES {
        let errors = check(input);
        match render_document(input) {
            Ok(_) => assert!(errors.is_empty(), "{}: {:?}", name, errors),
            Err(err) => assert_eq!(errors.first(), Some(&err), "{}", name),
        }
    }
}

#[test]
fn test_spans_stay_on_char_boundaries() {
    for (name, input) in CASES {
        for block in split_blocks(input) {
            assert_eq!(block.span.slice(input), Some(block.text), "{}", name);
        }
    }
}

#[test]
fn test_only_inline_errors_come_from_documents() {
    for (_, input) in CASES {
        if let Err(err) = Parser::new().parse(input) {
            assert_eq!(err.kind, ErrorKind::MalformedDelimiter);
            assert!(err.span.is_some());
        }
    }
}

#[test]
fn test_large_document() {
    let section = "## Section\n\nSome **bold**, some _italic_, some `code`.\n\n- one\n- two\n\n";
    let input = section.repeat(500);
    let html = render_document(&input).unwrap();
    assert_eq!(html.matches("<h2>").count(), 500);
    assert_eq!(html.matches("<li>").count(), 1000);
}
