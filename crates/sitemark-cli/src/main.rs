//! SiteMark CLI - Render, validate, and inspect SiteMark documents
//!
//! Usage:
//!   smark [OPTIONS] <COMMAND> <FILE>
//!
//! Commands:
//!   render    Render a document to an HTML fragment
//!   title     Print the document title
//!   validate  Check every block for errors
//!   stats     Show document statistics
//!   emit      Render a node tree saved as JSON

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use sitemark_core::{split_blocks, BlockKind, Errors, RenderNode};

#[derive(Parser)]
#[command(name = "smark", version)]
#[command(about = "Render SiteMark documents to HTML")]
struct Cli {
    /// Log pipeline details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a document to an HTML fragment
    Render {
        /// Input Markdown file, or `-` for stdin
        file: PathBuf,

        /// Print the node tree as JSON instead of HTML
        #[arg(short, long)]
        json: bool,
    },
    /// Print the text of the first level-1 heading
    Title {
        /// Input Markdown file, or `-` for stdin
        file: PathBuf,
    },
    /// Check every block for errors without rendering
    Validate {
        /// Input Markdown file, or `-` for stdin
        file: PathBuf,

        /// Report errors as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Show document statistics
    Stats {
        /// Input Markdown file, or `-` for stdin
        file: PathBuf,

        /// Print statistics as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Render a node tree produced by `render --json`
    Emit {
        /// Input JSON file, or `-` for stdin
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Render { file, json } => cmd_render(&read_input(&file)?, json),
        Command::Title { file } => {
            let title = sitemark_core::extract_title(&read_input(&file)?)?;
            println!("{}", title);
            Ok(())
        }
        Command::Validate { file, json } => cmd_validate(&read_input(&file)?, json),
        Command::Stats { file, json } => {
            let stats = DocumentStats::from_markdown(&read_input(&file)?);
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print_stats(&stats);
            }
            Ok(())
        }
        Command::Emit { file } => cmd_emit(&read_input(&file)?),
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        return Ok(input);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))
}

// =============================================================================
// Render Command
// =============================================================================

fn cmd_render(input: &str, json: bool) -> Result<()> {
    let tree = sitemark_core::markdown_to_node(input)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
    } else {
        println!("{}", tree.render()?);
    }
    Ok(())
}

fn cmd_emit(input: &str) -> Result<()> {
    let tree: RenderNode = serde_json::from_str(input).context("invalid node tree")?;
    println!("{}", tree.render()?);
    Ok(())
}

// =============================================================================
// Validate Command
// =============================================================================

fn cmd_validate(input: &str, json: bool) -> Result<()> {
    let errors = sitemark_core::check(input);

    if json {
        println!("{}", validation_report(&errors));
    } else if errors.is_empty() {
        println!("Valid: no errors found");
    } else {
        eprintln!("Invalid: {} error(s) found", errors.len());
        for error in errors.iter() {
            eprintln!("  - {}", error);
        }
    }

    if !errors.is_empty() {
        bail!("{} error(s) found", errors.len());
    }
    Ok(())
}

fn validation_report(errors: &Errors) -> serde_json::Value {
    let errors: Vec<_> = errors
        .iter()
        .map(|e| {
            serde_json::json!({
                "kind": format!("{:?}", e.kind),
                "message": e.message,
                "span": e.span,
            })
        })
        .collect();
    serde_json::json!({"valid": errors.is_empty(), "errors": errors})
}

// =============================================================================
// Stats Command
// =============================================================================

#[derive(Debug, Default, PartialEq, Eq, Serialize)]
struct DocumentStats {
    total_blocks: usize,
    headings: usize,
    paragraphs: usize,
    code_blocks: usize,
    quotes: usize,
    lists: usize,
    list_items: usize,
    chars: usize,
    words: usize,
    lines: usize,
}

impl DocumentStats {
    fn from_markdown(input: &str) -> Self {
        let mut stats = Self {
            chars: input.chars().count(),
            words: input.split_whitespace().count(),
            lines: input.lines().count(),
            ..Self::default()
        };

        for block in split_blocks(input) {
            stats.total_blocks += 1;
            match BlockKind::classify(block.text) {
                BlockKind::Heading(_) => stats.headings += 1,
                BlockKind::Paragraph => stats.paragraphs += 1,
                BlockKind::CodeBlock => stats.code_blocks += 1,
                BlockKind::Quote => stats.quotes += 1,
                BlockKind::UnorderedList | BlockKind::OrderedList => {
                    stats.lists += 1;
                    stats.list_items += block.text.lines().filter(|l| !l.is_empty()).count();
                }
            }
        }

        stats
    }
}

fn print_stats(stats: &DocumentStats) {
    println!("Document Statistics");
    println!("-------------------");
    println!("Content:");
    println!("  Total blocks:   {}", stats.total_blocks);
    println!("  Headings:       {}", stats.headings);
    println!("  Paragraphs:     {}", stats.paragraphs);
    println!("  Code blocks:    {}", stats.code_blocks);
    println!("  Quotes:         {}", stats.quotes);
    println!("  Lists:          {}", stats.lists);
    println!("  List items:     {}", stats.list_items);
    println!();
    println!("Size:");
    println!("  Characters:     {}", stats.chars);
    println!("  Words (est.):   {}", stats.words);
    println!("  Lines:          {}", stats.lines);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_count_blocks_by_kind() {
        let input = "# Title\n\nText\n\n- a\n- b\n\n1. x\n\n> q\n\n```\ncode\n```";
        let stats = DocumentStats::from_markdown(input);
        assert_eq!(stats.total_blocks, 6);
        assert_eq!(stats.headings, 1);
        assert_eq!(stats.paragraphs, 1);
        assert_eq!(stats.lists, 2);
        assert_eq!(stats.list_items, 3);
        assert_eq!(stats.quotes, 1);
        assert_eq!(stats.code_blocks, 1);
    }

    #[test]
    fn validation_report_lists_errors_with_spans() {
        let report = validation_report(&sitemark_core::check("fine\n\nbad _x"));
        assert_eq!(report["valid"], false);
        assert_eq!(report["errors"][0]["kind"], "MalformedDelimiter");
        assert_eq!(report["errors"][0]["span"]["start"], 6);
        assert_eq!(report["errors"][0]["span"]["end"], 12);
    }

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["smark", "-v", "render", "--json", "page.md"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Render { json: true, .. }));
    }
}
