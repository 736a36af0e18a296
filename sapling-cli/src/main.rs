//! sapling CLI
//!
//! Parses one markup document and prints its tree structure.

mod load;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::{OwoColorize, Stream};
use sapling_common::diagnostics::{self, Verbosity};
use sapling_html::{ParsedDocument, parse_document, print_tree};

use load::Source;

/// Header printed above the rendered tree.
const TREE_HEADER: &str = " --- parsed html structure --- ";

/// sapling - print the tree structure of a markup document
#[derive(Parser, Debug)]
#[command(name = "sapling")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the tree of a file
    sapling ./index.html

    # Parse inline markup
    sapling --html '<ul><li>one<li>two</ul>'

    # Show tokens and builder progress
    sapling -v --tokens ./index.html

    # Machine-readable output
    sapling --json ./index.html
"#)]
struct Cli {
    /// Path to the markup file
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Parse a markup string directly instead of a file
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// Print the token stream before the tree
    #[arg(long)]
    tokens: bool,

    /// Print the tree as JSON instead of indented markup
    #[arg(long)]
    json: bool,

    /// List unresolved closing tags after the tree
    #[arg(long)]
    issues: bool,

    /// Also print informational builder messages to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Print no diagnostics at all
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    const fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Warnings
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    diagnostics::set_verbosity(cli.verbosity());

    let source = Source::from_args(cli.path.as_deref(), cli.html.as_deref())?;
    let input = source.read()?;
    let document = parse_document(input);

    if cli.tokens {
        print_tokens(&document);
    }

    if cli.json {
        let json = document
            .tree
            .to_json_pretty()
            .context("failed to serialize tree")?;
        println!("{json}");
    } else {
        println!("{TREE_HEADER}");
        print_tree(&document.tree);
    }

    if cli.issues {
        print_issues(&document);
    }

    Ok(())
}

fn print_tokens(document: &ParsedDocument) {
    println!(
        "{}",
        "=== Tokens ===".if_supports_color(Stream::Stdout, |t| t.bold())
    );
    for (index, token) in document.tokens.iter().enumerate() {
        println!("{index:>4} {token}");
    }
    println!();
}

fn print_issues(document: &ParsedDocument) {
    println!();
    println!(
        "{}",
        "=== Issues ===".if_supports_color(Stream::Stdout, |t| t.bold())
    );
    if document.issues.is_empty() {
        println!("{}", "none".if_supports_color(Stream::Stdout, |t| t.green()));
        return;
    }
    for issue in &document.issues {
        println!(
            "{} token {}: {}",
            "✗".if_supports_color(Stream::Stdout, |t| t.red()),
            issue.token_index,
            issue.message
        );
    }
}
