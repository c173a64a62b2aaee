//! PDF Booklet CLI tool
//!
//! Rearranges the pages of a PDF for double-sided booklet printing.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::level_filters::LevelFilter;

use pdf_booklet::booklet::{plan, Padding};
use pdf_booklet::pdf::{count_pages, ensure_distinct_paths, make_booklet, BookletOptions};

/// PDF Booklet - Rearrange pages in a PDF for booklet printing
#[derive(Parser)]
#[command(name = "pdf-booklet")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Reorder a document for printing as a folded booklet
    pdf-booklet zine.pdf zine-booklet.pdf

    # Only pad to the next multiple of 4 pages
    pdf-booklet --minimal-padding zine.pdf zine-booklet.pdf

    # Show the page order without writing anything
    pdf-booklet --dry-run zine.pdf zine-booklet.pdf")]
struct Cli {
    /// File to transform
    input: PathBuf,

    /// File to write the result to (must differ from INPUT)
    output: PathBuf,

    /// Pad only up to the next multiple of 4 pages instead of always adding blanks
    #[arg(long)]
    minimal_padding: bool,

    /// Print the page order and exit without writing OUTPUT
    #[arg(long)]
    dry_run: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only report errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn padding(&self) -> Padding {
        if self.minimal_padding {
            Padding::Minimal
        } else {
            Padding::Full
        }
    }

    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = if cli.dry_run {
        cmd_dry_run(&cli)
    } else {
        cmd_booklet(&cli)
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Write the booklet
fn cmd_booklet(cli: &Cli) -> anyhow::Result<()> {
    let options = BookletOptions {
        input_path: cli.input.clone(),
        output_path: cli.output.clone(),
        padding: cli.padding(),
    };

    make_booklet(&options)
        .with_context(|| format!("Failed to make booklet from {}", cli.input.display()))?;

    Ok(())
}

/// Print the page order only
fn cmd_dry_run(cli: &Cli) -> anyhow::Result<()> {
    ensure_distinct_paths(&cli.input, &cli.output)?;

    let page_count = count_pages(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    let page_count = u32::try_from(page_count).context("Too many pages")?;

    let order = plan(page_count, cli.padding())?;
    let line: Vec<String> = order.iter().map(ToString::to_string).collect();
    println!("{}", line.join(" "));

    Ok(())
}
