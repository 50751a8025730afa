//! Docsync CLI - exports tagged doc comments from C sources into headers

#![deny(warnings)]

// Global invariants enforced:
// - All file I/O happens here; the core only sees strings
// - Identical input files yield byte-for-byte identical output

use anyhow::Context;
use clap::{Parser, Subcommand};
use docsync_core::{compile_rule, plan_sync, LogTrace, Scanner};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docsync")]
#[command(about = "Sync tagged doc comments between C sources and headers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the export text generated from a source file
    Export {
        /// Path to the C source file
        source: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
    /// Print the insertion line range for a header file
    Locate {
        /// Path to the C header file
        header: PathBuf,
    },
    /// Generate export text from a source file and splice it into its header
    Sync {
        /// Path to the C source file
        source: PathBuf,

        /// Path to the C header file
        header: PathBuf,

        /// Rewrite the header in place instead of printing it
        #[arg(long)]
        write: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Surface a malformed block rule before touching any file.
    compile_rule().context("block rule failed to compile")?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Export { source, format } => {
            let text = read_file(&source)?;
            let mut session = Scanner::with_trace(LogTrace);
            session.scan(&text);

            match format {
                OutputFormat::Text => {
                    println!("{}", session.export_joined());
                }
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(session.records())
                        .context("failed to serialize records")?;
                    println!("{}", json);
                }
            }
        }
        Commands::Locate { header } => {
            let text = read_file(&header)?;
            let mut session = Scanner::with_trace(LogTrace);
            let (start, end) = session.locate_insertion_range(&text);
            println!("{} {}", start, end);
        }
        Commands::Sync {
            source,
            header,
            write,
        } => {
            let patched = sync_files(&source, &header)?;
            if write {
                std::fs::write(&header, &patched)
                    .with_context(|| format!("Failed to write header: {}", header.display()))?;
            } else {
                print!("{}", patched);
            }
        }
    }

    Ok(())
}

/// Run the full pipeline over two files and return the patched header text.
fn sync_files(source: &PathBuf, header: &PathBuf) -> anyhow::Result<String> {
    let source_text = read_file(source)?;
    let header_text = read_file(header)?;

    let plan = plan_sync(&source_text, &header_text);
    Ok(plan.patched_header(&header_text))
}

fn read_file(path: &PathBuf) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}
