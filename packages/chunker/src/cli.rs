//! Command-line interface for the chunker.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{chunks_file_name, DEFAULT_OUTPUT_DIR};
use crate::error::{ChunkerError, Result};
use crate::jsonl::save_jsonl;
use crate::outline::{build_outline, render_outline};
use crate::source::discover_documents;
use crate::splitting::MarkdownSplitter;

/// md-chunker - Split Markdown documents into hierarchical sections.
#[derive(Parser)]
#[command(name = "md-chunker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split documents into sections and write JSONL chunk files.
    Chunk {
        /// Directory containing documents, or a single document file
        path: PathBuf,

        /// Specific file inside the directory to process
        #[arg(short, long)]
        file: Option<String>,

        /// Output directory (default: data/chunks)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Warn about sections whose content is shorter than this many
        /// characters (sections are flagged, never dropped)
        #[arg(long)]
        min_length: Option<usize>,
    },

    /// Print the header outline of a document.
    Outline {
        /// Document file to outline
        path: PathBuf,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chunk {
            path,
            file,
            output,
            min_length,
        } => chunk_command(&path, file.as_deref(), output.as_deref(), min_length),
        Commands::Outline { path } => outline_command(&path),
    }
}

/// Execute the chunk command.
fn chunk_command(
    path: &Path,
    file: Option<&str>,
    output: Option<&Path>,
    min_length: Option<usize>,
) -> Result<()> {
    let documents = if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        discover_documents(path, file)?
    };

    if documents.is_empty() {
        return Err(ChunkerError::NoDocuments(path.to_path_buf()));
    }

    let output_dir = output.unwrap_or(Path::new(DEFAULT_OUTPUT_DIR));
    std::fs::create_dir_all(output_dir)?;

    println!(
        "{} {} document(s) into {}",
        style("Chunking").bold(),
        style(documents.len()).cyan(),
        style(output_dir.display()).green()
    );
    println!();

    let pb = ProgressBar::new(documents.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .expect("valid template"),
    );

    let splitter = MarkdownSplitter::new();
    let mut succeeded = 0usize;
    let mut failed = 0usize;

    for document in &documents {
        let name = document
            .file_name()
            .map_or_else(|| document.display().to_string(), |n| {
                n.to_string_lossy().into_owned()
            });
        pb.set_message(name.clone());

        match process_document(&splitter, document, &name, output_dir, min_length) {
            Ok(saved) => {
                succeeded += 1;
                pb.println(format!(
                    "  {} {} -> {}",
                    style("ok").green(),
                    name,
                    saved.display()
                ));
            }
            Err(e) => {
                failed += 1;
                tracing::error!(document = %name, error = %e, "Failed to process document");
                pb.println(format!("  {} {}: {e}", style("failed").red().bold(), name));
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    println!();
    println!(
        "{} {} succeeded, {} failed",
        style("Done:").bold(),
        style(succeeded).green(),
        if failed > 0 {
            style(failed).red().bold()
        } else {
            style(failed).dim()
        }
    );

    if failed > 0 {
        return Err(ChunkerError::PartialFailure {
            failed,
            total: documents.len(),
        });
    }

    Ok(())
}

/// Split one document and save its chunk file.
fn process_document(
    splitter: &MarkdownSplitter,
    document: &Path,
    name: &str,
    output_dir: &Path,
    min_length: Option<usize>,
) -> Result<PathBuf> {
    let split = splitter.split_file(document)?;

    for warning in &split.warnings {
        tracing::warn!(document = %name, "{warning}");
    }

    if let Some(min_length) = min_length {
        for section in &split.sections {
            let length = section.content_len();
            if length < min_length {
                tracing::warn!(
                    document = %name,
                    header = %section.header,
                    length,
                    min_length,
                    "Section below minimum length"
                );
            }
        }
    }

    let stem = document
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    let output_file = output_dir.join(chunks_file_name(&stem));

    save_jsonl(&split.sections, Some(name), &output_file)
}

/// Execute the outline command.
fn outline_command(path: &Path) -> Result<()> {
    let splitter = MarkdownSplitter::new();
    let split = splitter.split_file(path)?;

    for warning in &split.warnings {
        tracing::warn!(document = %path.display(), "{warning}");
    }

    let outline = build_outline(&split.sections);
    if outline.is_empty() {
        println!("{}", style("No headers found").yellow());
        return Ok(());
    }

    println!(
        "{} {}",
        style("Outline of").bold(),
        style(path.display()).cyan()
    );
    println!();
    println!("{}", render_outline(&outline));

    Ok(())
}
