//! Command-line interface for the harvester.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use textwrap::{fill, Options};

use crate::config::{CLAUSE_EXCERPT_CHARS, DEFAULT_SNAPSHOT_PATH, DEFAULT_TOP_K, TEXT_WRAP_WIDTH};
use crate::error::{HarvesterError, Result};
use crate::harvester::{harvest_files, list_source_files};
use crate::search::{excerpt, find_relevant_clauses};
use crate::snapshot::save_snapshot;
use crate::store::Corpus;
use crate::types::CorpusStats;

/// Clauses shown under each search hit.
const CLAUSES_PER_RESULT: usize = 3;

/// Regulation Harvester - Parse HWPML regulation exports into a searchable corpus.
#[derive(Parser)]
#[command(name = "regulation-harvester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse every HWPML file in a directory and write the corpus snapshot.
    Ingest {
        /// Directory containing the exported `.xml` files
        dir: PathBuf,

        /// Snapshot path (default: data/regulations.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Search the corpus by keywords.
    Search {
        /// Query words, separated by spaces
        query: String,

        /// Snapshot path (default: data/regulations.json)
        #[arg(short, long)]
        snapshot: Option<PathBuf>,

        /// Maximum number of regulations to list
        #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,
    },

    /// Print corpus totals.
    Stats {
        /// Snapshot path (default: data/regulations.json)
        #[arg(short, long)]
        snapshot: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ingest { dir, output } => ingest_command(&dir, output.as_deref()),
        Commands::Search {
            query,
            snapshot,
            top_k,
        } => search_command(&query, snapshot.as_deref(), top_k),
        Commands::Stats { snapshot } => stats_command(snapshot.as_deref()),
    }
}

fn snapshot_path(snapshot: Option<&Path>) -> PathBuf {
    snapshot.map_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_PATH), Path::to_path_buf)
}

fn print_stats(stats: &CorpusStats) {
    println!("  Regulations: {}", style(stats.regulations).green());
    println!("  Clauses: {}", stats.clauses);
    println!("  Characters: {}", stats.chars);
}

/// Execute the ingest command.
fn ingest_command(dir: &Path, output: Option<&Path>) -> Result<()> {
    if !dir.is_dir() {
        return Err(HarvesterError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Corpus directory does not exist: {}", dir.display()),
        )));
    }

    let files = list_source_files(dir)?;
    if files.is_empty() {
        return Err(HarvesterError::EmptyCorpus(dir.to_path_buf()));
    }

    println!(
        "{} {} files from {}",
        style("Ingesting").bold(),
        style(files.len()).cyan(),
        style(dir.display()).green()
    );
    println!();

    let pb = ProgressBar::new(files.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.green} {pos}/{len} {msg}")
            .expect("valid template"),
    );

    let report = harvest_files(&files, |progress| {
        pb.set_position(progress.position as u64);
        pb.set_message(progress.source_name.to_string());
    });
    pb.finish_and_clear();

    for failure in &report.failures {
        println!(
            "  {} {}: {}",
            style("Skipped").yellow().bold(),
            failure.source_name,
            failure.reason
        );
    }

    if report.regulations.is_empty() {
        return Err(HarvesterError::EmptyCorpus(dir.to_path_buf()));
    }

    print_stats(&report.stats());
    if !report.failures.is_empty() {
        println!("  Failures: {}", style(report.failures.len()).yellow().bold());
    }

    let path = snapshot_path(output);
    save_snapshot(&report.regulations, &path)?;

    println!();
    println!("{} {}", style("Saved to:").green().bold(), path.display());

    Ok(())
}

/// Execute the search command.
fn search_command(query: &str, snapshot: Option<&Path>, top_k: usize) -> Result<()> {
    let corpus = Corpus::load(&snapshot_path(snapshot))?;
    let results = corpus.search(query, top_k);

    if results.is_empty() {
        println!("No regulations match {}", style(query).cyan());
        return Ok(());
    }

    let indent = "      ";
    let wrap = Options::new(TEXT_WRAP_WIDTH)
        .initial_indent(indent)
        .subsequent_indent(indent);

    for (rank, result) in results.iter().enumerate() {
        let regulation = result.regulation;
        println!(
            "{:>2}. {} {} {}",
            rank + 1,
            style(&regulation.id).dim(),
            style(&regulation.display_name).green().bold(),
            style(format!("(score {})", result.score)).cyan()
        );

        for clause_match in find_relevant_clauses(regulation, query)
            .iter()
            .take(CLAUSES_PER_RESULT)
        {
            println!("    {}", style(clause_match.clause.heading()).bold());
            let text = excerpt(&clause_match.clause.content, CLAUSE_EXCERPT_CHARS);
            println!("{}", fill(&text.replace('\n', " "), &wrap));
        }
    }

    Ok(())
}

/// Execute the stats command.
fn stats_command(snapshot: Option<&Path>) -> Result<()> {
    let path = snapshot_path(snapshot);
    let corpus = Corpus::load(&path)?;

    println!("{} {}", style("Corpus").bold(), path.display());
    print_stats(&corpus.stats());

    let without_clauses = corpus
        .regulations()
        .iter()
        .filter(|r| !r.has_clauses())
        .count();
    if without_clauses > 0 {
        println!(
            "  Without clauses: {}",
            style(without_clauses).yellow()
        );
    }

    Ok(())
}
