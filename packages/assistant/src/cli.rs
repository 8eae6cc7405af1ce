//! Command-line interface for the assistant.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use console::style;
use regulation_harvester::config::{DEFAULT_SNAPSHOT_PATH, DEFAULT_TOP_K};
use regulation_harvester::store;
use regulation_hwpml::{AmendmentMetadata, Document, Synthesizer};

use crate::client::OpenAiClient;
use crate::config::AssistantConfig;
use crate::error::{AssistantError, Result};
use crate::workflow::{export_amendment, AnalysisOutcome, Assistant, QaSession};

/// Characters of the idea copied into the amendment summary.
const CORE_CONTENT_CHARS: usize = 100;

/// Regulation Assistant - Analyze, amend and discuss regulations with an LLM.
#[derive(Parser)]
#[command(name = "regulation-assistant")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Snapshot path (default: data/regulations.json)
    #[arg(short, long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Document date as YYYY-MM-DD (default: today)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the corpus and write an analysis report.
    Analyze {
        /// Question or keywords
        query: String,

        /// Maximum number of regulations to search
        #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,

        /// Output file (default derived from the title)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Draft an amendment of one regulation.
    Amend {
        /// The change to implement
        idea: String,

        /// Regulation id (e.g., REG-001)
        #[arg(short, long)]
        regulation: String,

        /// JSON file with summary table fields
        #[arg(short, long)]
        metadata: Option<PathBuf>,

        /// Output file (default derived from the title)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Ask questions about one regulation and write the Q&A record.
    Ask {
        /// Regulation id (e.g., REG-001)
        #[arg(short, long)]
        regulation: String,

        /// Questions, asked in order
        #[arg(required = true)]
        questions: Vec<String>,

        /// Output file (default derived from the title)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build an amendment document from revision text without the LLM.
    ExportAmendment {
        /// Document title
        #[arg(short, long)]
        title: String,

        /// Text file with a `| 현행 | 개정안 |` table or marked sections
        #[arg(short, long)]
        input: PathBuf,

        /// JSON file with summary table fields
        #[arg(short, long)]
        metadata: Option<PathBuf>,

        /// Output file (default derived from the title)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut synthesizer = Synthesizer::new();
    if let Some(date) = cli.date {
        synthesizer = synthesizer.with_date(date);
    }
    let snapshot = snapshot_path(cli.snapshot.as_deref());

    match cli.command {
        Commands::Analyze {
            query,
            top_k,
            output,
        } => analyze_command(&snapshot, synthesizer, &query, top_k, output).await,
        Commands::Amend {
            idea,
            regulation,
            metadata,
            output,
        } => {
            amend_command(
                &snapshot,
                synthesizer,
                &idea,
                &regulation,
                metadata.as_deref(),
                output,
            )
            .await
        }
        Commands::Ask {
            regulation,
            questions,
            output,
        } => ask_command(&snapshot, synthesizer, &regulation, &questions, output).await,
        Commands::ExportAmendment {
            title,
            input,
            metadata,
            output,
        } => export_command(&synthesizer, &title, &input, metadata.as_deref(), output).await,
    }
}

fn snapshot_path(snapshot: Option<&Path>) -> PathBuf {
    snapshot.map_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_PATH), Path::to_path_buf)
}

/// `{title}.xml` with whitespace and path separators replaced by `_`.
pub fn default_output_path(title: &str) -> PathBuf {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| {
            if c.is_whitespace() || c == '/' || c == '\\' {
                '_'
            } else {
                c
            }
        })
        .collect();
    PathBuf::from(format!("{stem}.xml"))
}

async fn load_metadata(path: Option<&Path>) -> Result<AmendmentMetadata> {
    match path {
        Some(path) => {
            let json = tokio::fs::read_to_string(path).await?;
            serde_json::from_str(&json).map_err(|e| {
                AssistantError::Config(format!(
                    "invalid metadata file {}: {e}",
                    path.display()
                ))
            })
        }
        None => Ok(AmendmentMetadata::default()),
    }
}

async fn write_document(document: &Document, output: Option<PathBuf>) -> Result<PathBuf> {
    let path = output.unwrap_or_else(|| default_output_path(document.title()));
    let bytes = document.to_xml_bytes()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&path, bytes).await?;

    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        style(path.display()).cyan()
    );
    Ok(path)
}

fn connect() -> Result<(AssistantConfig, OpenAiClient)> {
    let config = AssistantConfig::from_env()?;
    let client = OpenAiClient::new(&config)?;
    Ok((config, client))
}

async fn analyze_command(
    snapshot: &Path,
    synthesizer: Synthesizer,
    query: &str,
    top_k: usize,
    output: Option<PathBuf>,
) -> Result<()> {
    let corpus = store::reload_from(snapshot)?;
    let (config, client) = connect()?;
    let assistant = Assistant::new(&client, &config.institution).with_synthesizer(synthesizer);

    match assistant.analyze(&corpus, query, top_k).await? {
        AnalysisOutcome::NoMatches => {
            println!("{}", style("No matching regulations found.").yellow());
        }
        AnalysisOutcome::Report { analysis, document } => {
            println!("{analysis}");
            println!();
            write_document(&document, output).await?;
        }
    }
    Ok(())
}

async fn amend_command(
    snapshot: &Path,
    synthesizer: Synthesizer,
    idea: &str,
    regulation_id: &str,
    metadata: Option<&Path>,
    output: Option<PathBuf>,
) -> Result<()> {
    let corpus = store::reload_from(snapshot)?;
    let regulation = corpus.get(regulation_id)?;

    let mut metadata = load_metadata(metadata).await?;
    metadata
        .core_content
        .get_or_insert_with(|| idea.chars().take(CORE_CONTENT_CHARS).collect());
    metadata
        .related_regs
        .get_or_insert_with(|| regulation.display_name.clone());

    let (config, client) = connect()?;
    let assistant = Assistant::new(&client, &config.institution).with_synthesizer(synthesizer);

    println!(
        "{} {}",
        style("Drafting amendment of").bold(),
        style(&regulation.display_name).cyan()
    );
    let outcome = assistant.draft_amendment(regulation, idea, &metadata).await?;

    println!("{}", outcome.draft);
    println!();
    println!(
        "{} {}",
        style("Comparison rows:").bold(),
        outcome.pairs.len()
    );
    write_document(&outcome.document, output).await?;
    Ok(())
}

async fn ask_command(
    snapshot: &Path,
    synthesizer: Synthesizer,
    regulation_id: &str,
    questions: &[String],
    output: Option<PathBuf>,
) -> Result<()> {
    let corpus = store::reload_from(snapshot)?;
    let regulation = corpus.get(regulation_id)?;

    let (config, client) = connect()?;
    let assistant = Assistant::new(&client, &config.institution).with_synthesizer(synthesizer);
    let mut session = QaSession::new(regulation);

    println!(
        "{} ({} clauses, {} chars)",
        style(&regulation.display_name).bold(),
        regulation.clause_count,
        regulation.char_count
    );
    for (number, question) in questions.iter().enumerate() {
        println!();
        println!("{}", style(format!("Q{}. {question}", number + 1)).cyan().bold());
        match assistant.ask(&mut session, question).await {
            Ok(answer) => println!("{answer}"),
            Err(e) => println!("{} {e}", style("Failed:").red()),
        }
    }
    println!();

    write_document(&assistant.transcript(&session), output).await?;
    Ok(())
}

async fn export_command(
    synthesizer: &Synthesizer,
    title: &str,
    input: &Path,
    metadata: Option<&Path>,
    output: Option<PathBuf>,
) -> Result<()> {
    let text = tokio::fs::read_to_string(input).await?;
    let metadata = load_metadata(metadata).await?;
    let document = export_amendment(synthesizer, title, &text, &metadata)?;
    write_document(&document, output).await?;
    Ok(())
}
