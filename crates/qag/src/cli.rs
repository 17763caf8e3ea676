//! `qag` command line
//!
//! Every command except `providers` loads configuration, installs logging
//! and builds the application context. Results are printed as JSON on
//! stdout; logs go to stderr.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use qag_application::ports::registry::{
    list_embedding_providers, list_generative_providers, list_vector_store_providers,
};
use qag_application::ports::services::{
    DocumentIngestionServiceInterface, RawDocument, ScriptServiceInterface,
    TestCaseServiceInterface,
};
use qag_domain::entities::TestCase;
use qag_domain::value_objects::SessionId;
use qag_infrastructure::config::ConfigLoader;
use qag_infrastructure::di::{AppContext, init_app};
use qag_infrastructure::logging::init_logging;
use qag_providers::chunking::CHUNKING_STRATEGIES;
use serde_json::json;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Command line interface for the QA grounding engine
#[derive(Parser, Debug)]
#[command(name = "qag")]
#[command(about = "QA grounding engine - grounded test case and Selenium script generation")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// `qag` subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ingest documents (text, json, html) into a session's knowledge base
    Ingest {
        /// Session owning the documents
        #[arg(short, long)]
        session: String,
        /// Files to ingest; the file name becomes the source name
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Generate test cases for a query from the session's evidence
    Generate {
        /// Session to retrieve from
        #[arg(short, long)]
        session: String,
        /// Number of evidence chunks to retrieve
        #[arg(short, long)]
        k: Option<usize>,
        /// What to test
        query: String,
    },
    /// Generate a Selenium script for a test case, grounded in session markup
    Script {
        /// Session whose markup grounds the script
        #[arg(short, long)]
        session: String,
        /// JSON file holding one test case, or `-` for stdin
        #[arg(short, long)]
        test_case: PathBuf,
    },
    /// Show the selector inventory extracted from session markup
    Inventory {
        /// Session to inspect
        #[arg(short, long)]
        session: String,
    },
    /// Drop every record and page of a session
    Reset {
        /// Session to reset
        #[arg(short, long)]
        session: String,
    },
    /// List registered providers and chunking strategies
    Providers,
}

/// Run a parsed command line
pub async fn run(cli: Cli) -> Result<()> {
    if cli.command == Command::Providers {
        return print_json(&providers_listing());
    }

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("loading configuration")?;
    init_logging(&config.logging).context("initializing logging")?;
    let context = init_app(config).context("initializing application")?;

    execute(&context, cli.command).await
}

/// Execute a command against an initialized context
pub async fn execute(context: &AppContext, command: Command) -> Result<()> {
    match command {
        Command::Ingest { session, files } => {
            let session = parse_session(&session)?;
            let uploads = files
                .iter()
                .map(|path| read_upload(path))
                .collect::<Result<Vec<_>>>()?;
            let report = context.ingestion().ingest(uploads, &session).await?;
            print_json(&report)
        }
        Command::Generate { session, k, query } => {
            let session = parse_session(&session)?;
            let k = k.unwrap_or(context.config.retrieval.top_k);
            let outcome = context
                .test_cases()
                .generate_test_cases(&query, &session, k)
                .await?;
            print_json(&outcome)
        }
        Command::Script { session, test_case } => {
            let session = parse_session(&session)?;
            let test_case = read_test_case(&test_case)?;
            let outcome = context.scripts().generate_script(&test_case, &session).await?;
            print_json(&outcome)
        }
        Command::Inventory { session } => {
            let session = parse_session(&session)?;
            match context.scripts().inventory(&session).await? {
                Some(inventory) => print_json(&inventory),
                None => bail!("no page markup has been ingested for session '{session}'"),
            }
        }
        Command::Reset { session } => {
            let session = parse_session(&session)?;
            let removed = context.ingestion().reset_session(&session).await?;
            print_json(&json!({ "session_id": session, "removed": removed }))
        }
        Command::Providers => print_json(&providers_listing()),
    }
}

/// Registered providers grouped by kind
pub fn providers_listing() -> serde_json::Value {
    let entries = |list: Vec<(&'static str, &'static str)>| {
        list.into_iter()
            .map(|(name, description)| json!({ "name": name, "description": description }))
            .collect::<Vec<_>>()
    };
    json!({
        "embedding": entries(list_embedding_providers()),
        "vector_store": entries(list_vector_store_providers()),
        "generative": entries(list_generative_providers()),
        "chunking": CHUNKING_STRATEGIES,
    })
}

fn parse_session(raw: &str) -> Result<SessionId> {
    SessionId::new(raw).with_context(|| format!("invalid session id '{raw}'"))
}

/// Read a file as an upload named after its file name
pub fn read_upload(path: &Path) -> Result<RawDocument> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let source = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
    Ok(RawDocument::from_named_bytes(source, bytes))
}

/// Read one test case from a JSON file, or stdin for `-`
pub fn read_test_case(path: &Path) -> Result<TestCase> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("reading test case from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };
    serde_json::from_str(&raw).context("parsing test case JSON")
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
