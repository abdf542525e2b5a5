use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use deezer_catalog::{
    resolve, Album, Artist, CatalogRecord, Contributor, LoadOutcome, LoadResult, RequestKind,
    Track,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "catalog-cli")]
#[command(about = "Validate Deezer catalog payloads", long_about = None)]
struct Cli {
    /// Log filter directive (falls back to RUST_LOG, then "warn")
    #[arg(long, env = "CATALOG_LOG")]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a payload as a record and print its canonical JSON
    Parse {
        /// Record kind
        kind: RecordKind,

        /// JSON file to read (stdin when omitted)
        file: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Classify a fetched API response
    Resolve {
        /// What the response was fetched for
        kind: ContentType,

        /// JSON file to read (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Check a load outcome value
    Outcome {
        /// One of track, playlist, search, empty, error
        value: String,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum RecordKind {
    Track,
    Album,
    Artist,
    Contributor,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ContentType {
    Track,
    Album,
    Playlist,
    Search,
}

impl From<ContentType> for RequestKind {
    fn from(t: ContentType) -> Self {
        match t {
            ContentType::Track => RequestKind::Track,
            ContentType::Album => RequestKind::Album,
            ContentType::Playlist => RequestKind::Playlist,
            ContentType::Search => RequestKind::Search,
        }
    }
}

fn init_logging(directive: Option<&str>) {
    let filter = directive
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(file: Option<&PathBuf>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn canonical<T: CatalogRecord + Serialize>(
    text: &str,
    pretty: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let record = T::from_json_str(text)?;
    debug!("Parsed {}", T::KIND);
    let out = if pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    Ok(out)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Commands::Parse { kind, file, pretty } => {
            let text = read_input(file.as_ref())?;
            let out = match kind {
                RecordKind::Track => canonical::<Track>(&text, *pretty)?,
                RecordKind::Album => canonical::<Album>(&text, *pretty)?,
                RecordKind::Artist => canonical::<Artist>(&text, *pretty)?,
                RecordKind::Contributor => canonical::<Contributor>(&text, *pretty)?,
            };
            println!("{}", out);
        }
        Commands::Resolve { kind, file } => {
            let text = read_input(file.as_ref())?;
            let json: serde_json::Value = serde_json::from_str(&text)?;
            let result = resolve((*kind).into(), &json)?;

            println!("{}", result.outcome());
            match &result {
                LoadResult::Error(failure) => {
                    println!("   {}: {}", failure.kind, failure.message);
                }
                _ => {
                    for (i, track) in result.tracks().iter().enumerate() {
                        println!(
                            "{}. {} - {} (ID: {}, {})",
                            i + 1,
                            track.contributors_string(", "),
                            track.title,
                            track.id,
                            track.duration_formatted()
                        );
                    }
                }
            }
        }
        Commands::Outcome { value } => {
            let outcome: LoadOutcome = value.parse()?;
            println!("{}", outcome);
        }
    }

    Ok(())
}
