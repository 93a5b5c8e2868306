//! KEGG Ingest - fetch and parse KEGG flat files

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kegg_common::logging::{init_logging, LogConfig, LogLevel};
use kegg_ingest::{pathways, DescriptionParser, KeggClient, KeggConfig};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "kegg-ingest")]
#[command(author, version, about = "KEGG flat-file ingestion tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch entries from the KEGG REST API and print them as JSON
    Describe {
        /// KEGG identifiers, e.g. hsa:5214
        #[arg(required = true, num_args = 1..)]
        identifiers: Vec<String>,
    },

    /// Fetch the pathway list and print identifier -> name as JSON
    Pathways {
        /// Listing URL (defaults to KEGG_PATHWAYS_URL or the organism list)
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Parse a local flat file and print it as JSON
    ParseFile {
        /// File containing one or more `///`-terminated entries
        path: PathBuf,

        /// Treat the file as a tab-separated pathway listing
        #[arg(long = "pathways")]
        pathway_listing: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };

    // Environment variables take precedence over flags
    let log_config = LogConfig::builder()
        .level(log_level)
        .log_file_prefix("kegg-ingest")
        .build()
        .merge_env()?;

    let _guard = init_logging(&log_config)?;

    match cli.command {
        Command::Describe { identifiers } => {
            let client = KeggClient::new(KeggConfig::from_env()?)?;
            let ids: Vec<&str> = identifiers.iter().map(String::as_str).collect();

            if let [identifier] = ids.as_slice() {
                print_json(&client.fetch_description(identifier).await?)?;
            } else {
                print_json(&client.fetch_descriptions(&ids).await?)?;
            }
        },
        Command::Pathways { url } => {
            let client = KeggClient::new(KeggConfig::from_env()?)?;
            let table = client.fetch_pathway_table(url.as_deref()).await?;
            print_json(&table)?;
        },
        Command::ParseFile {
            path,
            pathway_listing,
        } => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open {}", path.display()))?;

            if pathway_listing {
                let table = pathways::load_reader(file)?;
                info!("Loaded {} pathway names from {}", table.len(), path.display());
                print_json(&table)?;
            } else {
                let entries = DescriptionParser::new().parse_entries_reader(BufReader::new(file))?;
                info!("Parsed {} entries from {}", entries.len(), path.display());
                print_json(&entries)?;
            }
        },
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
