//! CLI for xkcd-wikitext - explainxkcd wikitext to HTML converter

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;
use xkcd_wikitext::explain::DEFAULT_WIKI_URL;
use xkcd_wikitext::{
    extract_explanation_section, ExplainClient, ExplainClientOptions, WikiTextToHtml,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a wikitext file to HTML
    Parse {
        /// Input wikitext file (reads stdin if not specified)
        input: Option<PathBuf>,

        /// Output HTML file path (optional, prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Document id (comic number) of the input
        #[arg(long, default_value_t = 0)]
        id: u32,
    },
    /// Fetch and convert the explanation of a comic
    Explain {
        /// Comic number
        comic: u32,

        /// Output HTML file path (optional, prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Wiki root URL
        #[arg(long, default_value = DEFAULT_WIKI_URL)]
        base_url: Url,

        /// Request timeout in seconds (0 disables it)
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,
    },
    /// Print the raw explanation wikitext of a MediaWiki API payload
    Section {
        /// Input JSON file (reads stdin if not specified)
        input: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> xkcd_wikitext::Result<()> {
    match cli.command {
        Commands::Parse { input, output, id } => {
            let wikitext = read_input(input.as_ref())?;
            let html = WikiTextToHtml::with_defaults().convert(&wikitext, id);
            write_output(output.as_ref(), &html)
        }
        Commands::Explain {
            comic,
            output,
            base_url,
            timeout_secs,
        } => {
            let client = ExplainClient::new(ExplainClientOptions {
                base_url,
                timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
                ..Default::default()
            })?;
            let html = client.get_explanation(comic).await;
            write_output(output.as_ref(), &html)
        }
        Commands::Section { input } => {
            let json = read_input(input.as_ref())?;
            let response: xkcd_wikitext::explain::MediaWikiResponse = serde_json::from_str(&json)?;
            let section = response
                .page_content()
                .and_then(extract_explanation_section)
                .ok_or(xkcd_wikitext::Error::SectionNotFound)?;
            println!("{}", section);
            Ok(())
        }
    }
}

fn read_input(path: Option<&PathBuf>) -> xkcd_wikitext::Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn write_output(path: Option<&PathBuf>, html: &str) -> xkcd_wikitext::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, html)?;
            println!("Successfully converted to {:?}", path);
        }
        None => println!("{}", html),
    }
    Ok(())
}
