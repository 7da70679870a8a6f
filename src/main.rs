//! query-suggest CLI
//!
//! Drives one binding against a live suggestion backend. Each line read
//! from stdin is typed into the binding's input, and the panel is printed
//! once the request settles.

use clap::Parser;
use query_suggest::{
    HttpSuggestionSource, InputOutcome, InputSurface, MemoryDocument, Page, SuggestConfig,
    SuggestionItem,
};
use serde::Serialize;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "query-suggest")]
#[command(about = "Query a suggestion backend the way the search page does")]
#[command(version)]
struct Cli {
    /// Configuration file (default: .query-suggest.yaml in the current directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL, overrides the configuration
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Binding to drive
    #[arg(short, long, default_value = "home")]
    binding: String,

    /// Output format
    #[arg(short, long, default_value = "plain")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Plain,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "plain" | "text" => Ok(OutputFormat::Plain),
            _ => Err(format!("Unknown format: {}. Use 'json' or 'plain'", s)),
        }
    }
}

/// Panel after one line of input
#[derive(Serialize)]
struct Report<'a> {
    query: &'a str,
    outcome: String,
    visible: bool,
    items: Vec<&'a str>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let format = cli.format;

    let mut config = match &cli.config {
        Some(path) => SuggestConfig::load(path)?,
        None => SuggestConfig::load_default(Path::new(".")),
    };
    if let Some(endpoint) = cli.endpoint {
        config.endpoint.base_url = endpoint;
    }

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.engine.log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let binding = config
        .binding(&cli.binding)
        .ok_or_else(|| format!("Unknown binding: {}", cli.binding))?;

    let mut document = MemoryDocument::new();
    let input = document.add_input(&binding.input);
    let panel = document.add_panel(&binding.panel);

    let source = Rc::new(HttpSuggestionSource::from_settings(&config.endpoint)?);
    let page = Page::from_config(&document, &config, source);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        for line in io::stdin().lock().lines() {
            let line = line?;
            input.set_value(&line);

            let Some(pending) = page.input(&binding.input) else {
                continue;
            };
            let outcome = pending.await;
            let items = panel.items();
            print_report(&line, &outcome, panel.is_visible(), &items, format)?;
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    })
}

fn print_report(
    query: &str,
    outcome: &InputOutcome,
    visible: bool,
    items: &[SuggestionItem],
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => {
            let report = Report {
                query,
                outcome: describe(outcome),
                visible,
                items: items.iter().map(|i| i.text.as_str()).collect(),
            };
            println!("{}", serde_json::to_string(&report)?);
        }
        OutputFormat::Plain => {
            println!("> {}  [{}]", query, describe(outcome));
            if visible {
                for item in items {
                    println!("  {}", item.text);
                }
            }
        }
    }
    Ok(())
}

fn describe(outcome: &InputOutcome) -> String {
    match outcome {
        InputOutcome::Cleared => "cleared".to_string(),
        InputOutcome::Rendered(n) => format!("{} suggestion(s)", n),
        InputOutcome::NoCandidates => "no suggestions".to_string(),
        InputOutcome::Failed(e) => format!("failed: {}", e),
        InputOutcome::Superseded => "superseded".to_string(),
    }
}
