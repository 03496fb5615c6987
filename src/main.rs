//! Método CLI
//!
//! Command-line interface for Método:
//! - Render and save analysis drafts
//! - Browse, search and archive saved entries
//! - Check that the entry-storage API is up
//! - Ask the writing assistant
//! - Print the technique catalog and a default config

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use metodo::analysis::{render_content, Analysis};
use metodo::client::{AgentClient, Entry, EntryCard, EntryClient, EntryFilter, EntryListing, NewEntry};
use metodo::config::{generate_default_config, Config, LoggingConfig};
use metodo::form::TechniqueField;
use metodo::session::{load_listing, save_notice, submit_analysis, Notice};

#[derive(Parser)]
#[command(name = "metodo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Comedy-writing analysis tool")]
#[command(long_about = "Método breaks jokes into premise, rupture and punchline.\nDrafts are TOML or JSON files; saved analyses live in the entry-storage API.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Entry-storage API: local, production, or a base URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: platform config dir, then ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the Markdown content a draft would be saved with
    Render {
        /// Draft file (.toml or .json)
        draft: PathBuf,
    },

    /// Save a draft as an analysis entry
    Save {
        /// Draft file (.toml or .json)
        draft: PathBuf,
    },

    /// List saved entries
    List {
        /// Entry type (default: Análisis)
        #[arg(short, long)]
        tipo: Option<String>,
        /// List every type
        #[arg(long, conflicts_with = "tipo")]
        all: bool,
    },

    /// Show one entry with its content
    Show {
        id: String,
    },

    /// Search entries
    Search {
        query: String,
    },

    /// Archive an entry
    Archive {
        id: String,
    },

    /// Check that the entry-storage API answers
    Health,

    /// Print the technique catalog
    Techniques,

    /// Ask the writing assistant
    Agent {
        #[command(subcommand)]
        action: AgentAction,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum AgentAction {
    /// Suggest dissection characteristics for a concept
    Develop { concepto: String },
    /// Suggest absurd realities for a mechanical element
    Absurd { elemento_mecanico: String },
    /// Analyze a concept
    Analyze { concepto: String },
    /// Free-form chat
    Chat {
        message: String,
        /// Let the assistant read saved entries
        #[arg(long)]
        library: bool,
    },
    /// Examples for a technique or concept
    Examples {
        #[arg(short, long)]
        tecnica: Option<String>,
        #[arg(short, long)]
        concepto: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };
    init_logging(&config.logging);

    if let Err(e) = run(cli, config).await {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_with_env(path).context("loading config"),
        None => Ok(Config::load_default()),
    }
}

/// Logs go to stderr so command output stays pipeable
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("metodo={}", logging.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let endpoint = config.api.endpoint_with_override(cli.api_url.as_deref());
    let timeout = config.api.request_timeout();
    tracing::debug!(%endpoint, ?timeout, "Resolved API endpoint");

    match cli.command {
        Commands::Render { draft } => {
            let analysis = read_draft(&draft)?;
            match cli.format {
                OutputFormat::Json => {
                    let entry = NewEntry::from_analysis(&analysis);
                    println!("{}", serde_json::to_string_pretty(&entry)?);
                }
                OutputFormat::Table => print!("{}", render_content(&analysis)),
            }
        }

        Commands::Save { draft } => {
            let analysis = read_draft(&draft)?;
            let client = EntryClient::new(endpoint, timeout)?;

            let result = submit_analysis(&client, &analysis).await;
            let notice = save_notice(&result);
            println!("{}", notice);
            if notice == Notice::SaveFailed {
                std::process::exit(1);
            }

            // Same refresh the form does after a successful save
            let listing = load_listing(&client).await;
            print_listing(&listing, cli.format)?;
        }

        Commands::List { tipo, all } => {
            let client = EntryClient::new(endpoint, timeout)?;
            let filter = match (tipo, all) {
                (_, true) => EntryFilter::default(),
                (Some(tipo), false) => EntryFilter { tipo: Some(tipo) },
                (None, false) => EntryFilter::analyses(),
            };

            let listing = EntryListing::from_result(client.list_entries(&filter).await);
            print_listing(&listing, cli.format)?;
            if listing == EntryListing::Failed {
                std::process::exit(1);
            }
        }

        Commands::Show { id } => {
            let client = EntryClient::new(endpoint, timeout)?;
            let entry = client.get_entry(&id).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entry)?),
                OutputFormat::Table => print_entry(&entry),
            }
        }

        Commands::Search { query } => {
            let client = EntryClient::new(endpoint, timeout)?;
            let results = client.search(&query).await?;
            let listing = EntryListing::from_result(Ok(results));
            print_listing(&listing, cli.format)?;
        }

        Commands::Archive { id } => {
            let client = EntryClient::new(endpoint, timeout)?;
            let archived = client.archive_entry(&id).await?;
            if !archived.archived {
                bail!("entry {} was not archived", archived.id);
            }
            println!("Archived {}", archived.id);
        }

        Commands::Health => {
            let client = EntryClient::new(endpoint, timeout)?;
            let status = client.health_check().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&status)?),
                OutputFormat::Table => {
                    println!("API:     {}", client.endpoint());
                    println!("Status:  {}", status.status);
                    if let Some(service) = &status.service {
                        println!("Service: {}", service);
                    }
                    if let Some(version) = &status.version {
                        println!("Version: {}", version);
                    }
                }
            }
        }

        Commands::Techniques => print_techniques(),

        Commands::Agent { action } => {
            let agent = AgentClient::new(endpoint, timeout)?;
            let reply = match action {
                AgentAction::Develop { concepto } => agent.develop(&concepto).await?,
                AgentAction::Absurd { elemento_mecanico } => agent.absurd(&elemento_mecanico).await?,
                AgentAction::Analyze { concepto } => agent.analyze(&concepto).await?,
                AgentAction::Chat { message, library } => agent.chat(&message, library).await?,
                AgentAction::Examples { tecnica, concepto } => {
                    agent.examples(tecnica.as_deref(), concepto.as_deref()).await?
                }
            };
            println!("{}", reply);
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// Read an analysis draft; `.json` is JSON, anything else is TOML
fn read_draft(path: &Path) -> anyhow::Result<Analysis> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading draft {:?}", path))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let analysis = if is_json {
        serde_json::from_str(&content).with_context(|| format!("parsing JSON draft {:?}", path))?
    } else {
        toml::from_str(&content).with_context(|| format!("parsing TOML draft {:?}", path))?
    };
    Ok(analysis)
}

fn print_listing(listing: &EntryListing, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        let cards: Vec<serde_json::Value> = listing.cards().iter().map(card_json).collect();
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    if let Some(placeholder) = listing.placeholder() {
        println!("{}", placeholder);
        return Ok(());
    }

    println!("{:<36} {:<12} {:<12} {}", "ID", "Fecha", "Tipo", "Título");
    println!("{}", "-".repeat(90));
    for card in listing.cards() {
        println!(
            "{:<36} {:<12} {:<12} {}",
            card.id, card.date, card.kind, card.title
        );
        if card.has_tags() {
            println!("{:<36} [{}]", "", card.tags.join(", "));
        }
    }
    Ok(())
}

fn card_json(card: &EntryCard) -> serde_json::Value {
    serde_json::json!({
        "id": card.id,
        "titulo": card.title,
        "tipo": card.kind,
        "fecha": card.date,
        "tags": card.tags,
    })
}

fn print_entry(entry: &Entry) {
    let card = EntryCard::from_entry(entry);

    println!("{}", card.title);
    println!("{} · {}", card.kind, card.date);
    if card.has_tags() {
        println!("Tags: {}", card.tags.join(", "));
    }
    if let Some(url) = &entry.url {
        println!("{}", url);
    }
    println!();
    println!("{}", entry.contenido.as_deref().unwrap_or_default());
}

fn print_techniques() {
    for field in TechniqueField::ALL {
        println!("{}", field.label());
        for technique in field.catalog() {
            println!("  {:<20} {:<20} {}", technique.slug, technique.name(), technique.description);
        }
        println!();
    }
}
