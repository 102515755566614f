//! Route table inspector.
//!
//! Loads a mapping config and a handler manifest, resolves every handler and
//! action, and prints the resulting dispatch table.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use convention_routes::config::validation::validate_config;
use convention_routes::config::{
    load_config, load_manifest, CasingStyle, ConfigError, MappingConfig,
};
use convention_routes::observability::init_logging;
use convention_routes::routing::{MappingResolver, Registration, RouteTable};

#[derive(Parser)]
#[command(name = "convention-routes")]
#[command(about = "Resolve conventional routes for a handler manifest", long_about = None)]
struct Cli {
    /// Handler manifest (TOML).
    #[arg(short, long)]
    manifest: PathBuf,

    /// Mapping configuration (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Override the handler name suffix.
    #[arg(long)]
    suffix: Option<String>,

    /// Use kebab-case path segments.
    #[arg(long)]
    kebab: bool,

    /// Map actions that carry an explicit declaration.
    #[arg(long)]
    map_declared: bool,

    /// Base module for hierarchical grouping.
    #[arg(long)]
    base_module: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => MappingConfig::default(),
    };
    if let Some(suffix) = cli.suffix {
        config.handler_suffix = suffix;
    }
    if cli.kebab {
        config.casing = CasingStyle::Kebab;
    }
    if cli.map_declared {
        config.map_declared_actions = true;
    }
    if let Some(base) = cli.base_module {
        config.base_module = Some(base);
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    init_logging(&config.log_level);

    tracing::info!(
        suffix = %config.handler_suffix,
        casing = ?config.casing,
        map_declared_actions = config.map_declared_actions,
        base_module = ?config.base_module,
        "Configuration loaded"
    );

    let handlers = load_manifest(&cli.manifest)?.into_candidates();
    let resolver = MappingResolver::new(&config);
    let table = RouteTable::build(&resolver, &handlers)?;

    match cli.format {
        Format::Text => {
            for entry in table.entries() {
                println!("{}", render(entry));
            }
        }
        Format::Json => {
            let entries: Vec<&Registration> = table.entries().collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}

fn render(entry: &Registration) -> String {
    let pattern = if entry.pattern.is_empty() { "\"\"" } else { entry.pattern.as_str() };
    match &entry.conditions.methods {
        Some(methods) => {
            let methods: Vec<String> = methods.iter().map(ToString::to_string).collect();
            format!("{pattern} [{}] -> {}", methods.join(","), entry.target())
        }
        None => format!("{pattern} -> {}", entry.target()),
    }
}
