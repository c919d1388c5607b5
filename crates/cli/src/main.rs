use crate::{config::CliConfig, error::CliError};
use clap::Parser;
use commands::Commands;
use model::{
    core::value::Value,
    criteria::{Criteria, document::CriteriaDocument},
};
use query_builder::{build::select::SelectBuilder, dialect::from_name};
use tracing::info;
use tracing_subscriber::EnvFilter;
use translator::{CriteriaTranslator, translate};

mod commands;
mod config;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "criteria-sql",
    version = "0.1.0",
    about = "Translate query criteria into parameterized SQL"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Initialize logger; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Translate {
            criteria,
            config,
            json,
        } => {
            let config = CliConfig::load(config.as_deref())?;
            let criteria = load_criteria(&criteria)?;

            let translation = translate(&criteria, &config.fields);
            output::print_translation(&translation, json)?;
        }
        Commands::Render {
            criteria,
            config,
            table,
            dialect,
            json,
        } => {
            let mut config = CliConfig::load(config.as_deref())?;
            config.override_with(table, dialect);
            let criteria = load_criteria(&criteria)?;

            let (sql, params) = render_query(&config, &criteria)?;
            output::print_query(&sql, &params, json)?;
        }
    }

    Ok(())
}

fn load_criteria(path: &str) -> Result<Criteria, CliError> {
    info!("Loading criteria from {}", path);
    let source = std::fs::read_to_string(path)?;
    let document: CriteriaDocument = serde_json::from_str(&source)?;
    Ok(document.into_criteria()?)
}

/// Builds the SELECT described by `config` and `criteria` and renders it for
/// the configured dialect.
fn render_query(
    config: &CliConfig,
    criteria: &Criteria,
) -> Result<(String, Vec<Value>), CliError> {
    let name = config.dialect_name();
    let dialect = from_name(name)
        .ok_or_else(|| CliError::UnsupportedDialect(name.to_string()))?;

    let mut builder = SelectBuilder::new()
        .select(config.select_list())
        .from(config.table_ref()?, None);
    CriteriaTranslator::new(&mut builder, &config.fields).execute(criteria);

    info!("Rendering query for {}", dialect.name());
    Ok(builder.build().to_sql(dialect.as_ref())?)
}
