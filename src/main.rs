use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nutrithali::cli::{PlanArgs, list_catalog, load_catalog, show_plan};
use nutrithali::config::{Config, OutputFormat};

/// nutrithali - Personalized Indian meal plans
#[derive(Parser)]
#[command(name = "nutrithali")]
#[command(about = "Weekly meal plans and nutrition targets from an onboarding profile", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// JSON menu to plan from instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the meal catalog
    Catalog {
        /// Output format (overrides config file)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Build the weekly plan and today's dashboard
    Plan(PlanArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    nutrithali::observability::init_observability(
        "nutrithali",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let catalog_path = cli.catalog.or_else(|| config.catalog.path.clone());

    match cli.command {
        Commands::Catalog { format } => catalog_command(config, catalog_path, format),
        Commands::Plan(args) => plan_command(config, catalog_path, args),
    }
}

#[tracing::instrument(skip(config))]
fn catalog_command(
    config: Config,
    catalog_path: Option<String>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;
    let mut stdout = std::io::stdout().lock();

    list_catalog(&catalog, format.unwrap_or(config.output.format), &mut stdout)?;
    stdout.flush()?;

    Ok(())
}

#[tracing::instrument(skip(config))]
fn plan_command(config: Config, catalog_path: Option<String>, args: PlanArgs) -> Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;
    let mut stdout = std::io::stdout().lock();

    show_plan(&config, &catalog, &args, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}
