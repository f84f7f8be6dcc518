//! CLI command definitions and dispatch.

pub mod container_repos;
pub mod order;
pub mod repos;
pub mod resolve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dockhand_common::config::DockhandConfig;
use dockhand_specs::source::YamlSource;

/// dockhand — declarative dev-environment specification resolver.
#[derive(Parser, Debug)]
#[command(name = "dockhand", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Path to the specification document.
    #[arg(long, global = true, default_value = dockhand_common::constants::DEFAULT_SPECS_FILE)]
    pub specs: PathBuf,

    /// Path to the configuration file. Defaults apply when omitted.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Activate these bundles instead of the configured list.
    #[arg(long, global = true, value_delimiter = ',')]
    pub bundles: Vec<String>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble the active specification graph and print a summary.
    Resolve(resolve::ResolveArgs),
    /// Print the surviving apps in deployment order.
    Order(order::OrderArgs),
    /// List the source repositories the specs reference.
    Repos(repos::ReposArgs),
    /// List the repos packaged into the same container as an app or lib.
    ContainerRepos(container_repos::ContainerReposArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if loading, assembly, or the command itself fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let source = load_source(&cli.specs)?;

    match cli.command {
        Command::Resolve(args) => resolve::execute(&args, &source, &config),
        Command::Order(args) => order::execute(&args, &source, &config),
        Command::Repos(args) => repos::execute(&args, &source, &config),
        Command::ContainerRepos(args) => container_repos::execute(&args, &source),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<DockhandConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => DockhandConfig::load(path)
            .map_err(|e| anyhow::anyhow!("cannot load configuration: {e}"))?,
        None => DockhandConfig::default(),
    };
    if !cli.bundles.is_empty() {
        config.bundles.clone_from(&cli.bundles);
    }
    Ok(config)
}

fn load_source(path: &std::path::Path) -> anyhow::Result<YamlSource> {
    tracing::info!(path = %path.display(), "loading specification document");
    let document = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read specs at {}: {e}", path.display()))?;
    Ok(YamlSource::new(document))
}
