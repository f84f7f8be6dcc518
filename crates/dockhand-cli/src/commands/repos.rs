//! `dockhand repos` — List the source repositories the specs reference.

use clap::Args;
use dockhand_common::config::DockhandConfig;
use dockhand_specs::source::YamlSource;

/// Arguments for the `repos` command.
#[derive(Args, Debug)]
pub struct ReposArgs {
    /// Only list repos of specs in the active bundle set.
    #[arg(long)]
    pub active_only: bool,

    /// Leave the specs repository itself out of the listing.
    #[arg(long)]
    pub no_specs_repo: bool,

    /// Show the local checkout path next to each location.
    #[arg(long)]
    pub paths: bool,
}

/// Executes the `repos` command.
///
/// # Errors
///
/// Returns an error if loading or graph resolution fails.
pub fn execute(
    args: &ReposArgs,
    source: &YamlSource,
    config: &DockhandConfig,
) -> anyhow::Result<()> {
    let graph = if args.active_only {
        dockhand_assembler::cache::assembled_specs(source, config)?
    } else {
        dockhand_assembler::cache::expanded_libs_specs(source)?
    };

    let repos = dockhand_assembler::repos::all_repos(&graph, config, !args.no_specs_repo);
    for repo in &repos {
        if args.paths {
            println!("{repo}  {}", repo.local_path(config).display());
        } else {
            println!("{repo}");
        }
    }

    Ok(())
}
