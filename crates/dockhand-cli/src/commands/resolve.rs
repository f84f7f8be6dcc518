//! `dockhand resolve` — Assemble the active specification graph.

use clap::Args;
use dockhand_common::config::DockhandConfig;
use dockhand_specs::source::YamlSource;

use crate::output;

/// Arguments for the `resolve` command.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Emit the assembled graph as JSON instead of a summary.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `resolve` command.
///
/// # Errors
///
/// Returns an error if loading or assembly fails.
pub fn execute(
    args: &ResolveArgs,
    source: &YamlSource,
    config: &DockhandConfig,
) -> anyhow::Result<()> {
    let graph = dockhand_assembler::cache::assembled_specs(source, config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&*graph)?);
        return Ok(());
    }

    println!("Active specification graph");
    println!();
    println!("  bundles:  {}", output::format_names(graph.bundles.keys()));
    println!("  apps:     {}", output::format_names(graph.apps.keys()));
    println!("  libs:     {}", output::format_names(graph.libs.keys()));
    println!("  services: {}", output::format_names(graph.services.keys()));

    if !graph.assets.is_empty() {
        println!();
        println!("  Assets:");
        for (name, asset) in &graph.assets {
            println!(
                "    {name}: used by {}; required by {}",
                output::format_names(asset.used_by.iter()),
                output::format_names(asset.required_by.iter())
            );
        }
    }

    Ok(())
}
