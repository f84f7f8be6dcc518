//! `dockhand order` — Print the surviving apps in deployment order.

use clap::Args;
use dockhand_common::config::DockhandConfig;
use dockhand_specs::source::YamlSource;

/// Arguments for the `order` command.
#[derive(Args, Debug)]
pub struct OrderArgs {}

/// Executes the `order` command.
///
/// # Errors
///
/// Returns an error if assembly fails or the app relation is cyclic.
pub fn execute(
    _args: &OrderArgs,
    source: &YamlSource,
    config: &DockhandConfig,
) -> anyhow::Result<()> {
    let graph = dockhand_assembler::cache::assembled_specs(source, config)?;
    let order = dockhand_assembler::order::deployment_order(&graph)?;

    for name in &order {
        println!("{name}");
    }
    tracing::debug!(apps = order.len(), "resolved deployment order");

    Ok(())
}
