//! `dockhand container-repos` — Repos packaged into one container.

use clap::Args;
use dockhand_specs::source::YamlSource;

/// Arguments for the `container-repos` command.
#[derive(Args, Debug)]
pub struct ContainerReposArgs {
    /// Name of the app or lib to inspect.
    pub name: String,
}

/// Executes the `container-repos` command.
///
/// Resolves against the expanded-unfiltered graph so components
/// outside the active bundle set can be inspected too.
///
/// # Errors
///
/// Returns an error if the name is undefined or expansion fails.
pub fn execute(args: &ContainerReposArgs, source: &YamlSource) -> anyhow::Result<()> {
    let graph = dockhand_assembler::cache::expanded_libs_specs(source)?;
    let repos = dockhand_assembler::repos::same_container_repos(&args.name, &graph)?;

    for repo in &repos {
        println!("{repo}");
    }

    Ok(())
}
