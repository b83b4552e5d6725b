//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ForestArgs, InputArgs};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::Settings;
use crate::domain::{to_display_trees, Menus};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage("no command given, see --help".into()));
    };
    if let Commands::Completion { shell } = command {
        generate(*shell, &mut Cli::command(), "menutree", &mut io::stdout());
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref()).map_err(InfraError::from)?;
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);

    match command {
        Commands::Tree {
            input,
            forest,
            json,
        } => cmd_tree(&container, input, forest, *json),
        Commands::Leaves { input, forest } => cmd_leaves(&container, input, forest),
        Commands::Ancestors { input } => cmd_ancestors(&container, input),
        Commands::Completion { .. } => Ok(()),
    }
}

fn load(container: &ServiceContainer, input: &InputArgs) -> CliResult<Menus> {
    let menus = container
        .menu_service
        .load_filtered(&input.file, &input.to_query())
        .map_err(InfraError::from)?;
    Ok(menus)
}

#[instrument(skip(container))]
fn cmd_tree(
    container: &ServiceContainer,
    input: &InputArgs,
    forest: &ForestArgs,
    json: bool,
) -> CliResult<()> {
    let menus = load(container, input)?;
    let options = forest.apply(container.settings.forest_options());
    let result = container.menu_service.forest_with(&menus, &options);

    if !result.orphans.is_empty() {
        output::warning(&format!(
            "{} record(s) with unresolved parent ({}): {}",
            result.orphans.len(),
            options.orphan_policy,
            result.orphans.join(", ")
        ));
    }

    if json {
        let rendered = serde_json::to_string_pretty(&result.roots).map_err(InfraError::from)?;
        output::info(&rendered);
        return Ok(());
    }

    if result.roots.is_empty() {
        output::warning("no roots");
        return Ok(());
    }
    for tree in to_display_trees(&result.roots) {
        output::info(&tree);
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_leaves(container: &ServiceContainer, input: &InputArgs, forest: &ForestArgs) -> CliResult<()> {
    let menus = load(container, input)?;
    let options = forest.apply(container.settings.forest_options());
    for id in container.menu_service.leaves_with(&menus, &options) {
        output::info(&id);
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_ancestors(container: &ServiceContainer, input: &InputArgs) -> CliResult<()> {
    let menus = load(container, input)?;
    for id in container.menu_service.ancestors(&menus) {
        output::info(&id);
    }
    Ok(())
}
