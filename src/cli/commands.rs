//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::application::services::LeafEntry;
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::category::SINGULARS;
use crate::domain::{field_path, CategoryLabels, EntryKind, DEFAULT_CATEGORY};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Execute the parsed command line.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, see --help".to_string(),
        ));
    };

    if let Commands::Completion { shell } = command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let project_dir = resolve_project_dir(cli.project_dir.as_deref())?;
    let settings = Settings::load(Some(&project_dir))?;
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);

    match command {
        Commands::Leaves { file, paths } => cmd_leaves(&container, file, *paths),
        Commands::Count { file } => cmd_count(&container, file),
        Commands::Tree { file } => cmd_tree(&container, file),
        Commands::Label {
            key,
            plural,
            capitalized,
        } => cmd_label(&container, key.as_deref(), *plural, *capitalized),
        Commands::Fields {
            kind,
            prefix,
            index,
        } => cmd_fields(kind, prefix, *index),
        Commands::SortOptions { file } => cmd_sort_options(&container, file),
        Commands::Config { command } => cmd_config(&container, command, &project_dir),
        Commands::Completion { .. } => Ok(()),
    }
}

fn resolve_project_dir(dir: Option<&Path>) -> CliResult<PathBuf> {
    match dir {
        Some(d) => Ok(d.to_path_buf()),
        None => std::env::current_dir()
            .map_err(|e| InfraError::io("get current directory", e).into()),
    }
}

#[instrument(level = "debug", skip(container))]
fn cmd_leaves(container: &ServiceContainer, file: &Path, paths: bool) -> CliResult<()> {
    let separator = &container.settings.path_separator;
    let show_paths = paths || container.settings.show_paths;
    let leaves = container.documents.leaves(file, separator)?;
    for line in leaf_lines(&leaves, show_paths) {
        output::info(&line);
    }
    Ok(())
}

/// One output line per leaf, optionally prefixed with its path.
pub fn leaf_lines(leaves: &[LeafEntry], show_paths: bool) -> Vec<String> {
    leaves
        .iter()
        .map(|leaf| {
            if show_paths {
                format!("{} = {}", leaf.path, leaf.value)
            } else {
                leaf.value.to_string()
            }
        })
        .collect()
}

#[instrument(level = "debug", skip(container))]
fn cmd_count(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    let summary = container.documents.summarize(file)?;
    output::action("leaves", &summary.leaves);
    output::action("depth", &summary.depth);
    output::action("format", &summary.format);
    Ok(())
}

#[instrument(level = "debug", skip(container))]
fn cmd_tree(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    let node = container.documents.load(file)?;
    let root = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());
    output::info(&node.to_tree(&root));
    Ok(())
}

#[instrument(level = "debug", skip(container))]
fn cmd_label(
    container: &ServiceContainer,
    key: Option<&str>,
    plural: bool,
    capitalized: bool,
) -> CliResult<()> {
    let labels = CategoryLabels::new(key.unwrap_or(&container.settings.category));
    if !labels.is_known() {
        output::warning(&format!(
            "unknown category '{}', using '{}' (known: {})",
            labels.key(),
            DEFAULT_CATEGORY,
            SINGULARS.keys().join(", ")
        ));
    }
    output::info(&label_text(&labels, plural, capitalized));
    Ok(())
}

/// The label form selected by the `--plural` and `--capitalized` flags.
pub fn label_text(labels: &CategoryLabels, plural: bool, capitalized: bool) -> String {
    match (plural, capitalized) {
        (false, false) => labels.singular().to_string(),
        (true, false) => labels.plural().to_string(),
        (false, true) => labels.singular_capitalized(),
        (true, true) => labels.plural_capitalized(),
    }
}

#[instrument(level = "debug")]
fn cmd_fields(kind: &str, prefix: &str, index: usize) -> CliResult<()> {
    let kind: EntryKind = kind.parse().map_err(|e| CliError::InvalidArgs(format!("{e}")))?;
    output::header(kind.add_button_label());
    for line in field_lines(kind, prefix, index) {
        output::detail(&line);
    }
    Ok(())
}

/// `<path>  <label>` per field of `kind`, multi-line fields marked.
pub fn field_lines(kind: EntryKind, prefix: &str, index: usize) -> Vec<String> {
    kind.fields()
        .iter()
        .map(|field| {
            let marker = if field.multiline { " (multi-line)" } else { "" };
            format!(
                "{}  {}{}",
                field_path(prefix, index, field.name),
                field.label,
                marker
            )
        })
        .collect()
}

#[instrument(level = "debug", skip(container))]
fn cmd_sort_options(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    let options = container.documents.load_options(file)?;
    for option in &options {
        output::info(&format!("{}\t{}", option.text, option.value));
    }
    Ok(())
}

fn cmd_config(
    container: &ServiceContainer,
    command: &ConfigCommands,
    project_dir: &Path,
) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&container.settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            let global = global_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(unavailable)".to_string());
            let local = local_config_path(project_dir).display().to_string();
            output::action("global", &global);
            output::action("local", &local);
            Ok(())
        }
        ConfigCommands::Init { global } => {
            let target = if *global {
                global_config_path().ok_or_else(|| {
                    CliError::Usage("cannot determine global config directory".to_string())
                })?
            } else {
                local_config_path(project_dir)
            };
            if container.fs.exists(&target) {
                return Err(CliError::Usage(format!(
                    "config already exists: {}",
                    target.display()
                )));
            }
            container
                .fs
                .ensure_parent(&target)
                .map_err(|e| InfraError::io(format!("create {}", target.display()), e))?;
            container
                .fs
                .write(&target, &Settings::template())
                .map_err(|e| InfraError::io(format!("write {}", target.display()), e))?;
            output::success(&format!("created {}", target.display()));
            Ok(())
        }
    }
}
