//! Command dispatch: wires parsed arguments to services

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::presenter::{self, NO_COURSES, NO_MATCHES};
use crate::cli::args::{Cli, Commands, ConfigCommands, StoreCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::{CourseIndex, TreeNodeConvert};
use crate::infrastructure::traits::FileSystem;
use crate::infrastructure::{InfraError, ServiceContainer};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let cwd = std::env::current_dir().map_err(|e| InfraError::io("resolve current directory", e))?;
    let mut settings = Settings::load(Some(cwd.as_path()))?;
    if cli.no_header {
        settings.ingest.skip_header = false;
    }
    let container = ServiceContainer::new(settings);
    let mut stdout = io::stdout().lock();
    execute_with(cli, &container, &cwd, &mut stdout)
}

/// Dispatch with an explicit container and working directory.
///
/// Course data goes to `out`; status and warnings go to stderr.
pub fn execute_with(
    cli: &Cli,
    container: &ServiceContainer,
    cwd: &Path,
    out: &mut dyn Write,
) -> CliResult<()> {
    match &cli.command {
        Some(Commands::List) => {
            let index = load_index(cli, container)?;
            emit(out, &presenter::render_lines(&index.traverse(), NO_COURSES))
        }
        Some(Commands::Show { id }) => show(cli, container, id, out),
        Some(Commands::Search { keyword }) => {
            let index = load_index(cli, container)?;
            emit(out, &presenter::render_lines(&index.search(keyword), NO_MATCHES))
        }
        Some(Commands::ByPrereqs) => {
            let index = load_index(cli, container)?;
            emit(
                out,
                &presenter::render_lines(&index.by_prerequisite_count(), NO_COURSES),
            )
        }
        Some(Commands::Tree) => tree(cli, container, out),
        Some(Commands::Store { command }) => store(container, command, out),
        Some(Commands::Config { command }) => config(container, command, cwd, out),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, out);
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, see --help".to_string(),
        )),
    }
}

fn emit(out: &mut dyn Write, text: &str) -> CliResult<()> {
    writeln!(out, "{text}").map_err(|e| InfraError::io("write output", e))?;
    Ok(())
}

/// Catalog path from `--catalog`, falling back to the `catalog` setting.
fn catalog_path(cli: &Cli, container: &ServiceContainer) -> CliResult<PathBuf> {
    cli.catalog
        .clone()
        .or_else(|| container.settings.catalog.clone())
        .ok_or_else(|| {
            CliError::Usage(
                "no catalog file: pass --catalog or set `catalog` in the config".to_string(),
            )
        })
}

#[instrument(level = "debug", skip(cli, container))]
fn load_index(cli: &Cli, container: &ServiceContainer) -> CliResult<CourseIndex> {
    let path = catalog_path(cli, container)?;
    let (index, report) = container.catalog_loader().load(&path)?;
    debug!("catalog {}: {} courses", path.display(), report.loaded);
    for row in &report.rejected {
        output::warning(&format!(
            "{}:{}: skipped row ({})",
            path.display(),
            row.line,
            row.reason
        ));
    }
    Ok(index)
}

fn show(cli: &Cli, container: &ServiceContainer, id: &str, out: &mut dyn Write) -> CliResult<()> {
    let index = load_index(cli, container)?;
    let id = presenter::normalize_identifier(id);
    match index.lookup(&id) {
        Some(course) => emit(out, &presenter::format_detail(course)),
        None => Err(CliError::NotFound(id)),
    }
}

fn tree(cli: &Cli, container: &ServiceContainer, out: &mut dyn Write) -> CliResult<()> {
    let index = load_index(cli, container)?;
    emit(out, &index.to_tree_string().to_string())?;
    emit(
        out,
        &format!("  {} courses, height {}", index.len(), index.height()),
    )
}

fn store(
    container: &ServiceContainer,
    command: &StoreCommands,
    out: &mut dyn Write,
) -> CliResult<()> {
    let service = container.store_service()?;
    match command {
        StoreCommands::List => {
            let courses = service.list()?;
            if courses.is_empty() {
                output::warning("no courses found in the document store");
                return Ok(());
            }
            let view: Vec<_> = courses.iter().collect();
            emit(out, &presenter::render_lines(&view, NO_COURSES))
        }
        StoreCommands::Show { id } => {
            let id = presenter::normalize_identifier(id);
            match service.find(&id)? {
                Some(course) => emit(out, &presenter::format_detail(&course)),
                None => Err(CliError::NotFound(id)),
            }
        }
    }
}

fn config(
    container: &ServiceContainer,
    command: &ConfigCommands,
    cwd: &Path,
    out: &mut dyn Write,
) -> CliResult<()> {
    match command {
        ConfigCommands::Show => emit(out, &container.settings.to_toml()?),
        ConfigCommands::Path => {
            match global_config_path() {
                Some(p) => output::action("global", &p.display()),
                None => output::action("global", &"<unavailable>"),
            }
            output::action("local", &local_config_path(cwd).display());
            Ok(())
        }
        ConfigCommands::Init { local, force } => {
            let path = if *local {
                local_config_path(cwd)
            } else {
                global_config_path().ok_or_else(|| {
                    CliError::Usage("cannot determine global config directory".to_string())
                })?
            };
            write_template(container.fs.as_ref(), &path, *force)
        }
    }
}

fn write_template(fs: &dyn FileSystem, path: &Path, force: bool) -> CliResult<()> {
    if fs.exists(path) && !force {
        return Err(CliError::InvalidArgs(format!(
            "{} already exists, use --force to overwrite",
            path.display()
        )));
    }
    fs.ensure_parent(path)
        .map_err(|e| InfraError::io(format!("create parent of {}", path.display()), e))?;
    fs.write(path, &Settings::template())
        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
    output::success(&format!("created {}", path.display()));
    Ok(())
}
