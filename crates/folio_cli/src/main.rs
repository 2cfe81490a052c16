//! `folio` command-line entry point.
//!
//! # Responsibility
//! - Load a catalog, apply appends and updates, and commit the projection.
//! - Keep all rendering and catalog rules inside `folio_core`.

mod args;

use args::{CatalogArgs, Cli, Command, RenderArgs, UpdateArg};
use clap::Parser;
use folio_core::{
    core_version, default_catalog, default_log_level, index_from_signed, init_logging,
    load_catalog, load_record, Catalog, CommitOutcome, DisplaySurface, HtmlPageSurface,
    MemorySurface, PortfolioService, ProjectRecord, SurfaceError,
};
use log::{info, warn};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("folio: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, &log_dir.to_string_lossy())?;
    }

    match cli.command {
        Command::Render(args) => render(args),
        Command::List(args) => {
            for (index, project) in open_catalog(&args)?.iter().enumerate() {
                println!("{index}\t{}", project.title);
            }
            Ok(())
        }
        Command::Version => {
            println!("folio_core version={}", core_version());
            Ok(())
        }
    }
}

fn render(args: RenderArgs) -> Result<(), Box<dyn Error>> {
    let catalog = open_catalog(&args.source)?;
    // Every input is read before the first commit so a bad file leaves the
    // page untouched.
    let appends = args
        .appends
        .iter()
        .map(|path| load_record(path))
        .collect::<Result<Vec<_>, _>>()?;

    match args.page.as_deref() {
        Some(page) => {
            let surface = HtmlPageSurface::new(page, args.container_id.as_str());
            let outcome = apply_and_render(catalog, surface, appends, &args.updates)?;
            if outcome == CommitOutcome::ContainerMissing {
                warn!(
                    "event=cli_render module=cli status=skipped reason=container_missing container_id={}",
                    args.container_id
                );
                eprintln!(
                    "folio: no element with id `{}` in {}; page left unchanged",
                    args.container_id,
                    page.display()
                );
            }
        }
        None => {
            let mut surface = MemorySurface::new();
            apply_and_render(catalog, &mut surface, appends, &args.updates)?;
            println!("{}", surface.content().unwrap_or_default());
        }
    }
    Ok(())
}

/// Renders `catalog`, then applies every append followed by every update,
/// re-rendering after each one that changes the catalog.
///
/// Returns the outcome of the last commit. Updates whose index is negative or
/// past the end are skipped and do not commit.
fn apply_and_render<S: DisplaySurface>(
    catalog: Catalog,
    surface: S,
    appends: Vec<ProjectRecord>,
    updates: &[UpdateArg],
) -> Result<CommitOutcome, SurfaceError> {
    let mut service = PortfolioService::new(catalog, surface);
    let mut outcome = service.render_projects()?;

    for project in appends {
        outcome = service.add_project(project)?;
    }
    for update in updates {
        let applied = match index_from_signed(update.index) {
            Some(index) => service.update_project(index, update.patch.clone())?,
            None => None,
        };
        match applied {
            Some(committed) => outcome = committed,
            None => info!(
                "event=cli_update module=cli status=skipped index={}",
                update.index
            ),
        }
    }
    Ok(outcome)
}

fn open_catalog(args: &CatalogArgs) -> Result<Catalog, Box<dyn Error>> {
    match args.catalog.as_deref() {
        Some(path) => Ok(load_catalog(path)?),
        None => Ok(default_catalog()),
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_and_render, render};
    use crate::args::{parse_update, CatalogArgs, RenderArgs, UpdateArg};
    use folio_core::{
        default_catalog, render as render_catalog, CommitOutcome, MemorySurface, ProjectRecord,
        DEFAULT_CONTAINER_ID,
    };
    use std::fs;

    fn update(value: &str) -> UpdateArg {
        parse_update(value).unwrap()
    }

    #[test]
    fn out_of_range_updates_do_not_commit() {
        let catalog = default_catalog();
        let len = catalog.len();
        let mut surface = MemorySurface::new();

        let outcome = apply_and_render(
            catalog.clone(),
            &mut surface,
            Vec::new(),
            &[
                update(r#"-1={"title":"X"}"#),
                update(&format!(r#"{len}={{"title":"X"}}"#)),
            ],
        )
        .unwrap();

        assert_eq!(outcome, CommitOutcome::Committed);
        assert_eq!(surface.commits(), 1);
        assert_eq!(
            surface.content(),
            Some(render_catalog(&catalog).to_markup().as_str())
        );
    }

    #[test]
    fn appends_land_before_updates() {
        let catalog = default_catalog();
        let appended_index = catalog.len();
        let mut surface = MemorySurface::new();

        apply_and_render(
            catalog,
            &mut surface,
            vec![ProjectRecord::new("Folio", "d", "r7")],
            &[update(&format!(r#"{appended_index}={{"title":"Renamed"}}"#))],
        )
        .unwrap();

        let content = surface.content().unwrap();
        assert_eq!(surface.commits(), 3);
        assert!(content.contains(">Renamed</h3>"));
        assert!(!content.contains(">Folio</h3>"));
        assert!(content.contains(r#"href="r7""#));
    }

    #[test]
    fn skipped_update_keeps_previous_outcome() {
        let mut surface = MemorySurface::detached();

        let outcome = apply_and_render(
            default_catalog(),
            &mut surface,
            Vec::new(),
            &[update(r#"99={"title":"X"}"#)],
        )
        .unwrap();

        assert_eq!(outcome, CommitOutcome::ContainerMissing);
    }

    #[test]
    fn bad_append_file_leaves_page_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("index.html");
        let original = r#"<div id="projects-grid">old</div>"#;
        fs::write(&page, original).unwrap();

        let args = RenderArgs {
            source: CatalogArgs { catalog: None },
            page: Some(page.clone()),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            appends: vec![dir.path().join("missing.json")],
            updates: Vec::new(),
        };

        assert!(render(args).is_err());
        assert_eq!(fs::read_to_string(&page).unwrap(), original);
    }
}
