//! Portfolio use-case service.
//!
//! # Responsibility
//! - Own the catalog and the display surface for one page.
//! - Re-render the whole projection after every successful mutation.
//!
//! # Invariants
//! - The catalog is only mutated through `add_project`/`update_project`.
//! - Out-of-range updates neither mutate nor render.
//! - Every commit carries the complete projection, never a diff.

use crate::catalog::Catalog;
use crate::display::{CommitOutcome, DisplaySurface, SurfaceError};
use crate::model::project::{ProjectPatch, ProjectRecord};
use crate::render::{render, Projection};
use log::{debug, info};

/// Use-case service over one catalog and one display surface.
#[derive(Debug)]
pub struct PortfolioService<S: DisplaySurface> {
    catalog: Catalog,
    surface: S,
}

impl<S: DisplaySurface> PortfolioService<S> {
    /// Creates a service. Nothing is rendered until `render_projects` or a
    /// mutation runs.
    pub fn new(catalog: Catalog, surface: S) -> Self {
        Self { catalog, surface }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the current projection without committing it.
    pub fn projection(&self) -> Projection {
        render(&self.catalog)
    }

    /// Renders the full catalog and commits it to the surface.
    pub fn render_projects(&mut self) -> Result<CommitOutcome, SurfaceError> {
        let projection = render(&self.catalog);
        let outcome = self.surface.commit(&projection.to_markup())?;
        match outcome {
            CommitOutcome::Committed => info!(
                "event=catalog_render module=service status=ok fragments={}",
                projection.len()
            ),
            CommitOutcome::ContainerMissing => debug!(
                "event=catalog_render module=service status=skipped reason=container_missing"
            ),
        }
        Ok(outcome)
    }

    /// Appends `project` to the catalog, then re-renders.
    pub fn add_project(&mut self, project: ProjectRecord) -> Result<CommitOutcome, SurfaceError> {
        self.catalog.append(project);
        info!(
            "event=project_add module=service status=ok index={}",
            self.catalog.len() - 1
        );
        self.render_projects()
    }

    /// Merges `patch` into the project at `index`, then re-renders.
    ///
    /// Returns `Ok(None)` when `index` is out of range; the catalog and the
    /// surface are left untouched in that case.
    pub fn update_project(
        &mut self,
        index: usize,
        patch: ProjectPatch,
    ) -> Result<Option<CommitOutcome>, SurfaceError> {
        if !self.catalog.replace(index, patch) {
            debug!(
                "event=project_update module=service status=skipped reason=index_out_of_range index={} len={}",
                index,
                self.catalog.len()
            );
            return Ok(None);
        }
        info!("event=project_update module=service status=ok index={index}");
        self.render_projects().map(Some)
    }

    /// Consumes the service, returning its catalog and surface.
    pub fn into_parts(self) -> (Catalog, S) {
        (self.catalog, self.surface)
    }
}
