//! Core domain logic for the folio portfolio page.
//! This crate owns the project catalog and its rendered card projection.

pub mod catalog;
pub mod display;
pub mod logging;
pub mod model;
pub mod render;
pub mod service;

pub use catalog::seed::default_catalog;
pub use catalog::source::{catalog_from_json, load_catalog, load_record, CatalogLoadError};
pub use catalog::{index_from_signed, Catalog};
pub use display::{
    CommitOutcome, DisplaySurface, HtmlPageSurface, MemorySurface, SurfaceError,
    DEFAULT_CONTAINER_ID,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::project::{ProjectPatch, ProjectRecord};
pub use render::{render, render_card, Fragment, Projection};
pub use service::portfolio_service::PortfolioService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
