//! Display surfaces that receive rendered projections.
//!
//! # Responsibility
//! - Commit projection markup into a designated container.
//! - Keep display side effects out of the pure renderer.
//!
//! # Invariants
//! - A commit replaces the container's whole content; nothing is patched.
//! - A missing container is a no-op (`CommitOutcome::ContainerMissing`),
//!   never an error.

pub mod page;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub use page::{replace_container_content, HtmlPageSurface, DEFAULT_CONTAINER_ID};

/// Result of a successful commit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Container content now equals the committed markup.
    Committed,
    /// No container exists; nothing was written.
    ContainerMissing,
}

/// Failure while reading or writing a display surface.
#[derive(Debug)]
pub enum SurfaceError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for SurfaceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "display surface io error at `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for SurfaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Target that holds the rendered project container.
pub trait DisplaySurface {
    /// Replaces the container content with `markup`.
    fn commit(&mut self, markup: &str) -> Result<CommitOutcome, SurfaceError>;
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for &mut S {
    fn commit(&mut self, markup: &str) -> Result<CommitOutcome, SurfaceError> {
        (**self).commit(markup)
    }
}

/// In-memory container, used by the CLI stdout path and by tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySurface {
    container: Option<String>,
    commits: usize,
}

impl MemorySurface {
    /// Creates a surface with an empty container.
    pub fn new() -> Self {
        Self {
            container: Some(String::new()),
            commits: 0,
        }
    }

    /// Creates a surface whose container does not exist.
    pub fn detached() -> Self {
        Self {
            container: None,
            commits: 0,
        }
    }

    /// Current container content, `None` when detached.
    pub fn content(&self) -> Option<&str> {
        self.container.as_deref()
    }

    /// Number of commits that replaced the container content.
    pub fn commits(&self) -> usize {
        self.commits
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for MemorySurface {
    fn commit(&mut self, markup: &str) -> Result<CommitOutcome, SurfaceError> {
        match self.container.as_mut() {
            Some(container) => {
                container.clear();
                container.push_str(markup);
                self.commits += 1;
                Ok(CommitOutcome::Committed)
            }
            None => Ok(CommitOutcome::ContainerMissing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CommitOutcome, DisplaySurface, MemorySurface};

    #[test]
    fn memory_commit_replaces_previous_content() {
        let mut surface = MemorySurface::new();
        surface.commit("first").unwrap();
        surface.commit("second").unwrap();

        assert_eq!(surface.content(), Some("second"));
        assert_eq!(surface.commits(), 2);
    }

    #[test]
    fn detached_memory_surface_is_noop() {
        let mut surface = MemorySurface::detached();
        let outcome = surface.commit("ignored").unwrap();

        assert_eq!(outcome, CommitOutcome::ContainerMissing);
        assert_eq!(surface.content(), None);
        assert_eq!(surface.commits(), 0);
    }
}
