//! HTML page file surface.
//!
//! # Responsibility
//! - Locate the container element by `id` inside a page file.
//! - Swap its inner content, leaving every other byte of the page intact.
//!
//! # Invariants
//! - Content outside the container is never rewritten.
//! - Tags inside comments and `<script>`/`<style>` bodies are never counted.
//! - An element without a balanced closing tag counts as missing.

use super::{CommitOutcome, DisplaySurface, SurfaceError};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Container id used by the portfolio page.
pub const DEFAULT_CONTAINER_ID: &str = "projects-grid";

// One attribute: name, optionally `=` with a double-quoted, single-quoted or
// unquoted value. Quoted values may contain `>`.
const ATTR_PATTERN: &str = r#"[^\s"'<>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?"#;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        concat!(
            r"(?is)(?P<skip><!--.*?-->",
            r"|<script\b(?:\s+{attr})*\s*>.*?</script\s*>",
            r"|<style\b(?:\s+{attr})*\s*>.*?</style\s*>)",
            r"|<(?P<open>[a-z][a-z0-9-]*)(?P<attrs>(?:\s+{attr})*)\s*(?P<self_closing>/?)>",
            r"|</(?P<close>[a-z][a-z0-9-]*)\s*>",
        ),
        attr = ATTR_PATTERN
    ))
    .expect("valid html token regex")
});

static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?P<name>[^\s"'<>/=]+)(?:\s*=\s*(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)'|(?P<uq>[^\s"'=<>`]+)))?"#,
    )
    .expect("valid html attribute regex")
});

/// Display surface backed by an HTML file on disk.
#[derive(Debug, Clone)]
pub struct HtmlPageSurface {
    path: PathBuf,
    container_id: String,
}

impl HtmlPageSurface {
    pub fn new(path: impl Into<PathBuf>, container_id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            container_id: container_id.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }
}

impl DisplaySurface for HtmlPageSurface {
    fn commit(&mut self, markup: &str) -> Result<CommitOutcome, SurfaceError> {
        let page = std::fs::read_to_string(&self.path).map_err(|source| SurfaceError::Io {
            path: self.path.clone(),
            source,
        })?;

        let Some(updated) = replace_container_content(&page, &self.container_id, markup) else {
            debug!(
                "event=surface_commit module=display status=skipped reason=container_missing container_id={}",
                self.container_id
            );
            return Ok(CommitOutcome::ContainerMissing);
        };

        if updated != page {
            std::fs::write(&self.path, updated).map_err(|source| SurfaceError::Io {
                path: self.path.clone(),
                source,
            })?;
        }
        info!(
            "event=surface_commit module=display status=ok container_id={} bytes={}",
            self.container_id,
            markup.len()
        );
        Ok(CommitOutcome::Committed)
    }
}

/// Returns `page` with the inner content of element `#container_id` replaced
/// by `markup`, or `None` when no such element exists.
pub fn replace_container_content(page: &str, container_id: &str, markup: &str) -> Option<String> {
    let inner = container_inner_range(page, container_id)?;
    let mut updated = String::with_capacity(page.len() - inner.len() + markup.len());
    updated.push_str(&page[..inner.start]);
    updated.push_str(markup);
    updated.push_str(&page[inner.end..]);
    Some(updated)
}

fn container_inner_range(page: &str, container_id: &str) -> Option<Range<usize>> {
    let mut tokens = TOKEN_RE.captures_iter(page);

    let (tag_name, content_start) = tokens.by_ref().find_map(|token| {
        let name = token.name("open")?;
        if is_self_closing(&token) || !has_id(token.name("attrs")?.as_str(), container_id) {
            return None;
        }
        Some((name.as_str(), token.get(0)?.end()))
    })?;

    // Cards are <div>s inside a <div> grid, so same-name tags must balance
    // before the container's own close tag.
    let mut depth = 1usize;
    for token in tokens {
        if let Some(open) = token.name("open") {
            if open.as_str().eq_ignore_ascii_case(tag_name) && !is_self_closing(&token) {
                depth += 1;
            }
        } else if let Some(close) = token.name("close") {
            if close.as_str().eq_ignore_ascii_case(tag_name) {
                depth -= 1;
                if depth == 0 {
                    return Some(content_start..token.get(0)?.start());
                }
            }
        }
    }
    None
}

fn is_self_closing(token: &Captures<'_>) -> bool {
    token
        .name("self_closing")
        .is_some_and(|slash| !slash.as_str().is_empty())
}

fn has_id(attrs: &str, container_id: &str) -> bool {
    ATTR_RE.captures_iter(attrs).any(|attr| {
        let is_id = attr
            .name("name")
            .is_some_and(|name| name.as_str().eq_ignore_ascii_case("id"));
        let value = attr
            .name("dq")
            .or_else(|| attr.name("sq"))
            .or_else(|| attr.name("uq"));
        is_id && value.is_some_and(|value| value.as_str() == container_id)
    })
}
