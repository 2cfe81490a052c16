//! Command-line argument model.

use clap::{Args, Parser, Subcommand};
use folio_core::{ProjectPatch, DEFAULT_CONTAINER_ID};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Render portfolio project cards")]
pub struct Cli {
    /// Log level (trace|debug|info|warn|error).
    #[arg(long, global = true, env = "FOLIO_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, global = true, env = "FOLIO_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the catalog into a page file, or to stdout.
    Render(RenderArgs),
    /// List catalog entries with their indices.
    List(CatalogArgs),
    /// Print the core version.
    Version,
}

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// JSON catalog file; the built-in catalog is used when omitted.
    #[arg(long, env = "FOLIO_CATALOG")]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: CatalogArgs,

    /// HTML page whose container receives the cards.
    #[arg(long)]
    pub page: Option<PathBuf>,

    /// `id` of the container element inside `--page`.
    #[arg(long, default_value = DEFAULT_CONTAINER_ID)]
    pub container_id: String,

    /// JSON file with one project record to append. Repeatable.
    #[arg(long = "append", value_name = "FILE")]
    pub appends: Vec<PathBuf>,

    /// `INDEX=JSON` partial record merged into the entry at INDEX. Repeatable.
    #[arg(long = "update", value_name = "INDEX=JSON", value_parser = parse_update, allow_hyphen_values = true)]
    pub updates: Vec<UpdateArg>,
}

/// One parsed `--update` argument.
#[derive(Debug, Clone)]
pub struct UpdateArg {
    /// Negative values parse and are treated as out of range.
    pub index: i64,
    pub patch: ProjectPatch,
}

#[derive(Debug)]
pub enum PatchParseError {
    MissingSeparator,
    InvalidIndex(String),
    InvalidPatch(serde_json::Error),
}

impl Display for PatchParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSeparator => write!(f, "expected INDEX=JSON"),
            Self::InvalidIndex(value) => write!(f, "invalid index `{value}`"),
            Self::InvalidPatch(err) => write!(f, "invalid patch json: {err}"),
        }
    }
}

impl Error for PatchParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidPatch(err) => Some(err),
            _ => None,
        }
    }
}

pub fn parse_update(value: &str) -> Result<UpdateArg, PatchParseError> {
    let (index, json) = value
        .split_once('=')
        .ok_or(PatchParseError::MissingSeparator)?;
    let index = index
        .trim()
        .parse::<i64>()
        .map_err(|_| PatchParseError::InvalidIndex(index.to_string()))?;
    let patch = serde_json::from_str(json).map_err(PatchParseError::InvalidPatch)?;
    Ok(UpdateArg { index, patch })
}
