//! Project record model.
//!
//! # Responsibility
//! - Define the display data for one portfolio project.
//! - Merge partial updates into an existing record.
//!
//! # Invariants
//! - `title`, `description`, `technologies` and `repo_link` are always present.
//! - `technologies` keeps caller order; duplicates are allowed.
//! - A `None` `live_link` suppresses the live-demo link when rendered.

use serde::{Deserialize, Deserializer, Serialize};

/// Display data for one portfolio project.
///
/// Serialized with camelCase keys (`repoLink`, `liveLink`) so hand-written
/// catalog files keep the page's original field naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Short display title.
    pub title: String,
    /// Prose description shown under the title.
    pub description: String,
    /// Technology tags in display order.
    pub technologies: Vec<String>,
    /// Source repository URL. Always rendered.
    pub repo_link: String,
    /// Optional live demo URL.
    #[serde(default)]
    pub live_link: Option<String>,
    /// Short glyph shown in the card header.
    #[serde(default)]
    pub icon: String,
}

impl ProjectRecord {
    /// Creates a record with the required fields and no tags, live link or icon.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        repo_link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            technologies: Vec::new(),
            repo_link: repo_link.into(),
            live_link: None,
            icon: String::new(),
        }
    }

    /// Replaces the technology list, keeping the given order.
    pub fn with_technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = technologies.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the live demo URL.
    pub fn with_live_link(mut self, live_link: impl Into<String>) -> Self {
        self.live_link = Some(live_link.into());
        self
    }

    /// Sets the header glyph.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Returns whether the rendered card carries a live-demo link.
    pub fn has_live_link(&self) -> bool {
        self.live_link.is_some()
    }

    /// Merges every field present in `patch` into this record.
    ///
    /// Fields absent from the patch keep their current value.
    pub fn apply(&mut self, patch: ProjectPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(technologies) = patch.technologies {
            self.technologies = technologies;
        }
        if let Some(repo_link) = patch.repo_link {
            self.repo_link = repo_link;
        }
        if let Some(live_link) = patch.live_link {
            self.live_link = live_link;
        }
        if let Some(icon) = patch.icon {
            self.icon = icon;
        }
    }
}

/// Partial project record used by catalog replacement.
///
/// `live_link` is tri-state: `None` keeps the current link, `Some(None)`
/// clears it and `Some(Some(url))` sets it. On the wire that maps to an
/// absent key, `null` and a string respectively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_link: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub live_link: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ProjectPatch {
    /// Patch that only changes the title.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Returns whether applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

// A present key (even `null`) must become `Some(..)`, otherwise `null` and
// "missing" collapse into the same value.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
