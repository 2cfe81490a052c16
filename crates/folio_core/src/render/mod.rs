//! Pure catalog-to-markup projection.
//!
//! # Responsibility
//! - Turn each project record into one HTML card fragment.
//! - Concatenate fragments in catalog order into a projection.
//!
//! # Invariants
//! - One fragment per record, same order as the catalog.
//! - Cards carry exactly one link without `live_link`, two with it.
//! - Rendering has no side effects and is idempotent for equal catalogs.

pub mod card;

use crate::catalog::Catalog;
use std::fmt::{Display, Formatter};

pub use card::{escape_html, render_card, CARD_CLASS};

/// Rendered markup for a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    markup: String,
}

impl Fragment {
    pub(crate) fn new(markup: String) -> Self {
        Self { markup }
    }

    pub fn as_str(&self) -> &str {
        &self.markup
    }

    pub fn into_string(self) -> String {
        self.markup
    }
}

/// Full rendered output for a catalog at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    fragments: Vec<Fragment>,
}

impl Projection {
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Concatenates all fragments into the container's content.
    pub fn to_markup(&self) -> String {
        self.fragments.iter().map(Fragment::as_str).collect()
    }
}

impl Display for Projection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for fragment in &self.fragments {
            f.write_str(fragment.as_str())?;
        }
        Ok(())
    }
}

/// Renders every record of `catalog` into a card, preserving order.
pub fn render(catalog: &Catalog) -> Projection {
    Projection {
        fragments: catalog.iter().map(render_card).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::catalog::Catalog;
    use crate::model::project::ProjectRecord;

    #[test]
    fn empty_catalog_renders_empty_markup() {
        let projection = render(&Catalog::new());
        assert!(projection.is_empty());
        assert_eq!(projection.to_markup(), "");
    }

    #[test]
    fn display_matches_concatenated_markup() {
        let catalog = Catalog::from_records(vec![
            ProjectRecord::new("A", "d", "r1"),
            ProjectRecord::new("B", "d", "r2"),
        ]);
        let projection = render(&catalog);
        assert_eq!(projection.to_string(), projection.to_markup());
    }
}
