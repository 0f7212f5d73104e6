//! What a finished load cycle shows.

use serde::{Deserialize, Serialize};
use sharestat_data::EntitySummary;

/// Link shown in the source area of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLink {
    /// Link text (e.g. "SEC live").
    pub label: String,

    /// Link target.
    pub href: String,
}

impl SourceLink {
    /// Create a new source link.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Outcome of a load cycle, rendered exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewState {
    /// Data was obtained from one of the sources.
    Rendered {
        /// Selected extrema
        summary: EntitySummary,
        /// Where the data came from
        source: SourceLink,
    },

    /// Every source failed.
    Unavailable,
}

impl ViewState {
    /// Whether data was obtained.
    pub const fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered { .. })
    }

    /// The source link, if any.
    pub const fn source(&self) -> Option<&SourceLink> {
        match self {
            Self::Rendered { source, .. } => Some(source),
            Self::Unavailable => None,
        }
    }
}
